//! Photo Gallery
//!
//! Terminal photo gallery whose ordering controls cycle through ascending,
//! descending, and grouped presentations. The TUI lives in `gallery-tui`;
//! this crate adds the binary entry point and the headless NDJSON runner.

pub mod headless;

// Re-export main entry points
pub use gallery_app::EngineOptions;
pub use gallery_tui::run_with_project;
pub use headless::runner::run_headless;
