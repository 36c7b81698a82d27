//! Custom widget components

mod detail_overlay;
mod gallery;
mod header;
pub mod modal_overlay;
mod status_bar;

pub use detail_overlay::DetailOverlay;
pub use gallery::GalleryBody;
pub use header::GalleryHeader;
pub use status_bar::StatusBar;
