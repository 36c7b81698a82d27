//! Main TUI runner - entry point and event loop

use std::path::Path;

use gallery_app::{Engine, EngineOptions};
use gallery_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI for the gallery project at `project_path`
pub async fn run_with_project(project_path: &Path, options: EngineOptions) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::from_project(project_path, options).await;
    info!(
        "Showing collection '{}' ordered by {}",
        engine.settings().gallery.collection,
        engine.state.builder.spec().order
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
///
/// Every pending message is applied before a frame is drawn, so bursts of
/// input coalesce into one redraw of the latest state.
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
