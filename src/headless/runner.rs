//! Headless mode runner - main event loop without TUI
//!
//! Fetches the collection, then reads one command per stdin line and
//! reports every resulting engine event as NDJSON.
//!
//! Commands: `order <key>`, `secondary`, `open <index>`, `next`, `prev`,
//! `close`, `retry`, `quit`.

use std::path::Path;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use gallery_app::{Engine, EngineEvent, EngineOptions, Message};
use gallery_core::prelude::*;
use gallery_core::OrderKey;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(project_path: &Path, options: EngineOptions) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Photo Gallery starting in HEADLESS mode");
    info!("Project: {}", project_path.display());
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::from_project(project_path, options).await;
    let mut events = engine.subscribe();

    engine.start();
    await_initial_fetch(&mut engine, &mut events).await;

    // Commands are only read once the collection has settled, so scripted
    // orderings never race the fetch
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown();
    flush_events(&mut events);

    info!("Photo Gallery headless mode exiting");
    result
}

/// Process messages until the fetch is no longer in flight
async fn await_initial_fetch(engine: &mut Engine, events: &mut broadcast::Receiver<EngineEvent>) {
    flush_events(events);
    while engine.state.fetch.is_loading() {
        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                flush_events(events);
            }
            None => break,
        }
    }
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                flush_events(events);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Emit every buffered engine event
fn flush_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from(&event).emit(),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Parse one stdin command line
///
/// Returns `Ok(None)` for blank lines and `Err` with a description for
/// anything unrecognized.
pub fn parse_command(line: &str) -> std::result::Result<Option<Message>, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let argument = parts.next();

    let message = match (command, argument) {
        ("order" | "o", Some(key)) => Message::ClickOrder {
            key: OrderKey::parse(key),
        },
        ("order" | "o", None) => return Err("order needs a control name".to_string()),
        ("secondary" | "s", _) => Message::ClickSecondary,
        ("open", Some(index)) => match index.parse::<usize>() {
            Ok(index) => Message::OpenDetail { index },
            Err(_) => return Err(format!("Invalid item index: {}", index)),
        },
        ("open", None) => Message::OpenSelected,
        ("next" | "n", _) => Message::DetailNext,
        ("prev" | "p", _) => Message::DetailPrev,
        ("close" | "x", _) => Message::CloseDetail,
        ("retry" | "r", _) => Message::RetryFetch,
        ("quit" | "q", _) => Message::Quit,
        _ => return Err(format!("Unknown command: {}", line.trim())),
    };
    Ok(Some(message))
}

/// Read commands from stdin and forward them to the message channel (blocking)
///
/// End of input quits the gallery.
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => match parse_command(&line) {
                Ok(Some(message)) => {
                    let quit = matches!(message, Message::Quit);
                    if msg_tx.blocking_send(message).is_err() || quit {
                        info!("Stdin reader exiting");
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("{}", e);
                    HeadlessEvent::error(e, false).emit();
                }
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin closed, quitting");
    let _ = msg_tx.blocking_send(Message::Quit);
}
