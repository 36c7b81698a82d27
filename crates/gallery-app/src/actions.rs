//! Action handlers: background work requested by `handler::update`

use std::sync::Arc;

use tokio::sync::mpsc;

use gallery_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::source::CollectionSource;

/// Execute an action returned by the update function
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: Arc<S>)
where
    S: CollectionSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchCollection { name } => spawn_fetch(name, msg_tx, source),
    }
}

/// Fetch in the background and report back through the message channel
fn spawn_fetch<S>(name: String, msg_tx: mpsc::Sender<Message>, source: Arc<S>)
where
    S: CollectionSource + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match source.get_collection(&name).await {
            Ok(collection) => Message::CollectionLoaded { collection },
            Err(e) => Message::CollectionFetchFailed {
                error: e.to_string(),
            },
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Fetch of '{}' finished after the engine stopped", name);
        }
    });
}
