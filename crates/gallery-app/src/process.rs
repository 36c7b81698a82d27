//! Message processing: the update loop plus action dispatch

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::source::CollectionSource;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are handled immediately, in order, before returning.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) where
    S: CollectionSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source.clone());
        }

        msg = result.message;
    }
}
