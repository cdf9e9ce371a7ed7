use std::sync::Weak;

use tokio::select;
use tokio::sync::watch;

use crate::mailbox::{Mailbox, MessageReceiver};
use crate::{Actor, Message};

/// Drives one actor until it is killed or every handle is dropped.
pub async fn run_actor<S: Send + Sync + 'static>(
    mailbox: Weak<Mailbox<S>>,
    mut state: S,
    mut msg_rx: MessageReceiver<S>,
    mut kill_rx: watch::Receiver<bool>,
) {
    debug!("started");
    loop {
        let msg = select! {
            biased;

            _ = kill_rx.changed() => break,
            msg = msg_rx.recv() => match msg {
                Some(msg) => msg,
                None => break,
            },
        };
        trace!("received {msg:?}");

        let Some(mailbox) = mailbox.upgrade() else {
            warn!("all handles are gone, dropping {msg:?}");
            break;
        };
        let handle = Actor::from_mailbox(mailbox);
        trace_span!("handle").in_scope(|| msg.handle(&mut state, &handle));
    }
    msg_rx.close();
    debug!("stopped");
}
