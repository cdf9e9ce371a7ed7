use std::fmt::Debug;

use tokio::sync::{mpsc, watch};

use crate::{Actor, ActorDeadError};

/// Type-erased form of [`Message`], so that one queue can carry every
/// message type an actor understands.
pub trait ErasedMessage<S>: Send + Debug + 'static {
    fn handle_erased(self: Box<Self>, state: &mut S, handle: &Actor<S>);
}

/// A message that an actor owning state `S` can handle.
///
/// Handlers run on the actor task, one at a time, with exclusive access to
/// the state. They must not block; anything that takes time should be posted
/// back to the actor later (see [`Actor::send_after`]).
pub trait Message<S>: ErasedMessage<S> {
    /// Handles the message.
    fn handle(self, state: &mut S, handle: &Actor<S>);
}

impl<S, M: Message<S>> ErasedMessage<S> for M {
    #[inline]
    fn handle_erased(self: Box<Self>, state: &mut S, handle: &Actor<S>) {
        M::handle(*self, state, handle)
    }
}

impl<S, M: Message<S> + ?Sized> Message<S> for Box<M> {
    #[inline]
    fn handle(self, state: &mut S, handle: &Actor<S>) {
        self.handle_erased(state, handle)
    }
}

pub type MessageReceiver<S> = mpsc::UnboundedReceiver<Box<dyn Message<S>>>;

pub struct Mailbox<S> {
    msg_tx: mpsc::UnboundedSender<Box<dyn Message<S>>>,
    kill_tx: watch::Sender<bool>,
}

impl<S: Send + Sync + 'static> Mailbox<S> {
    #[inline]
    pub fn open() -> (Self, MessageReceiver<S>, watch::Receiver<bool>) {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (kill_tx, kill_rx) = watch::channel(false);
        (Mailbox { msg_tx, kill_tx }, msg_rx, kill_rx)
    }

    #[inline]
    pub fn post(&self, msg: Box<dyn Message<S>>) -> Result<(), ActorDeadError> {
        self.msg_tx.send(msg).map_err(|_| ActorDeadError)
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.msg_tx.is_closed()
    }

    #[inline]
    pub fn kill(&self) {
        self.kill_tx.send(true).ok();
    }
}
