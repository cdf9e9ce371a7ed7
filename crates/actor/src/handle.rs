use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::Instrument;

use crate::mailbox::Mailbox;
use crate::scheduler::run_actor;
use crate::timer::Timer;
use crate::{ActorDeadError, Message};

/// Handle to an actor.
///
/// Handles are cheap to clone. The actor task stops once it is killed or
/// every handle has been dropped.
pub struct Actor<S> {
    mailbox: Arc<Mailbox<S>>,
}

impl<S: Send + Sync + 'static> Actor<S> {
    /// Spawns a new actor owning `state` onto the current tokio runtime.
    ///
    /// Prefer going through a wrapper type generated by
    /// [`crate::define_actor`] over calling this directly.
    pub fn spawn(state: S, label: Option<&str>) -> Self {
        let (mailbox, msg_rx, kill_rx) = Mailbox::open();
        let mailbox = Arc::new(mailbox);
        tokio::spawn(
            run_actor(Arc::downgrade(&mailbox), state, msg_rx, kill_rx)
                .instrument(trace_span!("actor", label = label)),
        );
        Self { mailbox }
    }

    #[inline]
    pub(crate) fn from_mailbox(mailbox: Arc<Mailbox<S>>) -> Self {
        Self { mailbox }
    }

    /// Posts a message to the actor.
    #[inline]
    pub fn send<M: Message<S> + 'static>(
        &self,
        msg: M,
    ) -> Result<(), ActorDeadError> {
        self.mailbox.post(Box::new(msg))
    }

    /// Posts a message to the actor once `delay` has elapsed.
    ///
    /// The timer only holds a weak reference to the mailbox, so a pending
    /// timer never keeps an otherwise unreferenced actor alive.
    pub fn send_after<M: Message<S> + 'static>(
        &self,
        msg: M,
        delay: Duration,
    ) -> Timer {
        let mailbox = Arc::downgrade(&self.mailbox);
        let task = tokio::spawn(
            async move {
                sleep(delay).await;
                let Some(mailbox) = mailbox.upgrade() else {
                    debug!("actor went away before the timer fired");
                    return;
                };
                if mailbox.post(Box::new(msg)).is_err() {
                    debug!("actor stopped before the timer fired");
                }
            }
            .instrument(trace_span!(
                "timer",
                delay_ms = delay.as_millis() as u64
            )),
        );
        Timer::new(delay, task)
    }

    /// Returns `true` if the actor task is no longer accepting messages.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.mailbox.is_closed()
    }

    /// Asks the actor to stop.
    ///
    /// The actor finishes the message it is currently handling and then
    /// quits; queued messages are discarded.
    #[inline]
    pub fn try_kill(&self) {
        self.mailbox.kill();
    }
}

impl<S> Clone for Actor<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            mailbox: Arc::clone(&self.mailbox),
        }
    }
}
