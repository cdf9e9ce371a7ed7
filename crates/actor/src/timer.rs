use std::time::Duration;

use tokio::task::JoinHandle;

/// A pending deferred delivery created by [`crate::Actor::send_after`].
///
/// Dropping a `Timer` does not cancel it; call [`Timer::cancel`] for that.
#[derive(Debug)]
pub struct Timer {
    delay: Duration,
    task: JoinHandle<()>,
}

impl Timer {
    #[inline]
    pub(crate) fn new(delay: Duration, task: JoinHandle<()>) -> Self {
        Self { delay, task }
    }

    /// The delay this timer was created with.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stops the delivery if it has not happened yet.
    ///
    /// Cancelling a timer that already fired is a no-op. Note that a message
    /// which was already delivered to the mailbox will still be handled.
    #[inline]
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Returns `true` once the timer either fired or was cancelled.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
