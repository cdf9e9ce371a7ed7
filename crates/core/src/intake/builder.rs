use std::time::Duration;

use lexaid_model::DEFAULT_MAX_SIZE_BYTES;

use super::{
    DEFAULT_PROCESSING_DELAY, DocumentIntake, IntakeActorState, IntakeState,
    NoticeFn, SnapshotFn,
};
use crate::Notice;

/// [`DocumentIntake`] builder.
pub struct DocumentIntakeBuilder {
    processing_delay: Duration,
    max_size_bytes: u64,
    on_snapshot: Option<SnapshotFn>,
    on_notice: Option<NoticeFn>,
}

impl DocumentIntakeBuilder {
    /// Creates a builder with a 2 s processing delay and a 10 MiB limit.
    #[inline]
    pub fn new() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            on_snapshot: None,
            on_notice: None,
        }
    }

    /// Sets how long processing an accepted document takes.
    #[inline]
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Sets the largest accepted file size in bytes, inclusive.
    #[inline]
    pub fn with_max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes;
        self
    }

    /// Attaches a callback invoked with the new state after every change.
    #[inline]
    pub fn on_snapshot(
        mut self,
        on_snapshot: impl Fn(&IntakeState) + Send + Sync + 'static,
    ) -> Self {
        self.on_snapshot = Some(Box::new(on_snapshot));
        self
    }

    /// Attaches a callback for user-facing notices: rejected uploads and
    /// finished processing.
    #[inline]
    pub fn on_notice(
        mut self,
        on_notice: impl Fn(Notice) + Send + Sync + 'static,
    ) -> Self {
        self.on_notice = Some(Box::new(on_notice));
        self
    }

    /// Spawns the intake onto the current tokio runtime.
    pub fn build(self) -> DocumentIntake {
        let state = IntakeActorState {
            intake: IntakeState::new(self.max_size_bytes),
            processing_delay: self.processing_delay,
            pending: None,
            on_snapshot: self.on_snapshot,
            on_notice: self.on_notice,
        };
        DocumentIntake::spawn(state, Some("intake"))
    }
}

impl Default for DocumentIntakeBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
