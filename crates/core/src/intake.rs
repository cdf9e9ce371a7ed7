//! Document upload with simulated processing.

mod builder;
mod state;
mod transition;

use std::time::Duration;

use lexaid_actor::{Timer, define_actor};
use lexaid_model::CandidateFile;
use tokio::sync::oneshot;

pub use builder::DocumentIntakeBuilder;
use state::{Dispatch, GetSnapshot, Shutdown};
pub use transition::{
    DragEvent, Effect, IntakeEvent, IntakeState, Phase, validate,
};

use crate::{Error, Notice};

/// How long "processing" an accepted document takes.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

type SnapshotFn = Box<dyn Fn(&IntakeState) + Send + Sync>;
type NoticeFn = Box<dyn Fn(Notice) + Send + Sync>;

define_actor! {
    /// Holds at most one uploaded document and simulates processing it.
    ///
    /// Rejected uploads and finished processing are reported through
    /// notices; see [`DocumentIntakeBuilder::on_notice`].
    pub struct DocumentIntake => struct IntakeActorState {
        intake: IntakeState,
        processing_delay: Duration,
        pending: Option<Timer>,
        on_snapshot: Option<SnapshotFn>,
        on_notice: Option<NoticeFn>,
    }
}

impl DocumentIntake {
    /// Validates `file` and, if it passes, makes it the current document
    /// and starts processing it.
    ///
    /// Fails with [`crate::ErrorKind::UnsupportedType`] or
    /// [`crate::ErrorKind::TooLarge`], in which case a rejection notice is
    /// emitted as well and nothing else changes.
    pub async fn accept(&self, file: CandidateFile) -> Result<(), Error> {
        self.dispatch(IntakeEvent::Accept(file)).await
    }

    /// Clears the current document. Does nothing if there is none.
    pub async fn remove(&self) -> Result<(), Error> {
        self.dispatch(IntakeEvent::Remove).await
    }

    /// Updates the drop-zone hover hint.
    pub async fn drag(&self, event: DragEvent) -> Result<(), Error> {
        self.dispatch(IntakeEvent::Drag(event)).await
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> Result<IntakeState, Error> {
        let (tx, rx) = oneshot::channel();
        self.handle().send(GetSnapshot(tx))?;
        rx.await.map_err(|_| Error::closed())
    }

    /// Cancels pending processing and stops the intake.
    pub fn shutdown(&self) {
        self.handle().send(Shutdown).ok();
    }

    async fn dispatch(&self, event: IntakeEvent) -> Result<(), Error> {
        let (tx, rx) = oneshot::channel();
        self.handle().send(Dispatch { event, result_tx: tx })?;
        rx.await.map_err(|_| Error::closed())?
    }
}
