use std::fmt::{self, Debug};

use lexaid_actor::{Actor, Message};
use tokio::sync::oneshot;

use super::{Effect, IntakeActorState, IntakeEvent, IntakeState};
use crate::{Error, Notice};

impl IntakeActorState {
    fn dispatch(
        &mut self,
        event: IntakeEvent,
        handle: &Actor<Self>,
    ) -> Result<(), Error> {
        let candidate = match &event {
            IntakeEvent::Accept(file) => Some(file.clone()),
            _ => None,
        };

        let effect = match self.intake.apply(event) {
            Ok(effect) => effect,
            Err(err) => {
                debug!("upload rejected: {err}");
                let notice = candidate.and_then(|file| {
                    Notice::rejected(&err, &file, self.intake.max_size_bytes())
                });
                if let Some(notice) = notice {
                    self.notify(notice);
                }
                return Err(err);
            }
        };
        self.run_effect(effect, handle);
        self.publish();
        Ok(())
    }

    fn run_effect(&mut self, effect: Option<Effect>, handle: &Actor<Self>) {
        match effect {
            Some(Effect::ScheduleProcessing { generation }) => {
                self.cancel_pending();
                debug!(
                    "processing #{generation} due in {:?}",
                    self.processing_delay
                );
                self.pending = Some(handle.send_after(
                    ProcessingDue(generation),
                    self.processing_delay,
                ));
            }
            Some(Effect::CancelProcessing) => self.cancel_pending(),
            Some(Effect::Processed(doc)) => {
                self.pending = None;
                self.notify(Notice::processed(&doc));
            }
            None => {}
        }
    }

    fn finish_processing(&mut self, generation: u64, handle: &Actor<Self>) {
        match self.intake.apply(IntakeEvent::ProcessingFinished(generation)) {
            Ok(effect @ Some(_)) => {
                self.run_effect(effect, handle);
                self.publish();
            }
            Ok(None) => {}
            Err(err) => warn!("failed to finish processing: {err}"),
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(timer) = self.pending.take() {
            trace!("cancelling pending processing");
            timer.cancel();
        }
    }

    fn notify(&self, notice: Notice) {
        debug!(level = ?notice.level, "{}", notice.title);
        if let Some(on_notice) = &self.on_notice {
            on_notice(notice);
        }
    }

    fn publish(&self) {
        debug!(phase = ?self.intake.phase(), "intake changed");
        if let Some(on_snapshot) = &self.on_snapshot {
            on_snapshot(&self.intake);
        }
    }
}

pub struct Dispatch {
    pub event: IntakeEvent,
    pub result_tx: oneshot::Sender<Result<(), Error>>,
}

impl Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

impl Message<IntakeActorState> for Dispatch {
    fn handle(
        self,
        state: &mut IntakeActorState,
        handle: &Actor<IntakeActorState>,
    ) {
        let result = state.dispatch(self.event, handle);
        self.result_tx.send(result).ok();
    }
}

#[derive(Debug)]
struct ProcessingDue(u64);

impl Message<IntakeActorState> for ProcessingDue {
    #[inline]
    fn handle(
        self,
        state: &mut IntakeActorState,
        handle: &Actor<IntakeActorState>,
    ) {
        state.finish_processing(self.0, handle);
    }
}

#[derive(Debug)]
pub struct GetSnapshot(pub oneshot::Sender<IntakeState>);

impl Message<IntakeActorState> for GetSnapshot {
    #[inline]
    fn handle(
        self,
        state: &mut IntakeActorState,
        _handle: &Actor<IntakeActorState>,
    ) {
        self.0.send(state.intake.clone()).ok();
    }
}

#[derive(Debug)]
pub struct Shutdown;

impl Message<IntakeActorState> for Shutdown {
    #[inline]
    fn handle(
        self,
        state: &mut IntakeActorState,
        handle: &Actor<IntakeActorState>,
    ) {
        state.cancel_pending();
        handle.try_kill();
    }
}
