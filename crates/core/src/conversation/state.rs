use std::fmt::{self, Debug};

use lexaid_actor::{Actor, Message};
use tokio::sync::oneshot;

use super::{ConversationEvent, ConversationState, Effect, StoreState};
use crate::Error;

impl StoreState {
    fn dispatch(
        &mut self,
        event: ConversationEvent,
        handle: &Actor<Self>,
    ) -> Result<(), Error> {
        let effect = self.conversation.apply(event).inspect_err(|err| {
            debug!("ignored: {err}");
        })?;
        if let Some(Effect::ScheduleReply) = effect {
            self.schedule_reply(handle);
        }
        self.publish();
        Ok(())
    }

    fn schedule_reply(&mut self, handle: &Actor<Self>) {
        debug!("reply due in {:?}", self.reply_delay);
        let timer = handle.send_after(ReplyDue, self.reply_delay);
        if let Some(stale) = self.pending_reply.replace(timer) {
            stale.cancel();
        }
    }

    fn produce_reply(&mut self) {
        self.pending_reply = None;
        let reply = self.pool.pick(&*self.selector).to_owned();
        trace!("picked reply: {reply:?}");
        let event = ConversationEvent::ReplyProduced(reply);
        match self.conversation.apply(event) {
            Ok(_) => self.publish(),
            Err(err) => warn!("failed to append the reply: {err}"),
        }
    }

    fn publish(&self) {
        debug!(
            messages = self.conversation.history().len(),
            busy = self.conversation.is_busy(),
            "conversation changed"
        );
        if let Some(on_snapshot) = &self.on_snapshot {
            on_snapshot(&self.conversation);
        }
    }

    fn shutdown(&mut self, handle: &Actor<Self>) {
        if let Some(timer) = self.pending_reply.take() {
            debug!("cancelling the pending reply");
            timer.cancel();
        }
        handle.try_kill();
    }
}

pub struct Dispatch {
    pub event: ConversationEvent,
    pub result_tx: oneshot::Sender<Result<(), Error>>,
}

impl Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

impl Message<StoreState> for Dispatch {
    fn handle(self, state: &mut StoreState, handle: &Actor<StoreState>) {
        let result = state.dispatch(self.event, handle);
        self.result_tx.send(result).ok();
    }
}

#[derive(Debug)]
struct ReplyDue;

impl Message<StoreState> for ReplyDue {
    #[inline]
    fn handle(self, state: &mut StoreState, _handle: &Actor<StoreState>) {
        state.produce_reply();
    }
}

#[derive(Debug)]
pub struct GetSnapshot(pub oneshot::Sender<ConversationState>);

impl Message<StoreState> for GetSnapshot {
    #[inline]
    fn handle(self, state: &mut StoreState, _handle: &Actor<StoreState>) {
        self.0.send(state.conversation.clone()).ok();
    }
}

#[derive(Debug)]
pub struct Shutdown;

impl Message<StoreState> for Shutdown {
    #[inline]
    fn handle(self, state: &mut StoreState, handle: &Actor<StoreState>) {
        state.shutdown(handle);
    }
}
