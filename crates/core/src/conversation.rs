//! The simulated chat assistant.

mod builder;
mod state;
mod transition;

use std::time::Duration;

use lexaid_actor::{Timer, define_actor};
use lexaid_model::{Language, ReplyPool, ReplySelector};
use tokio::sync::oneshot;

pub use builder::ConversationStoreBuilder;
use state::{Dispatch, GetSnapshot, Shutdown};
pub use transition::{ConversationEvent, ConversationState, Effect, Phase};

/// The assistant message every conversation starts with.
pub const GREETING: &str = "Hello! I'm your Legal Education Companion. I can help you understand legal documents, explain complex terms, and answer questions about law. How can I assist you today?";

/// Suggested questions the user can pre-fill the input with.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What happens if I break this contract early?",
    "Explain indemnification in simple terms",
    "What are my rights as a tenant?",
    "What does 'force majeure' mean?",
];

/// How long the assistant "thinks" before replying.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

type SnapshotFn = Box<dyn Fn(&ConversationState) + Send + Sync>;

define_actor! {
    /// Owns the chat history and answers submissions with a canned reply
    /// after a fixed delay.
    ///
    /// At most one reply is pending at a time: submissions made while a
    /// reply is pending are rejected, not queued.
    pub struct ConversationStore => struct StoreState {
        conversation: ConversationState,
        pool: ReplyPool,
        selector: Box<dyn ReplySelector>,
        reply_delay: Duration,
        pending_reply: Option<Timer>,
        on_snapshot: Option<SnapshotFn>,
    }
}

impl ConversationStore {
    /// Submits a user message.
    ///
    /// Fails with [`crate::ErrorKind::EmptyInput`] for blank text and with
    /// [`crate::ErrorKind::AlreadyBusy`] while a reply is pending; neither
    /// changes the conversation.
    pub async fn submit<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<(), crate::Error> {
        self.dispatch(ConversationEvent::Submit(text.into())).await
    }

    /// Replaces the input draft.
    ///
    /// Fails with [`crate::ErrorKind::AlreadyBusy`] while a reply is
    /// pending.
    pub async fn set_draft<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<(), crate::Error> {
        self.dispatch(ConversationEvent::SetDraft(text.into())).await
    }

    /// Fills the draft with a suggested question, see [`QUICK_QUESTIONS`].
    pub async fn quick_fill<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<(), crate::Error> {
        self.dispatch(ConversationEvent::QuickFill(text.into())).await
    }

    /// Selects the display language by code, e.g. `"Hindi"` or `"hi"`.
    pub async fn set_language(&self, code: &str) -> Result<(), crate::Error> {
        let language: Language = code.parse()?;
        self.dispatch(ConversationEvent::SetLanguage(language)).await
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> Result<ConversationState, crate::Error> {
        let (tx, rx) = oneshot::channel();
        self.handle().send(GetSnapshot(tx))?;
        rx.await.map_err(|_| crate::Error::closed())
    }

    /// Cancels any pending reply and stops the store.
    ///
    /// Every later operation fails with [`crate::ErrorKind::Closed`].
    pub fn shutdown(&self) {
        self.handle().send(Shutdown).ok();
    }

    async fn dispatch(
        &self,
        event: ConversationEvent,
    ) -> Result<(), crate::Error> {
        let (tx, rx) = oneshot::channel();
        self.handle().send(Dispatch { event, result_tx: tx })?;
        rx.await.map_err(|_| crate::Error::closed())?
    }
}
