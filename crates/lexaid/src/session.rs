use lexaid_core::glossary::Entry as GlossaryEntry;
use lexaid_core::{
    ConversationState, ConversationStore, ConversationStoreBuilder,
    DocumentIntake, DocumentIntakeBuilder, Glossary, IntakeState, Notice,
};
use lexaid_model::ReplySelector;

use crate::SessionConfig;

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder {
    conversation: ConversationStoreBuilder,
    intake: DocumentIntakeBuilder,
    glossary: Glossary,
}

impl SessionBuilder {
    /// Creates a session builder with the default timings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session builder with the given timings.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            conversation: ConversationStoreBuilder::new()
                .with_reply_delay(config.reply_delay),
            intake: DocumentIntakeBuilder::new()
                .with_processing_delay(config.processing_delay),
            glossary: Glossary::builtin(),
        }
    }

    /// Replaces how the assistant picks its replies.
    #[inline]
    pub fn with_selector<S: ReplySelector>(mut self, selector: S) -> Self {
        self.conversation = self.conversation.with_selector(selector);
        self
    }

    /// Replaces the glossary.
    #[inline]
    pub fn with_glossary(mut self, glossary: Glossary) -> Self {
        self.glossary = glossary;
        self
    }

    /// Attaches a callback invoked whenever the conversation changes.
    #[inline]
    pub fn on_conversation(
        mut self,
        on_conversation: impl Fn(&ConversationState) + Send + Sync + 'static,
    ) -> Self {
        self.conversation = self.conversation.on_snapshot(on_conversation);
        self
    }

    /// Attaches a callback invoked whenever the document intake changes.
    #[inline]
    pub fn on_intake(
        mut self,
        on_intake: impl Fn(&IntakeState) + Send + Sync + 'static,
    ) -> Self {
        self.intake = self.intake.on_snapshot(on_intake);
        self
    }

    /// Attaches a callback for user-facing notices.
    #[inline]
    pub fn on_notice(
        mut self,
        on_notice: impl Fn(Notice) + Send + Sync + 'static,
    ) -> Self {
        self.intake = self.intake.on_notice(on_notice);
        self
    }

    /// Builds a new session. Must be called inside a tokio runtime.
    pub fn build(self) -> Session {
        debug!("starting a session");
        Session {
            conversation: self.conversation.build(),
            intake: self.intake.build(),
            glossary: self.glossary,
        }
    }
}

impl Default for SessionBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// One visitor's demo session, like a page with a chat panel, an upload box
/// and a glossary.
///
/// The conversation and the intake are independent stores; nothing from an
/// uploaded document reaches the chat.
pub struct Session {
    conversation: ConversationStore,
    intake: DocumentIntake,
    glossary: Glossary,
}

impl Session {
    /// The chat store.
    #[inline]
    pub fn conversation(&self) -> &ConversationStore {
        &self.conversation
    }

    /// The document intake.
    #[inline]
    pub fn intake(&self) -> &DocumentIntake {
        &self.intake
    }

    /// The glossary.
    #[inline]
    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    /// Searches the glossary, see [`Glossary::filter`].
    #[inline]
    pub fn search_glossary(
        &self,
        query: &str,
        category: &str,
    ) -> Vec<&GlossaryEntry> {
        self.glossary.filter(query, category)
    }

    /// Sends a chat message.
    #[inline]
    pub async fn send_message(
        &self,
        message: &str,
    ) -> Result<(), lexaid_core::Error> {
        self.conversation.submit(message).await
    }

    /// Cancels pending timers and stops both stores.
    pub fn shutdown(&self) {
        debug!("shutting down the session");
        self.conversation.shutdown();
        self.intake.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lexaid_core::ErrorKind;
    use lexaid_core::glossary::ALL_CATEGORIES;
    use lexaid_model::{CandidateFile, ReplyPool, Sender};
    use lexaid_test_model::ScriptedSelector;
    use tokio::time::sleep;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_stores_are_independent() {
        let session = SessionBuilder::new()
            .with_selector(ScriptedSelector::always(3))
            .build();

        session
            .intake()
            .accept(CandidateFile::new("nda.pdf", 10, "application/pdf"))
            .await
            .unwrap();
        session.send_message("Is this NDA enforceable?").await.unwrap();
        sleep(Duration::from_millis(2100)).await;

        let chat = session.conversation().snapshot().await.unwrap();
        assert_eq!(chat.history().len(), 3);
        let reply = chat.last_message().unwrap();
        assert_eq!(reply.sender(), Sender::Assistant);
        assert_eq!(reply.text(), ReplyPool::canned().get(3));
        assert!(!reply.text().contains("nda.pdf"));

        let intake = session.intake().snapshot().await.unwrap();
        assert_eq!(intake.current().unwrap().name(), "nda.pdf");
        assert!(!intake.is_processing());
    }

    #[tokio::test]
    async fn test_glossary_search() {
        let session = SessionBuilder::new().build();
        let found = session.search_glossary("liab", ALL_CATEGORIES);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].term, "Liability");
    }

    #[tokio::test]
    async fn test_shutdown_closes_both_stores() {
        let session = SessionBuilder::new().build();
        session.shutdown();
        sleep(Duration::from_millis(1)).await;

        let err = session.send_message("hello").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Closed);
        let err = session.intake().remove().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Closed);
    }
}
