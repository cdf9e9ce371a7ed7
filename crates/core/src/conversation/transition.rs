use lexaid_model::{Language, Message, Sender};
use serde::Serialize;

use super::GREETING;
use crate::Error;

/// Whether the conversation accepts a new submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the user.
    Idle,
    /// A reply is pending.
    Busy,
}

/// An input to [`ConversationState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversationEvent {
    /// The user sends a message.
    Submit(String),
    /// The pending reply is ready.
    ReplyProduced(String),
    /// The user edits the input box.
    SetDraft(String),
    /// The user picks one of the suggested questions.
    QuickFill(String),
    /// The user picks a display language.
    SetLanguage(Language),
}

/// Work the owner of the state has to carry out after a transition.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Produce a reply after the configured delay.
    ScheduleReply,
}

/// Chat history, input draft, busy flag and language.
///
/// This is also the snapshot type handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    history: Vec<Message>,
    draft: String,
    busy: bool,
    language: Language,
}

impl ConversationState {
    /// Creates a conversation seeded with the default greeting.
    pub fn new() -> Self {
        // The greeting constant is never blank.
        Self::with_greeting(GREETING).unwrap_or_else(|| Self {
            history: vec![],
            draft: String::new(),
            busy: false,
            language: Language::default(),
        })
    }

    /// Creates a conversation seeded with a custom assistant greeting.
    ///
    /// Returns `None` if the greeting is blank.
    pub fn with_greeting<S: Into<String>>(greeting: S) -> Option<Self> {
        let greeting = Message::new(Sender::Assistant, greeting)?;
        Some(Self {
            history: vec![greeting],
            draft: String::new(),
            busy: false,
            language: Language::default(),
        })
    }

    /// Messages in display order, starting with the greeting.
    #[inline]
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// The most recent message.
    #[inline]
    pub fn last_message(&self) -> Option<&Message> {
        self.history.last()
    }

    /// The uncommitted input text.
    #[inline]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether a reply is pending.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        if self.busy { Phase::Busy } else { Phase::Idle }
    }

    /// The selected display language.
    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Applies an event.
    ///
    /// On error the state is left untouched. A reply that arrives while the
    /// conversation is idle has nothing to answer and is dropped.
    pub fn apply(
        &mut self,
        event: ConversationEvent,
    ) -> Result<Option<Effect>, Error> {
        match event {
            ConversationEvent::Submit(text) => {
                if self.busy {
                    return Err(Error::already_busy());
                }
                let msg = Message::new(Sender::User, text)
                    .ok_or_else(Error::empty_input)?;
                self.history.push(msg);
                self.draft.clear();
                self.busy = true;
                Ok(Some(Effect::ScheduleReply))
            }
            ConversationEvent::ReplyProduced(text) => {
                if !self.busy {
                    debug!("dropping a reply nobody is waiting for");
                    return Ok(None);
                }
                let msg = Message::new(Sender::Assistant, text)
                    .ok_or_else(Error::empty_input)?;
                self.history.push(msg);
                self.busy = false;
                Ok(None)
            }
            ConversationEvent::SetDraft(text) => {
                if self.busy {
                    return Err(Error::already_busy());
                }
                self.draft = text;
                Ok(None)
            }
            ConversationEvent::QuickFill(text) => {
                if text.trim().is_empty() {
                    return Err(Error::empty_input());
                }
                self.apply(ConversationEvent::SetDraft(text))
            }
            ConversationEvent::SetLanguage(language) => {
                self.language = language;
                Ok(None)
            }
        }
    }
}

impl Default for ConversationState {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use lexaid_model::ReplyPool;

    use super::*;
    use crate::ErrorKind;

    fn submit(
        state: &mut ConversationState,
        text: &str,
    ) -> Result<Option<Effect>, Error> {
        state.apply(ConversationEvent::Submit(text.to_owned()))
    }

    fn reply(state: &mut ConversationState, text: &str) {
        let effect = state
            .apply(ConversationEvent::ReplyProduced(text.to_owned()))
            .unwrap();
        assert_eq!(effect, None);
    }

    #[test]
    fn test_initial_state() {
        let state = ConversationState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].sender(), Sender::Assistant);
        assert_eq!(state.history()[0].text(), GREETING);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.draft(), "");
        assert_eq!(state.language(), Language::English);
    }

    #[test]
    fn test_submit_goes_busy() {
        let mut state = ConversationState::new();
        state
            .apply(ConversationEvent::SetDraft("What is force majeure?".into()))
            .unwrap();

        let effect = submit(&mut state, "What is force majeure?").unwrap();
        assert_eq!(effect, Some(Effect::ScheduleReply));
        assert_eq!(state.phase(), Phase::Busy);
        assert_eq!(state.draft(), "");
        assert_eq!(state.history().len(), 2);
        let last = state.last_message().unwrap();
        assert_eq!(last.sender(), Sender::User);
        assert_eq!(last.text(), "What is force majeure?");
    }

    #[test]
    fn test_blank_submissions_are_rejected() {
        let mut state = ConversationState::new();
        for text in ["", "   ", "\n\t"] {
            let err = submit(&mut state, text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
        }
        assert_eq!(state.history().len(), 1);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_submit_while_busy_is_rejected() {
        let mut state = ConversationState::new();
        submit(&mut state, "first").unwrap();
        let err = submit(&mut state, "second").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyBusy);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_reply_returns_to_idle() {
        let pool = ReplyPool::canned();
        let mut state = ConversationState::new();
        submit(&mut state, "Explain indemnification").unwrap();
        reply(&mut state, pool.get(0));

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.history().len(), 3);
        let last = state.last_message().unwrap();
        assert_eq!(last.sender(), Sender::Assistant);
        assert!(pool.contains(last.text()));
    }

    #[test]
    fn test_stray_reply_is_dropped() {
        let mut state = ConversationState::new();
        reply(&mut state, "unexpected");
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_history_keeps_call_order() {
        let mut state = ConversationState::new();
        let script = [("q1", "a1"), ("q2", "a2"), ("q3", "a3")];
        for (question, answer) in script {
            submit(&mut state, question).unwrap();
            assert!(submit(&mut state, "ignored").is_err());
            reply(&mut state, answer);
        }

        let texts: Vec<_> =
            state.history()[1..].iter().map(Message::text).collect();
        assert_eq!(texts, ["q1", "a1", "q2", "a2", "q3", "a3"]);
        let senders: Vec<_> =
            state.history().iter().map(Message::sender).collect();
        assert_eq!(senders[0], Sender::Assistant);
        assert!(
            senders[1..]
                .chunks(2)
                .all(|pair| pair == [Sender::User, Sender::Assistant])
        );
    }

    #[test]
    fn test_draft_is_frozen_while_busy() {
        let mut state = ConversationState::new();
        submit(&mut state, "question").unwrap();
        let err = state
            .apply(ConversationEvent::SetDraft("typing".into()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyBusy);
        let err = state
            .apply(ConversationEvent::QuickFill("suggested".into()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyBusy);
        assert_eq!(state.draft(), "");
    }

    #[test]
    fn test_quick_fill() {
        let mut state = ConversationState::new();
        let err = state
            .apply(ConversationEvent::QuickFill(" ".into()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);

        state
            .apply(ConversationEvent::QuickFill(
                super::super::QUICK_QUESTIONS[3].into(),
            ))
            .unwrap();
        assert_eq!(state.draft(), "What does 'force majeure' mean?");
    }

    #[test]
    fn test_language_is_display_only() {
        let mut state = ConversationState::new();
        state
            .apply(ConversationEvent::SetLanguage(Language::Tamil))
            .unwrap();
        assert_eq!(state.language(), Language::Tamil);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].text(), GREETING);
    }

    #[test]
    fn test_custom_greeting() {
        assert!(ConversationState::with_greeting("  ").is_none());
        let state = ConversationState::with_greeting("Hi there").unwrap();
        assert_eq!(state.history()[0].text(), "Hi there");
    }

    #[test]
    fn test_snapshot_serializes_history() {
        let mut state = ConversationState::new();
        submit(&mut state, "  Is a verbal lease binding? ").unwrap();

        let value = serde_json::to_value(&state).unwrap();
        let history = value["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["sender"], "assistant");
        assert_eq!(history[1]["sender"], "user");
        assert_eq!(history[1]["text"], "  Is a verbal lease binding? ");
        assert_eq!(value["busy"], true);
    }
}
