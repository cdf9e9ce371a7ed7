use std::time::Duration;

use lexaid_model::{ReplyPool, ReplySelector};

use super::{
    ConversationState, ConversationStore, DEFAULT_REPLY_DELAY, GREETING,
    SnapshotFn, StoreState,
};
use crate::RandomSelector;

/// [`ConversationStore`] builder.
///
/// Defaults: the built-in greeting, the canned reply pool, a uniformly
/// random selector and a 1.5 s reply delay.
pub struct ConversationStoreBuilder {
    greeting: String,
    pool: ReplyPool,
    selector: Box<dyn ReplySelector>,
    reply_delay: Duration,
    on_snapshot: Option<SnapshotFn>,
}

impl ConversationStoreBuilder {
    /// Creates a builder with the default settings.
    #[inline]
    pub fn new() -> Self {
        Self {
            greeting: GREETING.to_owned(),
            pool: ReplyPool::canned(),
            selector: Box::new(RandomSelector),
            reply_delay: DEFAULT_REPLY_DELAY,
            on_snapshot: None,
        }
    }

    /// Sets the delay between a submission and its reply.
    #[inline]
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Replaces the reply pool.
    #[inline]
    pub fn with_reply_pool(mut self, pool: ReplyPool) -> Self {
        self.pool = pool;
        self
    }

    /// Replaces the reply selection strategy.
    #[inline]
    pub fn with_selector<S: ReplySelector>(mut self, selector: S) -> Self {
        self.selector = Box::new(selector);
        self
    }

    /// Replaces the greeting. A blank greeting falls back to the default.
    #[inline]
    pub fn with_greeting<S: Into<String>>(mut self, greeting: S) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Attaches a callback invoked with the new state after every change.
    ///
    /// The callback runs on the store's task and must not block.
    #[inline]
    pub fn on_snapshot(
        mut self,
        on_snapshot: impl Fn(&ConversationState) + Send + Sync + 'static,
    ) -> Self {
        self.on_snapshot = Some(Box::new(on_snapshot));
        self
    }

    /// Spawns the store onto the current tokio runtime.
    pub fn build(self) -> ConversationStore {
        let Self {
            greeting,
            pool,
            selector,
            reply_delay,
            on_snapshot,
        } = self;

        let conversation = ConversationState::with_greeting(greeting)
            .unwrap_or_else(|| {
                warn!("blank greeting, using the default one");
                ConversationState::new()
            });
        let state = StoreState {
            conversation,
            pool,
            selector,
            reply_delay,
            pending_reply: None,
            on_snapshot,
        };
        ConversationStore::spawn(state, Some("conversation"))
    }
}

impl Default for ConversationStoreBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
