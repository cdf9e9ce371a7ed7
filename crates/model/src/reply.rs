use serde::{Deserialize, Serialize};

/// The replies the simulated assistant picks from by default.
pub const CANNED_REPLIES: [&str; 4] = [
    "Based on your document, I can see that this clause refers to indemnification, which means one party agrees to compensate the other for certain losses. Think of it like insurance - if something goes wrong, the indemnifying party covers the costs.",
    "That's a great question about contract law. In simple terms, a breach occurs when one party fails to fulfill their obligations. For example, if you rent an apartment and don't pay rent, that's like not keeping your promise - the landlord can take legal action.",
    "Legal terms can be confusing! Let me explain this in simple terms with an analogy. This clause is like a 'safety net' that protects you if certain things go wrong. Would you like me to explain any specific part in more detail?",
    "I notice you're asking about liability. Think of liability like being responsible for something that goes wrong. It's similar to being responsible for breaking something at a friend's house - you'd need to pay for it.",
];

/// A fixed, non-empty set of pre-written assistant replies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ReplyPool {
    replies: Vec<String>,
}

impl ReplyPool {
    /// Creates a pool from the given replies.
    ///
    /// Returns `None` if there are no replies or any reply is blank, since
    /// every pick must produce a valid message.
    pub fn new<I, S>(replies: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies: Vec<String> =
            replies.into_iter().map(Into::into).collect();
        if replies.is_empty() || replies.iter().any(|r| r.trim().is_empty()) {
            return None;
        }
        Some(Self { replies })
    }

    /// The built-in pool made of [`CANNED_REPLIES`].
    pub fn canned() -> Self {
        Self {
            replies: CANNED_REPLIES.map(str::to_owned).into(),
        }
    }

    /// Number of replies. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.replies.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the reply at `index`, wrapping around the pool size.
    #[inline]
    pub fn get(&self, index: usize) -> &str {
        &self.replies[index % self.replies.len()]
    }

    /// Returns `true` if `text` is one of the replies.
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.replies.iter().any(|r| r == text)
    }

    /// Iterates over the replies in pool order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.replies.iter().map(String::as_str)
    }

    /// Picks a reply with the given selector.
    #[inline]
    pub fn pick(&self, selector: &dyn ReplySelector) -> &str {
        self.get(selector.select(self))
    }
}

impl Default for ReplyPool {
    #[inline]
    fn default() -> Self {
        Self::canned()
    }
}

impl TryFrom<Vec<String>> for ReplyPool {
    type Error = &'static str;

    fn try_from(replies: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(replies).ok_or("reply pool must contain non-blank replies")
    }
}

impl From<ReplyPool> for Vec<String> {
    #[inline]
    fn from(pool: ReplyPool) -> Self {
        pool.replies
    }
}

/// Chooses which reply of a pool the assistant answers with.
///
/// Production code uses a uniformly random selector; tests plug in a
/// deterministic one. Implementations may return any index, it is reduced
/// modulo the pool size. Any `Fn(&ReplyPool) -> usize` closure is a
/// selector.
pub trait ReplySelector: Send + Sync + 'static {
    /// Returns the index of the reply to use.
    fn select(&self, pool: &ReplyPool) -> usize;
}

impl<F> ReplySelector for F
where
    F: Fn(&ReplyPool) -> usize + Send + Sync + 'static,
{
    #[inline]
    fn select(&self, pool: &ReplyPool) -> usize {
        self(pool)
    }
}
