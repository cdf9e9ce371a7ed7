use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person using the demo.
    User,
    /// The simulated assistant.
    Assistant,
}

impl Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => f.write_str("user"),
            Sender::Assistant => f.write_str("assistant"),
        }
    }
}

/// Unique identifier of a [`Message`].
///
/// Identifiers are UUIDv7, so they also sort by creation time.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    #[inline]
    fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A chat message.
///
/// Messages are immutable once created: all fields are private and only
/// exposed through accessors. [`Message::new`] is the only constructor, so
/// the text is never blank. Messages serialize for snapshots but are never
/// read back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message stamped with a fresh id and the current time.
    ///
    /// Returns `None` if `text` is empty or whitespace only. The text is
    /// otherwise stored exactly as given.
    pub fn new<S: Into<String>>(sender: Sender, text: S) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: MessageId::generate(),
            text,
            sender,
            timestamp: Utc::now(),
        })
    }

    /// The message identifier.
    #[inline]
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// The message text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The author of the message.
    #[inline]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// When the message was created.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
