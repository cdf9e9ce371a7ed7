//! State machines behind the legal-aid demo: the chat conversation, the
//! document intake and the glossary search.
//!
//! Each store is an actor that owns a plain state object. The state objects
//! ([`ConversationState`], [`IntakeState`]) expose pure `apply` transitions
//! and can be driven directly in tests; the actors add the simulated delays
//! and publish snapshots to whoever renders them.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod conversation;
mod error;
pub mod glossary;
pub mod intake;
mod notice;
mod selector;

pub use conversation::{
    ConversationEvent, ConversationState, ConversationStore,
    ConversationStoreBuilder,
};
pub use error::{Error, ErrorKind};
pub use glossary::Glossary;
pub use intake::{
    DocumentIntake, DocumentIntakeBuilder, DragEvent, IntakeEvent,
    IntakeState,
};
pub use notice::{Notice, NoticeLevel};
pub use selector::RandomSelector;
