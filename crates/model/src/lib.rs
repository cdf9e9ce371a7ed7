//! Data types shared by the conversation and document-intake stores.
//!
//! Types in this crate carry no behavior beyond construction and
//! validation of their own invariants. The state machines that move them
//! around live in `lexaid-core`.

#![deny(missing_docs)]

mod document;
mod language;
mod message;
mod reply;

pub use document::*;
pub use language::*;
pub use message::*;
pub use reply::*;
