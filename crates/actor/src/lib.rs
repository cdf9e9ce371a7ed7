//! A small actor runtime on top of tokio.
//!
//! Every actor is a task that exclusively owns its state and handles one
//! message at a time. Delayed work is expressed as a message delivered later
//! through a cancelable [`Timer`].

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod error;
mod handle;
mod macros;
mod mailbox;
mod scheduler;
mod timer;

pub use error::ActorDeadError;
pub use handle::Actor;
pub use mailbox::Message;
pub use timer::Timer;
