//! A ready-to-use legal-aid demo session: a simulated chat assistant, a
//! document intake and a glossary, wired together for a front-end.
//!
//! The crate ships a terminal front-end, and can also be embedded as a
//! library by any other renderer.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod config;
mod session;
mod upload;

pub use config::SessionConfig;
pub use session::{Session, SessionBuilder};
pub use upload::candidate_from_path;

/// Re-exports of [`lexaid_core`] crate.
pub mod core {
    pub use lexaid_core::*;
}

/// Re-exports of [`lexaid_model`] crate.
pub mod model {
    pub use lexaid_model::*;
}
