use std::fmt;

/// Returned when a message is posted to an actor whose task has already
/// stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorDeadError;

impl fmt::Display for ActorDeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the actor is no longer running")
    }
}

impl std::error::Error for ActorDeadError {}
