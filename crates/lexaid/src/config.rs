use std::env;
use std::time::Duration;

use lexaid_core::conversation::DEFAULT_REPLY_DELAY;
use lexaid_core::intake::DEFAULT_PROCESSING_DELAY;

const REPLY_DELAY_VAR: &str = "LEXAID_REPLY_DELAY_MS";
const PROCESSING_DELAY_VAR: &str = "LEXAID_PROCESSING_DELAY_MS";

/// Timing knobs for a [`crate::Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Delay before the assistant replies.
    pub reply_delay: Duration,
    /// Delay before an accepted document is processed.
    pub processing_delay: Duration,
}

impl SessionConfig {
    /// Reads `LEXAID_REPLY_DELAY_MS` and `LEXAID_PROCESSING_DELAY_MS`.
    ///
    /// Unset variables keep the defaults. Invalid values are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            reply_delay: read_millis(&lookup, REPLY_DELAY_VAR)
                .unwrap_or(defaults.reply_delay),
            processing_delay: read_millis(&lookup, PROCESSING_DELAY_VAR)
                .unwrap_or(defaults.processing_delay),
        }
    }
}

impl Default for SessionConfig {
    #[inline]
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }
}

fn read_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<Duration> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            warn!("ignoring {key}={raw:?}: {err}");
            None
        }
    }
}
