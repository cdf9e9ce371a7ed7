use std::borrow::Cow;
use std::fmt::{self, Display};

use lexaid_actor::ActorDeadError;
use lexaid_model::UnknownLanguage;

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A submission or quick-fill text was blank.
    EmptyInput,
    /// The conversation is waiting for a reply.
    AlreadyBusy,
    /// The uploaded file's media type is not accepted.
    UnsupportedType,
    /// The uploaded file exceeds the size limit.
    TooLarge,
    /// The language code is not one of the supported languages.
    UnknownLanguage,
    /// The store has been shut down.
    Closed,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EmptyInput => write!(f, "Empty input"),
            ErrorKind::AlreadyBusy => write!(f, "Already busy"),
            ErrorKind::UnsupportedType => write!(f, "Unsupported file type"),
            ErrorKind::TooLarge => write!(f, "File too large"),
            ErrorKind::UnknownLanguage => write!(f, "Unknown language"),
            ErrorKind::Closed => write!(f, "Store is closed"),
        }
    }
}

/// Describes why an operation on a store was rejected.
///
/// None of these are fatal. The store is left exactly as it was and the
/// caller may try again with corrected input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
    reason: Option<String>,
}

impl Error {
    #[inline]
    fn new(kind: ErrorKind) -> Self {
        Self { kind, reason: None }
    }

    /// Creates a new error with the `EmptyInput` kind.
    #[inline]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates a new error with the `AlreadyBusy` kind.
    #[inline]
    pub fn already_busy() -> Self {
        Self::new(ErrorKind::AlreadyBusy)
    }

    /// Creates a new error with the `UnsupportedType` kind.
    #[inline]
    pub fn unsupported_type() -> Self {
        Self::new(ErrorKind::UnsupportedType)
    }

    /// Creates a new error with the `TooLarge` kind.
    #[inline]
    pub fn too_large() -> Self {
        Self::new(ErrorKind::TooLarge)
    }

    /// Creates a new error with the `UnknownLanguage` kind.
    #[inline]
    pub fn unknown_language() -> Self {
        Self::new(ErrorKind::UnknownLanguage)
    }

    /// Creates a new error with the `Closed` kind.
    #[inline]
    pub fn closed() -> Self {
        Self::new(ErrorKind::Closed)
    }

    /// Attaches a reason to the error.
    #[inline]
    pub fn with_reason<S: Into<String>>(self, reason: S) -> Self {
        Self {
            kind: self.kind,
            reason: Some(reason.into()),
        }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the reason for the error.
    #[inline]
    pub fn reason(&self) -> Cow<'_, str> {
        match self.reason.as_deref() {
            Some(reason) => Cow::Borrowed(reason),
            None => Cow::Owned(format!("{}", self.kind)),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{}: {reason}", self.kind),
            None => Display::fmt(&self.kind, f),
        }
    }
}

impl std::error::Error for Error {}

impl From<ActorDeadError> for Error {
    #[inline]
    fn from(_: ActorDeadError) -> Self {
        Self::closed()
    }
}

impl From<UnknownLanguage> for Error {
    #[inline]
    fn from(err: UnknownLanguage) -> Self {
        Self::unknown_language().with_reason(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_falls_back_to_kind() {
        let err = Error::too_large();
        assert_eq!(err.kind(), ErrorKind::TooLarge);
        assert_eq!(err.reason(), "File too large");
        assert_eq!(err.to_string(), "File too large");

        let err = err.with_reason("big.pdf is 11.00 MB");
        assert_eq!(err.reason(), "big.pdf is 11.00 MB");
        assert_eq!(err.to_string(), "File too large: big.pdf is 11.00 MB");
    }

    #[test]
    fn test_from_unknown_language() {
        let err = Error::from(UnknownLanguage("Klingon".to_owned()));
        assert_eq!(err.kind(), ErrorKind::UnknownLanguage);
        assert_eq!(err.to_string(), "Unknown language: Klingon");
    }

    #[test]
    fn test_from_actor_dead() {
        assert_eq!(Error::from(ActorDeadError).kind(), ErrorKind::Closed);
    }
}
