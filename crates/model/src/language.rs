use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language of the chat panel.
///
/// Only the selector label changes with the language. Replies and glossary
/// content are always English.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Language {
    /// English.
    #[default]
    English,
    /// Hindi.
    Hindi,
    /// Tamil.
    Tamil,
    /// Spanish.
    Spanish,
}

impl Language {
    /// Every selectable language, in selector order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Spanish,
    ];

    /// The canonical code, which is also the English name.
    #[inline]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Spanish => "Spanish",
        }
    }

    /// The ISO 639-1 code.
    #[inline]
    pub fn iso_code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Spanish => "es",
        }
    }

    /// The label shown in the selector, written in the language itself.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Tamil => "தமிழ்",
            Language::Spanish => "Español",
        }
    }

    /// Looks up a language by its code, its ISO 639-1 code or its label.
    ///
    /// Codes are matched case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|lang| {
            code.eq_ignore_ascii_case(lang.code())
                || code.eq_ignore_ascii_case(lang.iso_code())
                || code == lang.label()
        })
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("English"), Some(Language::English));
        assert_eq!(Language::from_code("tamil"), Some(Language::Tamil));
        assert_eq!(Language::from_code("es"), Some(Language::Spanish));
        assert_eq!(Language::from_code("हिन्दी"), Some(Language::Hindi));
        assert_eq!(Language::from_code("French"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_parse_error() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("klingon".to_owned()));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().to_string(), "English");
    }
}
