use std::fmt::{self, Display};

use lexaid_model::{CandidateFile, DocumentDescriptor, DocumentKind};
use serde::Serialize;

use crate::{Error, ErrorKind};

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Something finished as expected.
    Success,
    /// The user's action was rejected.
    Error,
}

/// A short user-facing message, shown as a toast by the front-end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// One-line headline.
    pub title: String,
    /// Details.
    pub description: String,
}

impl Notice {
    pub(crate) fn processed(doc: &DocumentDescriptor) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Document processed successfully".to_owned(),
            description: format!(
                "{} is ready for analysis. You can now ask questions about \
                 this document.",
                doc.name()
            ),
        }
    }

    /// Builds the rejection notice for a failed upload, if the error is one
    /// the user has to be told about.
    pub(crate) fn rejected(
        err: &Error,
        file: &CandidateFile,
        max_size_bytes: u64,
    ) -> Option<Self> {
        let (title, description) = match err.kind() {
            ErrorKind::UnsupportedType => (
                "Unsupported file type",
                format!(
                    "{}: Please upload {} files only.",
                    file.name,
                    or_list(&DocumentKind::ALL.map(DocumentKind::label))
                ),
            ),
            ErrorKind::TooLarge => (
                "File too large",
                format!(
                    "{}: Please upload files smaller than {}.",
                    file.name,
                    format_limit(max_size_bytes)
                ),
            ),
            _ => return None,
        };
        Some(Self {
            level: NoticeLevel::Error,
            title: title.to_owned(),
            description,
        })
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// `["a", "b", "c"]` becomes `"a, b, or c"`.
fn or_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

fn format_limit(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}
