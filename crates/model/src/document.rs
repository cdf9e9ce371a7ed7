use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Default upload limit: 10 MiB, inclusive.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// A supported document format.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum DocumentKind {
    /// `application/pdf`
    Pdf,
    /// `text/plain`
    PlainText,
    /// `application/msword`
    Word,
    /// `application/vnd.openxmlformats-officedocument.wordprocessingml.document`
    WordOpenXml,
}

impl DocumentKind {
    /// Every accepted kind, in the order they are listed to users.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Pdf,
        DocumentKind::Word,
        DocumentKind::WordOpenXml,
        DocumentKind::PlainText,
    ];

    /// The media type this kind is accepted under.
    #[inline]
    pub fn media_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::PlainText => "text/plain",
            DocumentKind::Word => "application/msword",
            DocumentKind::WordOpenXml => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Short user-facing name of the format.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::PlainText => "TXT",
            DocumentKind::Word => "DOC",
            DocumentKind::WordOpenXml => "DOCX",
        }
    }

    /// Resolves a media type against the allow-list.
    ///
    /// Only the exact allow-listed strings match. Anything else, including
    /// a different case or added parameters, is `None`.
    pub fn from_media_type(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| raw == kind.media_type())
    }

    /// Guesses a kind from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            "doc" => Some(DocumentKind::Word),
            "docx" => Some(DocumentKind::WordOpenXml),
            _ => None,
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

/// A file offered for upload, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateFile {
    /// Original file name.
    pub name: String,
    /// Size of the file in bytes.
    pub size_bytes: u64,
    /// Media type as reported by whoever picked the file.
    pub media_type: String,
}

impl CandidateFile {
    /// Creates a candidate file.
    #[inline]
    pub fn new<N: Into<String>, T: Into<String>>(
        name: N,
        size_bytes: u64,
        media_type: T,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: media_type.into(),
        }
    }
}

/// Metadata retained for an accepted upload. Never holds file content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    name: String,
    size_bytes: u64,
    kind: DocumentKind,
}

impl DocumentDescriptor {
    /// Creates a descriptor for a file that passed validation.
    #[inline]
    pub fn new<N: Into<String>>(
        name: N,
        size_bytes: u64,
        kind: DocumentKind,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            kind,
        }
    }

    /// Original file name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Document format.
    #[inline]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Normalized media type.
    #[inline]
    pub fn media_type(&self) -> &'static str {
        self.kind.media_type()
    }

    /// Size formatted in MiB with two decimals, e.g. `"1.50 MB"`.
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}
