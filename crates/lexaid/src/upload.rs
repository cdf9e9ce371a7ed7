use std::io;
use std::path::Path;

use lexaid_model::{CandidateFile, DocumentKind};
use tokio::fs;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Describes a local file as an upload candidate.
///
/// Only the metadata is read. The media type is guessed from the extension
/// the way a browser file picker does; unknown extensions are reported as
/// `application/octet-stream` and will be rejected by the intake.
pub async fn candidate_from_path<P: AsRef<Path>>(
    path: P,
) -> io::Result<CandidateFile> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file", path.display()),
        ));
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let media_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(DocumentKind::from_extension)
        .map_or(FALLBACK_MEDIA_TYPE, DocumentKind::media_type);
    trace!("{name}: {} bytes, {media_type}", metadata.len());

    Ok(CandidateFile::new(name, metadata.len(), media_type))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[tokio::test]
    async fn test_reads_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lease.PDF");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0; 1234]).unwrap();

        let candidate = candidate_from_path(&path).await.unwrap();
        assert_eq!(candidate.name, "Lease.PDF");
        assert_eq!(candidate.size_bytes, 1234);
        assert_eq!(candidate.media_type, "application/pdf");
    }

    #[tokio::test]
    async fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"png").unwrap();

        let candidate = candidate_from_path(&path).await.unwrap();
        assert_eq!(candidate.media_type, FALLBACK_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_missing_or_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = candidate_from_path(dir.path().join("nope.txt")).await;
        assert!(missing.is_err());
        let err = candidate_from_path(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
