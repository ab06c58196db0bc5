//! Video upload validation
//!
//! A [`FileCandidate`] is what the user picked (or dropped onto the
//! terminal). [`validate`] turns it into an [`UploadedFile`] or an
//! [`UploadRejection`] carrying the message shown in the alert.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::error::{Error, Result};

/// Largest accepted upload: 100 MiB
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// MIME types accepted by the validator
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["video/mp4", "video/avi", "video/quicktime"];

/// MIME type used when the extension is unknown
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Why a candidate file was turned away
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UploadRejection {
    #[error("Please upload a valid video file (MP4, AVI, MOV)")]
    UnsupportedType { mime_type: String },

    #[error("File size must be less than 100MB")]
    TooLarge { size: u64 },
}

/// A file the user selected, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Build a candidate from a path on disk.
    ///
    /// Size comes from filesystem metadata and the MIME type from the file
    /// extension. Directories and missing paths are unreadable.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            tracing::debug!("Metadata lookup failed for {}: {}", path.display(), e);
            Error::unreadable_file(path)
        })?;

        if !metadata.is_file() {
            return Err(Error::unreadable_file(path));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(mime_for_extension)
            .unwrap_or(FALLBACK_MIME_TYPE);

        Ok(Self::new(name, metadata.len(), mime_type))
    }
}

/// An accepted upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    name: String,
    size: u64,
    mime_type: String,
}

impl UploadedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Size in mebibytes with two decimals, e.g. `12.50 MB`
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size as f64 / (1024.0 * 1024.0))
    }
}

/// Accept a candidate or say why not.
///
/// The type check runs before the size check, so an oversized file of the
/// wrong type reports the type message.
pub fn validate(candidate: FileCandidate) -> std::result::Result<UploadedFile, UploadRejection> {
    if !ALLOWED_MIME_TYPES.contains(&candidate.mime_type.as_str()) {
        return Err(UploadRejection::UnsupportedType {
            mime_type: candidate.mime_type,
        });
    }

    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge {
            size: candidate.size,
        });
    }

    Ok(UploadedFile {
        name: candidate.name,
        size: candidate.size,
        mime_type: candidate.mime_type,
    })
}

/// Map a file extension (case-insensitive, without the dot) to a MIME type
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "mp4" | "m4v" => "video/mp4",
        "avi" => "video/avi",
        "mov" | "qt" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "gif" => "image/gif",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => FALLBACK_MIME_TYPE,
    }
}

/// Clean up a path that arrived through a paste or a typed prompt.
///
/// Terminals deliver dropped files in a few shapes: wrapped in quotes,
/// as a `file://` URI, or with shell-escaped spaces. Returns `None` when
/// nothing is left after trimming.
pub fn normalize_dropped_path(raw: &str) -> Option<PathBuf> {
    let mut text = raw.trim();

    // Only the first line of a multi-file drop is used
    if let Some(first) = text.lines().next() {
        text = first.trim();
    }

    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = &text[1..text.len() - 1];
        }
    }

    let text = text.strip_prefix("file://").unwrap_or(text);
    let unescaped = text.replace("\\ ", " ");

    if unescaped.trim().is_empty() {
        return None;
    }

    Some(PathBuf::from(unescaped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_accepts_each_allowed_type() {
        for mime in ALLOWED_MIME_TYPES {
            let file = validate(FileCandidate::new("clip", 1024, mime)).unwrap();
            assert_eq!(file.mime_type(), mime);
        }
    }

    #[test]
    fn test_rejects_disallowed_type() {
        let result = validate(FileCandidate::new("photo.png", 10, "image/png"));
        assert_eq!(
            result,
            Err(UploadRejection::UnsupportedType {
                mime_type: "image/png".to_string()
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Please upload a valid video file (MP4, AVI, MOV)"
        );
    }

    #[test]
    fn test_rejects_oversized_video() {
        let result = validate(FileCandidate::new("long.mp4", MAX_UPLOAD_BYTES + 1, "video/mp4"));
        let err = result.unwrap_err();
        assert!(matches!(err, UploadRejection::TooLarge { .. }));
        assert_eq!(err.to_string(), "File size must be less than 100MB");
    }

    #[test]
    fn test_exact_ceiling_is_accepted() {
        let file = validate(FileCandidate::new("edge.mov", MAX_UPLOAD_BYTES, "video/quicktime"));
        assert!(file.is_ok());
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = validate(FileCandidate::new("huge.png", MAX_UPLOAD_BYTES * 2, "image/png"))
            .unwrap_err();
        assert!(matches!(err, UploadRejection::UnsupportedType { .. }));
    }

    #[test]
    fn test_display_size() {
        let file = validate(FileCandidate::new("a.mp4", 13_107_200, "video/mp4")).unwrap();
        assert_eq!(file.display_size(), "12.50 MB");
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("MP4"), "video/mp4");
        assert_eq!(mime_for_extension("mov"), "video/quicktime");
        assert_eq!(mime_for_extension("qt"), "video/quicktime");
        assert_eq!(mime_for_extension("avi"), "video/avi");
        assert_eq!(mime_for_extension("mkv"), "video/x-matroska");
        assert_eq!(mime_for_extension("xyz"), "application/octet-stream");
    }

    #[test]
    fn test_from_path_reads_size_and_type() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bowling.mp4");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0u8; 2048]).unwrap();

        let candidate = FileCandidate::from_path(&path).unwrap();
        assert_eq!(candidate.name, "bowling.mp4");
        assert_eq!(candidate.size, 2048);
        assert_eq!(candidate.mime_type, "video/mp4");
    }

    #[test]
    fn test_from_path_missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let err = FileCandidate::from_path(&dir.path().join("nope.mp4")).unwrap_err();
        assert!(matches!(err, Error::UnreadableFile { .. }));
    }

    #[test]
    fn test_from_path_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let err = FileCandidate::from_path(dir.path()).unwrap_err();
        assert!(matches!(err, Error::UnreadableFile { .. }));
    }

    #[test]
    fn test_normalize_dropped_path_shapes() {
        assert_eq!(
            normalize_dropped_path("  '/tmp/my clip.mp4'\n"),
            Some(PathBuf::from("/tmp/my clip.mp4"))
        );
        assert_eq!(
            normalize_dropped_path("\"/tmp/a.mov\""),
            Some(PathBuf::from("/tmp/a.mov"))
        );
        assert_eq!(
            normalize_dropped_path("file:///tmp/b.avi"),
            Some(PathBuf::from("/tmp/b.avi"))
        );
        assert_eq!(
            normalize_dropped_path("/tmp/my\\ clip.mp4"),
            Some(PathBuf::from("/tmp/my clip.mp4"))
        );
    }

    #[test]
    fn test_normalize_dropped_path_empty() {
        assert_eq!(normalize_dropped_path(""), None);
        assert_eq!(normalize_dropped_path("   "), None);
        assert_eq!(normalize_dropped_path("''"), None);
    }
}
