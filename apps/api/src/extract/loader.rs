//! Generic file text loader. Routes PDFs to the heuristic extractor and
//! reads everything else as text. Always resolves to a usable string.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::extract::pdf::analyze_pdf;

const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Anything the loader can pull bytes from.
#[async_trait]
pub trait FileSource: Send + Sync {
    fn name(&self) -> &str;
    fn media_type(&self) -> Option<&str>;
    async fn read(&self) -> io::Result<Bytes>;
}

/// A file received in a multipart upload. Holds either its content or the
/// reason the upload body could not be read.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    name: String,
    media_type: Option<String>,
    content: Result<Bytes, String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            media_type,
            content: Ok(bytes),
        }
    }

    pub fn unreadable(
        name: impl Into<String>,
        media_type: Option<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type,
            content: Err(reason.into()),
        }
    }
}

#[async_trait]
impl FileSource for UploadedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    async fn read(&self) -> io::Result<Bytes> {
        self.content.clone().map_err(io::Error::other)
    }
}

/// A file on the local filesystem. Read lazily by `load_text`.
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
    media_type: Option<String>,
}

impl DiskFile {
    pub fn new(path: impl Into<PathBuf>, media_type: Option<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            media_type,
        }
    }
}

#[async_trait]
impl FileSource for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    async fn read(&self) -> io::Result<Bytes> {
        tokio::fs::read(&self.path).await.map(Bytes::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRoute {
    PdfHeuristic,
    PlainText,
}

/// PDF when the declared media type says so OR the name ends in `.pdf`
/// (any case). Either signal alone is enough.
pub fn route_for(name: &str, media_type: Option<&str>) -> LoadRoute {
    let declared_pdf = media_type.is_some_and(|m| m.eq_ignore_ascii_case(PDF_MEDIA_TYPE));
    let named_pdf = name.to_lowercase().ends_with(".pdf");

    if declared_pdf || named_pdf {
        LoadRoute::PdfHeuristic
    } else {
        LoadRoute::PlainText
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Real content was recovered.
    Extracted,
    /// The PDF heuristic found too few words; `text` asks the user to paste.
    LowConfidence,
    /// The file was readable but empty.
    Empty,
    /// The bytes could not be read; `text` names the file and asks to paste.
    ReadFailed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedText {
    pub file_name: String,
    pub text: String,
    pub status: LoadStatus,
}

pub fn read_error_message(file_name: &str) -> String {
    format!("Error reading {file_name}. Please paste content manually.")
}

fn empty_file_message(file_name: &str) -> String {
    format!("{file_name} uploaded successfully.")
}

/// Loads best-effort text from `file`. Never returns an error: read failures
/// become `LoadStatus::ReadFailed` with a message naming the file.
pub async fn load_text(file: &dyn FileSource) -> LoadedText {
    let file_name = file.name().to_string();
    let route = route_for(&file_name, file.media_type());
    debug!("Loading '{}' via {:?}", file_name, route);

    let bytes = match file.read().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read '{}': {}", file_name, e);
            return LoadedText {
                text: read_error_message(&file_name),
                file_name,
                status: LoadStatus::ReadFailed,
            };
        }
    };

    match route {
        LoadRoute::PdfHeuristic => {
            let extraction = analyze_pdf(&bytes);
            let status = if extraction.is_confident() {
                LoadStatus::Extracted
            } else {
                LoadStatus::LowConfidence
            };
            debug!(
                "PDF heuristic recovered {} tokens from {} bytes",
                extraction.tokens.len(),
                bytes.len()
            );
            LoadedText {
                file_name,
                text: extraction.into_text(),
                status,
            }
        }
        LoadRoute::PlainText => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            if text.is_empty() {
                LoadedText {
                    text: empty_file_message(&file_name),
                    file_name,
                    status: LoadStatus::Empty,
                }
            } else {
                LoadedText {
                    file_name,
                    text,
                    status: LoadStatus::Extracted,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::pdf::LOW_CONFIDENCE_FALLBACK;
    use std::io::Write;

    const PLAIN_PROSE: &str = "Alice Smith\nSenior Rust Engineer\n";
    const PDF_BYTES: &[u8] =
        b"%PDF-1.4\nstream\n(Alice Smith Senior Rust Engineer Berlin Germany)\nendstream";

    #[test]
    fn test_route_by_media_type_only() {
        assert_eq!(
            route_for("resume", Some("application/pdf")),
            LoadRoute::PdfHeuristic
        );
    }

    #[test]
    fn test_route_by_suffix_only() {
        assert_eq!(route_for("resume.pdf", None), LoadRoute::PdfHeuristic);
        assert_eq!(route_for("RESUME.PDF", None), LoadRoute::PdfHeuristic);
    }

    #[test]
    fn test_route_suffix_wins_over_mismatched_media_type() {
        assert_eq!(
            route_for("resume.pdf", Some("text/plain")),
            LoadRoute::PdfHeuristic
        );
    }

    #[test]
    fn test_route_other_files_are_plain_text() {
        assert_eq!(route_for("resume.txt", Some("text/plain")), LoadRoute::PlainText);
        assert_eq!(route_for("resume.docx", None), LoadRoute::PlainText);
        assert_eq!(route_for("pdf-notes.md", None), LoadRoute::PlainText);
    }

    #[tokio::test]
    async fn test_pdf_suffix_with_text_media_type_never_reads_as_text() {
        // Read as text this would come back verbatim; the heuristic finds no stream.
        let file = UploadedFile::new(
            "resume.pdf",
            Some("text/plain".to_string()),
            Bytes::from_static(PLAIN_PROSE.as_bytes()),
        );
        let loaded = load_text(&file).await;
        assert_eq!(loaded.text, LOW_CONFIDENCE_FALLBACK);
        assert_eq!(loaded.status, LoadStatus::LowConfidence);
    }

    #[tokio::test]
    async fn test_pdf_media_type_without_suffix_uses_heuristic() {
        let file = UploadedFile::new(
            "upload",
            Some("application/pdf".to_string()),
            Bytes::from_static(PDF_BYTES),
        );
        let loaded = load_text(&file).await;
        assert_eq!(loaded.status, LoadStatus::Extracted);
        assert_eq!(loaded.text, "Alice Smith Senior Rust Engineer Berlin Germany");
    }

    #[tokio::test]
    async fn test_plain_text_is_returned_verbatim() {
        let file = UploadedFile::new(
            "resume.txt",
            Some("text/plain".to_string()),
            Bytes::from_static(PLAIN_PROSE.as_bytes()),
        );
        let loaded = load_text(&file).await;
        assert_eq!(loaded.text, PLAIN_PROSE);
        assert_eq!(loaded.status, LoadStatus::Extracted);
        assert_eq!(loaded.file_name, "resume.txt");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_rejected() {
        let file = UploadedFile::new("notes.txt", None, Bytes::from_static(b"caf\xE9 owner"));
        let loaded = load_text(&file).await;
        assert_eq!(loaded.status, LoadStatus::Extracted);
        assert!(loaded.text.starts_with("caf"));
        assert!(loaded.text.ends_with(" owner"));
    }

    #[tokio::test]
    async fn test_empty_text_file_reports_upload() {
        let file = UploadedFile::new("blank.txt", None, Bytes::new());
        let loaded = load_text(&file).await;
        assert_eq!(loaded.text, "blank.txt uploaded successfully.");
        assert_eq!(loaded.status, LoadStatus::Empty);
    }

    #[tokio::test]
    async fn test_read_error_resolves_with_file_name() {
        let file = UploadedFile::unreadable("cv.docx", None, "connection reset");
        let loaded = load_text(&file).await;
        assert_eq!(loaded.status, LoadStatus::ReadFailed);
        assert!(loaded.text.contains("cv.docx"));
        assert_eq!(
            loaded.text,
            "Error reading cv.docx. Please paste content manually."
        );
    }

    #[tokio::test]
    async fn test_read_error_on_pdf_path_also_names_file() {
        let file = UploadedFile::unreadable("cv.pdf", Some(PDF_MEDIA_TYPE.to_string()), "eof");
        let loaded = load_text(&file).await;
        assert_eq!(loaded.status, LoadStatus::ReadFailed);
        assert!(loaded.text.contains("cv.pdf"));
    }

    #[tokio::test]
    async fn test_pdf_on_disk_uses_heuristic() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(PDF_BYTES).unwrap();

        let disk = DiskFile::new(file.path(), None);
        let loaded = load_text(&disk).await;
        assert_eq!(loaded.status, LoadStatus::Extracted);
        assert_eq!(loaded.text, "Alice Smith Senior Rust Engineer Berlin Germany");
        assert!(loaded.file_name.ends_with(".pdf"));
        assert!(!loaded.file_name.contains('/'));
    }

    #[tokio::test]
    async fn test_text_file_on_disk_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, PLAIN_PROSE).unwrap();

        let disk = DiskFile::new(&path, Some("text/plain".to_string()));
        let loaded = load_text(&disk).await;
        assert_eq!(loaded.status, LoadStatus::Extracted);
        assert_eq!(loaded.text, PLAIN_PROSE);
        assert_eq!(loaded.file_name, "resume.txt");
    }

    #[tokio::test]
    async fn test_missing_file_on_disk_resolves_with_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let disk = DiskFile::new(dir.path().join("gone.pdf"), None);

        let loaded = load_text(&disk).await;
        assert_eq!(loaded.status, LoadStatus::ReadFailed);
        assert_eq!(loaded.file_name, "gone.pdf");
        assert_eq!(
            loaded.text,
            "Error reading gone.pdf. Please paste content manually."
        );
    }
}
