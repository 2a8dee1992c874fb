use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::extract::loader::{LoadStatus, LoadedText};

/// Résumé held for the lifetime of one session. Raw bytes stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub file_name: String,
    pub media_type: Option<String>,
    #[serde(skip)]
    pub raw_bytes: Bytes,
    pub extracted_text: String,
    pub status: LoadStatus,
}

impl CandidateDocument {
    pub fn from_upload(media_type: Option<String>, raw_bytes: Bytes, loaded: LoadedText) -> Self {
        Self {
            file_name: loaded.file_name,
            media_type,
            raw_bytes,
            extracted_text: loaded.text,
            status: loaded.status,
        }
    }

    /// Text the candidate pasted instead of uploading a file.
    pub fn pasted(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            file_name: "pasted.txt".to_string(),
            media_type: Some("text/plain".to_string()),
            raw_bytes: Bytes::from(text.clone()),
            extracted_text: text,
            status: LoadStatus::Extracted,
        }
    }

    /// Extracted text, only when it is real content rather than a canned message.
    pub fn usable_text(&self) -> Option<&str> {
        match self.status {
            LoadStatus::Extracted => Some(self.extracted_text.as_str()),
            _ => None,
        }
    }
}
