//! Document upload queue.
//!
//! Each picked file becomes an [`UploadEntry`] and uploads on its own; one
//! failure never affects the others.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::util::files;

/// Extensions the knowledge base ingests.
pub const ACCEPTED_DOCUMENTS: [&str; 4] = ["pdf", "docx", "txt", "html"];

/// `accept` attribute for the document picker.
pub const DOCUMENT_ACCEPT_ATTR: &str = ".pdf,.docx,.txt,.html";

#[must_use]
pub fn is_accepted(name: &str) -> bool {
    files::has_extension(name, &ACCEPTED_DOCUMENTS)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Success,
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadEntry {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub status: UploadStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub entries: Vec<UploadEntry>,
    /// Names of picked files refused for their extension.
    pub rejected: Vec<String>,
}

impl UploadState {
    /// Queue a picked file. Returns the entry id, or `None` when the file
    /// type is not accepted.
    pub fn enqueue(&mut self, name: &str, size: u64) -> Option<String> {
        if !is_accepted(name) {
            self.rejected.push(name.to_owned());
            return None;
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.entries.push(UploadEntry { id: id.clone(), name: name.to_owned(), size, status: UploadStatus::Uploading });
        Some(id)
    }

    /// Settle an in-flight upload. Unknown ids (already removed) are ignored.
    pub fn finish(&mut self, id: &str, outcome: Result<(), String>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.status = match outcome {
                Ok(()) => UploadStatus::Success,
                Err(message) => UploadStatus::Error(message),
            };
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn clear_rejected(&mut self) {
        self.rejected.clear();
    }

    #[must_use]
    pub fn count(&self, status: &UploadStatus) -> usize {
        self.entries
            .iter()
            .filter(|e| std::mem::discriminant(&e.status) == std::mem::discriminant(status))
            .count()
    }
}
