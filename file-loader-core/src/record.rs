//! # record: the unit that flows through the loading pipeline
//!
//! A [`FileRecord`] describes one loadable file and, once the pipeline has run,
//! its resolved content. Records are plain values: every pipeline stage takes
//! a record by value and hands back a freshly built one.

use serde::{Deserialize, Serialize};

/// Timestamp carried by records whose content was not resolved locally.
pub const UNRESOLVED_TIMESTAMP: i64 = -1;

fn unresolved_timestamp() -> i64 {
    UNRESOLVED_TIMESTAMP
}

/// One loadable file and its (possibly still empty) content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Name handed to the reader, usually a path relative to the load root.
    pub name: String,
    /// Last known modification marker; `-1` when unresolved or remote.
    #[serde(default = "unresolved_timestamp")]
    pub timestamp: i64,
    /// Content is fetched out-of-band and never read locally.
    #[serde(default)]
    pub is_remote: bool,
    /// Served to the runtime but otherwise passed through untouched.
    #[serde(default)]
    pub is_serve_only: bool,
    #[serde(default)]
    pub content: String,
    /// Supplementary files whose raw content is appended after the main content.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<FileRecord>,
}

impl FileRecord {
    /// A local file with the given modification marker and no content yet.
    pub fn local(name: impl Into<String>, timestamp: i64) -> Self {
        Self {
            name: name.into(),
            timestamp,
            is_remote: false,
            is_serve_only: false,
            content: String::new(),
            patches: Vec::new(),
        }
    }

    /// A remote file; the loader never reads its content.
    pub fn remote(name: impl Into<String>) -> Self {
        Self {
            is_remote: true,
            ..Self::local(name, UNRESOLVED_TIMESTAMP)
        }
    }

    pub fn with_patches(self, patches: Vec<FileRecord>) -> Self {
        Self { patches, ..self }
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }

    pub fn serve_only(self, is_serve_only: bool) -> Self {
        Self {
            is_serve_only,
            ..self
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.timestamp != UNRESOLVED_TIMESTAMP
    }
}
