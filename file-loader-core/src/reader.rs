use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::contract::{ReadError, Reader};

/// Reads files relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsReader {
    base_dir: PathBuf,
}

impl FsReader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Reader for FsReader {
    fn read_file(&self, name: &str) -> Result<String, ReadError> {
        let path = self.base_dir.join(name);
        trace!(path = %path.display(), "Reading file");
        let bytes = std::fs::read(&path).map_err(|source| ReadError::Io {
            path: path.clone(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|_| ReadError::InvalidUtf8 {
            name: name.to_string(),
        })
    }
}

/// Map-backed reader, handy for generated content and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReader {
    files: HashMap<String, String>,
}

impl InMemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(name.into(), content.into());
    }
}

impl Reader for InMemoryReader {
    fn read_file(&self, name: &str) -> Result<String, ReadError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| ReadError::NotFound {
                name: name.to_string(),
            })
    }
}
