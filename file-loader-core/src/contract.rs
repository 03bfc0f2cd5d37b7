//! # contract: collaborator interfaces and the error taxonomy of the pipeline
//!
//! The [`Loader`](crate::loader::Loader) owns none of the mechanics of reading,
//! filtering or hooking files. It drives four collaborators through the traits
//! defined here:
//!
//! - [`Reader`] maps a file name to its raw text.
//! - [`ContentFilter`] transforms a file's main content according to a mode flag.
//! - [`PreProcessor`] rewrites the whole candidate list before resolution.
//! - [`PostProcessor`] rewrites one resolved record after resolution.
//!
//! ## Mocking & Testing
//! - Every trait is annotated for `mockall`; the generated `Mock*` types are
//!   exported under the `test-export-mocks` feature so integration tests and
//!   downstream crates can script collaborators.
//!
//! ## Errors
//! Each collaborator has its own error type. [`LoadError`] wraps them with the
//! name of the file being processed. Nothing here is recovered: a failing
//! collaborator aborts the whole load.

use std::path::PathBuf;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use thiserror::Error;

use crate::record::FileRecord;

/// The reader could not resolve a name to content.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("no content registered for '{name}'")]
    NotFound { name: String },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content of '{name}' is not valid UTF-8")]
    InvalidUtf8 { name: String },
}

/// The filter refused to transform a file's content.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("filter rejected content: {reason}")]
    Rejected { reason: String },
}

/// A pre- or post-processor failed.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("hook '{hook}' failed: {reason}")]
    Failed { hook: String, reason: String },
}

impl HookError {
    pub fn failed(hook: impl Into<String>, reason: impl Into<String>) -> Self {
        HookError::Failed {
            hook: hook.into(),
            reason: reason.into(),
        }
    }
}

/// Failure of a whole [`Loader::load_files`](crate::loader::Loader::load_files) call.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading '{name}' failed")]
    Read {
        name: String,
        #[source]
        source: ReadError,
    },

    #[error("filtering '{name}' failed")]
    Filter {
        name: String,
        #[source]
        source: FilterError,
    },

    #[error("pre-processing failed")]
    PreProcess(#[source] HookError),

    #[error("post-processing '{name}' failed")]
    PostProcess {
        name: String,
        #[source]
        source: HookError,
    },
}

/// Resolves a file name to raw content.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait Reader: Send + Sync {
    fn read_file(&self, name: &str) -> Result<String, ReadError>;
}

/// Mode-dependent transform applied to a file's main content only.
///
/// `invert` is `true` for incremental reloads and `false` for full loads.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait ContentFilter: Send + Sync {
    fn filter_content(&self, content: String, invert: bool) -> Result<String, FilterError>;
}

/// List-level hook run before any content is resolved.
///
/// May reorder, drop or add records. Receives the previous hook's output.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait PreProcessor: Send + Sync {
    fn process(&self, files: Vec<FileRecord>) -> Result<Vec<FileRecord>, HookError>;
}

/// Record-level hook run once per resolved record.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait PostProcessor: Send + Sync {
    fn process(&self, file: FileRecord) -> Result<FileRecord, HookError>;
}
