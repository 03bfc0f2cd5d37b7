#![doc = "file-loader-core: the file loading pipeline."]

//! Resolves a list of [`FileRecord`]s into loaded content ready to be served
//! to a test runtime. The pipeline runs, per call:
//!
//! 1. every registered pre-processor over the candidate list,
//! 2. per record: read + filter the main content, append raw patch content,
//! 3. every registered post-processor over each resolved record.
//!
//! Readers, filters and hooks are traits (see [`contract`]); the crate ships
//! filesystem/in-memory readers, two filters and a handful of hooks, and a
//! serde-driven [`config::LoadConfig`] that wires them together.

pub mod config;
pub mod contract;
pub mod filter;
pub mod hooks;
pub mod loader;
pub mod reader;
pub mod record;

pub use contract::{LoadError, ReadError};
pub use loader::{Loader, LoaderBuilder};
pub use record::{FileRecord, UNRESOLVED_TIMESTAMP};
