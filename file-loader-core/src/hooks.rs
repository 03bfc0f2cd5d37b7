//! # hooks: built-in pre- and post-processors
//!
//! Small, composable transformations that can be registered on a
//! [`LoaderBuilder`](crate::loader::LoaderBuilder) directly or declared in a
//! [`LoadConfig`](crate::config::LoadConfig).
//!
//! Pre-processors work on the whole candidate list:
//! - [`ExcludeByPattern`] drops records whose name matches a regex.
//! - [`DedupeByName`] keeps the first record for each name.
//! - [`ServeOnlyLast`] moves serve-only records behind the others.
//!
//! Post-processors work on one resolved record:
//! - [`SourceUrlAnnotator`] appends a `sourceURL` comment.
//! - [`ContentBanner`] prepends a fixed banner line.
//!
//! Post-processors leave records with empty content alone, so remote files
//! pass through unchanged.

use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::contract::{HookError, PostProcessor, PreProcessor};
use crate::record::FileRecord;

#[derive(Debug, Clone)]
pub struct ExcludeByPattern {
    pattern: Regex,
}

impl ExcludeByPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl PreProcessor for ExcludeByPattern {
    fn process(&self, files: Vec<FileRecord>) -> Result<Vec<FileRecord>, HookError> {
        let before = files.len();
        let kept: Vec<FileRecord> = files
            .into_iter()
            .filter(|file| !self.pattern.is_match(&file.name))
            .collect();
        debug!(
            pattern = %self.pattern,
            excluded = before - kept.len(),
            "Excluded files by pattern"
        );
        Ok(kept)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DedupeByName;

impl PreProcessor for DedupeByName {
    fn process(&self, files: Vec<FileRecord>) -> Result<Vec<FileRecord>, HookError> {
        let mut seen = HashSet::new();
        Ok(files
            .into_iter()
            .filter(|file| seen.insert(file.name.clone()))
            .collect())
    }
}

/// Stable partition: regular files first, serve-only files after.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeOnlyLast;

impl PreProcessor for ServeOnlyLast {
    fn process(&self, files: Vec<FileRecord>) -> Result<Vec<FileRecord>, HookError> {
        let (serve_only, mut regular): (Vec<_>, Vec<_>) =
            files.into_iter().partition(|file| file.is_serve_only);
        regular.extend(serve_only);
        Ok(regular)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SourceUrlAnnotator;

impl PostProcessor for SourceUrlAnnotator {
    fn process(&self, file: FileRecord) -> Result<FileRecord, HookError> {
        if file.content.is_empty() {
            return Ok(file);
        }
        let content = format!("{}\n//# sourceURL={}", file.content, file.name);
        Ok(file.with_content(content))
    }
}

#[derive(Debug, Error)]
#[error("banner text must be a single line")]
pub struct MultiLineBanner;

#[derive(Debug, Clone)]
pub struct ContentBanner {
    text: String,
}

impl ContentBanner {
    pub fn new(text: impl Into<String>) -> Result<Self, MultiLineBanner> {
        let text = text.into();
        if text.contains('\n') {
            return Err(MultiLineBanner);
        }
        Ok(Self { text })
    }
}

impl PostProcessor for ContentBanner {
    fn process(&self, file: FileRecord) -> Result<FileRecord, HookError> {
        if file.content.is_empty() {
            return Ok(file);
        }
        let content = format!("{}\n{}", self.text, file.content);
        Ok(file.with_content(content))
    }
}
