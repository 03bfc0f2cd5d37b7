//! Built-in [`ContentFilter`] implementations.

use regex::Regex;

use crate::contract::{ContentFilter, FilterError};

/// Returns content unchanged in both modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFilter;

impl ContentFilter for PassthroughFilter {
    fn filter_content(&self, content: String, _invert: bool) -> Result<String, FilterError> {
        Ok(content)
    }
}

/// Drops every line matching `pattern` on a full load.
///
/// Incremental reloads (`invert == true`) leave content untouched.
#[derive(Debug, Clone)]
pub struct LineStripFilter {
    pattern: Regex,
}

impl LineStripFilter {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl ContentFilter for LineStripFilter {
    fn filter_content(&self, content: String, invert: bool) -> Result<String, FilterError> {
        if invert {
            return Ok(content);
        }
        let kept: Vec<&str> = content
            .split_inclusive('\n')
            .filter(|line| !self.pattern.is_match(line.trim_end_matches(['\r', '\n'])))
            .collect();
        Ok(kept.concat())
    }
}
