use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::contract::{ContentFilter, PostProcessor, PreProcessor};
use crate::filter::{LineStripFilter, PassthroughFilter};
use crate::hooks::{
    ContentBanner, DedupeByName, ExcludeByPattern, MultiLineBanner, ServeOnlyLast,
    SourceUrlAnnotator,
};
use crate::loader::Loader;
use crate::reader::FsReader;
use crate::record::FileRecord;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid banner {text:?}")]
    InvalidBanner {
        text: String,
        #[source]
        source: MultiLineBanner,
    },
}

fn default_should_reset() -> bool {
    true
}

/// Declarative description of one load: where files live, which files to
/// load and which hooks to run, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub base_dir: PathBuf,
    #[serde(default = "default_should_reset")]
    pub should_reset: bool,
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub filter: FilterSpec,
    #[serde(default)]
    pub pre_processors: Vec<PreProcessorSpec>,
    #[serde(default)]
    pub post_processors: Vec<PostProcessorSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterSpec {
    #[default]
    Passthrough,
    LineStrip { pattern: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreProcessorSpec {
    ExcludeByPattern { pattern: String },
    DedupeByName,
    ServeOnlyLast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostProcessorSpec {
    SourceUrl,
    Banner { text: String },
}

fn invalid_pattern(pattern: &str) -> impl FnOnce(regex::Error) -> ConfigError + '_ {
    move |source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    }
}

impl FilterSpec {
    pub fn build(&self) -> Result<Box<dyn ContentFilter>, ConfigError> {
        let filter: Box<dyn ContentFilter> = match self {
            FilterSpec::Passthrough => Box::new(PassthroughFilter),
            FilterSpec::LineStrip { pattern } => {
                Box::new(LineStripFilter::new(pattern).map_err(invalid_pattern(pattern))?)
            }
        };
        Ok(filter)
    }
}

impl PreProcessorSpec {
    pub fn build(&self) -> Result<Box<dyn PreProcessor>, ConfigError> {
        let hook: Box<dyn PreProcessor> = match self {
            PreProcessorSpec::ExcludeByPattern { pattern } => {
                Box::new(ExcludeByPattern::new(pattern).map_err(invalid_pattern(pattern))?)
            }
            PreProcessorSpec::DedupeByName => Box::new(DedupeByName),
            PreProcessorSpec::ServeOnlyLast => Box::new(ServeOnlyLast),
        };
        Ok(hook)
    }
}

impl PostProcessorSpec {
    pub fn build(&self) -> Result<Box<dyn PostProcessor>, ConfigError> {
        match self {
            PostProcessorSpec::SourceUrl => {
                Ok(Box::new(SourceUrlAnnotator) as Box<dyn PostProcessor>)
            }
            PostProcessorSpec::Banner { text } => ContentBanner::new(text.clone())
                .map(|hook| Box::new(hook) as Box<dyn PostProcessor>)
                .map_err(|source| ConfigError::InvalidBanner {
                    text: text.clone(),
                    source,
                }),
        }
    }
}

impl LoadConfig {
    pub fn trace_loaded(&self) {
        info!(
            base_dir = %self.base_dir.display(),
            files = self.files.len(),
            pre_processors = self.pre_processors.len(),
            post_processors = self.post_processors.len(),
            "Loaded LoadConfig"
        );
        debug!(?self, "LoadConfig loaded (full debug)");
    }

    /// Build a filesystem-backed [`Loader`] with hooks in declared order.
    pub fn build_loader(&self) -> Result<Loader, ConfigError> {
        let builder = Loader::boxed_builder(
            Box::new(FsReader::new(&self.base_dir)),
            self.filter.build()?,
        );
        let builder = self
            .pre_processors
            .iter()
            .try_fold(builder, |builder, spec| {
                Ok::<_, ConfigError>(builder.boxed_pre_processor(spec.build()?))
            })?;
        let builder = self
            .post_processors
            .iter()
            .try_fold(builder, |builder, spec| {
                Ok::<_, ConfigError>(builder.boxed_post_processor(spec.build()?))
            })?;
        Ok(builder.build())
    }
}
