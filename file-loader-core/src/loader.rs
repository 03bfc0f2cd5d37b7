//! Pipeline orchestration: pre-process → resolve → post-process.
//!
//! [`Loader::load_files`] is the only entrypoint. It is synchronous and
//! fail-fast: the first collaborator error aborts the call and no partially
//! loaded list is returned.
//!
//! Hook chains are ordered by registration. Each chain is applied as a fold:
//! every hook consumes the previous hook's output.

use tracing::{debug, info, trace};

use crate::contract::{ContentFilter, LoadError, PostProcessor, PreProcessor, Reader};
use crate::record::{FileRecord, UNRESOLVED_TIMESTAMP};

pub struct Loader {
    reader: Box<dyn Reader>,
    filter: Box<dyn ContentFilter>,
    pre_processors: Vec<Box<dyn PreProcessor>>,
    post_processors: Vec<Box<dyn PostProcessor>>,
}

/// Registers collaborators for a [`Loader`]. Hooks run in the order they are added.
pub struct LoaderBuilder {
    reader: Box<dyn Reader>,
    filter: Box<dyn ContentFilter>,
    pre_processors: Vec<Box<dyn PreProcessor>>,
    post_processors: Vec<Box<dyn PostProcessor>>,
}

impl LoaderBuilder {
    pub fn pre_processor(mut self, hook: impl PreProcessor + 'static) -> Self {
        self.pre_processors.push(Box::new(hook));
        self
    }

    pub fn post_processor(mut self, hook: impl PostProcessor + 'static) -> Self {
        self.post_processors.push(Box::new(hook));
        self
    }

    /// Same as [`pre_processor`](Self::pre_processor) for hooks built at runtime.
    pub fn boxed_pre_processor(mut self, hook: Box<dyn PreProcessor>) -> Self {
        self.pre_processors.push(hook);
        self
    }

    pub fn boxed_post_processor(mut self, hook: Box<dyn PostProcessor>) -> Self {
        self.post_processors.push(hook);
        self
    }

    pub fn build(self) -> Loader {
        Loader {
            reader: self.reader,
            filter: self.filter,
            pre_processors: self.pre_processors,
            post_processors: self.post_processors,
        }
    }
}

impl Loader {
    pub fn builder(
        reader: impl Reader + 'static,
        filter: impl ContentFilter + 'static,
    ) -> LoaderBuilder {
        Self::boxed_builder(Box::new(reader), Box::new(filter))
    }

    pub fn boxed_builder(
        reader: Box<dyn Reader>,
        filter: Box<dyn ContentFilter>,
    ) -> LoaderBuilder {
        LoaderBuilder {
            reader,
            filter,
            pre_processors: Vec::new(),
            post_processors: Vec::new(),
        }
    }

    pub fn pre_processor_count(&self) -> usize {
        self.pre_processors.len()
    }

    pub fn post_processor_count(&self) -> usize {
        self.post_processors.len()
    }

    /// Resolve `records` into an ordered list of loaded files.
    ///
    /// `should_reset` selects a full load; the filter is invoked with
    /// `invert = !should_reset`.
    pub fn load_files<I>(
        &self,
        records: I,
        should_reset: bool,
    ) -> Result<Vec<FileRecord>, LoadError>
    where
        I: IntoIterator<Item = FileRecord>,
    {
        let candidates: Vec<FileRecord> = records.into_iter().collect();
        debug!(
            candidates = candidates.len(),
            should_reset, "Starting file load"
        );

        let files = self.pre_process(candidates)?;
        debug!(files = files.len(), "Pre-processing complete");

        let loaded = files
            .into_iter()
            .map(|file| {
                let resolved = self.resolve(file, should_reset)?;
                self.post_process(resolved)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(loaded = loaded.len(), should_reset, "File load complete");
        Ok(loaded)
    }

    fn pre_process(&self, files: Vec<FileRecord>) -> Result<Vec<FileRecord>, LoadError> {
        self.pre_processors
            .iter()
            .try_fold(files, |files, hook| hook.process(files))
            .map_err(LoadError::PreProcess)
    }

    fn resolve(&self, file: FileRecord, should_reset: bool) -> Result<FileRecord, LoadError> {
        let (timestamp, content) = if file.is_remote {
            trace!(name = %file.name, "Skipping content resolution for remote file");
            (UNRESOLVED_TIMESTAMP, String::new())
        } else {
            (file.timestamp, self.read_local(&file, should_reset)?)
        };

        Ok(FileRecord {
            name: file.name,
            timestamp,
            is_remote: false,
            is_serve_only: file.is_serve_only,
            content,
            patches: Vec::new(),
        })
    }

    fn read_local(&self, file: &FileRecord, should_reset: bool) -> Result<String, LoadError> {
        let read = |name: &str| {
            self.reader
                .read_file(name)
                .map_err(|source| LoadError::Read {
                    name: file.name.clone(),
                    source,
                })
        };

        let raw = read(file.name.as_str())?;
        let filtered = self
            .filter
            .filter_content(raw, !should_reset)
            .map_err(|source| LoadError::Filter {
                name: file.name.clone(),
                source,
            })?;

        // Patches are appended raw; only the main content is filtered.
        let content = file.patches.iter().try_fold(filtered, |mut content, patch| {
            content.push_str(&read(patch.name.as_str())?);
            Ok::<_, LoadError>(content)
        })?;

        trace!(
            name = %file.name,
            patches = file.patches.len(),
            bytes = content.len(),
            "Resolved local file"
        );
        Ok(content)
    }

    fn post_process(&self, file: FileRecord) -> Result<FileRecord, LoadError> {
        let name = file.name.clone();
        self.post_processors
            .iter()
            .try_fold(file, |file, hook| hook.process(file))
            .map_err(|source| LoadError::PostProcess { name, source })
    }
}
