// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Where generated files go.

use anyhow::bail;
use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;

use crate::decl::SourceHandle;

/// Incremental-rebuild inputs of one generated file.
#[derive(Debug, Clone, Default)]
pub struct Dependencies {
    /// True when the file depends on the whole pass rather than just
    /// `sources`: inputs discovered in a later build must regenerate it.
    pub aggregating: bool,
    pub sources: Vec<SourceHandle>,
}

impl Dependencies {
    /// A file derived from exactly the given sources.
    pub fn isolated(sources: Vec<SourceHandle>) -> Self {
        Self {
            aggregating: false,
            sources,
        }
    }

    /// A file that must be regenerated whenever the set of inputs changes.
    pub fn aggregating(sources: Vec<SourceHandle>) -> Self {
        Self {
            aggregating: true,
            sources,
        }
    }
}

/// One synthesized source file, fully rendered.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Package the file lives under.
    pub package: String,
    /// File name without the `.kt` extension.
    pub name: String,
    pub contents: String,
    pub dependencies: Dependencies,
}

impl GeneratedFile {
    /// Relative path of the file under an output root, one directory per
    /// package segment.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.kt", self.name));
        path
    }

    fn key(&self) -> String {
        format!("{}:{}", self.package, self.name)
    }
}

/// Receiver for generated files. The host build supplies the real one; tests
/// use [`MemorySink`].
pub trait EmissionSink {
    /// Accept one finished file. Fails when the file cannot be created,
    /// including when a file of the same name was already emitted this pass.
    fn emit(&mut self, file: GeneratedFile) -> anyhow::Result<()>;
}

/// In-memory sink, insertion-ordered.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: IndexMap<String, GeneratedFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.values()
    }

    pub fn get(&self, package: &str, name: &str) -> Option<&GeneratedFile> {
        self.files.get(&format!("{}:{}", package, name))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl EmissionSink for MemorySink {
    fn emit(&mut self, file: GeneratedFile) -> anyhow::Result<()> {
        let key = file.key();
        if self.files.contains_key(&key) {
            bail!("file already exists: {}", file.relative_path().display());
        }
        self.files.insert(key, file);
        Ok(())
    }
}

/// Sink writing files under a root directory, mirroring package structure.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl EmissionSink for FsSink {
    fn emit(&mut self, file: GeneratedFile) -> anyhow::Result<()> {
        let path = self.root.join(file.relative_path());
        if path.exists() {
            bail!("file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.contents)?;
        Ok(())
    }
}
