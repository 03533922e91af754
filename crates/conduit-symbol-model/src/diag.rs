// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pass-scoped diagnostics.
//!
//! Symbol-level problems are recorded here instead of aborting the pass. The
//! driver renders everything through a [`WriteColor`] writer at the end and
//! decides from [`Diagnostics::has_errors`] whether the pass failed.

use codespan_reporting::diagnostic::Severity;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::{self, termcolor::WriteColor, Config};

use crate::decl::{AnnotatedSymbol, SourceHandle};

/// One recorded problem.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Qualified name of the offending declaration, when symbol-scoped.
    pub symbol: Option<String>,
    pub source: Option<SourceHandle>,
}

/// Accumulator for one generator pass. Owned by the driver and threaded
/// through the processing steps; never global.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pass-level error (configuration, environment).
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into(), None, None);
    }

    /// Record an error against one annotated declaration.
    pub fn error_at(&mut self, message: impl Into<String>, symbol: &AnnotatedSymbol) {
        self.push(
            Severity::Error,
            message.into(),
            Some(symbol.qualified_name()),
            symbol.source.clone(),
        );
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message.into(), None, None);
    }

    fn push(
        &mut self,
        severity: Severity,
        message: String,
        symbol: Option<String>,
        source: Option<SourceHandle>,
    ) {
        self.entries.push(Diagnostic {
            severity,
            message,
            symbol,
            source,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity >= Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Render every entry through `writer`.
    pub fn report<W: WriteColor>(&self, writer: &mut W) -> anyhow::Result<()> {
        let files: SimpleFiles<String, String> = SimpleFiles::new();
        let config = Config::default();
        for entry in &self.entries {
            let mut notes = vec![];
            if let Some(symbol) = &entry.symbol {
                notes.push(format!("symbol: {}", symbol));
            }
            if let Some(source) = &entry.source {
                notes.push(format!("source: {}", source));
            }
            let diag = codespan_reporting::diagnostic::Diagnostic::new(entry.severity)
                .with_message(&entry.message)
                .with_notes(notes);
            term::emit(writer, &config, &files, &diag)?;
        }
        Ok(())
    }
}
