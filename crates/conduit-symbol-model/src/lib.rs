// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Symbol model for the Conduit code generator.
//!
//! This crate defines what the generator is allowed to know about the host
//! compilation: declaration metadata snapshots, the query trait through which
//! the host's symbol graph is reached, the diagnostics accumulator, and the
//! sink that receives generated files. It contains NO generation logic -
//! that responsibility belongs to the engine crate (conduit-codegen).

mod decl;
mod diag;
mod emit;
mod host;
mod platform;

// Declaration metadata
pub use decl::{
    AnnotatedSymbol, CreatorDecl, CtorDecl, DeclShape, ParamDecl, SourceHandle, TypeRef, TypeShape,
    Visibility,
};

// Host queries
pub use host::SymbolHost;

// Compilation targets
pub use platform::Platform;

// Diagnostics (severity re-exported so callers need no direct
// codespan-reporting dependency)
pub use codespan_reporting::diagnostic::Severity;
pub use diag::{Diagnostic, Diagnostics};

// Generated-file plumbing
pub use emit::{Dependencies, EmissionSink, FsSink, GeneratedFile, MemorySink};
