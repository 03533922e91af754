// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Query surface of the host compiler.

use crate::decl::{AnnotatedSymbol, TypeRef};

/// Host compiler queries the generator depends on.
///
/// The generator performs no symbol-graph traversal of its own; everything it
/// knows about declarations arrives through this trait. Implementations must
/// answer consistently within a single pass.
pub trait SymbolHost {
    /// All declarations carrying the `marker` annotation, in discovery order.
    fn list_annotated(&self, marker: &TypeRef) -> Vec<AnnotatedSymbol>;

    /// Full supertype closure of `class`, excluding `class` itself.
    fn supertypes_of(&self, class: &TypeRef) -> Vec<TypeRef>;

    /// Whether `candidate` is assignable to `target`, by identity or
    /// subtyping.
    fn is_assignable(&self, target: &TypeRef, candidate: &TypeRef) -> bool;

    /// Whether `class` is a singleton object declaration.
    fn is_object(&self, class: &TypeRef) -> bool;

    /// Whether `class` resolves on the compilation classpath.
    fn has_type(&self, class: &TypeRef) -> bool;
}
