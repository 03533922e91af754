// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kotlin declaration IR and renderer.
//!
//! This crate describes Kotlin program fragments as plain data - files,
//! classes, constructors, properties, functions, annotations and code blocks -
//! and renders them to Kotlin source text with resolved imports. It knows
//! nothing about why a declaration exists; that responsibility belongs to the
//! engine crate (conduit-codegen).

mod decl;
pub mod escape;
mod imports;
mod name;
mod render;
mod types;
mod writer;

// Names
pub use name::{ClassName, MemberName};

// Types
pub use types::KotlinType;

// Declarations
pub use decl::{
    AnnotationUse, CodeBlock, Constructor, Function, Getter, KotlinFile, Member, Modifier, Param,
    ParamProperty, Property, Stmt, TypeDecl,
};

// Rendering
pub use imports::ImportSet;
pub use render::render_file;
pub use writer::{render_to_string, KotlinWriter};
