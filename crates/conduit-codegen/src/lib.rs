// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! The Conduit code generation engine.
//!
//! Drives one generator pass over a host compilation: annotated symbols are
//! classified, their parameters resolved, a factory synthesized per symbol,
//! and a single aggregate component emitted at the end. The host supplies
//! symbol access through [`conduit_symbol_model::SymbolHost`] and receives
//! generated files through [`conduit_symbol_model::EmissionSink`]; everything
//! in between lives here.

mod aggregate;
mod classify;
mod convert;
mod driver;
pub mod markers;
mod modes;
mod options;
mod resolve;
mod synthesize;

// Pass entry points
pub use driver::{check_errors, run_codegen_pass, run_with_options};

// Configuration
pub use modes::CodegenMode;
pub use options::{Options, MODE_OPTION, PACKAGE_OPTION, PARENT_COMPONENT_OPTION};

// Pipeline stages, exposed for host adapters and targeted tests
pub use classify::{classify, Classified, ClassifiedShape, FactoryKind, InstantiationPlan};
pub use markers::MarkerTypes;
pub use resolve::{resolve, AssistedParameter, AssistedRole};
pub use synthesize::{build_factory, synthesize, FactoryDescriptor};

// Aggregation
pub use aggregate::{build_component, BindingRecord, COMPONENT_NAME};
