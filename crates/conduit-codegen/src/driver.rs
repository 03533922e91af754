// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pass driver.
//!
//! One invocation per compilation: gate on configuration, discover annotated
//! symbols, process each in discovery order, then emit the aggregate
//! component. Per-symbol problems are recorded and skip only that symbol;
//! configuration problems abort before any file is written; emission failures
//! propagate as hard errors.

use std::collections::BTreeMap;

use anyhow::bail;
use codespan_reporting::term::termcolor::WriteColor;
use itertools::Itertools;
use log::{debug, info};

use conduit_kotlin_gen::{render_file, ClassName, KotlinFile};
use conduit_symbol_model::{
    AnnotatedSymbol, Dependencies, Diagnostics, EmissionSink, GeneratedFile, Platform,
    SourceHandle, SymbolHost,
};

use crate::aggregate::{build_component, BindingRecord, COMPONENT_NAME};
use crate::classify::classify;
use crate::markers::{self, MarkerTypes};
use crate::modes::CodegenMode;
use crate::options::{Options, PACKAGE_OPTION};
use crate::resolve::resolve;
use crate::synthesize::{build_factory, synthesize, FactoryDescriptor};

/// Run one generator pass from raw host options.
///
/// Unparseable options are recorded as a configuration error and the pass
/// produces nothing; `Err` is reserved for emission failures.
pub fn run_codegen_pass<H: SymbolHost, S: EmissionSink>(
    host: &H,
    sink: &mut S,
    raw_options: &BTreeMap<String, String>,
    platforms: &[Platform],
    diags: &mut Diagnostics,
) -> anyhow::Result<()> {
    let options = match Options::from_map(raw_options) {
        Ok(options) => options,
        Err(err) => {
            diags.error(err.to_string());
            return Ok(());
        }
    };
    run_with_options(host, sink, &options, platforms, diags)
}

/// Run one generator pass with parsed options.
pub fn run_with_options<H: SymbolHost, S: EmissionSink>(
    host: &H,
    sink: &mut S,
    options: &Options,
    platforms: &[Platform],
    diags: &mut Diagnostics,
) -> anyhow::Result<()> {
    if !options.mode.supports_platforms(platforms) {
        diags.error(format!(
            "codegen mode {} does not support the target platforms [{}]",
            options.mode,
            platforms.iter().join(", ")
        ));
        return Ok(());
    }
    let Some(marker_types) = MarkerTypes::resolve(host) else {
        debug!("conduit runtime not on the compilation classpath; nothing to do");
        return Ok(());
    };
    let annotated = host.list_annotated(&markers::CONDUIT_INJECT);
    if annotated.is_empty() {
        return Ok(());
    }
    info!("processing {} annotated declarations", annotated.len());

    let component_package = match &options.component_package {
        Some(package) => package.clone(),
        None => {
            diags.error(format!(
                "{} must be set for the aggregate component",
                PACKAGE_OPTION
            ));
            String::new()
        }
    };
    let parents = parse_parents(&options.parent_components, diags);

    let mut bindings = vec![];
    for symbol in &annotated {
        if let Some(descriptor) =
            process_symbol(symbol, host, options.mode, &marker_types, diags)
        {
            emit_factory(&descriptor, options.mode, sink)?;
            bindings.push(BindingRecord::of(&descriptor));
        }
    }
    emit_component(&bindings, &component_package, &parents, sink)
}

/// One symbol through the classify / resolve / synthesize pipeline. `None`
/// means the symbol was skipped; the reason is already in `diags`.
fn process_symbol<H: SymbolHost>(
    symbol: &AnnotatedSymbol,
    host: &H,
    mode: CodegenMode,
    marker_types: &MarkerTypes,
    diags: &mut Diagnostics,
) -> Option<FactoryDescriptor> {
    debug!("processing {}", symbol.qualified_name());
    let classified = classify(symbol, host, mode, diags)?;
    let assisted = resolve(
        classified.assisted_source_params(),
        symbol,
        classified.kind,
        mode,
        marker_types,
        host,
        diags,
    )?;
    synthesize(symbol, &classified, &assisted, marker_types, host, diags)
}

fn emit_factory<S: EmissionSink>(
    descriptor: &FactoryDescriptor,
    mode: CodegenMode,
    sink: &mut S,
) -> anyhow::Result<()> {
    let sources: Vec<SourceHandle> = descriptor.source.iter().cloned().collect();
    let mut file = KotlinFile::new(descriptor.package.as_str(), descriptor.name.as_str());
    file.types.push(build_factory(descriptor, mode));
    sink.emit(GeneratedFile {
        package: descriptor.package.clone(),
        name: descriptor.name.clone(),
        contents: render_file(&file),
        dependencies: Dependencies::isolated(sources.clone()),
    })?;

    if let Some(companion) = mode.companion(
        &descriptor.factory_class(),
        descriptor.kind,
        &descriptor.scope,
        descriptor.top_level.as_ref(),
    ) {
        let name = companion.name.clone();
        let mut companion_file =
            KotlinFile::new(descriptor.package.as_str(), name.as_str());
        companion_file.types.push(companion);
        sink.emit(GeneratedFile {
            package: descriptor.package.clone(),
            name,
            contents: render_file(&companion_file),
            dependencies: Dependencies::isolated(sources),
        })?;
    }
    Ok(())
}

/// The component aggregates over the whole pass: it depends on every
/// contributing source and must be regenerated when the input set changes.
fn emit_component<S: EmissionSink>(
    bindings: &[BindingRecord],
    package: &str,
    parents: &[ClassName],
    sink: &mut S,
) -> anyhow::Result<()> {
    let file = build_component(bindings, package, parents);
    let sources: Vec<SourceHandle> = bindings
        .iter()
        .flat_map(|binding| binding.sources.iter().cloned())
        .unique()
        .collect();
    sink.emit(GeneratedFile {
        package: package.to_string(),
        name: COMPONENT_NAME.to_string(),
        contents: render_file(&file),
        dependencies: Dependencies::aggregating(sources),
    })
}

fn parse_parents(references: &[String], diags: &mut Diagnostics) -> Vec<ClassName> {
    let mut parents = vec![];
    for reference in references {
        match ClassName::best_guess(reference) {
            Ok(parent) => parents.push(parent),
            Err(err) => diags.error(format!("bad parent component reference: {}", err)),
        }
    }
    parents
}

/// Render accumulated diagnostics through `writer` and fail the pass when any
/// error was recorded.
pub fn check_errors<W: WriteColor>(
    diags: &Diagnostics,
    writer: &mut W,
    msg: &str,
) -> anyhow::Result<()> {
    if diags.has_errors() {
        diags.report(writer)?;
        bail!("{}", msg);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codespan_reporting::term::termcolor::Buffer;

    #[test]
    fn check_errors_passes_a_clean_run() {
        let mut diags = Diagnostics::new();
        diags.warning("cosmetic only");
        let mut buffer = Buffer::no_color();
        assert!(check_errors(&diags, &mut buffer, "codegen failed").is_ok());
    }

    #[test]
    fn check_errors_reports_and_fails() {
        let mut diags = Diagnostics::new();
        diags.error("screen type mismatch");
        let mut buffer = Buffer::no_color();
        let err = check_errors(&diags, &mut buffer, "codegen failed").unwrap_err();
        assert_eq!(err.to_string(), "codegen failed");
        let rendered = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(rendered.contains("screen type mismatch"));
    }

    #[test]
    fn bad_parent_references_become_diagnostics() {
        let mut diags = Diagnostics::new();
        let parents = parse_parents(
            &[
                "com.example.parent.ParentComponent".to_string(),
                "com.example.lowercase".to_string(),
            ],
            &mut diags,
        );
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].simple_name(), "ParentComponent");
        assert_eq!(diags.len(), 1);
        assert!(diags.has_errors());
    }
}
