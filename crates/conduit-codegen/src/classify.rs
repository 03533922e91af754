// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Classification of annotated symbols.
//!
//! Every `@ConduitInject` symbol is sorted into a factory kind (Ui or
//! Presenter) and an instantiation plan before any code is synthesized.
//! Symbols that fit no plan produce diagnostics and drop out of the pass.

use conduit_kotlin_gen::ClassName;
use conduit_symbol_model::{
    AnnotatedSymbol, CreatorDecl, CtorDecl, DeclShape, Diagnostics, ParamDecl, SymbolHost, TypeRef,
    TypeShape,
};

use crate::convert;
use crate::markers;
use crate::modes::CodegenMode;

/// Which factory set the generated class joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryKind {
    Ui,
    Presenter,
}

impl FactoryKind {
    /// The factory interface the generated class implements.
    pub fn factory_interface(&self) -> ClassName {
        match self {
            FactoryKind::Ui => markers::UI_FACTORY.clone(),
            FactoryKind::Presenter => markers::PRESENTER_FACTORY.clone(),
        }
    }

    /// The runtime interface an injected class must implement for this kind.
    pub fn base_interface(&self) -> TypeRef {
        match self {
            FactoryKind::Ui => convert::type_ref(&markers::UI),
            FactoryKind::Presenter => convert::type_ref(&markers::PRESENTER),
        }
    }

    /// Presenter factories receive a navigator; Ui factories do not.
    pub fn allows_navigator(&self) -> bool {
        matches!(self, FactoryKind::Presenter)
    }
}

/// How the generated factory obtains an instance of the annotated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantiationPlan<'a> {
    /// Call the primary constructor directly.
    Constructor { ctor: Option<&'a CtorDecl> },
    /// The constructor carries the mode's inject marker; go through a
    /// `Provider` so the DI graph satisfies its parameters.
    Provider,
    /// The symbol is an assisted-factory interface; delegate to its
    /// creator method.
    AssistedFactory { creator: &'a CreatorDecl },
}

/// The shape half of a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedShape<'a> {
    /// A top-level composable or presenter function.
    Function { params: &'a [ParamDecl] },
    /// A class (or assisted-factory interface creating a class).
    Type {
        target: TypeRef,
        plan: InstantiationPlan<'a>,
    },
}

/// A symbol that survived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    pub kind: FactoryKind,
    pub shape: ClassifiedShape<'a>,
}

impl<'a> Classified<'a> {
    /// The declared parameters the assisted resolver walks. Provider-backed
    /// factories expose none: the DI graph owns the constructor.
    pub fn assisted_source_params(&self) -> &[ParamDecl] {
        match &self.shape {
            ClassifiedShape::Function { params } => params,
            ClassifiedShape::Type { plan, .. } => match plan {
                InstantiationPlan::Constructor { ctor } => {
                    ctor.map(|c| c.params.as_slice()).unwrap_or(&[])
                }
                InstantiationPlan::Provider => &[],
                InstantiationPlan::AssistedFactory { creator } => &creator.params,
            },
        }
    }
}

/// Classify one annotated symbol, or report why it cannot be processed.
pub fn classify<'a, H: SymbolHost>(
    symbol: &'a AnnotatedSymbol,
    host: &H,
    mode: CodegenMode,
    diags: &mut Diagnostics,
) -> Option<Classified<'a>> {
    if !symbol.visibility.is_visible() {
        diags.error_at(
            "@ConduitInject is not applicable to private or local declarations",
            symbol,
        );
        return None;
    }
    match &symbol.shape {
        DeclShape::Function { params } => {
            // Presenter functions are recognized by naming convention; every
            // other function is a composable Ui.
            let kind = if symbol.name.ends_with(markers::PRESENTER_SUFFIX) {
                FactoryKind::Presenter
            } else {
                FactoryKind::Ui
            };
            Some(Classified {
                kind,
                shape: ClassifiedShape::Function { params },
            })
        }
        DeclShape::Type(shape) => {
            let (target, plan) = instantiation_plan(symbol, shape, mode, diags)?;
            let kind = role_of(symbol, &target, host, diags)?;
            Some(Classified {
                kind,
                shape: ClassifiedShape::Type { target, plan },
            })
        }
    }
}

/// Decide how the target class is created, and which class that is.
fn instantiation_plan<'a>(
    symbol: &AnnotatedSymbol,
    shape: &'a TypeShape,
    mode: CodegenMode,
    diags: &mut Diagnostics,
) -> Option<(TypeRef, InstantiationPlan<'a>)> {
    if let Some(creator) = &shape.creator {
        if !creator.created_visibility.is_visible() {
            diags.error_at(
                format!(
                    "assisted factory {} creates an inaccessible type {}",
                    symbol.qualified_name(),
                    creator.created
                ),
                symbol,
            );
            return None;
        }
        return Some((
            creator.created.clone(),
            InstantiationPlan::AssistedFactory { creator },
        ));
    }
    let inject = mode.inject_marker();
    let injected_ctor = shape.constructor.as_ref().is_some_and(|ctor| {
        ctor.annotations
            .iter()
            .any(|annotation| annotation.is_same_class(&inject))
    });
    let plan = if injected_ctor {
        InstantiationPlan::Provider
    } else {
        InstantiationPlan::Constructor {
            ctor: shape.constructor.as_ref(),
        }
    };
    Some((symbol.self_type(), plan))
}

/// Read the factory role off the target's supertypes.
fn role_of<H: SymbolHost>(
    symbol: &AnnotatedSymbol,
    target: &TypeRef,
    host: &H,
    diags: &mut Diagnostics,
) -> Option<FactoryKind> {
    let ui = FactoryKind::Ui.base_interface();
    let presenter = FactoryKind::Presenter.base_interface();
    let mut is_ui = false;
    let mut is_presenter = false;
    for supertype in host.supertypes_of(target) {
        if supertype.is_same_class(&ui) {
            is_ui = true;
        }
        if supertype.is_same_class(&presenter) {
            is_presenter = true;
        }
    }
    match (is_ui, is_presenter) {
        (true, false) => Some(FactoryKind::Ui),
        (false, true) => Some(FactoryKind::Presenter),
        (true, true) => {
            diags.error_at(
                format!(
                    "{} implements both Ui and Presenter; the factory role is ambiguous",
                    target
                ),
                symbol,
            );
            None
        }
        (false, false) => {
            diags.error_at(
                format!("injected class {} must implement Ui or Presenter", target),
                symbol,
            );
            None
        }
    }
}
