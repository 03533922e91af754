// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Factory synthesis.
//!
//! A classified symbol and its resolved parameters become a
//! [`FactoryDescriptor`]: the generated class's identity, its
//! constructor-injected dependencies and the invocation expression placed in
//! the matching when-branch. [`build_factory`] then turns the descriptor into
//! the Kotlin declaration.

use itertools::Itertools;

use conduit_kotlin_gen::escape;
use conduit_kotlin_gen::{
    AnnotationUse, ClassName, CodeBlock, Constructor, Function, KotlinType, Member, MemberName,
    Modifier, Param, Stmt, TypeDecl,
};
use conduit_symbol_model::{
    AnnotatedSymbol, Diagnostics, ParamDecl, SourceHandle, SymbolHost, TypeRef,
};

use crate::classify::{Classified, ClassifiedShape, FactoryKind, InstantiationPlan};
use crate::convert;
use crate::markers::{self, MarkerTypes};
use crate::modes::CodegenMode;
use crate::resolve::{AssistedParameter, AssistedRole};

/// Everything the renderer and the aggregator need to know about one
/// generated factory.
#[derive(Debug, Clone)]
pub struct FactoryDescriptor {
    /// Simple name of the generated class, `Factory` suffix included.
    pub name: String,
    /// Package the factory is generated into.
    pub package: String,
    pub kind: FactoryKind,
    /// Constructor-injected properties, in declaration order.
    pub ctor_params: Vec<(String, KotlinType)>,
    /// Expression placed in the matching when-branch.
    pub invocation: CodeBlock,
    pub screen: TypeRef,
    /// Object screens are matched by identity, class screens by `is`.
    pub screen_is_object: bool,
    pub scope: TypeRef,
    pub top_level: Option<TypeRef>,
    pub source: Option<SourceHandle>,
}

impl FactoryDescriptor {
    pub fn factory_class(&self) -> ClassName {
        ClassName::new(self.package.as_str(), self.name.as_str())
    }
}

/// Build the descriptor for one classified symbol, or report why the symbol
/// cannot be turned into a factory.
pub fn synthesize<H: SymbolHost>(
    symbol: &AnnotatedSymbol,
    classified: &Classified<'_>,
    assisted: &[AssistedParameter],
    markers: &MarkerTypes,
    host: &H,
    diags: &mut Diagnostics,
) -> Option<FactoryDescriptor> {
    // Injected-role parameters only exist under constructor-threading modes;
    // they always become factory constructor properties.
    let mut ctor_params: Vec<(String, KotlinType)> = assisted
        .iter()
        .filter(|p| p.role == AssistedRole::Injected)
        .map(|p| (p.name.clone(), convert::kotlin_type(&p.ty)))
        .collect();
    let (package, target_name, invocation) = match &classified.shape {
        ClassifiedShape::Function { params } => {
            let function = MemberName::new(symbol.package.clone(), symbol.name.clone());
            let invocation = match classified.kind {
                FactoryKind::Ui => function_ui_invocation(
                    symbol, params, assisted, &function, markers, host, diags,
                )?,
                FactoryKind::Presenter => presenter_invocation(&function, assisted),
            };
            (symbol.package.clone(), symbol.name.clone(), invocation)
        }
        ClassifiedShape::Type { target, plan } => {
            let invocation = match plan {
                InstantiationPlan::Constructor { .. } => CodeBlock::new()
                    .class(convert::class_name(target))
                    .lit(format!("({})", named_arguments(assisted))),
                InstantiationPlan::Provider => {
                    ctor_params.push((
                        "provider".to_string(),
                        KotlinType::parameterized(
                            markers::JAVAX_PROVIDER.clone(),
                            vec![KotlinType::class(convert::class_name(target))],
                        ),
                    ));
                    CodeBlock::text("provider.get()")
                }
                InstantiationPlan::AssistedFactory { creator } => {
                    ctor_params.push((
                        "factory".to_string(),
                        KotlinType::class(convert::class_name(&symbol.self_type())),
                    ));
                    CodeBlock::text(format!(
                        "factory.{}({})",
                        escape::escape_identifier(&creator.name),
                        named_arguments(assisted)
                    ))
                }
            };
            (
                target.package.clone(),
                target.simple_name().to_string(),
                invocation,
            )
        }
    };
    Some(FactoryDescriptor {
        name: format!(
            "{}{}",
            escape::capitalize_first(&target_name),
            markers::FACTORY_SUFFIX
        ),
        package,
        kind: classified.kind,
        ctor_params,
        invocation,
        screen: symbol.screen.clone(),
        screen_is_object: host.is_object(&symbol.screen),
        scope: symbol.scope.clone(),
        top_level: symbol.top_level.clone(),
        source: symbol.source.clone(),
    })
}

/// `ui<State> { state, modifier -> Fn(state = state, modifier = modifier,
/// <assisted>) }`, or the stateless `{ _, modifier -> ... }` form when the
/// function manages its own state.
fn function_ui_invocation<H: SymbolHost>(
    symbol: &AnnotatedSymbol,
    params: &[ParamDecl],
    assisted: &[AssistedParameter],
    function: &MemberName,
    markers: &MarkerTypes,
    host: &H,
    diags: &mut Diagnostics,
) -> Option<CodeBlock> {
    let modifiers: Vec<&ParamDecl> = params
        .iter()
        .filter(|p| host.is_assignable(&markers.modifier, &p.ty))
        .collect();
    let modifier = match modifiers.as_slice() {
        [single] => *single,
        _ => {
            diags.error_at(
                "composable Ui functions must take exactly one Modifier parameter",
                symbol,
            );
            return None;
        }
    };
    let states: Vec<&ParamDecl> = params
        .iter()
        .filter(|p| host.is_assignable(&markers.ui_state, &p.ty))
        .collect();
    let state = match states.as_slice() {
        [single] => Some(*single),
        _ => None,
    };
    let mut args = vec![];
    if let Some(state) = state {
        args.push(format!("{} = state", escape::escape_identifier(&state.name)));
    }
    args.push(format!(
        "{} = modifier",
        escape::escape_identifier(&modifier.name)
    ));
    args.extend(assisted.iter().map(named_argument));
    let state_ty = match state {
        Some(state) => convert::kotlin_type(&state.ty),
        None => KotlinType::class(markers::UI_STATE.clone()),
    };
    let lambda = if state.is_some() {
        "state, modifier"
    } else {
        "_, modifier"
    };
    Some(
        CodeBlock::new()
            .member(markers::UI_BUILDER.clone())
            .lit("<")
            .ty(state_ty)
            .lit(format!("> {{ {} -> ", lambda))
            .member(function.clone())
            .lit(format!("({}) }}", args.join(", "))),
    )
}

/// `presenterOf { Fn(<assisted>) }`
fn presenter_invocation(function: &MemberName, assisted: &[AssistedParameter]) -> CodeBlock {
    CodeBlock::new()
        .member(markers::PRESENTER_OF.clone())
        .lit(" { ")
        .member(function.clone())
        .lit(format!("({}) }}", named_arguments(assisted)))
}

fn named_argument(param: &AssistedParameter) -> String {
    let call_site = match param.role {
        AssistedRole::Injected => escape::escape_identifier(&param.name),
        _ => param.call_site().to_string(),
    };
    format!(
        "{} = {}",
        escape::escape_identifier(&param.name),
        call_site
    )
}

fn named_arguments(assisted: &[AssistedParameter]) -> String {
    assisted.iter().map(named_argument).join(", ")
}

/// Render the descriptor as the factory class declaration.
pub fn build_factory(descriptor: &FactoryDescriptor, mode: CodegenMode) -> TypeDecl {
    let mut factory = TypeDecl::new(descriptor.name.as_str());
    let mut ctor = Constructor::default();
    ctor.annotations
        .push(AnnotationUse::marker(mode.inject_annotation()));
    for (name, ty) in &descriptor.ctor_params {
        ctor.params
            .push(Param::private_val(name.as_str(), ty.clone()));
    }
    factory.constructor = Some(ctor);
    factory
        .superinterfaces
        .push(KotlinType::class(descriptor.kind.factory_interface()));
    factory
        .members
        .push(Member::Function(create_function(descriptor)));
    mode.decorate_factory(&mut factory, &descriptor.scope);
    factory
}

/// The factory's single `create` override: match the screen, produce the
/// wrapped instance or null.
fn create_function(descriptor: &FactoryDescriptor) -> Function {
    let mut create = Function::new("create");
    create.modifiers.push(Modifier::Override);
    create.params.push(Param::plain(
        "screen",
        KotlinType::class(markers::SCREEN.clone()),
    ));
    if descriptor.kind == FactoryKind::Presenter {
        create.params.push(Param::plain(
            "navigator",
            KotlinType::class(markers::NAVIGATOR.clone()),
        ));
    }
    create.params.push(Param::plain(
        "context",
        KotlinType::class(markers::CONTEXT.clone()),
    ));
    let produced = match descriptor.kind {
        FactoryKind::Ui => markers::UI.clone(),
        FactoryKind::Presenter => markers::PRESENTER.clone(),
    };
    create.returns =
        Some(KotlinType::parameterized(produced, vec![KotlinType::Star]).nullable());

    let mut branch = CodeBlock::new();
    if !descriptor.screen_is_object {
        branch = branch.lit("is ");
    }
    branch = branch
        .class(convert::class_name(&descriptor.screen))
        .lit(" -> ")
        .append(descriptor.invocation.clone());
    create.body = Some(vec![
        Stmt::line(CodeBlock::text("return when (screen) {")),
        Stmt::new(1, branch),
        Stmt::new(1, CodeBlock::text("else -> null")),
        Stmt::line(CodeBlock::text("}")),
    ]);
    create
}
