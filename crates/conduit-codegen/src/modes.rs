// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! DI dialect strategies.
//!
//! A closed set: each mode knows which platforms it supports, which inject
//! annotation its factories carry, how a factory is decorated, and whether a
//! companion declaration accompanies it.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use conduit_kotlin_gen::escape;
use conduit_kotlin_gen::{
    AnnotationUse, ClassName, CodeBlock, Function, KotlinType, Member, Modifier, Param, TypeDecl,
};
use conduit_symbol_model::{Platform, TypeRef};

use crate::classify::FactoryKind;
use crate::convert;
use crate::markers;

/// The dependency-injection dialect generated code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodegenMode {
    /// Anvil multibinding contribution; JVM only.
    #[default]
    Anvil,
    /// Hilt companion modules; JVM only.
    Hilt,
    /// kotlin-inject components; all platforms.
    KotlinInject,
}

impl CodegenMode {
    /// Whether every target platform of the compilation is supported.
    pub fn supports_platforms(&self, platforms: &[Platform]) -> bool {
        match self {
            CodegenMode::Anvil | CodegenMode::Hilt => platforms.iter().all(Platform::is_jvm),
            CodegenMode::KotlinInject => true,
        }
    }

    /// Constructor marker carried by generated factories.
    pub fn inject_annotation(&self) -> ClassName {
        match self {
            CodegenMode::Anvil | CodegenMode::Hilt => markers::JAVAX_INJECT.clone(),
            CodegenMode::KotlinInject => markers::KI_INJECT.clone(),
        }
    }

    /// Host-side identity of the inject marker, for constructor probing.
    pub fn inject_marker(&self) -> TypeRef {
        convert::type_ref(&self.inject_annotation())
    }

    /// Whether unmatched constructor parameters are threaded through the
    /// factory's own constructor.
    pub fn threads_constructor_params(&self) -> bool {
        matches!(self, CodegenMode::KotlinInject)
    }

    /// Mode-specific decoration of a synthesized factory.
    pub fn decorate_factory(&self, factory: &mut TypeDecl, scope: &TypeRef) {
        if let CodegenMode::Anvil = self {
            factory.annotations.push(
                AnnotationUse::marker(markers::CONTRIBUTES_MULTIBINDING.clone())
                    .arg(CodeBlock::class_literal(convert::class_name(scope))),
            );
        }
    }

    /// Mode-specific companion declaration emitted next to a factory.
    pub fn companion(
        &self,
        factory: &ClassName,
        kind: FactoryKind,
        scope: &TypeRef,
        top_level: Option<&TypeRef>,
    ) -> Option<TypeDecl> {
        match self {
            CodegenMode::Hilt => Some(hilt_module(factory, kind, scope, top_level)),
            CodegenMode::Anvil | CodegenMode::KotlinInject => None,
        }
    }
}

impl fmt::Display for CodegenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodegenMode::Anvil => "anvil",
            CodegenMode::Hilt => "hilt",
            CodegenMode::KotlinInject => "kotlin_inject",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CodegenMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "anvil" => Ok(CodegenMode::Anvil),
            "hilt" => Ok(CodegenMode::Hilt),
            "kotlin_inject" => Ok(CodegenMode::KotlinInject),
            _ => bail!(
                "unrecognized codegen mode \"{}\" (expected anvil, hilt or kotlin_inject)",
                value
            ),
        }
    }
}

/// `@Module @InstallIn(<scope>) abstract class <Factory>Module` with one
/// `@Binds @IntoSet` method registering the factory.
fn hilt_module(
    factory: &ClassName,
    kind: FactoryKind,
    scope: &TypeRef,
    top_level: Option<&TypeRef>,
) -> TypeDecl {
    let mut module = TypeDecl::new(format!(
        "{}{}",
        factory.simple_name(),
        markers::MODULE_SUFFIX
    ));
    module
        .annotations
        .push(AnnotationUse::marker(markers::DAGGER_MODULE.clone()));
    module.annotations.push(
        AnnotationUse::marker(markers::HILT_INSTALL_IN.clone())
            .arg(CodeBlock::class_literal(convert::class_name(scope))),
    );
    if let Some(top_level) = top_level {
        module.annotations.push(
            AnnotationUse::marker(markers::ORIGINATING_ELEMENT.clone()).arg(
                CodeBlock::new()
                    .lit("topLevelClass = ")
                    .class(convert::class_name(top_level))
                    .lit("::class"),
            ),
        );
    }
    module.modifiers.push(Modifier::Abstract);

    let mut bind = Function::new(format!("bind{}", factory.simple_name()));
    bind.modifiers.push(Modifier::Abstract);
    bind.annotations
        .push(AnnotationUse::marker(markers::DAGGER_BINDS.clone()));
    bind.annotations
        .push(AnnotationUse::marker(markers::DAGGER_INTO_SET.clone()));
    bind.params.push(Param::plain(
        escape::decapitalize_first(factory.simple_name()),
        KotlinType::class(factory.clone()),
    ));
    bind.returns = Some(KotlinType::class(kind.factory_interface()));
    module.members.push(Member::Function(bind));
    module
}
