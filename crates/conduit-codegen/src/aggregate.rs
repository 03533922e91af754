// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! The aggregate wiring component.
//!
//! Every factory generated during a pass contributes one [`BindingRecord`];
//! at the end of the pass the records become a single `ConduitComponent`
//! declaration that registers all factories and assembles the runtime
//! registry from the two multibound sets.

use conduit_kotlin_gen::escape;
use conduit_kotlin_gen::{
    AnnotationUse, ClassName, CodeBlock, Constructor, Function, Getter, KotlinFile, KotlinType,
    Member, Modifier, Param, Property, Stmt, TypeDecl,
};
use conduit_symbol_model::SourceHandle;

use crate::classify::FactoryKind;
use crate::markers;
use crate::synthesize::FactoryDescriptor;

/// Simple name of the generated wiring component.
pub const COMPONENT_NAME: &str = "ConduitComponent";

/// One factory's contribution to the aggregate component.
#[derive(Debug, Clone)]
pub struct BindingRecord {
    pub factory_name: String,
    pub package: String,
    pub kind: FactoryKind,
    /// Originating sources, for the component's dependency declaration.
    pub sources: Vec<SourceHandle>,
}

impl BindingRecord {
    pub fn of(descriptor: &FactoryDescriptor) -> Self {
        Self {
            factory_name: descriptor.name.clone(),
            package: descriptor.package.clone(),
            kind: descriptor.kind,
            sources: descriptor.source.iter().cloned().collect(),
        }
    }

    pub fn factory_class(&self) -> ClassName {
        ClassName::new(self.package.as_str(), self.factory_name.as_str())
    }
}

/// Build the `ConduitComponent` file from the pass's binding records.
pub fn build_component(
    records: &[BindingRecord],
    package: &str,
    parents: &[ClassName],
) -> KotlinFile {
    let mut component = TypeDecl::new(COMPONENT_NAME);
    component
        .annotations
        .push(AnnotationUse::marker(markers::KI_COMPONENT.clone()));
    component.modifiers.push(Modifier::Internal);
    component.modifiers.push(Modifier::Abstract);

    if !parents.is_empty() {
        let mut ctor = Constructor::default();
        for parent in parents {
            ctor.params.push(
                Param::val(
                    escape::decapitalize_first(parent.simple_name()),
                    KotlinType::class(parent.clone()),
                )
                .annotated(AnnotationUse::marker(markers::KI_COMPONENT.clone())),
            );
        }
        component.constructor = Some(ctor);
    }

    let mut conduit = Property::new("conduit", KotlinType::class(markers::CONDUIT.clone()));
    conduit.modifiers.push(Modifier::Abstract);
    component.members.push(Member::Property(conduit));
    component
        .members
        .push(Member::Function(provides_conduit()));
    for record in records {
        component
            .members
            .push(Member::Property(bind_property(record)));
    }

    let mut file = KotlinFile::new(package, COMPONENT_NAME);
    file.types.push(component);
    file
}

/// `@Provides fun providesConduit(...)` assembling the runtime registry from
/// the two multibound factory sets.
fn provides_conduit() -> Function {
    let mut provides = Function::new("providesConduit");
    provides
        .annotations
        .push(AnnotationUse::marker(markers::KI_PROVIDES.clone()));
    provides
        .params
        .push(Param::plain("uiFactories", factory_set(markers::UI_FACTORY.clone())));
    provides.params.push(Param::plain(
        "presenterFactories",
        factory_set(markers::PRESENTER_FACTORY.clone()),
    ));
    provides.returns = Some(KotlinType::class(markers::CONDUIT.clone()));
    provides.body = Some(vec![Stmt::line(
        CodeBlock::new()
            .lit("return ")
            .class(markers::CONDUIT.clone())
            .lit(
                ".Builder().addUiFactories(uiFactories)\
                 .addPresenterFactories(presenterFactories).build()",
            ),
    )]);
    provides
}

fn factory_set(of: ClassName) -> KotlinType {
    KotlinType::parameterized(
        ClassName::new("kotlin.collections", "Set"),
        vec![KotlinType::class(of)],
    )
}

/// `protected val <Factory>.bind: <factory interface>` with a
/// `@Provides @IntoSet` getter returning the receiver.
fn bind_property(record: &BindingRecord) -> Property {
    let mut bind = Property::new("bind", KotlinType::class(record.kind.factory_interface()));
    bind.modifiers.push(Modifier::Protected);
    bind.receiver = Some(KotlinType::class(record.factory_class()));
    bind.getter = Some(Getter {
        annotations: vec![
            AnnotationUse::marker(markers::KI_PROVIDES.clone()),
            AnnotationUse::marker(markers::KI_INTO_SET.clone()),
        ],
        expression: CodeBlock::text("this"),
    });
    bind
}
