// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Renders the declaration IR to Kotlin source text.
//!
//! Deliberately dumb: pattern match, emit, no analysis. Each declaration is
//! rendered into its own string buffer while the shared [`ImportSet`] claims
//! names; the file header is assembled last, once all imports are known.

use itertools::Itertools;

use crate::decl::{
    AnnotationUse, CodeBlock, Function, KotlinFile, Member, Param, ParamProperty, Piece, Property,
    TypeDecl,
};
use crate::escape;
use crate::imports::ImportSet;
use crate::types::KotlinType;
use crate::writer::{render_to_string, KotlinWriter};

/// Render a complete file: package header, resolved imports, declarations.
pub fn render_file(file: &KotlinFile) -> String {
    let mut imports = ImportSet::new(&file.package);
    let bodies: Vec<String> = file
        .types
        .iter()
        .map(|decl| render_type(decl, &mut imports))
        .collect();

    let mut output = String::new();
    if !file.package.is_empty() {
        output.push_str(&format!("package {}\n\n", file.package));
    }
    let import_lines = imports.imports();
    if !import_lines.is_empty() {
        for import in &import_lines {
            output.push_str(&format!("import {}\n", import));
        }
        output.push('\n');
    }
    output.push_str(&bodies.join("\n"));
    output
}

fn render_type(decl: &TypeDecl, imports: &mut ImportSet) -> String {
    render_to_string(|w| {
        for annotation in &decl.annotations {
            w.line(&render_annotation(annotation, imports));
        }

        let mut header = String::new();
        for modifier in &decl.modifiers {
            header.push_str(modifier.as_str());
            header.push(' ');
        }
        header.push_str("class ");
        header.push_str(&decl.name);
        w.write(&header);

        if let Some(ctor) = &decl.constructor {
            if !ctor.annotations.is_empty() {
                w.write(" ");
                for annotation in &ctor.annotations {
                    w.write(&render_annotation(annotation, imports));
                    w.write(" ");
                }
                w.write("constructor");
            }
            if ctor.params.is_empty() {
                if !ctor.annotations.is_empty() {
                    w.write("()");
                }
            } else {
                w.write("(");
                w.newline();
                w.indent();
                for param in &ctor.params {
                    w.line(&format!("{},", render_param(param, imports)));
                }
                w.dedent();
                w.write(")");
            }
        }

        if !decl.superinterfaces.is_empty() {
            w.write(" : ");
            let supers = decl
                .superinterfaces
                .iter()
                .map(|s| render_type_ref(s, imports))
                .join(", ");
            w.write(&supers);
        }

        if decl.members.is_empty() {
            w.newline();
        } else {
            w.line(" {");
            w.indent();
            for (pos, member) in decl.members.iter().enumerate() {
                if pos > 0 {
                    w.newline();
                }
                match member {
                    Member::Property(property) => render_property(property, imports, w),
                    Member::Function(function) => render_function(function, imports, w),
                }
            }
            w.dedent();
            w.line("}");
        }
    })
}

fn render_property(property: &Property, imports: &mut ImportSet, w: &mut KotlinWriter<String>) {
    let mut line = String::new();
    for modifier in &property.modifiers {
        line.push_str(modifier.as_str());
        line.push(' ');
    }
    line.push_str("val ");
    if let Some(receiver) = &property.receiver {
        line.push_str(&render_type_ref(receiver, imports));
        line.push('.');
    }
    line.push_str(&escape::escape_identifier(&property.name));
    line.push_str(": ");
    line.push_str(&render_type_ref(&property.ty, imports));
    w.line(&line);

    if let Some(getter) = &property.getter {
        let mut accessor = String::new();
        for annotation in &getter.annotations {
            accessor.push_str(&render_annotation(annotation, imports));
            accessor.push(' ');
        }
        accessor.push_str("get() = ");
        accessor.push_str(&render_code(&getter.expression, imports));
        w.indent();
        w.line(&accessor);
        w.dedent();
    }
}

fn render_function(function: &Function, imports: &mut ImportSet, w: &mut KotlinWriter<String>) {
    for annotation in &function.annotations {
        w.line(&render_annotation(annotation, imports));
    }

    let mut sig = String::new();
    for modifier in &function.modifiers {
        sig.push_str(modifier.as_str());
        sig.push(' ');
    }
    sig.push_str("fun ");
    sig.push_str(&escape::escape_identifier(&function.name));
    sig.push('(');
    sig.push_str(
        &function
            .params
            .iter()
            .map(|p| render_param(p, imports))
            .join(", "),
    );
    sig.push(')');
    if let Some(returns) = &function.returns {
        sig.push_str(": ");
        sig.push_str(&render_type_ref(returns, imports));
    }

    match &function.body {
        None => w.line(&sig),
        Some(stmts) => {
            sig.push_str(" {");
            w.line(&sig);
            w.indent();
            for stmt in stmts {
                for _ in 0..stmt.indent {
                    w.indent();
                }
                w.line(&render_code(&stmt.code, imports));
                for _ in 0..stmt.indent {
                    w.dedent();
                }
            }
            w.dedent();
            w.line("}");
        }
    }
}

fn render_param(param: &Param, imports: &mut ImportSet) -> String {
    let mut out = String::new();
    for annotation in &param.annotations {
        out.push_str(&render_annotation(annotation, imports));
        out.push(' ');
    }
    if let Some(property) = &param.property {
        out.push_str(match property {
            ParamProperty::Val => "val ",
            ParamProperty::PrivateVal => "private val ",
        });
    }
    out.push_str(&escape::escape_identifier(&param.name));
    out.push_str(": ");
    out.push_str(&render_type_ref(&param.ty, imports));
    out
}

fn render_annotation(annotation: &AnnotationUse, imports: &mut ImportSet) -> String {
    let mut out = format!("@{}", imports.reference_class(&annotation.class));
    if !annotation.args.is_empty() {
        out.push('(');
        out.push_str(
            &annotation
                .args
                .iter()
                .map(|arg| render_code(arg, imports))
                .join(", "),
        );
        out.push(')');
    }
    out
}

fn render_type_ref(ty: &KotlinType, imports: &mut ImportSet) -> String {
    match ty {
        KotlinType::Class(name) => imports.reference_class(name),
        KotlinType::Parameterized { raw, args } => {
            let rendered_args = args.iter().map(|a| render_type_ref(a, imports)).join(", ");
            format!("{}<{}>", imports.reference_class(raw), rendered_args)
        }
        KotlinType::Star => "*".to_string(),
        KotlinType::Nullable(inner) => format!("{}?", render_type_ref(inner, imports)),
    }
}

fn render_code(block: &CodeBlock, imports: &mut ImportSet) -> String {
    let mut out = String::new();
    for piece in block.pieces() {
        match piece {
            Piece::Lit(text) => out.push_str(text),
            Piece::Type(ty) => out.push_str(&render_type_ref(ty, imports)),
            Piece::Member(member) => out.push_str(&imports.reference_member(member)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Constructor, Getter, Modifier, Stmt};
    use crate::name::{ClassName, MemberName};

    fn ui_factory() -> KotlinType {
        KotlinType::class(ClassName::new("dev.conduit.runtime.ui", "Ui").nested("Factory"))
    }

    fn create_fn(body_branch: CodeBlock) -> Function {
        let screen = ClassName::new("dev.conduit.runtime.screen", "Screen");
        let context = ClassName::new("dev.conduit.runtime", "ConduitContext");
        let ui = ClassName::new("dev.conduit.runtime.ui", "Ui");
        Function {
            modifiers: vec![Modifier::Override],
            annotations: vec![],
            name: "create".to_string(),
            params: vec![
                Param::plain("screen", KotlinType::class(screen)),
                Param::plain("context", KotlinType::class(context)),
            ],
            returns: Some(KotlinType::parameterized(ui, vec![KotlinType::Star]).nullable()),
            body: Some(vec![
                Stmt::line(CodeBlock::text("return when (screen) {")),
                Stmt::new(1, body_branch),
                Stmt::new(1, CodeBlock::text("else -> null")),
                Stmt::line(CodeBlock::text("}")),
            ]),
        }
    }

    #[test]
    fn renders_factory_class() {
        let inject = ClassName::new("me.tatarka.inject.annotations", "Inject");
        let creator = ClassName::new("com.example", "Greeting").nested("Factory");

        let mut decl = TypeDecl::new("GreetingFactory");
        decl.constructor = Some(Constructor {
            annotations: vec![AnnotationUse::marker(inject)],
            params: vec![Param::private_val("factory", KotlinType::class(creator))],
        });
        decl.superinterfaces = vec![ui_factory()];
        decl.members = vec![Member::Function(create_fn(
            CodeBlock::new()
                .lit("is ")
                .class(ClassName::new("com.example", "GreetingScreen"))
                .lit(" -> factory.create(screen = screen)"),
        ))];

        let mut file = KotlinFile::new("com.example", "GreetingFactory");
        file.types.push(decl);

        let expected = r#"package com.example

import dev.conduit.runtime.ConduitContext
import dev.conduit.runtime.screen.Screen
import dev.conduit.runtime.ui.Ui
import me.tatarka.inject.annotations.Inject

class GreetingFactory @Inject constructor(
  private val factory: Greeting.Factory,
) : Ui.Factory {
  override fun create(screen: Screen, context: ConduitContext): Ui<*>? {
    return when (screen) {
      is GreetingScreen -> factory.create(screen = screen)
      else -> null
    }
  }
}
"#;
        assert_eq!(render_file(&file), expected);
    }

    #[test]
    fn empty_constructor_keeps_inject_annotation() {
        let inject = ClassName::new("javax.inject", "Inject");
        let mut decl = TypeDecl::new("GreetingFactory");
        decl.constructor = Some(Constructor {
            annotations: vec![AnnotationUse::marker(inject)],
            params: vec![],
        });
        decl.superinterfaces = vec![ui_factory()];
        decl.members = vec![Member::Function(create_fn(CodeBlock::text(
            "is GreetingScreen -> Greeting()",
        )))];

        let mut file = KotlinFile::new("com.example", "GreetingFactory");
        file.types.push(decl);
        let rendered = render_file(&file);
        let class_line = rendered
            .lines()
            .find(|line| line.starts_with("class"))
            .unwrap();
        insta::assert_snapshot!(
            class_line,
            @"class GreetingFactory @Inject constructor() : Ui.Factory {"
        );
    }

    #[test]
    fn renders_component_shape() {
        let component = ClassName::new("me.tatarka.inject.annotations", "Component");
        let provides = ClassName::new("me.tatarka.inject.annotations", "Provides");
        let into_set = ClassName::new("me.tatarka.inject.annotations", "IntoSet");
        let conduit = ClassName::new("dev.conduit.foundation", "Conduit");
        let parent = ClassName::new("com.example.parent", "ParentComponent");

        let mut decl = TypeDecl::new("ConduitComponent");
        decl.annotations = vec![AnnotationUse::marker(component.clone())];
        decl.modifiers = vec![Modifier::Internal, Modifier::Abstract];
        decl.constructor = Some(Constructor {
            annotations: vec![],
            params: vec![Param::val("parent", KotlinType::class(parent))
                .annotated(AnnotationUse::marker(component))],
        });

        let mut accessor = Property::new("conduit", KotlinType::class(conduit));
        accessor.modifiers = vec![Modifier::Abstract];
        decl.members.push(Member::Property(accessor));

        let mut bind = Property::new("bind", ui_factory());
        bind.modifiers = vec![Modifier::Protected];
        bind.receiver = Some(KotlinType::class(ClassName::new(
            "com.example",
            "GreetingFactory",
        )));
        bind.getter = Some(Getter {
            annotations: vec![
                AnnotationUse::marker(provides),
                AnnotationUse::marker(into_set),
            ],
            expression: CodeBlock::text("this"),
        });
        decl.members.push(Member::Property(bind));

        let mut file = KotlinFile::new("com.example", "ConduitComponent");
        file.types.push(decl);

        let expected = r#"package com.example

import com.example.parent.ParentComponent
import dev.conduit.foundation.Conduit
import dev.conduit.runtime.ui.Ui
import me.tatarka.inject.annotations.Component
import me.tatarka.inject.annotations.IntoSet
import me.tatarka.inject.annotations.Provides

@Component
internal abstract class ConduitComponent(
  @Component val parent: ParentComponent,
) {
  abstract val conduit: Conduit

  protected val GreetingFactory.bind: Ui.Factory
    @Provides @IntoSet get() = this
}
"#;
        assert_eq!(render_file(&file), expected);
    }

    #[test]
    fn renders_abstract_bind_function() {
        let module = ClassName::new("dagger", "Module");
        let install_in = ClassName::new("dagger.hilt", "InstallIn");
        let binds = ClassName::new("dagger", "Binds");
        let into_set = ClassName::new("dagger.multibindings", "IntoSet");

        let mut decl = TypeDecl::new("GreetingFactoryModule");
        decl.annotations = vec![
            AnnotationUse::marker(module),
            AnnotationUse::marker(install_in).arg(CodeBlock::class_literal(ClassName::new(
                "com.example",
                "AppScope",
            ))),
        ];
        decl.modifiers = vec![Modifier::Abstract];

        let mut bind = Function::new("bindGreetingFactory");
        bind.modifiers = vec![Modifier::Abstract];
        bind.annotations = vec![
            AnnotationUse::marker(binds),
            AnnotationUse::marker(into_set),
        ];
        bind.params = vec![Param::plain(
            "greetingFactory",
            KotlinType::class(ClassName::new("com.example", "GreetingFactory")),
        )];
        bind.returns = Some(ui_factory());
        decl.members.push(Member::Function(bind));

        let mut file = KotlinFile::new("com.example", "GreetingFactoryModule");
        file.types.push(decl);

        let expected = r#"package com.example

import dagger.Binds
import dagger.Module
import dagger.hilt.InstallIn
import dagger.multibindings.IntoSet
import dev.conduit.runtime.ui.Ui

@Module
@InstallIn(AppScope::class)
abstract class GreetingFactoryModule {
  @Binds
  @IntoSet
  abstract fun bindGreetingFactory(greetingFactory: GreetingFactory): Ui.Factory
}
"#;
        assert_eq!(render_file(&file), expected);
    }

    #[test]
    fn keyword_parameters_are_backticked() {
        let mut imports = ImportSet::new("com.example");
        let rendered = render_param(
            &Param::plain(
                "object",
                KotlinType::class(ClassName::new("com.example", "Thing")),
            ),
            &mut imports,
        );
        insta::assert_snapshot!(rendered, @"`object`: Thing");
    }

    #[test]
    fn member_references_resolve_against_imports() {
        let mut imports = ImportSet::new("com.example");
        let block = CodeBlock::new()
            .member(MemberName::new("dev.conduit.runtime.ui", "ui"))
            .lit("<")
            .class(ClassName::new("com.example", "GreetingState"))
            .lit("> { state, modifier -> ... }");
        let rendered = render_code(&block, &mut imports);
        insta::assert_snapshot!(rendered, @"ui<GreetingState> { state, modifier -> ... }");
        assert_eq!(imports.imports(), vec!["dev.conduit.runtime.ui.ui"]);
    }
}
