// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kotlin declaration IR.
//!
//! Plain data describing the generated declarations. The renderer walks these
//! structures; nothing here produces text on its own except [`CodeBlock`]
//! construction helpers.

use crate::name::{ClassName, MemberName};
use crate::types::KotlinType;

/// Kotlin modifier keywords, rendered in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Internal,
    Protected,
    Private,
    Abstract,
    Override,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Internal => "internal",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Override => "override",
        }
    }
}

/// One annotation application, e.g. `@ContributesMultibinding(AppScope::class)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationUse {
    pub class: ClassName,
    pub args: Vec<CodeBlock>,
}

impl AnnotationUse {
    /// Annotation without arguments.
    pub fn marker(class: ClassName) -> Self {
        Self {
            class,
            args: vec![],
        }
    }

    pub fn arg(mut self, arg: CodeBlock) -> Self {
        self.args.push(arg);
        self
    }
}

/// A fragment of Kotlin code with embedded type and member references, so the
/// renderer can route every name through import resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
    pieces: Vec<Piece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    Lit(String),
    Type(KotlinType),
    Member(MemberName),
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block holding just literal text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().lit(text)
    }

    /// `X::class`
    pub fn class_literal(class: ClassName) -> Self {
        Self::new().class(class).lit("::class")
    }

    pub fn lit(mut self, text: impl Into<String>) -> Self {
        self.pieces.push(Piece::Lit(text.into()));
        self
    }

    pub fn ty(mut self, ty: KotlinType) -> Self {
        self.pieces.push(Piece::Type(ty));
        self
    }

    pub fn class(self, class: ClassName) -> Self {
        self.ty(KotlinType::Class(class))
    }

    pub fn member(mut self, member: MemberName) -> Self {
        self.pieces.push(Piece::Member(member));
        self
    }

    pub fn append(mut self, other: CodeBlock) -> Self {
        self.pieces.extend(other.pieces);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub(crate) fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}

/// One statement line inside a function body, with extra indentation
/// relative to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub indent: usize,
    pub code: CodeBlock,
}

impl Stmt {
    pub fn new(indent: usize, code: CodeBlock) -> Self {
        Self { indent, code }
    }

    pub fn line(code: CodeBlock) -> Self {
        Self::new(0, code)
    }
}

/// How a constructor parameter doubles as a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamProperty {
    Val,
    PrivateVal,
}

/// A function or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub annotations: Vec<AnnotationUse>,
    /// Present when the parameter is a constructor `val` property.
    pub property: Option<ParamProperty>,
    pub name: String,
    pub ty: KotlinType,
}

impl Param {
    pub fn plain(name: impl Into<String>, ty: KotlinType) -> Self {
        Self {
            annotations: vec![],
            property: None,
            name: name.into(),
            ty,
        }
    }

    /// `private val name: Ty` constructor property.
    pub fn private_val(name: impl Into<String>, ty: KotlinType) -> Self {
        Self {
            property: Some(ParamProperty::PrivateVal),
            ..Self::plain(name, ty)
        }
    }

    /// `val name: Ty` constructor property.
    pub fn val(name: impl Into<String>, ty: KotlinType) -> Self {
        Self {
            property: Some(ParamProperty::Val),
            ..Self::plain(name, ty)
        }
    }

    pub fn annotated(mut self, annotation: AnnotationUse) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// Primary constructor of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constructor {
    pub annotations: Vec<AnnotationUse>,
    pub params: Vec<Param>,
}

/// Property getter, always expression-bodied in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Getter {
    pub annotations: Vec<AnnotationUse>,
    pub expression: CodeBlock,
}

/// A member property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub modifiers: Vec<Modifier>,
    /// Extension receiver (`GreetingFactory` in `val GreetingFactory.bind`).
    pub receiver: Option<KotlinType>,
    pub name: String,
    pub ty: KotlinType,
    pub getter: Option<Getter>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: KotlinType) -> Self {
        Self {
            modifiers: vec![],
            receiver: None,
            name: name.into(),
            ty,
            getter: None,
        }
    }
}

/// A member function. `body: None` renders an abstract declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationUse>,
    pub name: String,
    pub params: Vec<Param>,
    pub returns: Option<KotlinType>,
    pub body: Option<Vec<Stmt>>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: vec![],
            annotations: vec![],
            name: name.into(),
            params: vec![],
            returns: None,
            body: None,
        }
    }
}

/// Class members in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Property(Property),
    Function(Function),
}

/// A generated class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub annotations: Vec<AnnotationUse>,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub constructor: Option<Constructor>,
    pub superinterfaces: Vec<KotlinType>,
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            annotations: vec![],
            modifiers: vec![],
            name: name.into(),
            constructor: None,
            superinterfaces: vec![],
            members: vec![],
        }
    }
}

/// One generated source file: a package and its top-level declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinFile {
    pub package: String,
    /// File name without the `.kt` extension.
    pub name: String,
    pub types: Vec<TypeDecl>,
}

impl KotlinFile {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            types: vec![],
        }
    }
}
