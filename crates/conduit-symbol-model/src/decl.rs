// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Declaration metadata observed from the host compilation.
//!
//! These records are snapshots: the generator reads them once per pass and
//! never mutates host state. Anything not captured here must be asked of the
//! host through [`crate::SymbolHost`].

use std::fmt;

/// Reference to a named type in host source, e.g.
/// `dev.conduit.sample.GreetingScreen`.
///
/// `name` may be dotted for nested declarations (`Profile.State`). Type
/// arguments and nullability are carried so that injected parameter types can
/// be reproduced exactly in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef {
    pub package: String,
    pub name: String,
    pub args: Vec<TypeRef>,
    pub nullable: bool,
}

impl TypeRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            args: vec![],
            nullable: false,
        }
    }

    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Package-qualified name, without type arguments.
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Innermost simple name (`State` for `Profile.State`).
    pub fn simple_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) => &self.name[pos + 1..],
            None => &self.name,
        }
    }

    /// Class identity comparison: same declaration, ignoring type arguments
    /// and nullability.
    pub fn is_same_class(&self, other: &TypeRef) -> bool {
        self.package == other.package && self.name == other.name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (pos, arg) in self.args.iter().enumerate() {
                if pos > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// Source visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    Private,
    /// Declared inside a function body.
    Local,
}

impl Visibility {
    /// Whether generated code placed in the same module can name the
    /// declaration.
    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::Private | Visibility::Local)
    }
}

/// Opaque handle to an originating source file. Generated files declare the
/// handles they derive from so the host can invalidate them incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceHandle(String);

impl SourceHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One value parameter of a function, constructor, or creator method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeRef,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Primary constructor of a class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CtorDecl {
    pub params: Vec<ParamDecl>,
    /// Annotation classes present on the constructor itself.
    pub annotations: Vec<TypeRef>,
}

/// The single abstract creation method of an assisted-factory interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorDecl {
    pub name: String,
    pub params: Vec<ParamDecl>,
    /// The type the creator actually constructs (its return type).
    pub created: TypeRef,
    pub created_visibility: Visibility,
}

/// Shape details of a class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeShape {
    /// Primary constructor, if the class declares one.
    pub constructor: Option<CtorDecl>,
    /// Present iff the class is an assisted-factory interface.
    pub creator: Option<CreatorDecl>,
}

/// What kind of declaration carries the marker annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclShape {
    /// A composable function; the factory wraps a call to it.
    Function { params: Vec<ParamDecl> },
    /// A class; the factory instantiates it, directly or through a creator.
    Type(TypeShape),
}

/// One declaration carrying the marker annotation, as discovered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSymbol {
    /// Simple declaration name.
    pub name: String,
    /// Enclosing package.
    pub package: String,
    pub visibility: Visibility,
    /// The annotation's screen-token argument.
    pub screen: TypeRef,
    /// The annotation's scope-marker argument.
    pub scope: TypeRef,
    /// Enclosing top-level class when the declaration is nested.
    pub top_level: Option<TypeRef>,
    /// Originating source file, when the host can attribute one.
    pub source: Option<SourceHandle>,
    pub shape: DeclShape,
}

impl AnnotatedSymbol {
    /// The symbol's own type identity. Meaningful for type declarations;
    /// for functions it names the function itself.
    pub fn self_type(&self) -> TypeRef {
        TypeRef::new(self.package.clone(), self.name.clone())
    }

    /// Package-qualified name, for diagnostics.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_display_includes_args_and_nullability() {
        let provider = TypeRef::new("javax.inject", "Provider")
            .with_args(vec![TypeRef::new("com.example", "Thing").nullable()]);
        assert_eq!(provider.to_string(), "javax.inject.Provider<com.example.Thing?>");
    }

    #[test]
    fn class_identity_ignores_args() {
        let plain = TypeRef::new("kotlin.collections", "Set");
        let parameterized =
            plain.clone().with_args(vec![TypeRef::new("com.example", "Thing")]);
        assert!(plain.is_same_class(&parameterized));
        assert!(!plain.is_same_class(&TypeRef::new("kotlin.collections", "List")));
    }

    #[test]
    fn nested_simple_name() {
        let nested = TypeRef::new("com.example", "Profile.State");
        assert_eq!(nested.simple_name(), "State");
        assert_eq!(nested.canonical_name(), "com.example.Profile.State");
    }

    #[test]
    fn visibility_gate() {
        assert!(Visibility::Public.is_visible());
        assert!(Visibility::Internal.is_visible());
        assert!(!Visibility::Private.is_visible());
        assert!(!Visibility::Local.is_visible());
    }
}
