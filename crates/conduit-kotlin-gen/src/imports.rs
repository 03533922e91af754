// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Import resolution for one generated file.
//!
//! Simple names are claimed first-come: the first class or member to use a
//! simple name owns it and is imported; later references to a different
//! declaration with the same simple name render fully qualified. Same-package
//! and default-imported names are claimed without an import statement.

use crate::name::{ClassName, MemberName};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Packages Kotlin imports implicitly.
const DEFAULT_IMPORTS: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
    "kotlin.jvm",
];

#[derive(Debug, Clone)]
struct Claim {
    canonical: String,
    needs_import: bool,
}

/// Tracks which names a file references and what must be imported for them.
#[derive(Debug)]
pub struct ImportSet {
    package: String,
    claims: BTreeMap<String, Claim>,
}

impl ImportSet {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            claims: BTreeMap::new(),
        }
    }

    /// Record a class reference and return the text to render for it.
    pub fn reference_class(&mut self, class: &ClassName) -> String {
        let rendered = class.relative_name();
        self.claim(
            class.top_level_name(),
            class.top_level_canonical(),
            class.package(),
            rendered,
        )
    }

    /// Record a top-level member reference and return the text to render.
    pub fn reference_member(&mut self, member: &MemberName) -> String {
        self.claim(
            &member.name,
            member.canonical_name(),
            &member.package,
            member.name.clone(),
        )
    }

    fn claim(&mut self, simple: &str, canonical: String, package: &str, rendered: String) -> String {
        if let Some(claim) = self.claims.get(simple) {
            if claim.canonical == canonical {
                return rendered;
            }
            // simple name taken by someone else: fall back to qualification
            return canonical;
        }
        let needs_import = !package.is_empty()
            && package != self.package
            && !DEFAULT_IMPORTS.contains(&package);
        self.claims.insert(
            simple.to_string(),
            Claim {
                canonical,
                needs_import,
            },
        );
        rendered
    }

    /// Canonical import targets, sorted.
    pub fn imports(&self) -> Vec<String> {
        self.claims
            .values()
            .filter(|claim| claim.needs_import)
            .map(|claim| claim.canonical.clone())
            .sorted()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_package_needs_no_import() {
        let mut imports = ImportSet::new("com.example");
        let rendered = imports.reference_class(&ClassName::new("com.example", "GreetingScreen"));
        assert_eq!(rendered, "GreetingScreen");
        assert!(imports.imports().is_empty());
    }

    #[test]
    fn nested_class_imports_its_top_level() {
        let mut imports = ImportSet::new("com.example");
        let factory = ClassName::new("dev.conduit.runtime.ui", "Ui").nested("Factory");
        assert_eq!(imports.reference_class(&factory), "Ui.Factory");
        assert_eq!(imports.imports(), vec!["dev.conduit.runtime.ui.Ui"]);
    }

    #[test]
    fn collisions_render_qualified() {
        let mut imports = ImportSet::new("com.example");
        let first = ClassName::new("com.first", "Inject");
        let second = ClassName::new("com.second", "Inject");
        assert_eq!(imports.reference_class(&first), "Inject");
        assert_eq!(imports.reference_class(&second), "com.second.Inject");
        assert_eq!(imports.imports(), vec!["com.first.Inject"]);
    }

    #[test]
    fn default_imports_are_implicit() {
        let mut imports = ImportSet::new("com.example");
        assert_eq!(
            imports.reference_class(&ClassName::new("kotlin.collections", "Set")),
            "Set"
        );
        assert!(imports.imports().is_empty());
    }

    #[test]
    fn members_import_like_classes() {
        let mut imports = ImportSet::new("com.example");
        let ui = MemberName::new("dev.conduit.runtime.ui", "ui");
        assert_eq!(imports.reference_member(&ui), "ui");
        // same-package member needs nothing
        let local = MemberName::new("com.example", "Greeting");
        assert_eq!(imports.reference_member(&local), "Greeting");
        assert_eq!(imports.imports(), vec!["dev.conduit.runtime.ui.ui"]);
    }

    #[test]
    fn imports_are_sorted() {
        let mut imports = ImportSet::new("com.example");
        imports.reference_class(&ClassName::new("me.tatarka.inject.annotations", "Inject"));
        imports.reference_class(&ClassName::new("dev.conduit.runtime.screen", "Screen"));
        assert_eq!(
            imports.imports(),
            vec![
                "dev.conduit.runtime.screen.Screen",
                "me.tatarka.inject.annotations.Inject",
            ]
        );
    }
}
