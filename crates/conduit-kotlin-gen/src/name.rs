// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fully qualified Kotlin names.

use anyhow::bail;
use std::fmt;

/// Fully qualified name of a Kotlin class, possibly nested:
/// `dev.conduit.runtime.ui.Ui.Factory` is package `dev.conduit.runtime.ui`
/// with the name chain `Ui`, `Factory`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    names: Vec<String>,
}

impl ClassName {
    /// Build from a package and a simple (possibly dotted) name.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            package: package.into(),
            names: name.split('.').map(str::to_string).collect(),
        }
    }

    /// A class nested inside this one.
    pub fn nested(&self, name: impl Into<String>) -> Self {
        let mut names = self.names.clone();
        names.push(name.into());
        Self {
            package: self.package.clone(),
            names,
        }
    }

    /// Guess a class name from a dotted reference: lowercase-starting
    /// segments form the package, uppercase-starting segments the class
    /// chain. `com.example.Outer.Inner` parses; `com.example` does not.
    pub fn best_guess(reference: &str) -> anyhow::Result<Self> {
        let mut package_parts: Vec<&str> = vec![];
        let mut class_parts: Vec<&str> = vec![];
        for segment in reference.split('.') {
            let starts_upper = segment
                .chars()
                .next()
                .map(char::is_uppercase)
                .unwrap_or(false);
            if segment.is_empty() || (!class_parts.is_empty() && !starts_upper) {
                bail!("couldn't guess a class name from \"{}\"", reference);
            }
            if starts_upper {
                class_parts.push(segment);
            } else {
                package_parts.push(segment);
            }
        }
        if class_parts.is_empty() {
            bail!("couldn't guess a class name from \"{}\"", reference);
        }
        Ok(Self {
            package: package_parts.join("."),
            names: class_parts.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Innermost name.
    pub fn simple_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or("")
    }

    /// Outermost name: the unit an import statement brings in.
    pub fn top_level_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }

    /// Name chain without the package (`Ui.Factory`).
    pub fn relative_name(&self) -> String {
        self.names.join(".")
    }

    /// Canonical name of the outermost class, the import target.
    pub fn top_level_canonical(&self) -> String {
        if self.package.is_empty() {
            self.top_level_name().to_string()
        } else {
            format!("{}.{}", self.package, self.top_level_name())
        }
    }

    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.relative_name()
        } else {
            format!("{}.{}", self.package, self.relative_name())
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// Fully qualified name of a top-level Kotlin function or property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberName {
    pub package: String,
    pub name: String,
}

impl MemberName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_names() {
        let ui = ClassName::new("dev.conduit.runtime.ui", "Ui");
        let factory = ui.nested("Factory");
        assert_eq!(factory.simple_name(), "Factory");
        assert_eq!(factory.top_level_name(), "Ui");
        assert_eq!(factory.relative_name(), "Ui.Factory");
        assert_eq!(
            factory.canonical_name(),
            "dev.conduit.runtime.ui.Ui.Factory"
        );
        assert_eq!(factory.top_level_canonical(), "dev.conduit.runtime.ui.Ui");
    }

    #[test]
    fn dotted_simple_name_builds_a_chain() {
        let nested = ClassName::new("com.example", "Profile.State");
        assert_eq!(nested.top_level_name(), "Profile");
        assert_eq!(nested.simple_name(), "State");
    }

    #[test]
    fn best_guess_splits_on_case() {
        let guessed = ClassName::best_guess("com.example.parent.ParentComponent").unwrap();
        assert_eq!(guessed.package(), "com.example.parent");
        assert_eq!(guessed.simple_name(), "ParentComponent");

        let nested = ClassName::best_guess("com.example.Outer.Inner").unwrap();
        assert_eq!(nested.relative_name(), "Outer.Inner");

        let bare = ClassName::best_guess("Component").unwrap();
        assert_eq!(bare.package(), "");
        assert_eq!(bare.canonical_name(), "Component");
    }

    #[test]
    fn best_guess_rejects_packages_and_junk() {
        assert!(ClassName::best_guess("com.example.parent").is_err());
        assert!(ClassName::best_guess("com..Example").is_err());
        assert!(ClassName::best_guess("com.Example.bad").is_err());
        assert!(ClassName::best_guess("").is_err());
    }
}
