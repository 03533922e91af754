// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kotlin type references as they appear in generated signatures.

use crate::name::ClassName;

/// A Kotlin type usage: class, parameterized class, star projection, or a
/// nullable wrapper around any of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KotlinType {
    Class(ClassName),
    Parameterized {
        raw: ClassName,
        args: Vec<KotlinType>,
    },
    /// `*`
    Star,
    Nullable(Box<KotlinType>),
}

impl KotlinType {
    pub fn class(name: ClassName) -> Self {
        KotlinType::Class(name)
    }

    pub fn parameterized(raw: ClassName, args: Vec<KotlinType>) -> Self {
        KotlinType::Parameterized { raw, args }
    }

    /// Wrap in `?`. Idempotent.
    pub fn nullable(self) -> Self {
        match self {
            KotlinType::Nullable(_) => self,
            other => KotlinType::Nullable(Box::new(other)),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, KotlinType::Nullable(_))
    }

    /// The class behind the type, if there is one (`Ui` for `Ui<*>?`).
    pub fn class_name(&self) -> Option<&ClassName> {
        match self {
            KotlinType::Class(name) => Some(name),
            KotlinType::Parameterized { raw, .. } => Some(raw),
            KotlinType::Star => None,
            KotlinType::Nullable(inner) => inner.class_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_is_idempotent() {
        let ui = KotlinType::class(ClassName::new("dev.conduit.runtime.ui", "Ui"));
        let once = ui.clone().nullable();
        let twice = once.clone().nullable();
        assert_eq!(once, twice);
        assert!(once.is_nullable());
    }

    #[test]
    fn class_name_reaches_through_wrappers() {
        let ui = ClassName::new("dev.conduit.runtime.ui", "Ui");
        let wrapped =
            KotlinType::parameterized(ui.clone(), vec![KotlinType::Star]).nullable();
        assert_eq!(wrapped.class_name(), Some(&ui));
        assert_eq!(KotlinType::Star.class_name(), None);
    }
}
