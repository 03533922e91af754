// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bridges host type references into renderable Kotlin names and back.

use conduit_kotlin_gen::{ClassName, KotlinType};
use conduit_symbol_model::TypeRef;

/// Class identity of a host type, dropping arguments and nullability.
pub fn class_name(ty: &TypeRef) -> ClassName {
    ClassName::new(&ty.package, &ty.name)
}

/// Full rendering type, preserving arguments and nullability.
pub fn kotlin_type(ty: &TypeRef) -> KotlinType {
    let base = if ty.args.is_empty() {
        KotlinType::class(class_name(ty))
    } else {
        KotlinType::parameterized(class_name(ty), ty.args.iter().map(kotlin_type).collect())
    };
    if ty.nullable {
        base.nullable()
    } else {
        base
    }
}

/// Host-side identity of a renderable class.
pub fn type_ref(class: &ClassName) -> TypeRef {
    TypeRef::new(class.package(), class.relative_name())
}
