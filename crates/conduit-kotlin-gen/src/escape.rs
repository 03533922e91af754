// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Escaping utilities for Kotlin identifiers.
//!
//! Host source can legally name a parameter `object` or `in`; the generated
//! code must backtick such names to stay compilable.

/// Kotlin hard keywords: never usable as identifiers without backticks.
const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Backtick-escape an identifier when Kotlin would reject it bare.
pub fn escape_identifier(name: &str) -> String {
    if HARD_KEYWORDS.contains(&name) || !is_plain_identifier(name) {
        format!("`{}`", name)
    } else {
        name.to_string()
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Uppercase the first character, preserving the rest.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character, preserving the rest.
pub fn decapitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
