// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Target platforms of the host compilation.

use std::fmt;

/// One target platform of the current compilation. Multiplatform builds
/// report several.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Jvm,
    Native,
    Js,
    Wasm,
    /// A platform kind this generator has no knowledge of.
    Other(String),
}

impl Platform {
    pub fn is_jvm(&self) -> bool {
        matches!(self, Platform::Jvm)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Jvm => write!(f, "JVM"),
            Platform::Native => write!(f, "Native"),
            Platform::Js => write!(f, "JS"),
            Platform::Wasm => write!(f, "WASM"),
            Platform::Other(name) => write!(f, "{}", name),
        }
    }
}
