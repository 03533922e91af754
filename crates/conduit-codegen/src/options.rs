// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::modes::CodegenMode;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option key selecting the DI dialect.
pub const MODE_OPTION: &str = "conduit.codegen.mode";
/// Option key naming the package the aggregate component is emitted into.
pub const PACKAGE_OPTION: &str = "conduit.codegen.package";
/// Option key listing parent component references, comma separated.
pub const PARENT_COMPONENT_OPTION: &str = "conduit.codegen.parent.component";

/// Represents options provided to one generator pass. Hosts hand these over
/// as a flat string map shared with other processors, so unknown keys are
/// ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Selected DI dialect.
    pub mode: CodegenMode,
    /// Package the aggregate component is emitted into.
    pub component_package: Option<String>,
    /// Parent component references threaded into the aggregate component.
    pub parent_components: Vec<String>,
    /// Verbosity level for logging.
    pub verbosity_level: LevelFilter,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: CodegenMode::Anvil,
            component_package: None,
            parent_components: vec![],
            verbosity_level: LevelFilter::Info,
        }
    }
}

impl Options {
    /// Parse the host-supplied option map. An unrecognized mode value is an
    /// error; everything else falls back to defaults.
    pub fn from_map(map: &BTreeMap<String, String>) -> anyhow::Result<Self> {
        let mut options = Options::default();
        if let Some(mode) = map.get(MODE_OPTION) {
            options.mode = mode.parse()?;
        }
        if let Some(package) = map.get(PACKAGE_OPTION) {
            options.component_package = Some(package.clone());
        }
        if let Some(parents) = map.get(PARENT_COMPONENT_OPTION) {
            options.parent_components = parents
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let options = Options::from_map(&BTreeMap::new()).unwrap();
        assert_eq!(options.mode, CodegenMode::Anvil);
        assert_eq!(options.component_package, None);
        assert!(options.parent_components.is_empty());
        assert_eq!(options.verbosity_level, LevelFilter::Info);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        for (value, expected) in [
            ("anvil", CodegenMode::Anvil),
            ("HILT", CodegenMode::Hilt),
            ("Kotlin_Inject", CodegenMode::KotlinInject),
        ] {
            let options = Options::from_map(&map(&[(MODE_OPTION, value)])).unwrap();
            assert_eq!(options.mode, expected);
        }
    }

    #[test]
    fn unrecognized_mode_is_an_error() {
        let err = Options::from_map(&map(&[(MODE_OPTION, "guice")])).unwrap_err();
        assert!(err.to_string().contains("guice"));
    }

    #[test]
    fn parent_components_split_on_commas() {
        let options = Options::from_map(&map(&[(
            PARENT_COMPONENT_OPTION,
            "com.example.AppComponent, com.example.DebugComponent,",
        )]))
        .unwrap();
        assert_eq!(
            options.parent_components,
            vec!["com.example.AppComponent", "com.example.DebugComponent"]
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options = Options::from_map(&map(&[("ksp.other.processor", "on")])).unwrap();
        assert_eq!(options.mode, CodegenMode::Anvil);
    }
}
