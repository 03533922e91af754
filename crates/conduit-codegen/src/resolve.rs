// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Assisted-parameter resolution.
//!
//! Declared parameters of an annotated symbol are matched against the four
//! marker families. Screen and navigator parameters are bound to the
//! factory's own inputs; state and modifier parameters belong to the wrapper
//! template; the rest are either threaded through the factory constructor
//! (kotlin-inject) or left to the surrounding DI graph.

use conduit_symbol_model::{AnnotatedSymbol, Diagnostics, ParamDecl, SymbolHost, TypeRef};

use crate::classify::FactoryKind;
use crate::markers::MarkerTypes;
use crate::modes::CodegenMode;

/// What a resolved parameter is bound to at the generated call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistedRole {
    /// Bound to the screen the factory matched on.
    Screen,
    /// Bound to the navigator handed to presenter factories.
    Navigator,
    /// Threaded through the factory's own constructor.
    Injected,
}

/// One parameter the generated invocation must supply by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistedParameter {
    pub role: AssistedRole,
    pub ty: TypeRef,
    pub name: String,
}

impl AssistedParameter {
    /// The expression bound to this parameter at the call site.
    pub fn call_site(&self) -> &str {
        match self.role {
            AssistedRole::Screen => "screen",
            AssistedRole::Navigator => "navigator",
            AssistedRole::Injected => &self.name,
        }
    }
}

/// Resolve the declared parameters in order. Every problem is reported
/// individually; any error makes the whole resolution fail so the caller
/// skips synthesis for the symbol.
pub fn resolve<H: SymbolHost>(
    params: &[ParamDecl],
    symbol: &AnnotatedSymbol,
    kind: FactoryKind,
    mode: CodegenMode,
    markers: &MarkerTypes,
    host: &H,
    diags: &mut Diagnostics,
) -> Option<Vec<AssistedParameter>> {
    let mut resolved = vec![];
    let mut seen_screen = false;
    let mut seen_navigator = false;
    let mut failed = false;
    for param in params {
        if host.is_assignable(&markers.screen, &param.ty) {
            if !param.ty.is_same_class(&symbol.screen) {
                diags.error_at(
                    format!(
                        "screen type mismatch: expected {} but found {}",
                        symbol.screen, param.ty
                    ),
                    symbol,
                );
                failed = true;
                continue;
            }
            if seen_screen {
                diags.error_at(
                    format!("multiple parameters of the screen type {}", symbol.screen),
                    symbol,
                );
                failed = true;
                continue;
            }
            seen_screen = true;
            resolved.push(AssistedParameter {
                role: AssistedRole::Screen,
                ty: param.ty.clone(),
                name: param.name.clone(),
            });
        } else if host.is_assignable(&markers.navigator, &param.ty) {
            if !kind.allows_navigator() {
                diags.error_at(
                    format!(
                        "navigator parameter {} is not injectable on a Ui declaration",
                        param.name
                    ),
                    symbol,
                );
                failed = true;
                continue;
            }
            if seen_navigator {
                diags.error_at("multiple navigator parameters", symbol);
                failed = true;
                continue;
            }
            seen_navigator = true;
            resolved.push(AssistedParameter {
                role: AssistedRole::Navigator,
                ty: param.ty.clone(),
                name: param.name.clone(),
            });
        } else if host.is_assignable(&markers.ui_state, &param.ty)
            || host.is_assignable(&markers.modifier, &param.ty)
        {
            // Bound by the wrapper template as `state` / `modifier`.
        } else if mode.threads_constructor_params() {
            resolved.push(AssistedParameter {
                role: AssistedRole::Injected,
                ty: param.ty.clone(),
                name: param.name.clone(),
            });
        }
        // Anything else is left to the surrounding DI graph.
    }
    (!failed).then_some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_symbol_model::{DeclShape, Visibility};

    /// Assignability edges as (target, candidate) pairs; everything else
    /// answers the identity relation only.
    struct EdgeHost {
        edges: Vec<(TypeRef, TypeRef)>,
    }

    impl SymbolHost for EdgeHost {
        fn list_annotated(&self, _marker: &TypeRef) -> Vec<AnnotatedSymbol> {
            vec![]
        }

        fn supertypes_of(&self, _class: &TypeRef) -> Vec<TypeRef> {
            vec![]
        }

        fn is_assignable(&self, target: &TypeRef, candidate: &TypeRef) -> bool {
            target.is_same_class(candidate)
                || self
                    .edges
                    .iter()
                    .any(|(t, c)| t.is_same_class(target) && c.is_same_class(candidate))
        }

        fn is_object(&self, _class: &TypeRef) -> bool {
            false
        }

        fn has_type(&self, _class: &TypeRef) -> bool {
            true
        }
    }

    fn test_markers() -> MarkerTypes {
        MarkerTypes {
            screen: TypeRef::new("dev.conduit.runtime.screen", "Screen"),
            navigator: TypeRef::new("dev.conduit.runtime", "Navigator"),
            ui_state: TypeRef::new("dev.conduit.runtime", "ConduitUiState"),
            modifier: TypeRef::new("androidx.compose.ui", "Modifier"),
        }
    }

    fn symbol_for(screen: TypeRef) -> AnnotatedSymbol {
        AnnotatedSymbol {
            name: "Greeting".to_string(),
            package: "com.example".to_string(),
            visibility: Visibility::Public,
            screen,
            scope: TypeRef::new("com.example", "AppScope"),
            top_level: None,
            source: None,
            shape: DeclShape::Function { params: vec![] },
        }
    }

    fn param(name: &str, ty: TypeRef) -> ParamDecl {
        ParamDecl {
            name: name.to_string(),
            ty,
        }
    }

    #[test]
    fn screen_parameter_binds_to_the_matched_screen() {
        let markers = test_markers();
        let screen = TypeRef::new("com.example", "GreetingScreen");
        let host = EdgeHost {
            edges: vec![(markers.screen.clone(), screen.clone())],
        };
        let symbol = symbol_for(screen.clone());
        let mut diags = Diagnostics::new();
        let resolved = resolve(
            &[param("screen", screen)],
            &symbol,
            FactoryKind::Presenter,
            CodegenMode::Anvil,
            &markers,
            &host,
            &mut diags,
        )
        .unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].role, AssistedRole::Screen);
        assert_eq!(resolved[0].call_site(), "screen");
    }

    #[test]
    fn mismatched_screen_parameter_is_an_error() {
        let markers = test_markers();
        let expected = TypeRef::new("com.example", "GreetingScreen");
        let other = TypeRef::new("com.example", "DetailScreen");
        let host = EdgeHost {
            edges: vec![
                (markers.screen.clone(), expected.clone()),
                (markers.screen.clone(), other.clone()),
            ],
        };
        let symbol = symbol_for(expected);
        let mut diags = Diagnostics::new();
        let resolved = resolve(
            &[param("screen", other)],
            &symbol,
            FactoryKind::Presenter,
            CodegenMode::Anvil,
            &markers,
            &host,
            &mut diags,
        );
        assert!(resolved.is_none());
        assert!(diags.has_errors());
        let message = &diags.iter().next().unwrap().message;
        assert!(message.contains("screen type mismatch"));
        assert!(message.contains("com.example.DetailScreen"));
    }

    #[test]
    fn navigator_is_rejected_on_ui_symbols() {
        let markers = test_markers();
        let symbol = symbol_for(TypeRef::new("com.example", "GreetingScreen"));
        let host = EdgeHost { edges: vec![] };
        let mut diags = Diagnostics::new();
        let resolved = resolve(
            &[param("navigator", markers.navigator.clone())],
            &symbol,
            FactoryKind::Ui,
            CodegenMode::Anvil,
            &markers,
            &host,
            &mut diags,
        );
        assert!(resolved.is_none());
        assert!(diags.has_errors());
    }

    #[test]
    fn second_navigator_is_reported_without_stopping_the_walk() {
        let markers = test_markers();
        let screen = TypeRef::new("com.example", "GreetingScreen");
        let host = EdgeHost {
            edges: vec![(markers.screen.clone(), screen.clone())],
        };
        let symbol = symbol_for(screen.clone());
        let mut diags = Diagnostics::new();
        let resolved = resolve(
            &[
                param("navigator", markers.navigator.clone()),
                param("other", markers.navigator.clone()),
                param("screen", screen),
            ],
            &symbol,
            FactoryKind::Presenter,
            CodegenMode::Anvil,
            &markers,
            &host,
            &mut diags,
        );
        assert!(resolved.is_none());
        // The duplicate was reported and the screen parameter still walked.
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn state_and_modifier_are_left_to_the_wrapper() {
        let markers = test_markers();
        let state = TypeRef::new("com.example", "GreetingState");
        let host = EdgeHost {
            edges: vec![(markers.ui_state.clone(), state.clone())],
        };
        let symbol = symbol_for(TypeRef::new("com.example", "GreetingScreen"));
        let mut diags = Diagnostics::new();
        let resolved = resolve(
            &[
                param("state", state),
                param("modifier", markers.modifier.clone()),
            ],
            &symbol,
            FactoryKind::Ui,
            CodegenMode::Anvil,
            &markers,
            &host,
            &mut diags,
        )
        .unwrap();
        assert!(resolved.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn unmatched_parameters_thread_only_under_kotlin_inject() {
        let markers = test_markers();
        let repo = TypeRef::new("com.example.data", "GreetingRepository");
        let host = EdgeHost { edges: vec![] };
        let symbol = symbol_for(TypeRef::new("com.example", "GreetingScreen"));
        let mut diags = Diagnostics::new();
        let anvil = resolve(
            &[param("repository", repo.clone())],
            &symbol,
            FactoryKind::Presenter,
            CodegenMode::Anvil,
            &markers,
            &host,
            &mut diags,
        )
        .unwrap();
        assert!(anvil.is_empty());
        let kotlin_inject = resolve(
            &[param("repository", repo)],
            &symbol,
            FactoryKind::Presenter,
            CodegenMode::KotlinInject,
            &markers,
            &host,
            &mut diags,
        )
        .unwrap();
        assert_eq!(kotlin_inject.len(), 1);
        assert_eq!(kotlin_inject[0].role, AssistedRole::Injected);
        assert_eq!(kotlin_inject[0].call_site(), "repository");
    }
}
