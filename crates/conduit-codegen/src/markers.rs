// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Well-known names: the Conduit runtime surface and the DI frameworks the
//! generated code targets.

use conduit_kotlin_gen::{ClassName, MemberName};
use conduit_symbol_model::{SymbolHost, TypeRef};
use once_cell::sync::Lazy;

use crate::convert;

/// The marker annotation that makes a declaration visible to this generator.
pub static CONDUIT_INJECT: Lazy<TypeRef> =
    Lazy::new(|| TypeRef::new("dev.conduit.codegen.annotations", "ConduitInject"));

// Conduit runtime surface.
pub static SCREEN: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dev.conduit.runtime.screen", "Screen"));
pub static NAVIGATOR: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dev.conduit.runtime", "Navigator"));
pub static UI_STATE: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dev.conduit.runtime", "ConduitUiState"));
pub static CONTEXT: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dev.conduit.runtime", "ConduitContext"));
pub static MODIFIER: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("androidx.compose.ui", "Modifier"));
pub static UI: Lazy<ClassName> = Lazy::new(|| ClassName::new("dev.conduit.runtime.ui", "Ui"));
pub static UI_FACTORY: Lazy<ClassName> = Lazy::new(|| UI.nested("Factory"));
pub static UI_BUILDER: Lazy<MemberName> =
    Lazy::new(|| MemberName::new("dev.conduit.runtime.ui", "ui"));
pub static PRESENTER: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dev.conduit.runtime.presenter", "Presenter"));
pub static PRESENTER_FACTORY: Lazy<ClassName> = Lazy::new(|| PRESENTER.nested("Factory"));
pub static PRESENTER_OF: Lazy<MemberName> =
    Lazy::new(|| MemberName::new("dev.conduit.runtime.presenter", "presenterOf"));
pub static CONDUIT: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dev.conduit.foundation", "Conduit"));

// javax / Dagger.
pub static JAVAX_INJECT: Lazy<ClassName> = Lazy::new(|| ClassName::new("javax.inject", "Inject"));
pub static JAVAX_PROVIDER: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("javax.inject", "Provider"));
pub static DAGGER_MODULE: Lazy<ClassName> = Lazy::new(|| ClassName::new("dagger", "Module"));
pub static DAGGER_BINDS: Lazy<ClassName> = Lazy::new(|| ClassName::new("dagger", "Binds"));
pub static DAGGER_INTO_SET: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dagger.multibindings", "IntoSet"));

// Anvil.
pub static CONTRIBUTES_MULTIBINDING: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("com.squareup.anvil.annotations", "ContributesMultibinding"));

// Hilt.
pub static HILT_INSTALL_IN: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dagger.hilt", "InstallIn"));
pub static ORIGINATING_ELEMENT: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("dagger.hilt.codegen", "OriginatingElement"));

// kotlin-inject.
pub static KI_INJECT: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("me.tatarka.inject.annotations", "Inject"));
pub static KI_COMPONENT: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("me.tatarka.inject.annotations", "Component"));
pub static KI_PROVIDES: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("me.tatarka.inject.annotations", "Provides"));
pub static KI_INTO_SET: Lazy<ClassName> =
    Lazy::new(|| ClassName::new("me.tatarka.inject.annotations", "IntoSet"));

/// Suffix of synthesized factory classes.
pub const FACTORY_SUFFIX: &str = "Factory";
/// Suffix of Hilt companion modules.
pub const MODULE_SUFFIX: &str = "Module";
/// Function-name suffix that marks a presenter function.
pub const PRESENTER_SUFFIX: &str = "Presenter";

/// The four marker families assisted parameters are matched against,
/// resolved on the host classpath.
#[derive(Debug, Clone)]
pub struct MarkerTypes {
    pub screen: TypeRef,
    pub navigator: TypeRef,
    pub ui_state: TypeRef,
    pub modifier: TypeRef,
}

impl MarkerTypes {
    /// `None` when the Conduit runtime is not on the compilation classpath;
    /// the pass then has nothing to do.
    pub fn resolve<H: SymbolHost>(host: &H) -> Option<Self> {
        let markers = Self {
            screen: convert::type_ref(&SCREEN),
            navigator: convert::type_ref(&NAVIGATOR),
            ui_state: convert::type_ref(&UI_STATE),
            modifier: convert::type_ref(&MODIFIER),
        };
        let present = host.has_type(&markers.screen)
            && host.has_type(&markers.navigator)
            && host.has_type(&markers.ui_state)
            && host.has_type(&markers.modifier);
        present.then_some(markers)
    }
}
