// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build-time configuration.
//!
//! The page has no runtime configuration surface. The presets from
//! `easel_core::config` can be overridden when the crate is compiled:
//!
//! - `EASEL_ENGINE_MODULE`: engine module path
//! - `EASEL_LOG`: console log level (`error` … `trace`)
//! - `EASEL_OBSERVE_MUTATIONS`: `1`/`true`/`yes`/`on` to re-bind on inserted
//!   markup

use easel_core::config::{BinderConfig, EngineConfig};
use log::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PageConfig {
    pub(crate) engine: EngineConfig,
    pub(crate) binder: BinderConfig,
    pub(crate) log_level: Level,
}

impl PageConfig {
    pub(crate) fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("EASEL_ENGINE_MODULE"),
            option_env!("EASEL_LOG"),
            option_env!("EASEL_OBSERVE_MUTATIONS"),
        )
    }

    fn from_overrides(
        module_path: Option<&'static str>,
        log_level: Option<&str>,
        observe_mutations: Option<&str>,
    ) -> Self {
        let mut engine = EngineConfig::web();
        if let Some(path) = module_path.filter(|p| !p.trim().is_empty()) {
            engine = engine.with_module_path(path);
        }

        let mut binder = BinderConfig::web();
        binder.observe_mutations = observe_mutations.is_some_and(is_truthy);

        Self {
            engine,
            binder,
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(Level::Info),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    ["1", "true", "yes", "on"]
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
}
