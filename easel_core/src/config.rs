// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine location and binder selectors.
//!
//! Both configurations are plain `Copy` structs of `&'static str`s. The
//! [`web`](EngineConfig::web) presets describe the page markup and module
//! layout the shim ships with; embedders override individual fields.

/// Where the rendering engine module lives and what it exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Path of the engine's ES module, resolved against the page.
    pub module_path: &'static str,
    /// Export holding the async initializer.
    pub init_export: &'static str,
    /// Export holding the zero-argument redraw trigger.
    pub redraw_export: &'static str,
}

impl EngineConfig {
    /// Module layout served by the diagram server.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            module_path: "/static/wasm/uml_wasm.js",
            init_export: "default",
            redraw_export: "on_redraw",
        }
    }

    /// Returns a copy with `module_path` replaced.
    #[must_use]
    pub const fn with_module_path(mut self, module_path: &'static str) -> Self {
        self.module_path = module_path;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::web()
    }
}

/// Markup patterns recognized by the [`Binder`](crate::bind::Binder).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinderConfig {
    /// Tag name of dismissible overlays.
    pub overlay_tag: &'static str,
    /// Class name of dismiss triggers inside an overlay.
    pub dismiss_class: &'static str,
    /// Tag name of single-input forms.
    pub form_tag: &'static str,
    /// Tag name of input controls inside a form.
    pub input_tag: &'static str,
    /// Attribute set on every node once it has been bound.
    pub bound_marker: &'static str,
    /// Re-run the bind pass whenever nodes are added to the document.
    pub observe_mutations: bool,
}

impl BinderConfig {
    /// Native `<dialog>` overlays closed by `.close` elements, and `<form>`s
    /// validated through their first `<input>`.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            overlay_tag: "dialog",
            dismiss_class: "close",
            form_tag: "form",
            input_tag: "input",
            bound_marker: "data-easel-bound",
            observe_mutations: false,
        }
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self::web()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_web_presets() {
        assert_eq!(EngineConfig::default(), EngineConfig::web());
        assert_eq!(BinderConfig::default(), BinderConfig::web());
    }

    #[test]
    fn module_path_override_keeps_exports() {
        let config = EngineConfig::web().with_module_path("/pkg/engine.js");
        assert_eq!(config.module_path, "/pkg/engine.js");
        assert_eq!(config.redraw_export, "on_redraw");
        assert_eq!(config.init_export, "default");
    }
}
