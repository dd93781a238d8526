// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading the rendering engine's ES module.
//!
//! The engine ships as a separate `wasm-bindgen` module. [`ModuleLoader`]
//! imports it dynamically from [`EngineConfig::module_path`], awaits its
//! initializer, and resolves its redraw export into a [`ModuleEngine`].

use alloc::string::ToString as _;
use core::fmt;

use easel_core::config::EngineConfig;
use easel_core::engine::{Engine, EngineModule};
use easel_core::error::EngineInitError;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::describe;

#[wasm_bindgen(inline_js = "export function import_module(path) { return import(path); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(path: &str) -> Result<Promise, JsValue>;
}

/// Resolves the engine module described by an [`EngineConfig`].
#[derive(Clone, Copy, Debug)]
pub struct ModuleLoader {
    config: EngineConfig,
}

impl ModuleLoader {
    /// Creates a loader for the module at `config.module_path`.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl EngineModule for ModuleLoader {
    type Engine = ModuleEngine;

    async fn initialize(self) -> Result<ModuleEngine, EngineInitError> {
        let EngineConfig {
            module_path,
            init_export,
            redraw_export,
        } = self.config;
        let load = |err: JsValue| EngineInitError::Load {
            module: module_path.to_string(),
            message: describe(&err),
        };
        let initialize = |err: JsValue| EngineInitError::Initialize {
            message: describe(&err),
        };

        let module = JsFuture::from(import_module(module_path).map_err(load)?)
            .await
            .map_err(load)?;

        let init = export(&module, init_export)?;
        let pending = init.call0(&JsValue::UNDEFINED).map_err(initialize)?;
        if let Some(promise) = pending.dyn_ref::<Promise>() {
            JsFuture::from(promise.clone()).await.map_err(initialize)?;
        }

        let redraw = export(&module, redraw_export)?;
        log::debug!("engine module `{module_path}` resolved");
        Ok(ModuleEngine { redraw })
    }
}

/// Looks up a callable export on a module namespace object.
fn export(module: &JsValue, name: &str) -> Result<Function, EngineInitError> {
    Reflect::get(module, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| EngineInitError::MissingExport {
            export: name.to_string(),
        })
}

/// An initialized engine module, redrawn through its redraw export.
#[derive(Clone, Debug)]
pub struct ModuleEngine {
    redraw: Function,
}

impl Engine for ModuleEngine {
    type Error = EngineException;

    fn redraw(&mut self) -> Result<(), EngineException> {
        self.redraw
            .call0(&JsValue::UNDEFINED)
            .map(drop)
            .map_err(EngineException)
    }
}

/// A value thrown by the engine's redraw export.
#[derive(Clone, Debug)]
pub struct EngineException(pub JsValue);

impl fmt::Display for EngineException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(&self.0))
    }
}
