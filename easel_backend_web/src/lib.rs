// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for easel.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source driving a
//!   [`RenderLoop`](easel_core::render_loop::RenderLoop)
//! - [`ModuleLoader`] / [`ModuleEngine`]: dynamic import and initialization of
//!   the rendering engine's ES module
//! - [`DomSurface`]: the binder's document contract over the live DOM
//! - [`when_structure_ready`] and [`StructureObserver`]: when to bind

#![no_std]

extern crate alloc;

mod dom;
mod engine;
mod observer;
mod raf;
mod ready;

pub use dom::{DomInput, DomNode, DomOverlay, DomSurface};
pub use engine::{EngineException, ModuleEngine, ModuleLoader};
pub use observer::StructureObserver;
pub use raf::RafLoop;
pub use ready::when_structure_ready;

use alloc::format;
use alloc::string::String;

use easel_core::config::EngineConfig;
use easel_core::engine::bootstrap;
use easel_core::error::EngineInitError;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;

/// Initializes the engine module and starts redrawing it every frame.
///
/// The returned [`RafLoop`] owns the engine; dropping it stops the loop. On
/// failure nothing is scheduled.
pub async fn boot(config: EngineConfig) -> Result<RafLoop<ModuleEngine>, EngineInitError> {
    let render = bootstrap(ModuleLoader::new(config)).await?;
    let raf = RafLoop::new(render);
    raf.start();
    Ok(raf)
}

/// Renders a thrown JS value for logs and error messages.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    match value.as_string() {
        Some(text) => text,
        None => format!("{value:?}"),
    }
}
