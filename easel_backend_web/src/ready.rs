// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural-content readiness.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Runs `f` once the document's structure has been parsed.
///
/// If parsing is still in progress, `f` runs on `DOMContentLoaded`; it does
/// not wait for images, stylesheets, or the rendering engine. Otherwise `f`
/// runs immediately.
pub fn when_structure_ready(
    document: &Document,
    f: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
}
