// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page entry point for the easel shim.
//!
//! Wires the two independent halves of the shim onto the host page:
//!
//! - the [`Binder`] runs over the [`DomSurface`] once the document structure
//!   is ready, attaching overlay dismissal and single-field validation;
//! - the rendering engine is imported, initialized, and redrawn on every
//!   animation frame by a [`RafLoop`](easel_backend_web::RafLoop).
//!
//! The binder is scheduled before the engine is awaited, so an engine that
//! fails to load leaves dialogs and forms fully working. The failure itself
//! rejects the start promise and shows up as an unhandled rejection.
//!
//! Build with: `wasm-pack build --target web easel_page`

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod config;

use alloc::string::ToString as _;
use core::fmt::Debug;
use core::future::Future;

use easel_backend_web::{DomSurface, StructureObserver, when_structure_ready};
use easel_core::bind::Binder;
use easel_core::error::EngineInitError;
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = PageConfig::from_build_env();
    // Fails only if a logger is already installed, which is fine.
    let _ = console_log::init_with_level(config.log_level);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface = DomSurface::new(document.clone());
    let binder = Binder::new(config.binder);
    let engine = config.engine;
    launch(
        || when_structure_ready(&document, move || bind_page(surface, binder)),
        move || async move {
            let raf = easel_backend_web::boot(engine).await?;
            // Keep the RafLoop alive; the loop runs for the lifetime of the page.
            core::mem::forget(raf);
            Ok::<(), EngineInitError>(())
        },
    )
    .await
    .map_err(|err| JsValue::from(js_sys::Error::new(&err.to_string())))
}

/// Schedules binding, then boots the engine.
///
/// The two halves are independent: a bind pass that cannot be scheduled is
/// logged and the engine still boots.
async fn launch<S, D, B, F>(schedule_bind: S, boot_engine: B) -> Result<(), EngineInitError>
where
    S: FnOnce() -> Result<(), D>,
    D: Debug,
    B: FnOnce() -> F,
    F: Future<Output = Result<(), EngineInitError>>,
{
    if let Err(err) = schedule_bind() {
        log::error!("cannot schedule the bind pass: {err:?}");
    }
    boot_engine().await
}

/// Runs the bind pass and, if configured, keeps re-running it as markup is
/// inserted.
fn bind_page(surface: DomSurface, binder: Binder) {
    let report = binder.bind(&surface);
    log::info!(
        "bound {} handler(s) to the page ({} failed)",
        report.handlers_attached(),
        report.failures.len()
    );

    if !binder.config().observe_mutations {
        return;
    }
    let root = surface.document().clone();
    match StructureObserver::observe(&root, move || {
        binder.bind(&surface);
    }) {
        Ok(observer) => core::mem::forget(observer),
        Err(err) => log::warn!("cannot observe document mutations: {err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use core::cell::Cell;

    #[test]
    fn engine_boots_when_binding_cannot_be_scheduled() {
        let booted = Cell::new(false);
        let result = pollster::block_on(launch(
            || Err("listener rejected"),
            || async {
                booted.set(true);
                Ok::<(), EngineInitError>(())
            },
        ));
        assert_eq!(result, Ok(()));
        assert!(booted.get());
    }

    #[test]
    fn engine_failure_leaves_binding_scheduled() {
        let scheduled = Cell::new(false);
        let result = pollster::block_on(launch(
            || {
                scheduled.set(true);
                Ok::<(), String>(())
            },
            || async {
                Err::<(), _>(EngineInitError::Initialize {
                    message: String::from("bad memory"),
                })
            },
        ));
        assert!(scheduled.get());
        assert_eq!(
            result,
            Err(EngineInitError::Initialize {
                message: String::from("bad memory")
            })
        );
    }
}
