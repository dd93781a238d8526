// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-binding on structural changes.
//!
//! [`StructureObserver`] watches a subtree with a `MutationObserver` and calls
//! back whenever nodes are added, so the bind pass can pick up markup inserted
//! after the page loaded. Attribute changes (including the binder's own
//! bound marker) are not observed.

use js_sys::Array;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{MutationObserver, MutationObserverInit, MutationRecord, Node};

type ObserverClosure = Closure<dyn FnMut(Array, MutationObserver)>;

/// Calls back when nodes are added below an observed root.
///
/// Observation stops when the `StructureObserver` is dropped.
pub struct StructureObserver {
    observer: MutationObserver,
    _callback: ObserverClosure,
}

impl StructureObserver {
    /// Starts observing `root` and its whole subtree.
    pub fn observe(root: &Node, mut on_added: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |records: Array, _observer: MutationObserver| {
                let added = records
                    .iter()
                    .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                    .any(|record| record.added_nodes().length() > 0);
                if added {
                    on_added();
                }
            },
        );
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;

        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(root, &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Stops observing. Pending records are discarded.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for StructureObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl core::fmt::Debug for StructureObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StructureObserver").finish_non_exhaustive()
    }
}
