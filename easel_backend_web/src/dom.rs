// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The binder's [`Surface`] over the live DOM.
//!
//! Queries use `getElementsByTagName` / `getElementsByClassName`, which return
//! elements in document order. Handlers are attached with
//! `addEventListener` and live as long as the page; nothing is ever removed.

use alloc::string::String;
use alloc::vec::Vec;

use easel_core::config::BinderConfig;
use easel_core::error::ListenError;
use easel_core::surface::{Claim, Handler, InputControl, Overlay, Surface};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlCollection, HtmlDialogElement, HtmlInputElement,
};

use crate::describe;

/// The document the binder scans.
#[derive(Clone, Debug)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Creates a surface over `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Returns a reference to the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// A dismissible overlay element.
///
/// `<dialog>` elements are closed through `HTMLDialogElement.open`; any other
/// element falls back to toggling its `open` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomOverlay(pub Element);

impl Overlay for DomOverlay {
    fn set_open(&self, open: bool) {
        if let Some(dialog) = self.0.dyn_ref::<HtmlDialogElement>() {
            dialog.set_open(open);
        } else if open {
            let _ = self.0.set_attribute("open", "");
        } else {
            let _ = self.0.remove_attribute("open");
        }
    }

    fn is_open(&self) -> bool {
        match self.0.dyn_ref::<HtmlDialogElement>() {
            Some(dialog) => dialog.open(),
            None => self.0.has_attribute("open"),
        }
    }
}

/// A trigger or form element, claimable with the bound marker attribute.
#[derive(Clone, Debug)]
pub struct DomNode(pub Element);

impl Claim for DomNode {
    fn claim(&self, marker: &str) -> bool {
        if self.0.has_attribute(marker) {
            return false;
        }
        // A marker that cannot be set only costs idempotence, not the binding.
        let _ = self.0.set_attribute(marker, "");
        true
    }
}

/// A form's input control. Validity is surfaced through `aria-invalid`.
#[derive(Clone, Debug)]
pub struct DomInput(pub HtmlInputElement);

impl InputControl for DomInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_invalid(&self, invalid: bool) {
        if invalid {
            let _ = self.0.set_attribute("aria-invalid", "true");
        } else {
            let _ = self.0.remove_attribute("aria-invalid");
        }
    }
}

impl Surface for DomSurface {
    type Overlay = DomOverlay;
    type Trigger = DomNode;
    type Form = DomNode;
    type Input = DomInput;

    fn overlays(&self, config: &BinderConfig) -> Vec<DomOverlay> {
        elements(&self.document.get_elements_by_tag_name(config.overlay_tag))
            .map(DomOverlay)
            .collect()
    }

    fn dismiss_triggers(&self, overlay: &DomOverlay, config: &BinderConfig) -> Vec<DomNode> {
        elements(&overlay.0.get_elements_by_class_name(config.dismiss_class))
            .map(DomNode)
            .collect()
    }

    fn owner(&self, trigger: &DomNode, config: &BinderConfig) -> Option<DomOverlay> {
        // `closest` starts at the element itself; a trigger never owns itself.
        trigger
            .0
            .parent_element()?
            .closest(config.overlay_tag)
            .ok()
            .flatten()
            .map(DomOverlay)
    }

    fn forms(&self, config: &BinderConfig) -> Vec<DomNode> {
        elements(&self.document.get_elements_by_tag_name(config.form_tag))
            .map(DomNode)
            .collect()
    }

    fn inputs(&self, form: &DomNode, config: &BinderConfig) -> Vec<DomInput> {
        elements(&form.0.get_elements_by_tag_name(config.input_tag))
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(DomInput)
            .collect()
    }

    fn on_activate(&self, trigger: &DomNode, mut handler: Handler) -> Result<(), ListenError> {
        listen(&trigger.0, "click", move |_| handler())
    }

    fn on_value_change(&self, input: &DomInput, mut handler: Handler) -> Result<(), ListenError> {
        listen(&input.0, "input", move |_| handler())
    }

    fn suppress_submit(&self, form: &DomNode) -> Result<(), ListenError> {
        listen(&form.0, "submit", |event: Event| event.prevent_default())
    }
}

/// Iterates a live `HTMLCollection` in document order.
fn elements(collection: &HtmlCollection) -> impl Iterator<Item = Element> + '_ {
    (0..collection.length()).filter_map(|i| collection.item(i))
}

/// Attaches `handler` for `event` on `target` for the lifetime of the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), ListenError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| ListenError(describe(&err)))?;
    closure.forget();
    Ok(())
}
