// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document.
//!
//! [`FakePage`] implements [`Surface`] over plain reference-counted nodes.
//! Tests build markup with the `add_*` methods, run a bind pass, then drive
//! user interaction with [`FakeTrigger::activate`], [`FakeInput::type_text`],
//! and [`FakeForm::submit`].

use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use easel_core::config::BinderConfig;
use easel_core::error::ListenError;
use easel_core::surface::{Claim, Handler, InputControl, Overlay, Surface};

/// Handlers attached to one node event.
#[derive(Clone, Default)]
struct Listeners(Rc<RefCell<Vec<Handler>>>);

impl Listeners {
    fn push(&self, handler: Handler) {
        self.0.borrow_mut().push(handler);
    }

    fn fire(&self) {
        for handler in self.0.borrow_mut().iter_mut() {
            handler();
        }
    }

    fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Listeners({})", self.len())
    }
}

/// Per-node state shared by claimable nodes.
#[derive(Clone, Debug, Default)]
struct NodeState {
    markers: Rc<RefCell<Vec<String>>>,
    detached: Rc<Cell<bool>>,
}

impl NodeState {
    fn claim(&self, marker: &str) -> bool {
        let mut markers = self.markers.borrow_mut();
        if markers.iter().any(|m| m == marker) {
            return false;
        }
        markers.push(marker.to_string());
        true
    }

    fn check_attached(&self) -> Result<(), ListenError> {
        if self.detached.get() {
            Err(ListenError("node is detached".to_string()))
        } else {
            Ok(())
        }
    }
}

/// An in-memory page.
#[derive(Debug, Default)]
pub struct FakePage {
    overlays: RefCell<Vec<FakeOverlay>>,
    forms: RefCell<Vec<FakeForm>>,
}

impl FakePage {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an overlay, initially open or closed.
    pub fn add_overlay(&self, open: bool) -> FakeOverlay {
        let mut overlays = self.overlays.borrow_mut();
        let overlay = FakeOverlay {
            id: overlays.len(),
            open: Rc::new(Cell::new(open)),
            triggers: Rc::default(),
            nested: Rc::default(),
        };
        overlays.push(overlay.clone());
        overlay
    }

    /// Appends an overlay nested inside `parent`.
    ///
    /// Its triggers are also found by a query on `parent`, as descendant
    /// queries do in a real document.
    pub fn add_nested_overlay(&self, parent: &FakeOverlay, open: bool) -> FakeOverlay {
        let overlay = self.add_overlay(open);
        parent.nested.borrow_mut().push(overlay.clone());
        overlay
    }

    /// Appends an empty form.
    pub fn add_form(&self) -> FakeForm {
        let form = FakeForm::default();
        self.forms.borrow_mut().push(form.clone());
        form
    }

    /// Total handlers attached anywhere on the page.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        let overlays: usize = self
            .overlays
            .borrow()
            .iter()
            .flat_map(|o| o.triggers())
            .map(|t| t.handler_count())
            .sum();
        let forms: usize = self
            .forms
            .borrow()
            .iter()
            .map(|f| {
                f.submit_handler_count()
                    + f.inputs().iter().map(FakeInput::handler_count).sum::<usize>()
            })
            .sum();
        overlays + forms
    }
}

/// A dismissible overlay.
#[derive(Clone, Debug)]
pub struct FakeOverlay {
    id: usize,
    open: Rc<Cell<bool>>,
    triggers: Rc<RefCell<Vec<FakeTrigger>>>,
    nested: Rc<RefCell<Vec<FakeOverlay>>>,
}

impl FakeOverlay {
    /// Appends a dismiss trigger directly inside this overlay.
    pub fn add_trigger(&self) -> FakeTrigger {
        let trigger = FakeTrigger {
            owner: self.id,
            ..FakeTrigger::default()
        };
        self.triggers.borrow_mut().push(trigger.clone());
        trigger
    }

    /// Dismiss triggers directly inside this overlay, in document order.
    #[must_use]
    pub fn triggers(&self) -> Vec<FakeTrigger> {
        self.triggers.borrow().clone()
    }

    fn descendant_triggers(&self) -> Vec<FakeTrigger> {
        let mut triggers = self.triggers();
        for nested in self.nested.borrow().iter() {
            triggers.extend(nested.descendant_triggers());
        }
        triggers
    }
}

impl PartialEq for FakeOverlay {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.open, &other.open)
    }
}

impl Overlay for FakeOverlay {
    fn set_open(&self, open: bool) {
        self.open.set(open);
    }

    fn is_open(&self) -> bool {
        self.open.get()
    }
}

/// An element that closes its owning overlay.
#[derive(Clone, Debug, Default)]
pub struct FakeTrigger {
    owner: usize,
    node: NodeState,
    on_click: Listeners,
}

impl FakeTrigger {
    /// Simulates a click.
    pub fn activate(&self) {
        self.on_click.fire();
    }

    /// Makes every later listener registration on this node fail.
    pub fn detach(&self) {
        self.node.detached.set(true);
    }

    /// Number of activation handlers attached.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.on_click.len()
    }
}

impl Claim for FakeTrigger {
    fn claim(&self, marker: &str) -> bool {
        self.node.claim(marker)
    }
}

/// A form container.
#[derive(Clone, Debug, Default)]
pub struct FakeForm {
    node: NodeState,
    inputs: Rc<RefCell<Vec<FakeInput>>>,
    on_submit: Rc<Cell<usize>>,
}

/// What happened when a form was submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    /// The default action ran, i.e. the page would have navigated.
    pub navigated: bool,
}

impl FakeForm {
    /// Appends an input with an initial value.
    pub fn add_input(&self, value: &str) -> FakeInput {
        let input = FakeInput {
            value: Rc::new(RefCell::new(value.to_string())),
            ..FakeInput::default()
        };
        self.inputs.borrow_mut().push(input.clone());
        input
    }

    /// Inputs in document order.
    #[must_use]
    pub fn inputs(&self) -> Vec<FakeInput> {
        self.inputs.borrow().clone()
    }

    /// Simulates submission. Navigation happens unless some handler prevented
    /// the default action.
    pub fn submit(&self) -> Submission {
        Submission {
            navigated: self.on_submit.get() == 0,
        }
    }

    /// Makes every later listener registration on this form fail.
    pub fn detach(&self) {
        self.node.detached.set(true);
    }

    /// Number of submission interceptors attached.
    #[must_use]
    pub fn submit_handler_count(&self) -> usize {
        self.on_submit.get()
    }
}

impl Claim for FakeForm {
    fn claim(&self, marker: &str) -> bool {
        self.node.claim(marker)
    }
}

/// A text input.
#[derive(Clone, Debug, Default)]
pub struct FakeInput {
    value: Rc<RefCell<String>>,
    invalid: Rc<Cell<bool>>,
    detached: Rc<Cell<bool>>,
    on_input: Listeners,
}

impl FakeInput {
    /// Replaces the value and dispatches a value-change event.
    pub fn type_text(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
        self.on_input.fire();
    }

    /// Whether the control is currently marked invalid.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid.get()
    }

    /// Makes every later listener registration on this input fail.
    pub fn detach(&self) {
        self.detached.set(true);
    }

    /// Number of value-change handlers attached.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.on_input.len()
    }
}

impl InputControl for FakeInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_invalid(&self, invalid: bool) {
        self.invalid.set(invalid);
    }
}

impl Surface for FakePage {
    type Overlay = FakeOverlay;
    type Trigger = FakeTrigger;
    type Form = FakeForm;
    type Input = FakeInput;

    fn overlays(&self, _config: &BinderConfig) -> Vec<FakeOverlay> {
        self.overlays.borrow().clone()
    }

    fn dismiss_triggers(&self, overlay: &FakeOverlay, _config: &BinderConfig) -> Vec<FakeTrigger> {
        overlay.descendant_triggers()
    }

    fn owner(&self, trigger: &FakeTrigger, _config: &BinderConfig) -> Option<FakeOverlay> {
        self.overlays.borrow().get(trigger.owner).cloned()
    }

    fn forms(&self, _config: &BinderConfig) -> Vec<FakeForm> {
        self.forms.borrow().clone()
    }

    fn inputs(&self, form: &FakeForm, _config: &BinderConfig) -> Vec<FakeInput> {
        form.inputs()
    }

    fn on_activate(&self, trigger: &FakeTrigger, handler: Handler) -> Result<(), ListenError> {
        trigger.node.check_attached()?;
        trigger.on_click.push(handler);
        Ok(())
    }

    fn on_value_change(&self, input: &FakeInput, handler: Handler) -> Result<(), ListenError> {
        if input.detached.get() {
            return Err(ListenError("node is detached".to_string()));
        }
        input.on_input.push(handler);
        Ok(())
    }

    fn suppress_submit(&self, form: &FakeForm) -> Result<(), ListenError> {
        form.node.check_attached()?;
        form.on_submit.set(form.on_submit.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_is_per_marker() {
        let trigger = FakeTrigger::default();
        assert!(trigger.claim("data-a"));
        assert!(!trigger.claim("data-a"));
        assert!(trigger.claim("data-b"));
    }

    #[test]
    fn unbound_form_navigates() {
        let page = FakePage::new();
        let form = page.add_form();
        assert!(form.submit().navigated);
    }
}
