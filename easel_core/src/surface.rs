// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document contract for the binder.
//!
//! A [`Surface`] is whatever holds the page structure: the live DOM in the
//! browser, an in-memory tree in tests. It answers structural queries in
//! document order and attaches handlers; the [`Binder`](crate::bind::Binder)
//! decides what to attach.
//!
//! Node handles are cheap clones (reference-counted on both the web and in
//! the harness) so handlers can capture the node they act on.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::BinderConfig;
use crate::error::ListenError;

/// A node the binder can mark as bound.
pub trait Claim {
    /// Sets `marker` on the node.
    ///
    /// Returns `false` if the marker was already present, i.e. the node was
    /// bound by an earlier pass.
    fn claim(&self, marker: &str) -> bool;
}

/// A container with an open/closed state.
///
/// Equality is node identity.
pub trait Overlay: Clone + PartialEq + 'static {
    /// Opens or closes the overlay.
    fn set_open(&self, open: bool);

    /// Returns the current open state.
    fn is_open(&self) -> bool;
}

/// A form control carrying a string value and an accessibility validity flag.
pub trait InputControl: Clone + 'static {
    /// Current value.
    fn value(&self) -> String;

    /// Marks the control invalid for assistive technology, or clears the mark.
    fn set_invalid(&self, invalid: bool);
}

/// Handler attached to a node event.
pub type Handler = Box<dyn FnMut()>;

/// Page structure the binder scans and attaches behavior to.
///
/// All queries return nodes in document order.
pub trait Surface {
    /// Dismissible overlay.
    type Overlay: Overlay;
    /// Element that closes its owning overlay when activated.
    type Trigger: Claim;
    /// Form container.
    type Form: Claim;
    /// Input control inside a form.
    type Input: InputControl;

    /// Overlays currently in the document.
    fn overlays(&self, config: &BinderConfig) -> Vec<Self::Overlay>;

    /// Dismiss triggers anywhere inside `overlay`, including inside nested
    /// overlays.
    fn dismiss_triggers(&self, overlay: &Self::Overlay, config: &BinderConfig)
    -> Vec<Self::Trigger>;

    /// The nearest overlay enclosing `trigger`. This is the overlay the
    /// trigger dismisses.
    fn owner(&self, trigger: &Self::Trigger, config: &BinderConfig) -> Option<Self::Overlay>;

    /// Forms currently in the document.
    fn forms(&self, config: &BinderConfig) -> Vec<Self::Form>;

    /// Input controls inside `form`.
    fn inputs(&self, form: &Self::Form, config: &BinderConfig) -> Vec<Self::Input>;

    /// Runs `handler` whenever `trigger` is activated.
    fn on_activate(&self, trigger: &Self::Trigger, handler: Handler) -> Result<(), ListenError>;

    /// Runs `handler` whenever `input`'s value changes.
    fn on_value_change(&self, input: &Self::Input, handler: Handler) -> Result<(), ListenError>;

    /// Prevents the default submission action of `form`, always.
    fn suppress_submit(&self, form: &Self::Form) -> Result<(), ListenError>;
}
