// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative interaction binding.
//!
//! [`Binder::bind`] makes one pass over a [`Surface`] and attaches two
//! behaviors to every matching pattern:
//!
//! 1. **Overlay dismissal**: each dismiss trigger closes its nearest
//!    enclosing overlay, and only that overlay.
//! 2. **Single-field validation**: the first input of each form re-derives
//!    its [`Validity`] on every change, and the form's default submission is
//!    always suppressed. Further inputs are left alone.
//!
//! Nodes are claimed with [`BinderConfig::bound_marker`] before handlers are
//! attached, so running the pass again (e.g. after new markup is inserted)
//! only binds what is new. Every node is handled independently: a failure is
//! recorded in the [`BindReport`] and the pass moves on.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::config::BinderConfig;
use crate::error::{BindError, BindingTargetAbsent, ListenError, PatternKind};
use crate::surface::{Claim as _, Overlay as _, Surface};
use crate::validity::Validity;

/// What a bind pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Dismiss triggers that received an activation handler.
    pub triggers_bound: usize,
    /// Inputs that received a value-change handler.
    pub inputs_bound: usize,
    /// Forms whose default submission is now suppressed.
    pub submits_suppressed: usize,
    /// Nodes skipped because an earlier pass bound them.
    pub already_bound: usize,
    /// Patterns with nothing to bind.
    pub absent: Vec<BindingTargetAbsent>,
    /// Per-node failures.
    pub failures: Vec<BindError>,
}

impl BindReport {
    /// Total number of handlers attached.
    #[must_use]
    pub fn handlers_attached(&self) -> usize {
        self.triggers_bound + self.inputs_bound + self.submits_suppressed
    }

    /// Returns `true` if every attempted attachment succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, kind: PatternKind, position: usize, err: ListenError) {
        let err = BindError {
            kind,
            position,
            message: err.0,
        };
        log::warn!("{err}");
        self.failures.push(err);
    }
}

/// Attaches overlay-dismissal and form-validation behavior to a [`Surface`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Binder {
    config: BinderConfig,
}

impl Binder {
    /// Creates a binder recognizing the patterns in `config`.
    #[must_use]
    pub const fn new(config: BinderConfig) -> Self {
        Self { config }
    }

    /// The patterns this binder recognizes.
    #[must_use]
    pub const fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Binds every overlay and form currently on `surface`.
    pub fn bind<S: Surface>(&self, surface: &S) -> BindReport {
        let mut report = BindReport::default();
        self.bind_overlays(surface, &mut report);
        self.bind_forms(surface, &mut report);
        log::debug!(
            "bind pass: {} trigger(s), {} input(s), {} form(s), {} already bound, {} absent, {} failed",
            report.triggers_bound,
            report.inputs_bound,
            report.submits_suppressed,
            report.already_bound,
            report.absent.len(),
            report.failures.len(),
        );
        report
    }

    fn bind_overlays<S: Surface>(&self, surface: &S, report: &mut BindReport) {
        let marker = self.config.bound_marker;
        for (position, overlay) in surface.overlays(&self.config).into_iter().enumerate() {
            // Triggers of nested overlays belong to those overlays.
            let triggers: Vec<_> = surface
                .dismiss_triggers(&overlay, &self.config)
                .into_iter()
                .filter(|trigger| surface.owner(trigger, &self.config).as_ref() == Some(&overlay))
                .collect();
            if triggers.is_empty() {
                report.absent.push(BindingTargetAbsent {
                    kind: PatternKind::Overlay,
                    position,
                });
                continue;
            }

            for trigger in triggers {
                if !trigger.claim(marker) {
                    report.already_bound += 1;
                    continue;
                }
                let owner = overlay.clone();
                let handler = Box::new(move || owner.set_open(false));
                match surface.on_activate(&trigger, handler) {
                    Ok(()) => report.triggers_bound += 1,
                    Err(err) => report.fail(PatternKind::Overlay, position, err),
                }
            }
        }
    }

    fn bind_forms<S: Surface>(&self, surface: &S, report: &mut BindReport) {
        let marker = self.config.bound_marker;
        for (position, form) in surface.forms(&self.config).into_iter().enumerate() {
            let Some(input) = surface.inputs(&form, &self.config).into_iter().next() else {
                report.absent.push(BindingTargetAbsent {
                    kind: PatternKind::Form,
                    position,
                });
                continue;
            };
            if !form.claim(marker) {
                report.already_bound += 1;
                continue;
            }

            let target = input.clone();
            let handler = Box::new(move || {
                Validity::refresh(&target);
            });
            match surface.on_value_change(&input, handler) {
                Ok(()) => report.inputs_bound += 1,
                Err(err) => report.fail(PatternKind::Form, position, err),
            }

            match surface.suppress_submit(&form) {
                Ok(()) => report.submits_suppressed += 1,
                Err(err) => report.fail(PatternKind::Form, position, err),
            }
        }
    }
}
