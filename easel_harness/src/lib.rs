// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side test doubles for easel.
//!
//! - [`FakePage`]: an in-memory document implementing
//!   [`Surface`](easel_core::surface::Surface).
//! - [`FakeModule`] / [`FakeEngine`]: a scripted rendering engine.
//! - [`ManualFrames`]: a frame scheduler driven by the test, plus [`boot`],
//!   the blocking counterpart of the web backend's bootstrap.

#![no_std]

extern crate alloc;

mod engine;
mod frames;
mod page;

pub use engine::{FakeEngine, FakeModule};
pub use frames::{ManualFrames, boot};
pub use page::{FakeForm, FakeInput, FakeOverlay, FakePage, FakeTrigger, Submission};

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::bind::Binder;
    use easel_core::error::{BindingTargetAbsent, EngineInitError, PatternKind};
    use easel_core::frame::FrameToken;
    use easel_core::render_loop::LoopState;
    use easel_core::surface::Overlay as _;

    #[test]
    fn dialog_and_form_page() {
        let page = FakePage::new();
        let dialog = page.add_overlay(true);
        let _first = dialog.add_trigger();
        let second = dialog.add_trigger();
        let form = page.add_form();
        let name = form.add_input("");
        let other = form.add_input("x");

        let report = Binder::default().bind(&page);
        assert_eq!(report.triggers_bound, 2);
        assert_eq!(report.inputs_bound, 1);
        assert_eq!(report.submits_suppressed, 1);
        assert_eq!(page.handler_count(), 4);
        assert_eq!(other.handler_count(), 0, "only the first input is bound");

        second.activate();
        assert!(!dialog.is_open());

        name.type_text("a");
        assert!(!name.is_invalid());
        name.type_text("");
        assert!(name.is_invalid());

        assert!(!form.submit().navigated);
    }

    #[test]
    fn trigger_closes_only_its_own_overlay() {
        let page = FakePage::new();
        let overlays: alloc::vec::Vec<_> = (0..3).map(|_| page.add_overlay(true)).collect();
        for overlay in &overlays {
            overlay.add_trigger();
            overlay.add_trigger();
        }
        let empty = page.add_overlay(true);

        let report = Binder::default().bind(&page);
        assert_eq!(report.triggers_bound, 6);
        assert_eq!(
            report.absent,
            [BindingTargetAbsent {
                kind: PatternKind::Overlay,
                position: 3
            }]
        );

        overlays[1].triggers()[1].activate();
        assert!(overlays[0].is_open());
        assert!(!overlays[1].is_open());
        assert!(overlays[2].is_open());
        assert!(empty.is_open());

        // Closing an already closed overlay is harmless.
        overlays[1].triggers()[0].activate();
        assert!(!overlays[1].is_open());
    }

    #[test]
    fn nested_overlays_keep_their_own_triggers() {
        let page = FakePage::new();
        let outer = page.add_overlay(true);
        let outer_close = outer.add_trigger();
        let inner = page.add_nested_overlay(&outer, true);
        let inner_close = inner.add_trigger();

        let report = Binder::default().bind(&page);
        assert_eq!(report.triggers_bound, 2);
        assert_eq!(report.already_bound, 0);
        assert!(report.absent.is_empty());

        inner_close.activate();
        assert!(!inner.is_open());
        assert!(outer.is_open());

        inner.set_open(true);
        outer_close.activate();
        assert!(!outer.is_open());
        assert!(inner.is_open());
    }

    #[test]
    fn overlay_holding_only_nested_triggers_is_absent() {
        let page = FakePage::new();
        let outer = page.add_overlay(true);
        let inner = page.add_nested_overlay(&outer, true);
        inner.add_trigger();

        let report = Binder::default().bind(&page);
        assert_eq!(report.triggers_bound, 1);
        assert_eq!(
            report.absent,
            [BindingTargetAbsent {
                kind: PatternKind::Overlay,
                position: 0
            }]
        );
    }

    #[test]
    fn form_without_inputs_is_skipped() {
        let page = FakePage::new();
        let bare = page.add_form();
        let report = Binder::default().bind(&page);

        assert_eq!(report.handlers_attached(), 0);
        assert!(report.is_clean());
        assert_eq!(
            report.absent,
            [BindingTargetAbsent {
                kind: PatternKind::Form,
                position: 0
            }]
        );
        assert!(bare.submit().navigated, "nothing was bound");
    }

    #[test]
    fn other_inputs_never_touch_the_flag() {
        let page = FakePage::new();
        let form = page.add_form();
        let first = form.add_input("");
        let second = form.add_input("x");
        Binder::default().bind(&page);

        first.type_text("ok");
        second.type_text("");
        assert!(!first.is_invalid());
        assert!(!second.is_invalid());

        first.type_text("");
        second.type_text("filled");
        assert!(first.is_invalid());
    }

    #[test]
    fn validity_is_not_computed_at_bind_time() {
        let page = FakePage::new();
        let form = page.add_form();
        let input = form.add_input("");
        Binder::default().bind(&page);
        assert!(!input.is_invalid());
    }

    #[test]
    fn submission_is_suppressed_regardless_of_validity() {
        let page = FakePage::new();
        let form = page.add_form();
        let input = form.add_input("");
        Binder::default().bind(&page);

        input.type_text("");
        assert!(!form.submit().navigated);
        input.type_text("value");
        assert!(!form.submit().navigated);
    }

    #[test]
    fn rebinding_only_binds_new_markup() {
        let page = FakePage::new();
        let binder = Binder::default();
        let dialog = page.add_overlay(true);
        dialog.add_trigger();
        page.add_form().add_input("");
        binder.bind(&page);

        // Markup inserted later, as a mutation observer would see it.
        let late = dialog.add_trigger();
        let late_form = page.add_form();
        late_form.add_input("");

        let report = binder.bind(&page);
        assert_eq!(report.triggers_bound, 1);
        assert_eq!(report.inputs_bound, 1);
        assert_eq!(report.submits_suppressed, 1);
        assert_eq!(report.already_bound, 2);
        assert_eq!(page.handler_count(), 6);

        late.activate();
        assert!(!dialog.is_open());
        assert!(!late_form.submit().navigated);
    }

    #[test]
    fn detached_nodes_fail_locally() {
        let page = FakePage::new();
        let broken = page.add_form();
        broken.add_input("");
        broken.detach();
        let healthy = page.add_form();
        let input = healthy.add_input("");

        let report = Binder::default().bind(&page);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind, PatternKind::Form);
        assert_eq!(report.failures[0].position, 0);
        // The broken form still got its input handler; only submit failed.
        assert_eq!(report.inputs_bound, 2);
        assert_eq!(report.submits_suppressed, 1);

        input.type_text("");
        assert!(input.is_invalid());
        assert!(!healthy.submit().navigated);
    }

    #[test]
    fn empty_page_binds_nothing() {
        let page = FakePage::new();
        let report = Binder::default().bind(&page);
        assert_eq!(report, easel_core::bind::BindReport::default());
    }

    #[test]
    fn boot_schedules_and_redraws_every_frame() {
        let frames = ManualFrames::new();
        let mut render = boot(FakeModule::ready(FakeEngine::default()), &frames).unwrap();
        assert_eq!(render.state(), LoopState::Running);
        assert_eq!(frames.queued(), 1);

        assert_eq!(frames.run_frames(&mut render, 60), 60);
        assert_eq!(render.engine().draws(), 60);
        assert_eq!(frames.requested(), 61);
        assert_eq!(frames.queued(), 1, "exactly one frame is ever pending");
    }

    #[test]
    fn failed_bootstrap_schedules_nothing() {
        let frames = ManualFrames::new();
        let err = boot(FakeModule::unreachable("/static/wasm/uml_wasm.js"), &frames).unwrap_err();
        assert!(matches!(err, EngineInitError::Load { .. }));
        assert_eq!(frames.requested(), 0);

        let err = boot(FakeModule::rejecting("bad memory"), &frames).unwrap_err();
        assert_eq!(
            err,
            EngineInitError::Initialize {
                message: "bad memory".into()
            }
        );
        assert_eq!(frames.requested(), 0);

        // The binder does not care.
        let page = FakePage::new();
        let form = page.add_form();
        form.add_input("");
        assert!(Binder::default().bind(&page).is_clean());
    }

    #[test]
    fn redraw_failure_ends_the_sequence() {
        let frames = ManualFrames::new();
        let mut render = boot(FakeModule::ready(FakeEngine::failing_at(3)), &frames).unwrap();

        assert_eq!(frames.run_frames(&mut render, 10), 4);
        assert_eq!(render.state(), LoopState::Faulted);
        assert_eq!(render.engine().draws(), 3);
        assert_eq!(frames.queued(), 0);
        assert!(frames.run_frame(&mut render).is_none());
    }

    #[test]
    fn stop_is_a_clean_teardown() {
        let frames = ManualFrames::new();
        let mut render = boot(FakeModule::ready(FakeEngine::default()), &frames).unwrap();
        frames.run_frames(&mut render, 2);

        render.stop(&frames);
        assert_eq!(frames.queued(), 0);
        assert_eq!(frames.cancelled(), [FrameToken(3)]);
        assert!(frames.run_frame(&mut render).is_none());
        assert_eq!(render.engine().draws(), 2);
    }
}
