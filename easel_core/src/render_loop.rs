// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The redraw loop.
//!
//! [`RenderLoop`] owns the engine handle and turns frame callbacks into
//! redraws. Continuation is explicit: the loop only requests the next frame
//! while it is [`Running`](LoopState::Running), so stopping is an ordinary
//! state transition instead of page teardown.
//!
//! ```text
//!   Idle ──start()──► Running ──stop()──► Stopped
//!                      │  ▲                  │
//!            redraw err│  └─────start()──────┘
//!                      ▼
//!                   Faulted
//! ```

use alloc::string::ToString as _;

use crate::engine::Engine;
use crate::error::RedrawTickError;
use crate::frame::{FrameScheduler, FrameToken};

/// Lifecycle of a [`RenderLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopState {
    /// Created, never started.
    Idle,
    /// Redrawing every frame.
    Running,
    /// Stopped by the owner; can be started again.
    Stopped,
    /// A redraw failed. Terminal.
    Faulted,
}

/// Drives an [`Engine`] once per frame.
///
/// The loop does not schedule anything on its own; a backend wires its frame
/// callback to [`on_frame`](Self::on_frame) and passes its
/// [`FrameScheduler`] in on every call.
#[derive(Debug)]
pub struct RenderLoop<E> {
    engine: E,
    state: LoopState,
    pending: Option<FrameToken>,
    frames_drawn: u64,
    frames_requested: u64,
}

impl<E: Engine> RenderLoop<E> {
    /// Creates an idle loop around an initialized engine.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: LoopState::Idle,
            pending: None,
            frames_drawn: 0,
            frames_requested: 0,
        }
    }

    /// Starts redrawing, requesting the first frame from `scheduler`.
    ///
    /// Returns `false` if the loop is faulted. Starting a running loop is a
    /// no-op that returns `true`.
    pub fn start(&mut self, scheduler: &impl FrameScheduler) -> bool {
        match self.state {
            LoopState::Running => true,
            LoopState::Faulted => false,
            LoopState::Idle | LoopState::Stopped => {
                self.state = LoopState::Running;
                self.request(scheduler);
                true
            }
        }
    }

    /// Stops redrawing and cancels the pending frame, if any.
    pub fn stop(&mut self, scheduler: &impl FrameScheduler) {
        if self.state != LoopState::Running {
            return;
        }
        self.state = LoopState::Stopped;
        if let Some(token) = self.pending.take() {
            scheduler.cancel_frame(token);
        }
        log::debug!("render loop stopped after {} frames", self.frames_drawn);
    }

    /// Handles one frame callback.
    ///
    /// Redraws, then requests the next frame. Does nothing unless running. A
    /// failed redraw faults the loop and no further frame is requested.
    pub fn on_frame(&mut self, scheduler: &impl FrameScheduler) -> Result<(), RedrawTickError> {
        self.pending = None;
        if self.state != LoopState::Running {
            return Ok(());
        }

        let frame_index = self.frames_drawn;
        if let Err(err) = self.engine.redraw() {
            self.state = LoopState::Faulted;
            let err = RedrawTickError {
                frame_index,
                message: err.to_string(),
            };
            log::error!("{err}");
            return Err(err);
        }
        self.frames_drawn += 1;

        self.request(scheduler);
        Ok(())
    }

    fn request(&mut self, scheduler: &impl FrameScheduler) {
        self.pending = Some(scheduler.request_frame());
        self.frames_requested += 1;
    }
}

impl<E> RenderLoop<E> {
    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Returns `true` while frames are being requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Token of the frame currently queued, if any.
    #[must_use]
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Number of successful redraws.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Number of frames requested from the scheduler.
    #[must_use]
    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// The engine handle.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    /// Engine that fails on a chosen redraw.
    struct Flaky {
        draws: u32,
        fail_on: Option<u32>,
    }

    impl Engine for Flaky {
        type Error = String;

        fn redraw(&mut self) -> Result<(), String> {
            if self.fail_on == Some(self.draws) {
                return Err(String::from("canvas lost"));
            }
            self.draws += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder {
        next: Cell<i32>,
        cancelled: RefCell<Vec<FrameToken>>,
    }

    impl FrameScheduler for Recorder {
        fn request_frame(&self) -> FrameToken {
            let id = self.next.get() + 1;
            self.next.set(id);
            FrameToken(id)
        }

        fn cancel_frame(&self, token: FrameToken) {
            self.cancelled.borrow_mut().push(token);
        }
    }

    fn healthy() -> RenderLoop<Flaky> {
        RenderLoop::new(Flaky {
            draws: 0,
            fail_on: None,
        })
    }

    #[test]
    fn start_requests_first_frame() {
        let sched = Recorder::default();
        let mut render = healthy();

        assert!(render.start(&sched));
        assert_eq!(render.state(), LoopState::Running);
        assert_eq!(render.pending(), Some(FrameToken(1)));
        assert_eq!(render.frames_requested(), 1);
        assert_eq!(render.frames_drawn(), 0);
    }

    #[test]
    fn each_frame_redraws_then_requests_next() {
        let sched = Recorder::default();
        let mut render = healthy();
        render.start(&sched);

        for _ in 0..5 {
            render.on_frame(&sched).unwrap();
        }
        assert_eq!(render.engine().draws, 5);
        assert_eq!(render.frames_drawn(), 5);
        assert_eq!(render.frames_requested(), 6);
        assert_eq!(render.pending(), Some(FrameToken(6)));
    }

    #[test]
    fn double_start_is_noop() {
        let sched = Recorder::default();
        let mut render = healthy();
        render.start(&sched);
        render.start(&sched);
        assert_eq!(render.frames_requested(), 1);
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let sched = Recorder::default();
        let mut render = healthy();
        render.start(&sched);
        render.on_frame(&sched).unwrap();

        render.stop(&sched);
        assert_eq!(render.state(), LoopState::Stopped);
        assert_eq!(render.pending(), None);
        assert_eq!(*sched.cancelled.borrow(), [FrameToken(2)]);

        // A callback that was already in flight draws nothing.
        render.on_frame(&sched).unwrap();
        assert_eq!(render.engine().draws, 1);
        assert_eq!(render.frames_requested(), 2);
    }

    #[test]
    fn stopped_loop_restarts() {
        let sched = Recorder::default();
        let mut render = healthy();
        render.start(&sched);
        render.stop(&sched);

        assert!(render.start(&sched));
        render.on_frame(&sched).unwrap();
        assert_eq!(render.engine().draws, 1);
        assert!(render.is_running());
    }

    #[test]
    fn idle_loop_ignores_frames() {
        let sched = Recorder::default();
        let mut render = healthy();
        render.on_frame(&sched).unwrap();
        render.stop(&sched);
        assert_eq!(render.state(), LoopState::Idle);
        assert_eq!(render.frames_requested(), 0);
        assert!(sched.cancelled.borrow().is_empty());
    }

    #[test]
    fn redraw_failure_faults_loop() {
        let sched = Recorder::default();
        let mut render = RenderLoop::new(Flaky {
            draws: 0,
            fail_on: Some(2),
        });
        render.start(&sched);
        render.on_frame(&sched).unwrap();
        render.on_frame(&sched).unwrap();

        let err = render.on_frame(&sched).unwrap_err();
        assert_eq!(err.frame_index, 2);
        assert_eq!(err.message, "canvas lost");
        assert_eq!(render.state(), LoopState::Faulted);
        assert_eq!(render.pending(), None);
        assert_eq!(render.frames_requested(), 3);

        assert!(!render.start(&sched), "faulted loop must not restart");
        assert_eq!(render.frames_requested(), 3);
    }
}
