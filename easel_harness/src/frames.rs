// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On-demand frame scheduling.
//!
//! [`ManualFrames`] stands in for `requestAnimationFrame`: requests queue a
//! token, and nothing runs until the test calls
//! [`run_frame`](ManualFrames::run_frame).

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use easel_core::engine::{Engine, EngineModule, bootstrap};
use easel_core::error::{EngineInitError, RedrawTickError};
use easel_core::frame::{FrameScheduler, FrameToken};
use easel_core::render_loop::RenderLoop;

/// A [`FrameScheduler`] whose frames are run explicitly.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: Cell<i32>,
    queued: RefCell<VecDeque<FrameToken>>,
    cancelled: RefCell<Vec<FrameToken>>,
}

impl ManualFrames {
    /// Creates a scheduler with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames waiting to run.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued.borrow().len()
    }

    /// Total frames ever requested.
    #[must_use]
    pub fn requested(&self) -> u64 {
        u64::try_from(self.next_id.get()).unwrap_or_default()
    }

    /// Tokens that were cancelled, in order.
    #[must_use]
    pub fn cancelled(&self) -> Vec<FrameToken> {
        self.cancelled.borrow().clone()
    }

    /// Runs the oldest queued frame against `render`.
    ///
    /// Returns `None` when nothing is queued.
    pub fn run_frame<E: Engine>(
        &self,
        render: &mut RenderLoop<E>,
    ) -> Option<Result<(), RedrawTickError>> {
        let _token = self.queued.borrow_mut().pop_front()?;
        Some(render.on_frame(self))
    }

    /// Runs up to `count` frames, stopping early when the queue drains or a
    /// redraw fails. Returns the number of frames run.
    pub fn run_frames<E: Engine>(&self, render: &mut RenderLoop<E>, count: usize) -> usize {
        let mut ran = 0;
        while ran < count {
            match self.run_frame(render) {
                Some(Ok(())) => ran += 1,
                Some(Err(_)) => return ran + 1,
                None => break,
            }
        }
        ran
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self) -> FrameToken {
        let token = FrameToken(self.next_id.get() + 1);
        self.next_id.set(token.0);
        self.queued.borrow_mut().push_back(token);
        token
    }

    fn cancel_frame(&self, token: FrameToken) {
        let mut queued = self.queued.borrow_mut();
        if let Some(pos) = queued.iter().position(|t| *t == token) {
            queued.remove(pos);
            self.cancelled.borrow_mut().push(token);
        }
    }
}

/// Initializes `module` and starts its loop on `frames`, blocking on the
/// initializer.
///
/// Host-side counterpart of the web backend's `boot`.
pub fn boot<M: EngineModule>(
    module: M,
    frames: &ManualFrames,
) -> Result<RenderLoop<M::Engine>, EngineInitError> {
    let mut render = pollster::block_on(bootstrap(module))?;
    render.start(frames);
    Ok(render)
}
