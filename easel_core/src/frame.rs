// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame requests.
//!
//! [`FrameToken`] is the handle a frame-scheduling primitive hands back when a
//! callback is queued. Backends assign them; core treats them as opaque and
//! only hands them back for cancellation.

use core::fmt;

/// Identifies one queued frame callback.
///
/// On the web this is the id returned by `requestAnimationFrame`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameToken(pub i32);

impl fmt::Debug for FrameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameToken({})", self.0)
    }
}

/// A platform facility that invokes the render loop once before the next
/// repaint.
///
/// The scheduler does not know what it is calling back; the backend wires its
/// callback to [`RenderLoop::on_frame`](crate::render_loop::RenderLoop::on_frame).
/// Each request yields a fresh [`FrameToken`].
pub trait FrameScheduler {
    /// Queues the frame callback for the next repaint.
    fn request_frame(&self) -> FrameToken;

    /// Cancels a callback queued by [`request_frame`](Self::request_frame).
    ///
    /// Cancelling a token whose callback already ran is a no-op.
    fn cancel_frame(&self, token: FrameToken);
}
