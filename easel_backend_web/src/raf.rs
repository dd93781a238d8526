// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] hands each `requestAnimationFrame` callback to a
//! [`RenderLoop`], which redraws the engine and asks for the next frame
//! through the same callback. Redraw cadence is therefore whatever the browser
//! paces `requestAnimationFrame` at, including suspension in hidden tabs.
//!
//! A redraw failure faults the loop; the failure is forwarded to the page's
//! global error channel with `reportError`.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::ToString as _;
use core::cell::RefCell;

use easel_core::engine::Engine;
use easel_core::frame::{FrameScheduler, FrameToken};
use easel_core::render_loop::{LoopState, RenderLoop};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods; avoids
// fetching (and unwrapping) the Window object on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);

    #[wasm_bindgen(js_name = "reportError")]
    fn report_error(error: &JsValue);
}

type RafClosure = Closure<dyn FnMut(f64)>;

/// [`FrameScheduler`] over `requestAnimationFrame`, re-registering the loop's
/// own callback.
struct Raf<'a> {
    callback: &'a JsValue,
}

impl FrameScheduler for Raf<'_> {
    fn request_frame(&self) -> FrameToken {
        FrameToken(request_animation_frame(self.callback))
    }

    fn cancel_frame(&self, token: FrameToken) {
        cancel_animation_frame(token.0);
    }
}

/// Runs a [`RenderLoop`] on `requestAnimationFrame`.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start). The loop
/// re-registers itself each frame until [`stop`](Self::stop) is called, a
/// redraw fails, or the `RafLoop` is dropped.
pub struct RafLoop<E> {
    inner: Rc<RafInner<E>>,
}

struct RafInner<E> {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Stored in its own `RefCell` so the callback can reference it while it
    /// mutably borrows `render`.
    closure: RefCell<Option<RafClosure>>,

    /// Owns the engine handle and the continuation state.
    render: RefCell<RenderLoop<E>>,
}

impl<E: Engine + 'static> RafLoop<E> {
    /// Wraps `render`. The loop is **not yet running**.
    pub fn new(render: RenderLoop<E>) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                render: RefCell::new(render),
            }),
        }
    }

    /// Starts the animation loop by requesting the first frame.
    ///
    /// Returns `false` if the loop has faulted. If already running, this is a
    /// no-op.
    pub fn start(&self) -> bool {
        if self.inner.closure.borrow().is_none() {
            let inner = Rc::clone(&self.inner);
            let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
                let closure = inner.closure.borrow();
                let Some(closure) = closure.as_ref() else {
                    return;
                };
                let raf = Raf {
                    callback: closure.as_ref(),
                };

                // The borrow is scoped so `report_error` runs with the loop
                // released.
                let result = inner.render.borrow_mut().on_frame(&raf);
                if let Err(err) = result {
                    report_error(&js_sys::Error::new(&err.to_string()).into());
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        let closure = self.inner.closure.borrow();
        let Some(closure) = closure.as_ref() else {
            return false;
        };
        self.inner.render.borrow_mut().start(&Raf {
            callback: closure.as_ref(),
        })
    }

    /// Stops the animation loop.
    ///
    /// The pending `requestAnimationFrame` callback is cancelled. Can be
    /// restarted by calling [`start`](Self::start) again.
    pub fn stop(&self) {
        let closure = self.inner.closure.borrow();
        if let Some(closure) = closure.as_ref() {
            self.inner.render.borrow_mut().stop(&Raf {
                callback: closure.as_ref(),
            });
        }
    }

    /// Current state of the underlying [`RenderLoop`].
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.inner.render.borrow().state()
    }

    /// Returns `true` if the loop is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.render.borrow().is_running()
    }

    /// Number of frames redrawn so far.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.inner.render.borrow().frames_drawn()
    }
}

impl<E> Drop for RafLoop<E> {
    fn drop(&mut self) {
        if let Ok(render) = self.inner.render.try_borrow()
            && let Some(token) = render.pending()
        {
            cancel_animation_frame(token.0);
        }
        // Drop the JS closure so it (and the Rc cycle through it) doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl<E> core::fmt::Debug for RafLoop<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("RafLoop");
        match self.inner.render.try_borrow() {
            Ok(render) => s
                .field("state", &render.state())
                .field("frames_drawn", &render.frames_drawn()),
            Err(_) => s.field("state", &"<in frame>"),
        };
        s.finish()
    }
}
