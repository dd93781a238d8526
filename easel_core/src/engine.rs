// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering engine contract.
//!
//! The rendering engine is an opaque, externally supplied module. The shim
//! needs exactly two things from it:
//!
//! - **Initialization**: an asynchronous step that either yields a usable
//!   engine or fails. Modelled by [`EngineModule`]; consumed once by
//!   [`bootstrap`].
//!
//! - **Redraw**: a synchronous, zero-argument trigger called once per frame.
//!   Modelled by [`Engine`].
//!
//! Everything else about the engine (its scene model, layout, and drawing) is
//! out of reach on purpose.

use core::fmt::Display;
use core::future::Future;

use crate::error::EngineInitError;
use crate::render_loop::RenderLoop;

/// An initialized rendering engine.
pub trait Engine {
    /// Failure reported by a redraw.
    type Error: Display;

    /// Redraws the engine's visual surface.
    ///
    /// Called synchronously from the frame callback; expected to fit in a
    /// frame budget.
    fn redraw(&mut self) -> Result<(), Self::Error>;
}

/// A not-yet-initialized engine module.
pub trait EngineModule {
    /// Engine produced by a successful initialization.
    type Engine: Engine;

    /// Loads and initializes the module.
    fn initialize(self) -> impl Future<Output = Result<Self::Engine, EngineInitError>>;
}

/// Initializes `module` and hands its engine to a new [`RenderLoop`].
///
/// This is the only suspension point of the shim. The returned loop is idle;
/// the backend starts it against its frame scheduler right away. A failure is
/// not retried.
pub async fn bootstrap<M: EngineModule>(
    module: M,
) -> Result<RenderLoop<M::Engine>, EngineInitError> {
    log::debug!("initializing rendering engine");
    match module.initialize().await {
        Ok(engine) => {
            log::info!("rendering engine initialized");
            Ok(RenderLoop::new(engine))
        }
        Err(err) => {
            log::error!("{err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString as _};

    use crate::render_loop::LoopState;

    #[derive(Debug)]
    struct Counter(u32);

    impl Engine for Counter {
        type Error = String;

        fn redraw(&mut self) -> Result<(), String> {
            self.0 += 1;
            Ok(())
        }
    }

    struct Ready;

    impl EngineModule for Ready {
        type Engine = Counter;

        async fn initialize(self) -> Result<Counter, EngineInitError> {
            Ok(Counter(0))
        }
    }

    struct Broken;

    impl EngineModule for Broken {
        type Engine = Counter;

        async fn initialize(self) -> Result<Counter, EngineInitError> {
            Err(EngineInitError::Initialize {
                message: "out of memory".to_string(),
            })
        }
    }

    #[test]
    fn bootstrap_yields_idle_loop() {
        let render = pollster::block_on(bootstrap(Ready)).unwrap();
        assert_eq!(render.state(), LoopState::Idle);
        assert_eq!(render.frames_drawn(), 0);
        assert_eq!(render.engine().0, 0);
    }

    #[test]
    fn bootstrap_failure_is_passed_through() {
        let err = pollster::block_on(bootstrap(Broken)).unwrap_err();
        assert_eq!(
            err,
            EngineInitError::Initialize {
                message: "out of memory".to_string()
            }
        );
    }
}
