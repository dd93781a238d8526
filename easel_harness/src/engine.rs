// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted rendering engine.

use alloc::string::{String, ToString as _};

use easel_core::engine::{Engine, EngineModule};
use easel_core::error::EngineInitError;

/// An engine that counts redraws and can be told to fail on one.
#[derive(Clone, Debug, Default)]
pub struct FakeEngine {
    draws: u64,
    fail_at: Option<u64>,
}

impl FakeEngine {
    /// An engine whose redraw number `draw` (zero-based) throws.
    #[must_use]
    pub fn failing_at(draw: u64) -> Self {
        Self {
            draws: 0,
            fail_at: Some(draw),
        }
    }

    /// Successful redraws so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Engine for FakeEngine {
    type Error = String;

    fn redraw(&mut self) -> Result<(), String> {
        if self.fail_at == Some(self.draws) {
            return Err("engine panicked while drawing".to_string());
        }
        self.draws += 1;
        Ok(())
    }
}

/// An engine module whose initialization outcome is fixed up front.
#[derive(Clone, Debug)]
pub struct FakeModule {
    outcome: Result<FakeEngine, EngineInitError>,
}

impl FakeModule {
    /// A module that initializes into `engine`.
    #[must_use]
    pub fn ready(engine: FakeEngine) -> Self {
        Self {
            outcome: Ok(engine),
        }
    }

    /// A module that fails to load from `module`.
    #[must_use]
    pub fn unreachable(module: &str) -> Self {
        Self {
            outcome: Err(EngineInitError::Load {
                module: module.to_string(),
                message: "404 Not Found".to_string(),
            }),
        }
    }

    /// A module whose initializer rejects with `message`.
    #[must_use]
    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: Err(EngineInitError::Initialize {
                message: message.to_string(),
            }),
        }
    }
}

impl EngineModule for FakeModule {
    type Engine = FakeEngine;

    async fn initialize(self) -> Result<FakeEngine, EngineInitError> {
        self.outcome
    }
}
