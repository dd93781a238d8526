// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy.
//!
//! - [`EngineInitError`]: the engine module could not be loaded or
//!   initialized. Fatal to the render loop only.
//! - [`RedrawTickError`]: a redraw failed after the loop started. The loop
//!   does not recover from it.
//! - [`BindingTargetAbsent`]: a pattern had nothing to bind. Not an error;
//!   recorded so a pass can be inspected.
//! - [`BindError`]: registering a handler on one node failed. Local to that
//!   node.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// The engine module failed to load or initialize.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineInitError {
    /// The module at `module` could not be fetched or evaluated.
    #[error("failed to load engine module `{module}`: {message}")]
    Load {
        /// Module path that was requested.
        module: String,
        /// Platform-provided reason.
        message: String,
    },
    /// The module loaded but does not export `export` as a callable.
    #[error("engine module does not export a callable `{export}`")]
    MissingExport {
        /// Name of the missing export.
        export: String,
    },
    /// The module's initializer rejected.
    #[error("engine initialization failed: {message}")]
    Initialize {
        /// Platform-provided reason.
        message: String,
    },
}

/// A redraw failed during frame `frame_index`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("redraw failed on frame {frame_index}: {message}")]
pub struct RedrawTickError {
    /// Zero-based index of the frame whose redraw failed.
    pub frame_index: u64,
    /// Engine-provided reason.
    pub message: String,
}

/// Which markup pattern a binding outcome refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// A dismissible overlay, bound through its dismiss triggers.
    Overlay,
    /// A single-input form.
    Form,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlay => f.write_str("overlay"),
            Self::Form => f.write_str("form"),
        }
    }
}

/// A pattern instance had no qualifying sub-element: an overlay without
/// dismiss triggers, or a form without input controls.
///
/// `position` is the instance's index in document order among its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BindingTargetAbsent {
    /// Pattern that was skipped.
    pub kind: PatternKind,
    /// Document-order index of the instance.
    pub position: usize,
}

/// Registering a handler on one node failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to bind {kind} #{position}: {message}")]
pub struct BindError {
    /// Pattern the node belongs to.
    pub kind: PatternKind,
    /// Document-order index of the owning instance.
    pub position: usize,
    /// Platform-provided reason.
    pub message: String,
}

/// A listener could not be attached to a node.
///
/// Returned by [`Surface`](crate::surface::Surface) implementations; the
/// [`Binder`](crate::bind::Binder) attaches pattern and position to produce a
/// [`BindError`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ListenError(pub String);
