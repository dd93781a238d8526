// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral core of the easel page shim.
//!
//! `easel_core` holds everything about the shim that does not need a browser:
//! the render loop state machine, the engine contract, the declarative binder,
//! and the error and configuration types. It is `no_std` compatible (with
//! `alloc`), so the whole coordination logic can be exercised on the host
//! against fakes.
//!
//! # Architecture
//!
//! Two components share nothing but the host document's lifecycle:
//!
//! ```text
//!   EngineModule::initialize() ──► Engine ──► RenderLoop
//!                                                │ on_frame()
//!                                                ▼
//!                      FrameScheduler ◄── request_frame() ── redraw()
//!
//!   structure ready ──► Binder::bind(&Surface) ──► BindReport
//! ```
//!
//! **[`engine`]**: The [`Engine`](engine::Engine) and
//! [`EngineModule`](engine::EngineModule) contracts plus
//! [`bootstrap`](engine::bootstrap), the single await point of the shim.
//!
//! **[`frame`]**: [`FrameToken`](frame::FrameToken) and the
//! [`FrameScheduler`](frame::FrameScheduler) trait that backends implement on
//! top of their frame-scheduling primitive.
//!
//! **[`render_loop`]**: [`RenderLoop`](render_loop::RenderLoop), which owns
//! the engine handle and makes continuation an explicit state.
//!
//! **[`surface`]**: The document contract the binder works against.
//!
//! **[`bind`]**: [`Binder`](bind::Binder): overlay dismissal and single-field
//! validation, one idempotent pass at a time.
//!
//! **[`validity`]**: The derived validity flag.
//!
//! **[`config`]**: Engine location and binder selectors.
//!
//! **[`error`]**: The error taxonomy shared by every backend.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod bind;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod render_loop;
pub mod surface;
pub mod validity;
