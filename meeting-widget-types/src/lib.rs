/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Shared meeting-state types for the embeddable meeting widget.
//!
//! This crate defines the contract between whatever owns the live meeting
//! (a signalling adapter, a test fixture, an in-memory store) and the widget
//! that renders it. It is framework-agnostic: no Dioxus and no
//! web-sys.

pub mod controls;
pub mod snapshot;

pub use controls::{MeetingControl, VideoLayout};
pub use snapshot::{ConnectionState, LocalMedia, MeetingSnapshot};
