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

//! Framework-agnostic core of the embeddable meeting widget.
//!
//! A widget instance turns the latest [`MeetingSnapshot`] from a meeting
//! source, its own small local state and the current viewport width into a
//! [`ViewDescriptor`], then into a [`RenderPlan`] that any UI layer can draw.
//!
//! ```text
//!  MeetingSource ──snapshot──▶ MeetingSession ──resolve──▶ ViewDescriptor
//!        ▲                        │  ▲                          │
//!        │                        │  └── ToastScheduler         ▼
//!  MeetingsAdapter ◀──dismiss─────┴────────── compose ──▶ RenderPlan
//! ```
//!
//! The overlays for roster and settings belong to the meeting source: the
//! widget only ever asks the adapter to toggle them.

pub mod adapter;
pub mod callback;
pub mod composer;
pub mod config;
pub mod controls;
pub mod error;
pub mod resolver;
pub mod session;
pub mod store;
pub mod timers;
pub mod toast;

pub use adapter::{
    AdapterCall, InMemoryMeetings, MeetingAdapter, MeetingSource, MeetingsAdapter, Subscription,
};
pub use callback::Callback;
pub use composer::{compose, PlanBody, RenderPlan};
pub use config::{MeetingWidgetConfig, RuntimeConfig};
pub use controls::{arrange_controls, CollapseRange, ControlBarArrangement};
pub use error::ConfigError;
pub use resolver::{resolve, InnerMeetingVariant, PrimaryView, ViewDescriptor};
pub use session::MeetingSession;
pub use store::{AuthPanel, LocalUiState, ParticipantContext};
pub use timers::TimerService;
pub use toast::{ToastScheduler, TOAST_DURATION};

pub use meeting_widget_types::{
    ConnectionState, LocalMedia, MeetingControl, MeetingSnapshot, VideoLayout,
};
