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

//! View resolution: meeting snapshot + local UI state + viewport width in,
//! a [`ViewDescriptor`] out.
//!
//! [`resolve`] is a pure function. It is re-run on every input change and
//! its output is never mutated or cached.

use meeting_widget_types::{ConnectionState, MeetingSnapshot};

use crate::store::LocalUiState;

/// Widths at or below this (in CSS pixels) switch to the compact layout
/// whenever the roster is open.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryView {
    /// The meeting object does not exist yet.
    Loading,
    LeftNotice,
    Live,
}

/// Which screen is shown inside a live meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerMeetingVariant {
    InMeeting,
    /// The pre-join screen.
    Interstitial,
    WaitingForHost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub primary: PrimaryView,
    /// `Some` exactly when `primary` is [`PrimaryView::Live`].
    pub inner_meeting_variant: Option<InnerMeetingVariant>,
    pub show_roster: bool,
    pub show_toast: bool,
    pub show_settings_overlay: bool,
    pub show_auth_overlay: bool,
    pub compact_layout: bool,
}

impl ViewDescriptor {
    fn without_overlays(primary: PrimaryView) -> Self {
        Self {
            primary,
            inner_meeting_variant: None,
            show_roster: false,
            show_toast: false,
            show_settings_overlay: false,
            show_auth_overlay: false,
            compact_layout: false,
        }
    }

    pub fn loading() -> Self {
        Self::without_overlays(PrimaryView::Loading)
    }

    pub fn left_notice() -> Self {
        Self::without_overlays(PrimaryView::LeftNotice)
    }
}

/// Map a live connection state to the screen shown inside the meeting.
///
/// Anything that is neither joined nor on the pre-join screen renders the
/// waiting-for-host screen, including states this build does not recognise.
pub fn inner_variant(state: ConnectionState) -> InnerMeetingVariant {
    match state {
        ConnectionState::Joined => InnerMeetingVariant::InMeeting,
        ConnectionState::NotJoined => InnerMeetingVariant::Interstitial,
        ConnectionState::WaitingForHost => InnerMeetingVariant::WaitingForHost,
        ConnectionState::Left | ConnectionState::Unknown => InnerMeetingVariant::WaitingForHost,
    }
}

pub fn resolve(
    snapshot: &MeetingSnapshot,
    local_ui: &LocalUiState,
    viewport_width: f64,
) -> ViewDescriptor {
    let state = match snapshot.connection_state {
        None => return ViewDescriptor::loading(),
        Some(ConnectionState::Left) => return ViewDescriptor::left_notice(),
        Some(state) => state,
    };

    let show_roster = snapshot.roster_visible;
    ViewDescriptor {
        primary: PrimaryView::Live,
        inner_meeting_variant: Some(inner_variant(state)),
        show_roster,
        show_toast: local_ui.toast_visible(),
        show_settings_overlay: snapshot.settings_visible,
        show_auth_overlay: snapshot.password_required
            && !local_ui.passcode_supplied()
            && state == ConnectionState::NotJoined,
        compact_layout: show_roster && viewport_width <= COMPACT_BREAKPOINT_PX,
    }
}
