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

//! Point-in-time meeting state as delivered by a meeting source.
//!
//! Snapshots are immutable once published. A source that wants to change
//! anything publishes a new snapshot; consumers never write back into one.

use serde::{Deserialize, Serialize};

/// Where the local participant stands with respect to the meeting.
///
/// The absence of a meeting object is modelled as `Option::None` on
/// [`MeetingSnapshot::connection_state`], not as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionState {
    /// The meeting exists and the participant is on the pre-join screen.
    NotJoined,
    /// Joined the lobby, the host has not started the meeting yet.
    WaitingForHost,
    Joined,
    /// Terminal. No further transitions are expected for this meeting id.
    Left,
    /// Any state this build does not know about.
    #[serde(other)]
    Unknown,
}

impl ConnectionState {
    /// `true` once the participant is inside the meeting proper.
    pub fn is_active(&self) -> bool {
        matches!(self, ConnectionState::Joined)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConnectionState::NotJoined => "NOT_JOINED",
            ConnectionState::WaitingForHost => "WAITING_FOR_HOST",
            ConnectionState::Joined => "JOINED",
            ConnectionState::Left => "LEFT",
            ConnectionState::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// Presence of a local capture stream (microphone or camera).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalMedia {
    pub stream_present: bool,
}

impl LocalMedia {
    pub fn present() -> Self {
        Self {
            stream_present: true,
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }
}

/// Immutable view of one meeting as seen by the local participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSnapshot {
    /// Opaque meeting identifier, stable for the session.
    pub id: String,
    /// `None` until the meeting object has been created.
    #[serde(default)]
    pub connection_state: Option<ConnectionState>,
    #[serde(default)]
    pub local_audio: LocalMedia,
    #[serde(default)]
    pub local_video: LocalMedia,
    #[serde(default)]
    pub password_required: bool,
    #[serde(default)]
    pub roster_visible: bool,
    #[serde(default)]
    pub settings_visible: bool,
}

impl MeetingSnapshot {
    /// Snapshot for a meeting whose object has not been created yet.
    pub fn not_created(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            connection_state: None,
            local_audio: LocalMedia::absent(),
            local_video: LocalMedia::absent(),
            password_required: false,
            roster_visible: false,
            settings_visible: false,
        }
    }

    /// Snapshot for a freshly created meeting sitting on the pre-join screen.
    pub fn not_joined(id: impl Into<String>) -> Self {
        Self {
            connection_state: Some(ConnectionState::NotJoined),
            ..Self::not_created(id)
        }
    }

    pub fn with_state(mut self, state: ConnectionState) -> Self {
        self.connection_state = Some(state);
        self
    }

    pub fn exists(&self) -> bool {
        self.connection_state.is_some()
    }

    pub fn has_left(&self) -> bool {
        self.connection_state == Some(ConnectionState::Left)
    }
}
