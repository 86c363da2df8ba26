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

//! Identifiers for control-bar entries and remote video layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single control-bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingControl {
    MuteAudio,
    MuteVideo,
    ShareScreen,
    MemberRoster,
    Settings,
    LeaveMeeting,
    JoinMeeting,
}

impl MeetingControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingControl::MuteAudio => "mute-audio",
            MeetingControl::MuteVideo => "mute-video",
            MeetingControl::ShareScreen => "share-screen",
            MeetingControl::MemberRoster => "member-roster",
            MeetingControl::Settings => "settings",
            MeetingControl::LeaveMeeting => "leave-meeting",
            MeetingControl::JoinMeeting => "join-meeting",
        }
    }
}

impl fmt::Display for MeetingControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingControl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mute-audio" => Ok(MeetingControl::MuteAudio),
            "mute-video" => Ok(MeetingControl::MuteVideo),
            "share-screen" => Ok(MeetingControl::ShareScreen),
            "member-roster" => Ok(MeetingControl::MemberRoster),
            "settings" => Ok(MeetingControl::Settings),
            "leave-meeting" => Ok(MeetingControl::LeaveMeeting),
            "join-meeting" => Ok(MeetingControl::JoinMeeting),
            other => Err(format!("unknown meeting control: {other}")),
        }
    }
}

/// Arrangement applied to remote video inside the meeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum VideoLayout {
    #[default]
    Grid,
    Stack,
    Overlay,
    Prominent,
    Focus,
}

impl VideoLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoLayout::Grid => "Grid",
            VideoLayout::Stack => "Stack",
            VideoLayout::Overlay => "Overlay",
            VideoLayout::Prominent => "Prominent",
            VideoLayout::Focus => "Focus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_ids_match_wire_names() {
        for control in [
            MeetingControl::MuteAudio,
            MeetingControl::MuteVideo,
            MeetingControl::ShareScreen,
            MeetingControl::MemberRoster,
            MeetingControl::Settings,
            MeetingControl::LeaveMeeting,
            MeetingControl::JoinMeeting,
        ] {
            let json = serde_json::to_string(&control).unwrap();
            assert_eq!(json, format!("\"{}\"", control.as_str()));
            assert_eq!(control.as_str().parse::<MeetingControl>(), Ok(control));
        }
    }

    #[test]
    fn rejects_unknown_control() {
        assert!("raise-hand".parse::<MeetingControl>().is_err());
    }

    #[test]
    fn layout_uses_pascal_case() {
        let layout: VideoLayout = serde_json::from_str("\"Prominent\"").unwrap();
        assert_eq!(layout, VideoLayout::Prominent);
    }
}
