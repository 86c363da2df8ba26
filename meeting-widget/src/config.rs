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

//! Construction inputs for a widget instance.
//!
//! [`MeetingWidgetConfig`] is what the widget consumes. [`RuntimeConfig`] is
//! the serialisable shape an embedding page hands over (as JSON or as a JS
//! object) and converts into it.

use serde::Deserialize;

use meeting_widget_types::{MeetingControl, VideoLayout};

use crate::callback::Callback;
use crate::controls::{
    default_controls, default_tab_indexes, CollapseRange, ControlsFn, TabIndexesFn,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingWidgetConfig {
    /// Meeting to subscribe to. `None` renders the loading view forever.
    pub meeting_id: Option<String>,
    /// Suppresses the authentication overlay; forwarded to the pre-join flow.
    pub meeting_password_or_pin: Option<String>,
    pub participant_name: Option<String>,
    pub layout: Option<VideoLayout>,
    pub controls: ControlsFn,
    pub controls_tab_indexes: TabIndexesFn,
    pub controls_collapse_range: CollapseRange,
    pub class_name: Option<String>,
    pub style: Option<String>,
}

impl Default for MeetingWidgetConfig {
    fn default() -> Self {
        Self {
            meeting_id: None,
            meeting_password_or_pin: None,
            participant_name: None,
            layout: None,
            controls: default_controls(),
            controls_tab_indexes: default_tab_indexes(),
            controls_collapse_range: CollapseRange::default(),
            class_name: None,
            style: None,
        }
    }
}

impl MeetingWidgetConfig {
    pub fn for_meeting(meeting_id: impl Into<String>) -> Self {
        Self {
            meeting_id: Some(meeting_id.into()),
            ..Self::default()
        }
    }

    pub fn with_passcode(mut self, passcode: impl Into<String>) -> Self {
        self.meeting_password_or_pin = Some(passcode.into());
        self
    }

    pub fn with_participant_name(mut self, name: impl Into<String>) -> Self {
        self.participant_name = Some(name.into());
        self
    }

    pub fn with_layout(mut self, layout: VideoLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_controls(mut self, controls: ControlsFn, tab_indexes: TabIndexesFn) -> Self {
        self.controls = controls;
        self.controls_tab_indexes = tab_indexes;
        self
    }

    pub fn with_collapse_range(mut self, range: CollapseRange) -> Self {
        self.controls_collapse_range = range;
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ControlSets<T> {
    pub active: Vec<T>,
    pub inactive: Vec<T>,
}

/// Configuration as provided by the embedding page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(default)]
    pub meeting_id: Option<String>,
    #[serde(default)]
    pub meeting_password_or_pin: Option<String>,
    #[serde(default)]
    pub participant_name: Option<String>,
    #[serde(default)]
    pub layout: Option<VideoLayout>,
    #[serde(default)]
    pub controls: Option<ControlSets<String>>,
    #[serde(default)]
    pub controls_tab_indexes: Option<ControlSets<i32>>,
    #[serde(default)]
    pub controls_collapse_range_start: Option<i32>,
    #[serde(default)]
    pub controls_collapse_range_end: Option<i32>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl RuntimeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_widget_config(self) -> Result<MeetingWidgetConfig, ConfigError> {
        let defaults = MeetingWidgetConfig::default();

        let controls = match self.controls {
            Some(sets) => {
                let active = parse_controls(&sets.active)?;
                let inactive = parse_controls(&sets.inactive)?;
                Callback::from(move |is_active: bool| {
                    if is_active {
                        active.clone()
                    } else {
                        inactive.clone()
                    }
                })
            }
            None => defaults.controls,
        };
        let controls_tab_indexes = match self.controls_tab_indexes {
            Some(sets) => Callback::from(move |is_active: bool| {
                if is_active {
                    sets.active.clone()
                } else {
                    sets.inactive.clone()
                }
            }),
            None => defaults.controls_tab_indexes,
        };
        let fallback = CollapseRange::default();

        Ok(MeetingWidgetConfig {
            meeting_id: self.meeting_id.filter(|id| !id.is_empty()),
            meeting_password_or_pin: self.meeting_password_or_pin,
            participant_name: self.participant_name,
            layout: self.layout,
            controls,
            controls_tab_indexes,
            controls_collapse_range: CollapseRange::new(
                self.controls_collapse_range_start.unwrap_or(fallback.start),
                self.controls_collapse_range_end.unwrap_or(fallback.end),
            ),
            class_name: self.class_name,
            style: self.style,
        })
    }
}

fn parse_controls(ids: &[String]) -> Result<Vec<MeetingControl>, ConfigError> {
    ids.iter()
        .map(|id| {
            id.parse::<MeetingControl>()
                .map_err(|_| ConfigError::InvalidControl(id.clone()))
        })
        .collect()
}
