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

use dioxus::prelude::*;
use meeting_widget::{MeetingControl, MeetingsAdapter};

use crate::context::MeetingsCtx;

/// Body of the settings modal. Device toggles are routed through the adapter
/// like the matching control-bar buttons.
#[component]
pub fn MeetingSettings(meeting_id: String) -> Element {
    let meetings = use_context::<MeetingsCtx>();

    let toggle = move |control: MeetingControl| {
        let meetings = meetings.clone();
        let meeting_id = meeting_id.clone();
        move |_: MouseEvent| meetings.adapter().control_action(&meeting_id, control)
    };

    rsx! {
        div { class: "meeting-settings",
            div { class: "device-setting-group",
                span { "Microphone" }
                button {
                    class: "btn-apple btn-secondary",
                    onclick: toggle(MeetingControl::MuteAudio),
                    "Toggle microphone"
                }
            }
            div { class: "device-setting-group",
                span { "Camera" }
                button {
                    class: "btn-apple btn-secondary",
                    onclick: toggle(MeetingControl::MuteVideo),
                    "Toggle camera"
                }
            }
        }
    }
}
