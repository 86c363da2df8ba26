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

//! The screen inside the widget body: the meeting itself, the pre-join
//! interstitial, or the waiting-for-host notice.

use dioxus::prelude::*;
use meeting_widget::{InnerMeetingVariant, MeetingsAdapter, VideoLayout};

use crate::context::{MeetingsCtx, ParticipantCtx};

#[component]
pub fn InnerMeeting(
    variant: InnerMeetingVariant,
    meeting_id: String,
    #[props(!optional)] layout: Option<VideoLayout>,
    #[props(default)] class: String,
) -> Element {
    match variant {
        InnerMeetingVariant::InMeeting => rsx! {
            InMeeting { meeting_id, layout, class }
        },
        InnerMeetingVariant::Interstitial => rsx! {
            InterstitialMeeting { meeting_id, class }
        },
        InnerMeetingVariant::WaitingForHost => rsx! {
            WaitingForHost { class }
        },
    }
}

#[component]
fn InMeeting(
    meeting_id: String,
    #[props(!optional)] layout: Option<VideoLayout>,
    class: String,
) -> Element {
    let layout = layout.unwrap_or_default();

    rsx! {
        div {
            class: "in-meeting {class}",
            "data-layout": "{layout:?}",
            div { class: "in-meeting-stage",
                div { class: "in-meeting-tile local", "You" }
            }
            p { class: "in-meeting-caption", "{meeting_id}" }
        }
    }
}

/// Pre-join screen. The participant name is pre-filled from the shared
/// participant context; joining forwards the stored passcode silently.
#[component]
fn InterstitialMeeting(meeting_id: String, class: String) -> Element {
    let meetings = use_context::<MeetingsCtx>();
    let participant = use_context::<ParticipantCtx>();
    let mut name = use_signal(|| participant.participant_name());

    let join = {
        let meeting_id = meeting_id.clone();
        let participant = participant.clone();
        move |_: MouseEvent| {
            participant.set_participant_name(&name.read());
            let passcode = participant.meeting_passcode();
            let passcode = (!passcode.is_empty()).then_some(passcode.as_str());
            log::info!("joining meeting {meeting_id}");
            meetings.adapter().join_meeting(&meeting_id, passcode);
        }
    };

    rsx! {
        div { class: "interstitial-meeting {class}",
            h2 { "Ready to join?" }
            label { r#for: "participant-name", "Your name" }
            input {
                id: "participant-name",
                class: "participant-name-input",
                r#type: "text",
                value: "{name}",
                placeholder: "Enter your name",
                oninput: move |evt: Event<FormData>| name.set(evt.value()),
            }
            button { class: "btn-apple btn-primary join-button", onclick: join, "Join meeting" }
        }
    }
}

#[component]
fn WaitingForHost(class: String) -> Element {
    rsx! {
        div { class: "waiting-for-host {class}",
            div { class: "waiting-room-icon",
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "64",
                    height: "64",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    circle { cx: "12", cy: "12", r: "10" }
                    polyline { points: "12 6 12 12 16 14" }
                }
            }
            h2 { "Waiting for the host" }
            p { class: "waiting-room-message", "The meeting will start when the host joins." }
            div { class: "waiting-room-spinner",
                div { class: "spinner-dot" }
                div { class: "spinner-dot" }
                div { class: "spinner-dot" }
            }
        }
    }
}
