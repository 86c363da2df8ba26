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

//! Guest and host authentication panels shown when a meeting asks for a
//! password before joining.

use dioxus::prelude::*;
use meeting_widget::MeetingsAdapter;

use crate::context::{MeetingsCtx, ParticipantCtx};

#[component]
pub fn GuestAuthentication(
    meeting_id: String,
    #[props(default)] class: String,
    #[props(!optional)] style: Option<String>,
    switch_to_host: EventHandler<()>,
) -> Element {
    let meetings = use_context::<MeetingsCtx>();
    let participant = use_context::<ParticipantCtx>();
    let mut name = use_signal(|| participant.participant_name());
    let mut password = use_signal(|| participant.meeting_passcode());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        participant.set_participant_name(&name.read());
        participant.set_meeting_passcode(&password.read());
        let passcode = password.read().clone();
        meetings.adapter().join_meeting(&meeting_id, Some(&passcode));
    };

    rsx! {
        form {
            class: "authentication-guest {class}",
            style: style.unwrap_or_default(),
            onsubmit: submit,
            h2 { "Enter meeting password" }
            input {
                class: "participant-name-input",
                r#type: "text",
                placeholder: "Your name",
                value: "{name}",
                oninput: move |evt: Event<FormData>| name.set(evt.value()),
            }
            input {
                class: "meeting-password-input",
                r#type: "password",
                placeholder: "Meeting password",
                value: "{password}",
                oninput: move |evt: Event<FormData>| password.set(evt.value()),
            }
            button {
                class: "btn-apple btn-primary",
                r#type: "submit",
                disabled: password.read().is_empty(),
                "Start meeting"
            }
            button {
                class: "btn-apple btn-link switch-to-host",
                r#type: "button",
                onclick: move |_| switch_to_host.call(()),
                "I'm the host"
            }
        }
    }
}

#[component]
pub fn HostAuthentication(meeting_id: String, #[props(default)] class: String) -> Element {
    let meetings = use_context::<MeetingsCtx>();
    let participant = use_context::<ParticipantCtx>();
    let mut host_key = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let key = host_key.read().clone();
        participant.set_meeting_passcode(&key);
        meetings.adapter().join_meeting(&meeting_id, Some(&key));
    };

    rsx! {
        form {
            class: "authentication-host {class}",
            onsubmit: submit,
            h2 { "Sign in as host" }
            input {
                class: "host-key-input",
                r#type: "password",
                placeholder: "Host key",
                value: "{host_key}",
                oninput: move |evt: Event<FormData>| host_key.set(evt.value()),
            }
            button {
                class: "btn-apple btn-primary",
                r#type: "submit",
                disabled: host_key.read().is_empty(),
                "Start meeting"
            }
        }
    }
}
