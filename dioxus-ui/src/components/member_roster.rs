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

use crate::context::ParticipantCtx;

/// Side panel listing the meeting's members. Closing it is a request to the
/// adapter; the panel stays until the next snapshot hides it.
#[component]
pub fn MemberRoster(
    meeting_id: String,
    #[props(default)] class: String,
    on_close: EventHandler<()>,
) -> Element {
    let participant = use_context::<ParticipantCtx>();
    let name = participant.participant_name();
    let display_name = if name.is_empty() { "You".to_string() } else { format!("{name} (you)") };

    rsx! {
        aside {
            class: "member-roster {class}",
            aria_label: "Participants in {meeting_id}",
            div { class: "member-roster-header",
                h3 { "Participants" }
                button {
                    class: "close-button",
                    aria_label: "Close participants",
                    onclick: move |_| on_close.call(()),
                    "\u{00d7}"
                }
            }
            ul { class: "member-roster-list",
                li { class: "member-roster-item local", "{display_name}" }
            }
        }
    }
}
