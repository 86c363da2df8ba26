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

/// Dialog on a dimmed backdrop. Clicking the backdrop or the close button
/// calls `on_close`; the dialog never hides itself.
#[component]
pub fn Modal(
    title: Option<String>,
    aria_label: String,
    #[props(default)] class: String,
    on_close: EventHandler<()>,
    /// Shows a back button when set.
    #[props(!optional)]
    on_back: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay visible",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal {class}",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{aria_label}",
                onclick: move |e: MouseEvent| e.stop_propagation(),
                div { class: "modal-header",
                    if let Some(on_back) = on_back {
                        button {
                            class: "back-button",
                            aria_label: "Back",
                            onclick: move |_| on_back.call(()),
                            "\u{2039}"
                        }
                    }
                    if let Some(title) = title.as_ref() {
                        h2 { "{title}" }
                    }
                    button {
                        class: "close-button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div { class: "modal-content", {children} }
            }
        }
    }
}
