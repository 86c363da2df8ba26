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

//! Meeting control bar with an overflow menu for collapsed controls.

use dioxus::prelude::*;
use meeting_widget::composer::ControlBarProps as ControlBarPlan;
use meeting_widget::controls::ControlSlot;
use meeting_widget::{arrange_controls, Callback as WidgetCallback, MeetingControl};

pub fn control_label(control: MeetingControl) -> &'static str {
    match control {
        MeetingControl::MuteAudio => "Mute",
        MeetingControl::MuteVideo => "Stop video",
        MeetingControl::ShareScreen => "Share screen",
        MeetingControl::MemberRoster => "Participants",
        MeetingControl::Settings => "Settings",
        MeetingControl::LeaveMeeting => "Leave meeting",
        MeetingControl::JoinMeeting => "Join meeting",
    }
}

#[component]
pub fn ControlBar(bar: ControlBarPlan, #[props(default)] class: String) -> Element {
    // Unmeasured until the first resize event; nothing collapses before that.
    let mut available_width = use_signal(|| None::<f64>);
    let mut menu_open = use_signal(|| false);

    let controls = bar.controls();
    let tab_indexes = bar.tab_indexes();
    let arranged = arrange_controls(
        &controls,
        &tab_indexes,
        bar.collapse_range,
        available_width().unwrap_or(f64::INFINITY),
    );
    let has_overflow = arranged.has_overflow();
    let on_control = bar.on_control.clone();

    rsx! {
        div {
            class: "control-bar {class}",
            role: "toolbar",
            aria_label: "Meeting controls",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_border_box_size() {
                    available_width.set(Some(size.width));
                }
            },
            for slot in arranged.visible {
                ControlButton {
                    key: "{slot.control}",
                    slot,
                    on_control: on_control.clone(),
                }
            }
            if has_overflow {
                div { class: "control-bar-overflow",
                    button {
                        class: "video-control-button overflow-toggle",
                        aria_haspopup: "menu",
                        aria_expanded: "{menu_open}",
                        aria_label: "More controls",
                        onclick: move |_| menu_open.toggle(),
                        "\u{22ef}"
                    }
                    if menu_open() {
                        div { class: "control-bar-menu", role: "menu",
                            for slot in arranged.collapsed {
                                ControlButton {
                                    key: "{slot.control}",
                                    slot,
                                    on_control: on_control.clone(),
                                    in_menu: true,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ControlButton(
    slot: ControlSlot,
    on_control: WidgetCallback<MeetingControl>,
    #[props(default = false)] in_menu: bool,
) -> Element {
    let control = slot.control;
    let label = control_label(control);
    let class = if control == MeetingControl::LeaveMeeting {
        "video-control-button danger"
    } else {
        "video-control-button"
    };

    rsx! {
        button {
            class: class,
            "data-control": "{control}",
            role: if in_menu { "menuitem" } else { "button" },
            tabindex: slot.tab_index.map(|index| index.to_string()),
            aria_label: label,
            onclick: move |_| on_control.emit(control),
            span { class: "tooltip", "{label}" }
        }
    }
}
