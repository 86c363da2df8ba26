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

//! The embeddable meeting widget.
//!
//! Requires a [`MeetingsCtx`](crate::context::MeetingsCtx) in context. A
//! [`ParticipantCtx`](crate::context::ParticipantCtx) is optional; without
//! one the widget provides its own to the views below it.

use dioxus::prelude::*;
use meeting_widget::composer::{element_class, AuthOverlayProps, LivePlan};
use meeting_widget::{AuthPanel, MeetingWidgetConfig, PlanBody};

use crate::components::authentication::{GuestAuthentication, HostAuthentication};
use crate::components::badge::Badge;
use crate::components::control_bar::ControlBar;
use crate::components::inner_meeting::InnerMeeting;
use crate::components::member_roster::MemberRoster;
use crate::components::modal::Modal;
use crate::components::settings::MeetingSettings;
use crate::hooks::use_meeting_session;

#[component]
pub fn MeetingWidget(config: MeetingWidgetConfig, logo: Option<Element>) -> Element {
    let session = use_meeting_session(config);
    let plan = session.render_plan();

    let body = match plan.body {
        PlanBody::Loading => rsx! {
            div { class: element_class("loading-logo"), aria_busy: "true" }
        },
        PlanBody::Left { message } => rsx! {
            h3 { class: element_class("centered"), "{message}" }
        },
        PlanBody::Live(live) => render_live(*live),
    };

    rsx! {
        div {
            class: "{plan.root_class}",
            style: plan.style.unwrap_or_default(),
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_border_box_size() {
                    session.set_viewport_width(size.width);
                }
            },
            if let Some(logo) = logo {
                div { class: element_class("logo"), {logo} }
            }
            {body}
        }
    }
}

fn render_live(live: LivePlan) -> Element {
    let LivePlan {
        inner,
        roster,
        toast,
        control_bar,
        settings,
        authentication,
    } = live;

    rsx! {
        div { class: element_class("body"),
            InnerMeeting {
                variant: inner.variant,
                meeting_id: inner.meeting_id,
                layout: inner.layout,
                class: element_class("inner-meeting"),
            }
            if let Some(roster) = roster {
                MemberRoster {
                    meeting_id: roster.meeting_id,
                    class: element_class("member-roster"),
                    on_close: move |_| roster.on_close.emit(()),
                }
            }
            if let Some(text) = toast {
                Badge { class: element_class("media-state-toast"), "{text}" }
            }
        }
        ControlBar { bar: control_bar, class: element_class("control-bar") }
        if let Some(settings) = settings {
            Modal {
                title: "Settings".to_string(),
                aria_label: "Meeting settings window".to_string(),
                class: element_class("settings"),
                on_close: move |_| settings.on_close.emit(()),
                on_back: None,
                MeetingSettings { meeting_id: settings.meeting_id.clone() }
            }
        }
        if let Some(auth) = authentication {
            {render_authentication(auth)}
        }
    }
}

fn render_authentication(auth: AuthOverlayProps) -> Element {
    let AuthOverlayProps {
        meeting_id,
        panel,
        aria_label,
        on_close,
        on_back,
        switch_to_host,
        style,
    } = auth;
    let on_back = on_back.map(|back| EventHandler::new(move |_: ()| back.emit(())));

    let content = match panel {
        AuthPanel::Guest => rsx! {
            GuestAuthentication {
                meeting_id,
                class: element_class("authentication-guest"),
                style,
                switch_to_host: move |_| {
                    if let Some(switch_to_host) = &switch_to_host {
                        switch_to_host.emit(());
                    }
                },
            }
        },
        AuthPanel::Host => rsx! {
            HostAuthentication {
                meeting_id,
                class: element_class("authentication-host"),
            }
        },
    };

    rsx! {
        Modal {
            aria_label: aria_label.to_string(),
            class: element_class("authentication"),
            on_close: move |_| on_close.emit(()),
            on_back,
            {content}
        }
    }
}
