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
use gloo_timers::callback::Timeout;
use meeting_widget::{InMemoryMeetings, MeetingSnapshot, ParticipantContext};
use meeting_widget_ui::components::config_error::ConfigError;
use meeting_widget_ui::constants::{app_config, AppConfig, DEMO_CREATE_DELAY_MS};
use meeting_widget_ui::{MeetingWidget, MeetingsCtx};

/// Simulated meeting backend for the demo page.
fn demo_meetings(config: &AppConfig) -> InMemoryMeetings {
    let meetings = InMemoryMeetings::new();
    let Some(meeting_id) = config.widget.meeting_id.clone() else {
        return meetings;
    };
    if let Some(password) = config.demo_meeting_password.as_deref() {
        meetings.require_password(&meeting_id, password);
    }

    let delay = config.demo_create_delay_ms.unwrap_or(DEMO_CREATE_DELAY_MS);
    let password_required = config.demo_meeting_password.is_some();
    let handle = meetings.clone();
    Timeout::new(delay, move || {
        log::info!("demo meeting {meeting_id} created");
        handle.insert(MeetingSnapshot {
            password_required,
            ..MeetingSnapshot::not_joined(meeting_id)
        });
    })
    .forget();

    meetings
}

/// App root component
#[component]
fn App() -> Element {
    let config = use_hook(app_config);
    let widget = use_hook(|| {
        config
            .clone()
            .and_then(|config| config.widget.into_widget_config())
    });
    use_context_provider(ParticipantContext::new);
    use_context_provider(|| {
        MeetingsCtx::new(config.as_ref().map(demo_meetings).unwrap_or_default())
    });

    match widget {
        Ok(widget) => rsx! {
            MeetingWidget { config: widget }
        },
        Err(e) => {
            log::error!("{e}");
            rsx! {
                ConfigError { message: e.to_string() }
            }
        }
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("failed to initialise logging: {e}").into());
    }

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
