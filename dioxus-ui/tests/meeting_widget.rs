// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the MeetingWidget (Dioxus).
//
// Every test renders against one shared in-memory meeting store and uses its
// own meeting id, since widgets from earlier tests stay mounted in their
// detached roots.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, exists, mount_dioxus, sleep_ms, yield_now};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use dioxus::prelude::*;
use meeting_widget::{
    AdapterCall, ConnectionState, InMemoryMeetings, MeetingSnapshot, MeetingWidgetConfig,
};
use meeting_widget_ui::{MeetingWidget, MeetingsCtx};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static MEETINGS: InMemoryMeetings = InMemoryMeetings::new();
}

fn meetings() -> InMemoryMeetings {
    MEETINGS.with(Clone::clone)
}

fn provide_meetings() {
    use_context_provider(|| MeetingsCtx::new(meetings()));
}

fn calls_for(meeting_id: &str) -> Vec<AdapterCall> {
    meetings()
        .calls()
        .into_iter()
        .filter(|call| match call {
            AdapterCall::ToggleRoster(id)
            | AdapterCall::ToggleSettings(id)
            | AdapterCall::ClearPasswordRequired(id)
            | AdapterCall::Control(id, _) => id == meeting_id,
            AdapterCall::Join { meeting_id: id, .. } => id == meeting_id,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Primary views
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn shows_loading_until_the_meeting_exists() {
    fn wrapper() -> Element {
        provide_meetings();
        rsx! { MeetingWidget { config: MeetingWidgetConfig::for_meeting("loading-1") } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert!(exists(&mount, ".meeting-widget__loading-logo"));
    assert!(!exists(&mount, ".meeting-widget__body"));

    meetings().insert(MeetingSnapshot::not_joined("loading-1"));
    yield_now().await;

    assert!(!exists(&mount, ".meeting-widget__loading-logo"));
    assert!(
        exists(&mount, ".interstitial-meeting"),
        "a meeting that is not joined should show the pre-join screen"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn left_meeting_shows_only_the_notice() {
    meetings().insert(MeetingSnapshot {
        roster_visible: true,
        settings_visible: true,
        ..MeetingSnapshot::not_joined("left-1").with_state(ConnectionState::Left)
    });
    fn wrapper() -> Element {
        provide_meetings();
        rsx! { MeetingWidget { config: MeetingWidgetConfig::for_meeting("left-1") } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("You've successfully left the meeting"));
    assert!(!exists(&mount, ".control-bar"));
    assert!(!exists(&mount, ".member-roster"));
    assert!(!exists(&mount, "[role='dialog']"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn root_carries_caller_class_and_logo() {
    meetings().insert(MeetingSnapshot::not_joined("class-1"));
    fn wrapper() -> Element {
        provide_meetings();
        let mut config = MeetingWidgetConfig::for_meeting("class-1");
        config.class_name = Some("embedded".to_string());
        rsx! {
            MeetingWidget {
                config,
                logo: rsx! { span { class: "brand", "Acme" } },
            }
        }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert!(exists(&mount, ".meeting-widget.embedded"));
    assert!(exists(&mount, ".meeting-widget__logo .brand"));

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn closing_the_roster_asks_the_adapter_once() {
    meetings().insert(MeetingSnapshot {
        roster_visible: true,
        ..MeetingSnapshot::not_joined("roster-1").with_state(ConnectionState::Joined)
    });
    fn wrapper() -> Element {
        provide_meetings();
        rsx! { MeetingWidget { config: MeetingWidgetConfig::for_meeting("roster-1") } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert!(exists(&mount, ".meeting-widget__member-roster"));
    click(&mount, ".meeting-widget__member-roster .close-button");
    yield_now().await;

    assert_eq!(
        calls_for("roster-1"),
        vec![AdapterCall::ToggleRoster("roster-1".to_string())]
    );
    assert!(
        !exists(&mount, ".meeting-widget__member-roster"),
        "roster should close once the adapter publishes the cleared flag"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn closing_settings_asks_the_adapter() {
    meetings().insert(MeetingSnapshot {
        settings_visible: true,
        ..MeetingSnapshot::not_joined("settings-1").with_state(ConnectionState::Joined)
    });
    fn wrapper() -> Element {
        provide_meetings();
        rsx! { MeetingWidget { config: MeetingWidgetConfig::for_meeting("settings-1") } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert!(exists(&mount, "[aria-label='Meeting settings window']"));
    click(&mount, ".meeting-widget__settings .close-button");
    yield_now().await;

    assert_eq!(
        calls_for("settings-1"),
        vec![AdapterCall::ToggleSettings("settings-1".to_string())]
    );
    assert!(!exists(&mount, "[aria-label='Meeting settings window']"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn auth_overlay_moves_between_guest_and_host() {
    meetings().insert(MeetingSnapshot {
        password_required: true,
        ..MeetingSnapshot::not_joined("auth-1")
    });
    fn wrapper() -> Element {
        provide_meetings();
        rsx! { MeetingWidget { config: MeetingWidgetConfig::for_meeting("auth-1") } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert!(exists(&mount, "[aria-label='Meeting guest authentication']"));
    assert!(!exists(&mount, ".back-button"));

    click(&mount, ".switch-to-host");
    yield_now().await;
    assert!(exists(&mount, "[aria-label='Meeting host authentication']"));
    assert!(exists(&mount, ".authentication-host"));

    click(&mount, ".back-button");
    yield_now().await;
    assert!(exists(&mount, "[aria-label='Meeting guest authentication']"));
    assert!(
        calls_for("auth-1").is_empty(),
        "panel switches are local and must not reach the adapter"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn supplied_passcode_suppresses_the_auth_overlay() {
    meetings().insert(MeetingSnapshot {
        password_required: true,
        ..MeetingSnapshot::not_joined("auth-2")
    });
    fn wrapper() -> Element {
        provide_meetings();
        rsx! {
            MeetingWidget { config: MeetingWidgetConfig::for_meeting("auth-2").with_passcode("8675309") }
        }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert!(!exists(&mount, "[role='dialog']"));
    assert!(exists(&mount, ".interstitial-meeting"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn joining_forwards_the_supplied_passcode_and_name() {
    meetings().insert(MeetingSnapshot::not_joined("join-1"));
    meetings().require_password("join-1", "8675309");
    fn wrapper() -> Element {
        // No ParticipantCtx above the widget.
        provide_meetings();
        rsx! {
            MeetingWidget {
                config: MeetingWidgetConfig::for_meeting("join-1")
                    .with_passcode("8675309")
                    .with_participant_name("Ada"),
            }
        }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let name_input = mount
        .query_selector(".interstitial-meeting .participant-name-input")
        .unwrap()
        .expect("pre-join screen should ask for a name")
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    assert_eq!(name_input.value(), "Ada");

    click(&mount, ".join-button");
    yield_now().await;

    assert_eq!(
        calls_for("join-1"),
        vec![AdapterCall::Join {
            meeting_id: "join-1".to_string(),
            passcode: Some("8675309".to_string()),
        }]
    );
    assert!(exists(&mount, ".in-meeting"));
    assert!(!exists(&mount, "[role='dialog']"));

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Media-state toast
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn media_toast_shows_then_hides_after_three_seconds() {
    meetings().insert(MeetingSnapshot::not_joined("toast-1").with_state(ConnectionState::Joined));
    fn wrapper() -> Element {
        provide_meetings();
        rsx! { MeetingWidget { config: MeetingWidgetConfig::for_meeting("toast-1") } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let toast = mount
        .query_selector(".meeting-widget__media-state-toast")
        .unwrap()
        .expect("toast should be visible right after the meeting appears");
    assert_eq!(toast.text_content().unwrap_or_default(), "Muted, Camera off");

    sleep_ms(3_300).await;
    yield_now().await;
    assert!(!exists(&mount, ".meeting-widget__media-state-toast"));

    cleanup(&mount);
}
