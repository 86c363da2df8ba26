// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the meeting control bar.
//
// Covers tab order, click routing, and folding controls into the overflow
// menu when the bar is too narrow.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::RefCell;

use support::{
    cleanup, click, create_mount_point, create_sized_mount_point, exists, mount_dioxus, sleep_ms,
    yield_now,
};
use wasm_bindgen_test::*;

use dioxus::prelude::*;
use meeting_widget::composer::ControlBarProps as ControlBarPlan;
use meeting_widget::controls::{default_controls, default_tab_indexes};
use meeting_widget::{Callback as WidgetCallback, CollapseRange, MeetingControl};
use meeting_widget_ui::components::control_bar::ControlBar;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static CLICKED: RefCell<Vec<MeetingControl>> = const { RefCell::new(Vec::new()) };
}

fn plan(is_active: bool) -> ControlBarPlan {
    ControlBarPlan {
        meeting_id: "bar-1".to_string(),
        is_active,
        controls: default_controls(),
        tab_indexes: default_tab_indexes(),
        collapse_range: CollapseRange::default(),
        on_control: WidgetCallback::from(|control: MeetingControl| {
            CLICKED.with(|clicked| clicked.borrow_mut().push(control));
        }),
    }
}

fn rendered_controls(mount: &web_sys::Element, selector: &str) -> Vec<(String, String)> {
    let nodes = mount.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| {
            let element: &web_sys::Element = wasm_bindgen::JsCast::unchecked_ref(&node);
            (
                element.get_attribute("data-control").unwrap_or_default(),
                element.get_attribute("tabindex").unwrap_or_default(),
            )
        })
        .collect()
}

#[wasm_bindgen_test]
async fn active_bar_renders_default_controls_in_tab_order() {
    fn wrapper() -> Element {
        rsx! { ControlBar { bar: plan(true) } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert_eq!(
        rendered_controls(&mount, ".control-bar > button[data-control]"),
        vec![
            ("mute-audio".to_string(), "1".to_string()),
            ("mute-video".to_string(), "2".to_string()),
            ("share-screen".to_string(), "3".to_string()),
            ("member-roster".to_string(), "4".to_string()),
            ("settings".to_string(), "5".to_string()),
            ("leave-meeting".to_string(), "6".to_string()),
        ]
    );
    assert!(!exists(&mount, ".overflow-toggle"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn inactive_bar_offers_join() {
    fn wrapper() -> Element {
        rsx! { ControlBar { bar: plan(false) } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let controls = rendered_controls(&mount, ".control-bar > button[data-control]");
    assert_eq!(
        controls.last(),
        Some(&("join-meeting".to_string(), "1".to_string()))
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn clicking_a_control_reports_it() {
    CLICKED.with(|clicked| clicked.borrow_mut().clear());
    fn wrapper() -> Element {
        rsx! { ControlBar { bar: plan(true) } }
    }
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    click(&mount, "button[data-control='member-roster']");
    click(&mount, "button[data-control='mute-audio']");
    yield_now().await;

    CLICKED.with(|clicked| {
        assert_eq!(
            *clicked.borrow(),
            vec![MeetingControl::MemberRoster, MeetingControl::MuteAudio]
        );
    });

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn narrow_bar_collapses_into_overflow_menu() {
    fn wrapper() -> Element {
        rsx! { ControlBar { bar: plan(true) } }
    }
    // Room for three 64px slots: two controls plus the overflow button.
    let mount = create_sized_mount_point(200);
    mount_dioxus(wrapper, &mount).await;
    sleep_ms(50).await;
    yield_now().await;

    let visible: Vec<String> = rendered_controls(&mount, ".control-bar > button[data-control]")
        .into_iter()
        .map(|(control, _)| control)
        .collect();
    assert_eq!(visible, vec!["mute-audio", "leave-meeting"]);
    assert!(exists(&mount, ".overflow-toggle"));
    assert!(!exists(&mount, ".control-bar-menu"));

    click(&mount, ".overflow-toggle");
    yield_now().await;

    let collapsed: Vec<String> = rendered_controls(&mount, ".control-bar-menu button")
        .into_iter()
        .map(|(control, _)| control)
        .collect();
    assert_eq!(
        collapsed,
        vec!["mute-video", "share-screen", "member-roster", "settings"]
    );

    cleanup(&mount);
}
