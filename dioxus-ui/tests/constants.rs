// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for reading the runtime configuration from `window.__APP_CONFIG`.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{inject_app_config, remove_app_config};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use meeting_widget::{ConfigError, VideoLayout};
use meeting_widget_ui::constants::app_config;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_config_is_reported() {
    remove_app_config();
    assert!(matches!(app_config(), Err(ConfigError::Missing(_))));
}

#[wasm_bindgen_test]
fn widget_and_demo_fields_are_read() {
    inject_app_config(&[
        ("meetingId", JsValue::from("standup")),
        ("layout", JsValue::from("Focus")),
        ("controlsCollapseRangeStart", JsValue::from(1)),
        ("demoMeetingPassword", JsValue::from("1234")),
    ]);

    let config = app_config().expect("config should parse");
    assert_eq!(config.widget.meeting_id.as_deref(), Some("standup"));
    assert_eq!(config.widget.layout, Some(VideoLayout::Focus));
    assert_eq!(config.widget.controls_collapse_range_start, Some(1));
    assert_eq!(config.demo_meeting_password.as_deref(), Some("1234"));

    let widget = config.widget.into_widget_config().unwrap();
    assert_eq!(widget.controls_collapse_range.start, 1);
    assert_eq!(widget.controls_collapse_range.end, -1);

    remove_app_config();
}

#[wasm_bindgen_test]
fn wrongly_typed_field_is_a_parse_error() {
    inject_app_config(&[("meetingId", JsValue::from(42))]);
    assert!(matches!(app_config(), Err(ConfigError::Parse(_))));
    remove_app_config();
}
