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

use meeting_widget::{ConfigError, RuntimeConfig};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global the embedding page sets before the bundle loads.
pub const APP_CONFIG_KEY: &str = "__APP_CONFIG";

/// Delay before the demo binary creates its meeting, so the loading view is
/// visible for a moment.
pub const DEMO_CREATE_DELAY_MS: u32 = 1_000;

/// `window.__APP_CONFIG` as read by the demo binary: the widget inputs plus a
/// couple of knobs for the in-memory meeting it simulates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(flatten)]
    pub widget: RuntimeConfig,
    /// Passcode the simulated meeting demands on join.
    #[serde(default)]
    pub demo_meeting_password: Option<String>,
    #[serde(default)]
    pub demo_create_delay_ms: Option<u32>,
}

pub fn app_config() -> Result<AppConfig, ConfigError> {
    let win = window().ok_or_else(|| ConfigError::Missing("window".to_string()))?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str(APP_CONFIG_KEY))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err(ConfigError::Missing(format!("window.{APP_CONFIG_KEY}")));
    }
    from_js_value::<AppConfig>(config).map_err(|e| ConfigError::Parse(e.to_string()))
}
