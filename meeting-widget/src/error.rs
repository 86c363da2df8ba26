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

//! Error types for widget configuration.
//!
//! Rendering itself never fails: a missing meeting is the loading view and an
//! unrecognised connection state falls back to waiting-for-host.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The embedding page did not provide any configuration object.
    #[error("Runtime configuration not found ({0} missing)")]
    Missing(String),

    /// The configuration object could not be parsed.
    #[error("Failed to parse runtime configuration: {0}")]
    Parse(String),

    #[error("Invalid control identifier: {0}")]
    InvalidControl(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
