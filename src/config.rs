//! Start-up configuration for the demo slider.
//!
//! A page can override the defaults with an inline JSON block:
//! `<script type="application/json" id="range-slider-config">{"domain_max": 50}</script>`.
//! Missing fields keep their defaults.

use crate::model::{ConfigError, SliderConfig};
use log::{error, info, warn};
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "range-slider-config";

// Defaults
pub const DEFAULT_DOMAIN_MIN: i64 = 0;
pub const DEFAULT_DOMAIN_MAX: i64 = 20;
pub const DEFAULT_INITIAL_MIN: i64 = 6;
pub const DEFAULT_INITIAL_MAX: i64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SliderConfigFile {
    pub domain_min: i64,
    pub domain_max: i64,
    pub initial_min: i64,
    pub initial_max: i64,
}

impl Default for SliderConfigFile {
    fn default() -> Self {
        Self {
            domain_min: DEFAULT_DOMAIN_MIN,
            domain_max: DEFAULT_DOMAIN_MAX,
            initial_min: DEFAULT_INITIAL_MIN,
            initial_max: DEFAULT_INITIAL_MAX,
        }
    }
}

impl SliderConfigFile {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(self) -> Result<SliderConfig, ConfigError> {
        SliderConfig::new(
            self.domain_min,
            self.domain_max,
            self.initial_min,
            self.initial_max,
        )
    }
}

fn read_inline() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Reads the page's inline config, if any. Unparseable JSON falls back to the
/// defaults; values that parse but are invalid are an error.
pub fn load() -> Result<SliderConfig, ConfigError> {
    let file = match read_inline() {
        Some(raw) => match SliderConfigFile::from_json(&raw) {
            Ok(file) => {
                info!("slider config loaded from #{CONFIG_ELEMENT_ID}");
                file
            }
            Err(err) => {
                warn!("{err}; using defaults");
                SliderConfigFile::default()
            }
        },
        None => SliderConfigFile::default(),
    };
    file.validate()
        .inspect_err(|err| error!("invalid slider configuration: {err}"))
}
