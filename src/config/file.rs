//! JSON configuration document
//!
//! ```json
//! {
//!   "start_row": 0,
//!   "start_col": 0,
//!   "font_color": [0, 0, 0],
//!   "default_address": {"name": "...", "addr1": "...", "addr2": "",
//!                       "city": "...", "state": "..", "zipcode": "..."},
//!   "repeat_default": 0,
//!   "value_threshold": 20
//! }
//! ```
//!
//! Every key is optional. Unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::AddressRecord;

use super::defaults::DEFAULT_FONT_COLOR;

/// Raw configuration values as written in the file, before validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub start_row: i64,
    pub start_col: i64,
    pub font_color: (f32, f32, f32),
    pub default_address: AddressRecord,
    pub repeat_default: i64,
    pub value_threshold: Option<f64>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            start_row: 0,
            start_col: 0,
            font_color: DEFAULT_FONT_COLOR,
            default_address: AddressRecord::default(),
            repeat_default: 0,
            value_threshold: None,
        }
    }
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}
