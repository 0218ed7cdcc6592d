use crate::errors::FormResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Construction defaults for generated forms. Every field is optional in
/// the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub close_caption: String,
    pub trigger_caption: String,
    pub min_width: f64,
    pub min_height: f64,
    pub margin: f64,
    pub topmost: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            close_caption: "Close".to_string(),
            trigger_caption: "Open".to_string(),
            min_width: 300.0,
            min_height: 100.0,
            margin: 5.0,
            topmost: true,
        }
    }
}

impl FormConfig {
    pub fn from_json_str(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> FormResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
