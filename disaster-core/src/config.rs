//! Client configuration.
//!
//! Every field has a default so partial JSON (or none at all) yields a usable
//! configuration. Front-ends layer their own overrides on top: the web crate
//! reads compile-time environment variables, the tester reads CLI flags.
use crate::constants::{BAG_TIMER_SECS, CATALOG_PATH, DEFAULT_API_BASE, POLL_INTERVAL_MS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub api_base: String,
    pub poll_interval_ms: u32,
    pub bag_timer_secs: u32,
    /// Location of the item catalog spreadsheet.
    pub catalog_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval_ms: POLL_INTERVAL_MS,
            bag_timer_secs: BAG_TIMER_SECS,
            catalog_path: CATALOG_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Replace the backend origin, ignoring blank overrides.
    #[must_use]
    pub fn with_api_base(mut self, base: Option<&str>) -> Self {
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// Parse a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
