//! # Application configuration (`dailydiet.toml`)
//!
//! Defines the TOML configuration read at startup by the native builds
//! (filename: [`DailyDietConfig::filename`] = `"dailydiet.toml"`). The web
//! build has no filesystem and starts from [`DailyDietConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3333"   # remote Daily Diet API
//!
//! [gamification]
//! celebration_secs = 5                 # level-up overlay duration, 0 disables it
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DailyDietConfig`] | Top-level config. Builder helpers (`new`, `with_celebration_secs`), TOML (de)serialisation, the canonical filename. |
//! | [`ApiConfig`] | Where the remote API lives. |
//! | [`GamificationConfig`] | Presentation knobs for the level-up celebration. |
//!
//! Every section has serde defaults, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dailydiet.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyDietConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub gamification: GamificationConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Gamification display configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GamificationConfig {
    /// How long the level-up overlay stays on screen, in seconds.
    #[serde(default = "default_celebration_secs")]
    pub celebration_secs: u32,
}

fn default_celebration_secs() -> u32 {
    5
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            celebration_secs: default_celebration_secs(),
        }
    }
}

impl DailyDietConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            gamification: GamificationConfig::default(),
        }
    }

    /// Builder method to set the level-up celebration duration.
    pub fn with_celebration_secs(mut self, secs: u32) -> Self {
        self.gamification.celebration_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dailydiet.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
