use core::fmt::{Debug, Display};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "json-wire.toml";
pub const ENV_PREFIX: &str = "JSON_WIRE_";

fn default_url() -> String {
    "http://127.0.0.1:4444/wd/hub".to_owned()
}

/// Where the remote end lives and which session to talk to.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base url of the remote end, e.g. `http://127.0.0.1:4444/wd/hub`.
    #[serde(default = "default_url")]
    pub url: String,
    /// Fills the `:sessionId` placeholder of session scoped commands.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            session_id: None,
        }
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[must_use]
pub fn figment() -> Figment {
    Figment::new()
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX))
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(figment().extract()?)
}
