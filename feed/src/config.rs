use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_PANEL_WIDTH: usize = 56;

#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Base URL of the Gemini REST API (overridable for tests and proxies)
    pub gemini_api_url: String,
    pub model: String,
    pub request_timeout: Duration,
    /// Directory holding `interests.txt`
    pub home_dir: PathBuf,
    /// Column width of the terminal panel
    pub panel_width: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_api_url", &self.gemini_api_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .field("home_dir", &self.home_dir)
            .field("panel_width", &self.panel_width)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // `gemini_key` is the name older installs used in their .env
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("gemini_key"))
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let request_timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_positive("GEMINI_TIMEOUT_SECS", &value)?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let panel_width = match lookup("MYFEED_PANEL_WIDTH") {
            Some(value) => parse_positive("MYFEED_PANEL_WIDTH", &value)? as usize,
            None => DEFAULT_PANEL_WIDTH,
        };

        Ok(Self {
            gemini_api_key,
            gemini_api_url: lookup("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            request_timeout,
            home_dir: lookup("MYFEED_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            panel_width,
        })
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
