#![cfg(feature = "server")]
use std::env;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.atmo-aura.fr/api/v1";
pub const USER_AGENT: &str = "AirQualityApp/1.0";

/// Settings for calls to the Atmo AURA API.
#[derive(Clone)]
pub struct AtmoConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub user_agent: String,
}

impl AtmoConfig {
    /// Reads `ATMO_BASE_URL` and `ATMO_API_TOKEN`. Call after `.env` has been loaded.
    pub fn from_env() -> Self {
        let base_url = env::var("ATMO_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_token = env::var("ATMO_API_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self {
            base_url,
            api_token,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

// Never print the token.
impl fmt::Debug for AtmoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtmoConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
