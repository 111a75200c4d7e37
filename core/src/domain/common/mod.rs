use std::time::Duration;

use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;

pub const FALLBACK_BASE_URL: &str = "https://pwd-week4-rhdelife.onrender.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(5);
pub const MAX_RESET_DELAY: Duration = Duration::from_secs(86_400);

#[derive(Clone, Debug)]
pub struct FoodmapConfig {
    pub api: ApiConfig,
    pub form: FormConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub reset_delay: Duration,
}

impl ApiConfig {
    /// Resolves the base address from an optional configured value.
    ///
    /// Trailing slashes are stripped and a missing or blank value falls back to
    /// [`FALLBACK_BASE_URL`].
    pub fn from_base_url(raw: Option<&str>, timeout: Duration) -> Result<Self, CoreError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        let base_url = match trimmed.trim_end_matches('/') {
            "" => {
                tracing::info!("API base URL not set, using default: {FALLBACK_BASE_URL}");
                FALLBACK_BASE_URL.to_string()
            }
            value => value.to_string(),
        };

        Url::parse(&base_url).map_err(|e| {
            CoreError::InvalidConfiguration(format!("invalid API base URL {base_url:?}: {e}"))
        })?;

        Ok(Self { base_url, timeout })
    }

    /// Joins a request path onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
