use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::{ApiConfig, entities::app_errors::CoreError},
    submission::ports::ApiClient,
};

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    config: ApiConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ReqwestApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, CoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CoreError::InvalidConfiguration(format!("failed to build HTTP client: {}", e))
            })?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            "Initializing food map API client"
        );

        Ok(Self { config, client })
    }
}

fn map_transport_error(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        tracing::error!("Food map API request timed out: {}", e);
        return CoreError::Timeout;
    }
    tracing::error!("Food map API request failed: {}", e);
    CoreError::Network(e.to_string())
}

impl ApiClient for ReqwestApiClient {
    #[instrument(skip(self, body))]
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, CoreError> {
        let url = self.config.endpoint(path);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            // A broken error body still reports the status.
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.message);
            tracing::error!("Food map API error: {} - {}", status, text);
            return Err(CoreError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await.map_err(map_transport_error)?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Failed to parse food map API response: {}", e);
            CoreError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }
}
