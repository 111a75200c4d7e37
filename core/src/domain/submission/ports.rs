use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for the remote food map API.
#[cfg_attr(test, mockall::automock)]
pub trait ApiClient: Send + Sync {
    /// POST a JSON body to `path` and return the decoded response body.
    fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}
