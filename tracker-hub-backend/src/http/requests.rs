//! HTTP request methods

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::error::{BackendError, Result};
use crate::http_client::HttpUtils;

use super::HttpBackend;

impl HttpBackend {
    /// GET request, body of a 2xx response.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<String> {
        let request = self.client.get(self.url(endpoint));
        let (status, body) = HttpUtils::execute_request(request, "GET", endpoint).await?;
        HttpUtils::ensure_success(status, body, endpoint)
    }

    /// GET request carrying an `index` query parameter.
    pub(crate) async fn get_with_index(&self, endpoint: &str, index: usize) -> Result<String> {
        let url = format!("{}?index={index}", self.url(endpoint));
        let request = self.client.get(url);
        let (status, body) = HttpUtils::execute_request(request, "GET", endpoint).await?;
        HttpUtils::ensure_success(status, body, endpoint)
    }

    /// POST request with a JSON body, body of a 2xx response.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<String> {
        let payload = serde_json::to_vec(body).map_err(|e| BackendError::SerializationError {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        })?;

        let request = self
            .client
            .post(self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        let (status, body) = HttpUtils::execute_request(request, "POST", endpoint).await?;
        HttpUtils::ensure_success(status, body, endpoint)
    }
}
