//! HTTP client for the generative-language API.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{GenerateRequest, GenerateResponse};

/// Generative-language API client.
///
/// Cheaply cloneable; the reqwest client and configuration are shared
/// behind an `Arc`.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                api_base: config.api_base.clone(),
                model: config.model.clone(),
            }),
        }
    }

    /// The configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.inner.model
    }

    /// Send a `generateContent` request against the configured model.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports an error, or
    /// the response body cannot be parsed.
    #[instrument(skip(self, request), fields(model = %self.inner.model))]
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GeminiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(&self.inner.model))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))
    }

    /// Forward an untyped request body to `model` and return the provider
    /// JSON unmodified. Used by the pass-through proxy route.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports an error, or
    /// the response body is not JSON.
    #[instrument(skip(self, body))]
    pub async fn generate_raw(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, GeminiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(model))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.inner.api_base)
    }

    /// Handle an error status code.
    async fn handle_error_status(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> GeminiError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return GeminiError::RateLimited(retry_after);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return GeminiError::Unauthorized("Invalid API key".to_string());
        }

        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    GeminiError::Api {
                        status: api_error.error.status,
                        message: api_error.error.message,
                    }
                } else {
                    GeminiError::Api {
                        status: status.to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => GeminiError::Http(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: SecretString::from("k9X#mQ2$vL8p@Rn4!wZ7"),
            model: "gemini-3-flash-preview".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new(&test_config());
        assert_eq!(
            client.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_gemini_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GeminiClient>();
    }

    #[test]
    fn test_gemini_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiClient>();
    }
}
