//! Gemini API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::domain::ports::{GenerateContentRequest, GenerateContentResponse, GenerationService};
use crate::error::GenerationError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Implementation of the Gemini `generateContent` client
pub struct GeminiClient {
    http: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, GenerationError> {
        let mut headers = HeaderMap::new();
        let mut key =
            HeaderValue::from_str(api_key).map_err(|_| GenerationError::InvalidApiKey)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        Self::new(
            &config.gemini_api_url,
            &config.gemini_api_key,
            config.request_timeout,
        )
    }

    fn api_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GenerationError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GenerationError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(GenerationError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(GenerationError::RateLimited)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GenerationError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Google error envelope: `{"error": {"code", "message", "status"}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the human-readable message out of an error body, or keep it raw.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let url = self.api_url(model);
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(request).send().await?;

        self.handle_response(response).await
    }
}
