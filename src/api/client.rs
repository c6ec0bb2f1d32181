//! PhonePro REST API Client
//!
//! Native HTTP transport for the PhonePro API over `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use super::backend::Backend;
use super::dto::{
    LoginRequest, MessageResponse, OptionsCatalog, Record, RecommendationRequest,
    RecommendationResult, SignupRequest,
};
use super::endpoints::Endpoints;
use super::error::{decode_lenient, decode_strict, ApiError, ApiResult};
use crate::config::ApiConfig;

/// PhonePro REST API client
pub struct HttpBackend {
    client: Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    /// Create a client from the API section of the configuration
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send a request and return the body text of a success response
    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "Request succeeded");
            Ok(text)
        } else {
            tracing::warn!(%url, status = status.as_u16(), "Request rejected");
            Err(ApiError::rejected(status.as_u16(), &text))
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn signup(&self, request: &SignupRequest) -> ApiResult<MessageResponse> {
        let text = self
            .send(self.client.post(self.endpoints.signup()).json(request))
            .await?;
        Ok(decode_lenient(&text))
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<MessageResponse> {
        let text = self
            .send(self.client.post(self.endpoints.login()).json(request))
            .await?;
        Ok(decode_lenient(&text))
    }

    async fn options(&self) -> ApiResult<OptionsCatalog> {
        let text = self.send(self.client.get(self.endpoints.options())).await?;
        decode_strict(&text)
    }

    async fn phone(&self, model: &str) -> ApiResult<Record> {
        let text = self
            .send(self.client.get(self.endpoints.phone(model)))
            .await?;
        decode_strict(&text)
    }

    async fn recommend(&self, request: &RecommendationRequest) -> ApiResult<RecommendationResult> {
        let text = self
            .send(self.client.post(self.endpoints.recommend()).json(request))
            .await?;
        Ok(decode_lenient(&text))
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    tracing::warn!(error = %e, "Transport failure");
    if e.is_timeout() {
        ApiError::Transport("Request timeout".to_string())
    } else {
        ApiError::Transport(e.to_string())
    }
}
