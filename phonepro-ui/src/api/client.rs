//! HTTP API Client
//!
//! Browser transport for the PhonePro REST API over `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use phonepro::api::error::{decode_lenient, decode_strict};
use phonepro::api::{
    ApiError, ApiResult, Backend, Endpoints, LoginRequest, MessageResponse, OptionsCatalog,
    Record, RecommendationRequest, RecommendationResult, SignupRequest, DEFAULT_API_BASE,
};

use crate::state::storage::LocalStorage;
use phonepro::SessionStore;

/// Local storage key for an API base URL override
pub const API_URL_KEY: &str = "phonepro_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = match LocalStorage.get(API_URL_KEY) {
        Ok(Some(url)) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE.to_string(),
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// PhonePro API reached through the browser's fetch
#[derive(Clone)]
pub struct BrowserBackend {
    endpoints: Endpoints,
}

impl BrowserBackend {
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::new(&get_api_base()),
        }
    }
}

impl Default for BrowserBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a response, turning non-success statuses into rejections
async fn read(response: Result<Response, gloo_net::Error>) -> ApiResult<String> {
    let response = response.map_err(|e| {
        web_sys::console::error_1(&format!("Network error: {}", e).into());
        ApiError::Transport(e.to_string())
    })?;

    // An unreadable body is treated like an empty one
    let text = response.text().await.unwrap_or_default();

    if response.ok() {
        Ok(text)
    } else {
        web_sys::console::warn_1(
            &format!("{} rejected with {}", response.url(), response.status()).into(),
        );
        Err(ApiError::rejected(response.status(), &text))
    }
}

async fn post<T: serde::Serialize>(url: &str, body: &T) -> ApiResult<String> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?;
    read(request.send().await).await
}

async fn get(url: &str) -> ApiResult<String> {
    read(Request::get(url).send().await).await
}

#[async_trait(?Send)]
impl Backend for BrowserBackend {
    async fn signup(&self, request: &SignupRequest) -> ApiResult<MessageResponse> {
        let text = post(&self.endpoints.signup(), request).await?;
        Ok(decode_lenient(&text))
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<MessageResponse> {
        let text = post(&self.endpoints.login(), request).await?;
        Ok(decode_lenient(&text))
    }

    async fn options(&self) -> ApiResult<OptionsCatalog> {
        let text = get(&self.endpoints.options()).await?;
        decode_strict(&text)
    }

    async fn phone(&self, model: &str) -> ApiResult<Record> {
        let text = get(&self.endpoints.phone(model)).await?;
        decode_strict(&text)
    }

    async fn recommend(&self, request: &RecommendationRequest) -> ApiResult<RecommendationResult> {
        let text = post(&self.endpoints.recommend(), request).await?;
        Ok(decode_lenient(&text))
    }
}
