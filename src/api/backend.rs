//! Backend Trait
//!
//! The five PhonePro API operations, independent of the HTTP stack that
//! carries them. The browser build implements this over `gloo-net`, the
//! native build over `reqwest`.

use async_trait::async_trait;

use super::dto::{
    LoginRequest, MessageResponse, OptionsCatalog, Record, RecommendationRequest,
    RecommendationResult, SignupRequest,
};
use super::error::ApiResult;

/// Common trait for all PhonePro API transports
///
/// Futures are not required to be `Send`: browser fetches are bound to the
/// single JS thread.
#[async_trait(?Send)]
pub trait Backend {
    /// `POST /signup`
    async fn signup(&self, request: &SignupRequest) -> ApiResult<MessageResponse>;

    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> ApiResult<MessageResponse>;

    /// `GET /options`
    async fn options(&self) -> ApiResult<OptionsCatalog>;

    /// `GET /phone/{model}`
    async fn phone(&self, model: &str) -> ApiResult<Record>;

    /// `POST /recommend`
    async fn recommend(&self, request: &RecommendationRequest) -> ApiResult<RecommendationResult>;
}
