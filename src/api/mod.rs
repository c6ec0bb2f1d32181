//! PhonePro API
//!
//! Wire types, endpoint URLs, error handling and transports for the
//! PhonePro recommendation backend.
//!
//! ## Endpoints
//!
//! - `POST /signup` - create an account
//! - `POST /login` - check credentials
//! - `GET /options` - option lists for the selection controls
//! - `GET /phone/{model}` - detail record for one model
//! - `POST /recommend` - suggested model for the desired attributes

pub mod backend;
pub mod dto;
pub mod endpoints;
pub mod error;

#[cfg(feature = "native")]
pub mod client;

pub use backend::Backend;
pub use dto::{
    LoginRequest, MessageResponse, OptionsCatalog, Record, RecommendationRequest,
    RecommendationResult, SignupRequest,
};
pub use endpoints::{Endpoints, DEFAULT_API_BASE};
pub use error::{ApiError, ApiResult};

#[cfg(feature = "native")]
pub use client::HttpBackend;
