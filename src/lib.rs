//! # PhonePro
//!
//! Client for the PhonePro phone recommendation service: sign in, browse
//! phone specifications, tune the desired attributes and ask the backend
//! for a recommended model.
//!
//! This crate holds the view-independent client core shared by the Leptos
//! frontend (`phonepro-ui`) and the native `phonepro` terminal client.
//!
//! ## Modules
//!
//! - [`api`]: Wire types, endpoints, errors and the [`Backend`] trait
//! - [`session`]: Persisted sign-in identity
//! - [`auth`]: Login and signup forms
//! - [`catalog`]: Option lists, model filter and phone detail lookup
//! - [`recommend`]: Recommendation form, request and result rendering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phonepro::api::HttpBackend;
//! use phonepro::config::Config;
//! use phonepro::recommend::{self, RecommendationForm, ResultView};
//! use phonepro::Backend;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let backend = HttpBackend::new(&config.api)?;
//!
//!     let catalog = backend.options().await?;
//!     let mut form = RecommendationForm::default();
//!     form.apply_defaults(&catalog);
//!
//!     let result = recommend::submit(&backend, &form).await?;
//!     let view = ResultView::from_result(&result);
//!     println!("Suggested: {:?}", view.suggested_model);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod message;
pub mod recommend;
pub mod session;

#[cfg(feature = "native")]
pub mod config;

// Re-export top-level types for convenience
pub use api::{
    ApiError, ApiResult, Backend, Endpoints, OptionsCatalog, Record, RecommendationRequest,
    RecommendationResult,
};

pub use auth::{AuthMode, AuthOutcome, AuthState, LoginForm, SignupForm, ValidationError};

pub use catalog::{filter_models, DetailState, ModelPicker, OptionsState, PhoneLookup};

pub use message::{Message, MessageKind};

pub use recommend::{RecommendState, RecommendationForm, ResultView, Slider};

pub use session::{MemoryStore, Session, SessionError, SessionStore, View, SESSION_KEY};

#[cfg(feature = "native")]
pub use session::FileStore;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
