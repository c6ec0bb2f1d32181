//! Pages
//!
//! The two top-level views: signed out and signed in.

pub mod application;
pub mod auth;

pub use application::ApplicationView;
pub use auth::AuthView;
