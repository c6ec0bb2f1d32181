//! API Access
//!
//! Browser-side transport for the PhonePro API.

pub mod client;

pub use client::BrowserBackend;
