//! State Management
//!
//! Browser-backed session storage.

pub mod storage;

pub use storage::LocalStorage;
