//! Endpoint URLs
//!
//! Every transport builds its request URLs here so the browser and native
//! clients agree on paths and encoding.

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// URL builder rooted at an API base address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    /// Create a builder; trailing slashes on `base` are ignored
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn signup(&self) -> String {
        format!("{}/signup", self.base)
    }

    pub fn login(&self) -> String {
        format!("{}/login", self.base)
    }

    pub fn options(&self) -> String {
        format!("{}/options", self.base)
    }

    /// Detail URL for a model; the model name is percent-encoded
    pub fn phone(&self, model: &str) -> String {
        format!("{}/phone/{}", self.base, urlencoding::encode(model))
    }

    pub fn recommend(&self) -> String {
        format!("{}/recommend", self.base)
    }
}
