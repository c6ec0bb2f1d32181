//! Data Transfer Objects
//!
//! Request and response types exchanged with the PhonePro API.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An arbitrary JSON object, kept in server key order
pub type Record = Map<String, Value>;

// ============================================
// AUTH DTOs
// ============================================

/// Account creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body of `/signup` and `/login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================
// CATALOG DTOs
// ============================================

/// Option lists used to populate the selection controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsCatalog {
    #[serde(default)]
    pub brand_names: Vec<String>,
    #[serde(default)]
    pub processor_brands: Vec<String>,
    #[serde(default)]
    pub operating_systems: Vec<String>,
    #[serde(default)]
    pub phone_models: Vec<String>,
}

// ============================================
// RECOMMENDATION DTOs
// ============================================

/// Desired phone attributes sent to `/recommend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub price: u32,
    pub brand_name: String,
    #[serde(rename = "5G_or_not")]
    pub is_5g: bool,
    pub processor_brand: String,
    pub primary_camera_rear: u32,
    pub fast_charging: u32,
    pub battery_capacity: u32,
    pub ram_capacity: u32,
    pub internal_memory: u32,
    pub refresh_rate: u32,
    pub os: String,
}

/// Raw `/recommend` response
///
/// Usually carries `suggested_model` and `details`, but any object is
/// accepted and rendered generically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationResult(pub Record);

impl RecommendationResult {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_record(&self) -> &Record {
        &self.0
    }
}
