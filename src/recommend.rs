//! Recommendation Request
//!
//! Form state behind the recommendation controls, the payload sent to
//! `/recommend`, and the rendering model for its response.

use crate::api::{ApiError, Backend, OptionsCatalog, RecommendationRequest, RecommendationResult};
use crate::catalog::{display_value, record_rows};
use crate::message::Message;
use serde_json::Value;

/// Range and default of a numeric slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

/// Numeric controls of the recommendation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Price,
    RearCamera,
    Charging,
    Battery,
    Ram,
    Storage,
    RefreshRate,
}

impl Slider {
    /// Display order
    pub const ALL: [Slider; 7] = [
        Slider::Price,
        Slider::RearCamera,
        Slider::Charging,
        Slider::Battery,
        Slider::Ram,
        Slider::Storage,
        Slider::RefreshRate,
    ];

    /// Element id of the input
    pub fn id(self) -> &'static str {
        match self {
            Slider::Price => "price",
            Slider::RearCamera => "rearCam",
            Slider::Charging => "charging",
            Slider::Battery => "battery",
            Slider::Ram => "ram",
            Slider::Storage => "storage",
            Slider::RefreshRate => "refresh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slider::Price => "Price (INR)",
            Slider::RearCamera => "Primary Rear Camera (MP)",
            Slider::Charging => "Charging (W)",
            Slider::Battery => "Battery Capacity (mAh)",
            Slider::Ram => "RAM Capacity (GB)",
            Slider::Storage => "Internal Memory (GB)",
            Slider::RefreshRate => "Refresh Rate (Hz)",
        }
    }

    pub fn range(self) -> Range {
        let (min, max, step, default) = match self {
            Slider::Price => (0, 100_000, 1000, 15_000),
            Slider::RearCamera => (5, 108, 2, 64),
            Slider::Charging => (0, 120, 5, 25),
            Slider::Battery => (1000, 10_000, 100, 4500),
            Slider::Ram => (1, 16, 1, 6),
            Slider::Storage => (8, 1024, 64, 128),
            Slider::RefreshRate => (30, 144, 5, 90),
        };
        Range {
            min,
            max,
            step,
            default,
        }
    }
}

/// Current values of every recommendation control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationForm {
    pub price: u32,
    pub brand: String,
    pub support_5g: bool,
    pub processor: String,
    pub rear_camera: u32,
    pub charging: u32,
    pub battery: u32,
    pub ram: u32,
    pub storage: u32,
    pub refresh_rate: u32,
    pub os: String,
}

impl Default for RecommendationForm {
    fn default() -> Self {
        Self {
            price: Slider::Price.range().default,
            brand: String::new(),
            support_5g: true,
            processor: String::new(),
            rear_camera: Slider::RearCamera.range().default,
            charging: Slider::Charging.range().default,
            battery: Slider::Battery.range().default,
            ram: Slider::Ram.range().default,
            storage: Slider::Storage.range().default,
            refresh_rate: Slider::RefreshRate.range().default,
            os: String::new(),
        }
    }
}

impl RecommendationForm {
    pub fn get(&self, slider: Slider) -> u32 {
        match slider {
            Slider::Price => self.price,
            Slider::RearCamera => self.rear_camera,
            Slider::Charging => self.charging,
            Slider::Battery => self.battery,
            Slider::Ram => self.ram,
            Slider::Storage => self.storage,
            Slider::RefreshRate => self.refresh_rate,
        }
    }

    pub fn set(&mut self, slider: Slider, value: u32) {
        let field = match slider {
            Slider::Price => &mut self.price,
            Slider::RearCamera => &mut self.rear_camera,
            Slider::Charging => &mut self.charging,
            Slider::Battery => &mut self.battery,
            Slider::Ram => &mut self.ram,
            Slider::Storage => &mut self.storage,
            Slider::RefreshRate => &mut self.refresh_rate,
        };
        *field = value;
    }

    /// Fill brand, processor and OS from the first catalog entry.
    ///
    /// Only empty selections are filled, so re-running after every change
    /// never overwrites a user's choice.
    pub fn apply_defaults(&mut self, catalog: &OptionsCatalog) {
        fill_first(&mut self.brand, &catalog.brand_names);
        fill_first(&mut self.processor, &catalog.processor_brands);
        fill_first(&mut self.os, &catalog.operating_systems);
    }

    pub fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            price: self.price,
            brand_name: self.brand.clone(),
            is_5g: self.support_5g,
            processor_brand: self.processor.clone(),
            primary_camera_rear: self.rear_camera,
            fast_charging: self.charging,
            battery_capacity: self.battery,
            ram_capacity: self.ram,
            internal_memory: self.storage,
            refresh_rate: self.refresh_rate,
            os: self.os.clone(),
        }
    }
}

fn fill_first(value: &mut String, options: &[String]) {
    if value.is_empty() {
        if let Some(first) = options.first() {
            *value = first.clone();
        }
    }
}

/// Post the form to `/recommend`
pub async fn submit<B>(
    backend: &B,
    form: &RecommendationForm,
) -> Result<RecommendationResult, ApiError>
where
    B: Backend + ?Sized,
{
    let request = form.to_request();
    tracing::debug!(brand = %request.brand_name, price = request.price, "Requesting recommendation");

    let result = backend.recommend(&request).await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Recommendation failed");
    }
    result
}

/// View state of the recommendation panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendState {
    pub message: Option<Message>,
    pub loading: bool,
    pub result: Option<RecommendationResult>,
}

impl RecommendState {
    /// Clear the previous outcome and mark a request in flight
    pub fn begin(&mut self) {
        self.message = None;
        self.result = None;
        self.loading = true;
    }

    pub fn finish(&mut self, outcome: Result<RecommendationResult, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.message = Some(Message::success("Recommendation generated."));
            }
            Err(e) => {
                self.message = Some(Message::error(e.recommend_message()));
            }
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Getting Recommendation..."
        } else {
            "Get Recommendation"
        }
    }

    pub fn view(&self) -> Option<ResultView> {
        self.result.as_ref().map(ResultView::from_result)
    }
}

/// What the result box shows for a recommendation response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Present whenever the response has a `suggested_model` key
    pub suggested_model: Option<String>,
    /// Rows of the `details` record, when it is an object
    pub details: Option<Vec<(String, String)>>,
    /// Pretty-printed response, shown when there are no details
    pub raw: Option<String>,
}

impl ResultView {
    pub fn from_result(result: &RecommendationResult) -> Self {
        let suggested_model = result.get("suggested_model").map(|value| match value {
            Value::Null => String::new(),
            other => display_value(other),
        });

        let details = match result.get("details") {
            Some(Value::Object(record)) => Some(record_rows(record)),
            _ => None,
        };

        let raw = match details {
            Some(_) => None,
            None => Some(
                serde_json::to_string_pretty(result.as_record())
                    .unwrap_or_else(|_| "{}".to_string()),
            ),
        };

        Self {
            suggested_model,
            details,
            raw,
        }
    }
}
