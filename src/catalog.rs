//! Phone Catalog
//!
//! Option lists, the model search filter, and per-model detail lookup.

use serde_json::Value;
use std::collections::HashMap;

use crate::api::{ApiError, Backend, OptionsCatalog, Record};

/// Load state of the options catalog
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsState {
    Loading,
    Failed(ApiError),
    Loaded(OptionsCatalog),
}

impl OptionsState {
    pub fn from_result(result: Result<OptionsCatalog, ApiError>) -> Self {
        match result {
            Ok(catalog) => Self::Loaded(catalog),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load options");
                Self::Failed(e)
            }
        }
    }

    /// The catalog once loaded; an empty catalog otherwise
    pub fn catalog(&self) -> OptionsCatalog {
        match self {
            Self::Loaded(catalog) => catalog.clone(),
            _ => OptionsCatalog::default(),
        }
    }

    /// Status line rendered above the recommendation controls
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading options..."),
            Self::Failed(_) => Some("Failed to load options. Please ensure the backend is running."),
            Self::Loaded(_) => None,
        }
    }
}

/// Models whose name contains `filter`, ignoring case and surrounding
/// whitespace. Order is preserved; a blank filter keeps every model.
pub fn filter_models<'a>(models: &'a [String], filter: &str) -> Vec<&'a str> {
    let needle = filter.trim().to_lowercase();
    models
        .iter()
        .map(String::as_str)
        .filter(|model| needle.is_empty() || model.to_lowercase().contains(&needle))
        .collect()
}

/// Search box and model selection of the phone details panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelPicker {
    pub filter: String,
    pub selected: String,
}

impl ModelPicker {
    /// Select the first model if nothing is selected yet
    pub fn apply_default(&mut self, catalog: &OptionsCatalog) {
        if self.selected.is_empty() {
            if let Some(first) = catalog.phone_models.first() {
                self.selected = first.clone();
            }
        }
    }

    pub fn visible<'a>(&self, catalog: &'a OptionsCatalog) -> Vec<&'a str> {
        filter_models(&catalog.phone_models, &self.filter)
    }
}

/// Load state of the selected phone's detail record
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No model selected
    Empty,
    Loading,
    Failed,
    Loaded(Record),
}

impl DetailState {
    /// Placeholder text for every state except `Loaded`
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some("Select a model to view details."),
            Self::Loading => Some("Loading phone details..."),
            Self::Failed => Some("Failed to load phone details."),
            Self::Loaded(_) => None,
        }
    }
}

/// Detail records keyed by model name
///
/// A record is fetched at most once per model; failures are not cached.
#[derive(Debug, Clone, Default)]
pub struct PhoneLookup {
    cache: HashMap<String, Record>,
}

impl PhoneLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self, model: &str) -> Option<&Record> {
        self.cache.get(model)
    }

    pub fn insert(&mut self, model: &str, record: Record) {
        self.cache.insert(model.to_string(), record);
    }

    /// State to show as soon as `model` is selected: `Empty` for no model,
    /// `Loaded` on a cache hit, and `Loading` when a fetch is needed.
    pub fn begin(&self, model: &str) -> DetailState {
        if model.is_empty() {
            return DetailState::Empty;
        }
        match self.cached(model) {
            Some(record) => DetailState::Loaded(record.clone()),
            None => DetailState::Loading,
        }
    }

    /// Apply a finished fetch for `model`.
    ///
    /// A loaded record is always cached. The state is returned only while
    /// `current` still names `model`; a response for a selection that has
    /// since changed, or for a view that is gone (`None`), is dropped.
    pub fn settle(
        &mut self,
        model: &str,
        state: DetailState,
        current: Option<&str>,
    ) -> Option<DetailState> {
        if let DetailState::Loaded(record) = &state {
            self.insert(model, record.clone());
        }
        if current == Some(model) {
            Some(state)
        } else {
            tracing::debug!(model = %model, "Dropping details for a stale selection");
            None
        }
    }

    /// Resolve the detail state for `model`, fetching only on a cache miss.
    /// An empty model issues no request.
    pub async fn fetch<B>(&mut self, backend: &B, model: &str) -> DetailState
    where
        B: Backend + ?Sized,
    {
        match self.begin(model) {
            DetailState::Loading => {}
            ready => return ready,
        }

        let state = load_details(backend, model).await;
        self.settle(model, state.clone(), Some(model));
        state
    }
}

/// Fetch one model's detail record without caching
pub async fn load_details<B>(backend: &B, model: &str) -> DetailState
where
    B: Backend + ?Sized,
{
    if model.is_empty() {
        return DetailState::Empty;
    }

    tracing::debug!(model = %model, "Fetching phone details");
    match backend.phone(model).await {
        Ok(record) => DetailState::Loaded(record),
        Err(e) => {
            tracing::warn!(model = %model, error = %e, "Failed to load phone details");
            DetailState::Failed
        }
    }
}

/// Display text for a record value: strings unquoted, arrays comma-joined,
/// everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Two-column rows for a key/value list, in record order
pub fn record_rows(record: &Record) -> Vec<(String, String)> {
    record
        .iter()
        .map(|(key, value)| (key.clone(), display_value(value)))
        .collect()
}
