//! UI Components
//!
//! Presentational building blocks shared by both views.

pub mod buttons;
pub mod card;
pub mod fields;
pub mod key_value;
pub mod loading;
pub mod message;

pub use buttons::{OutlineButton, PrimaryButton};
pub use card::SectionCard;
pub use fields::{RangeField, SelectField, TextField};
pub use key_value::KeyValueList;
pub use loading::{InlineLoading, Loading};
pub use message::MessageArea;
