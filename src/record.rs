//! Raw business input, exactly as the user (or a tool caller) supplied it.
//!
//! Nothing here is trusted. Deserialization is deliberately lenient: a field
//! holding the wrong JSON type reads as absent instead of failing the whole
//! record, so the validator can report it and the sanitizer can neutralize it.
//!
//! ```json
//! {
//!   "business_name": "Moonlight Café",
//!   "business_type": "coffee_shop",
//!   "tagline": "Coffee so dark it might wake the dead",
//!   "short_description": "A mysteriously cozy café...",
//!   "contact_whatsapp": "628123456789",
//!   "instagram_handle": "moonlight_cafe",
//!   "theme_choice": "kiroween",
//!   "menu_items": [{ "name": "Midnight Espresso", "price": "Rp 15,000" }]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A business description captured for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub business_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_whatsapp: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub instagram_handle: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub theme_choice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<RawMenuItems>,
}

/// One menu line as typed by the user. Both halves are free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMenuItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
}

impl RawMenuItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price.into()),
        }
    }
}

/// The `menu_items` field when it is present at all.
///
/// `NotAList` keeps "the caller sent something that isn't an array" distinct
/// from "the caller sent nothing", since only the former is a validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMenuItems {
    List(Vec<RawMenuItem>),
    NotAList,
}

impl RawMenuItems {
    /// Items when this is a list, `None` otherwise.
    pub fn as_list(&self) -> Option<&[RawMenuItem]> {
        match self {
            RawMenuItems::List(items) => Some(items),
            RawMenuItems::NotAList => None,
        }
    }
}

impl<'de> Deserialize<'de> for RawMenuItems {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(elements) => RawMenuItems::List(
                elements
                    .into_iter()
                    .map(|element| match element {
                        Value::Object(_) => {
                            serde_json::from_value(element).unwrap_or_default()
                        }
                        _ => RawMenuItem::default(),
                    })
                    .collect(),
            ),
            _ => RawMenuItems::NotAList,
        })
    }
}

impl Serialize for RawMenuItems {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawMenuItems::List(items) => items.serialize(serializer),
            RawMenuItems::NotAList => serializer.serialize_none(),
        }
    }
}

/// Accept any JSON value; keep it only when it is a string.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl BusinessRecord {
    /// Parse a record from JSON text. Only syntactically invalid JSON or a
    /// non-object top level fails; wrong field types degrade to absent.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
