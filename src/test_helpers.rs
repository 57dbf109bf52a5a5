//! Shared fixtures and assertions for the unit tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut record = valid_record();
//! record.business_name = Some("<b>Bold</b>".into());
//! assert_no_raw_markup(&sanitize(&record));
//! ```

use crate::record::{BusinessRecord, RawMenuItem, RawMenuItems};
use crate::sanitize::SanitizedRecord;

// =========================================================================
// Fixtures
// =========================================================================

/// A record that passes validation in both standard and strict mode.
pub fn valid_record() -> BusinessRecord {
    BusinessRecord {
        business_name: Some("Moonlight Café".into()),
        business_type: Some("coffee_shop".into()),
        tagline: Some("Coffee so dark it might wake the dead".into()),
        short_description: Some("A cozy café where shadows gather.".into()),
        contact_whatsapp: Some("628123456789".into()),
        instagram_handle: Some("moonlight_cafe".into()),
        theme_choice: Some("classic".into()),
        menu_items: Some(RawMenuItems::List(vec![
            RawMenuItem::new("Espresso", "Rp 15,000"),
            RawMenuItem::new("Latte", "Rp 28,000"),
        ])),
    }
}

/// [`valid_record`] as a JSON value, for tests that go through parsing.
pub fn valid_record_json() -> serde_json::Value {
    serde_json::json!({
        "business_name": "Moonlight Café",
        "business_type": "coffee_shop",
        "tagline": "Coffee so dark it might wake the dead",
        "short_description": "A cozy café where shadows gather.",
        "contact_whatsapp": "628123456789",
        "instagram_handle": "moonlight_cafe",
        "theme_choice": "classic",
        "menu_items": [
            { "name": "Espresso", "price": "Rp 15,000" },
            { "name": "Latte", "price": "Rp 28,000" }
        ]
    })
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert that no escaped field of `record` contains a raw HTML-significant
/// character.
pub fn assert_no_raw_markup(record: &SanitizedRecord) {
    let mut fields = vec![
        ("business_name", record.business_name.as_str()),
        ("business_type", record.business_type.as_str()),
        ("tagline", record.tagline.as_str()),
        ("short_description", record.short_description.as_str()),
        ("contact_whatsapp", record.contact_whatsapp.as_str()),
        ("instagram_handle", record.instagram_handle.as_str()),
    ];
    for item in &record.menu_items {
        fields.push(("menu item name", item.name.as_str()));
        fields.push(("menu item price", item.price.as_str()));
    }

    for (label, value) in fields {
        for c in ['<', '>', '"', '\''] {
            assert!(
                !value.contains(c),
                "{label} contains raw {c:?}: {value:?}"
            );
        }
    }
}
