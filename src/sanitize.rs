//! Neutralizes raw business input before it goes anywhere near a template.
//!
//! ## Rules
//!
//! | Field | Treatment | Max length |
//! |-------|-----------|-----------:|
//! | `business_name` | HTML-escape | 100 |
//! | `business_type` | HTML-escape | 50 |
//! | `tagline` | HTML-escape | 150 |
//! | `short_description` | HTML-escape | 500 |
//! | `contact_whatsapp` | keep `0-9` only | 20 |
//! | `instagram_handle` | keep `A-Za-z0-9_` only | 30 |
//! | menu item `name` | HTML-escape | 100 |
//! | menu item `price` | HTML-escape | 20 |
//!
//! Limits are applied to the *escaped* text and count characters, so a cut can
//! land inside an entity (`&am`). That is accepted; a cut never panics.
//!
//! ## Escape Once
//!
//! This is the only place in the crate that escapes. The template expander
//! inserts values verbatim, so the pipeline escapes exactly once.
//!
//! [`sanitize`] is total: every field is present in the output, absent input
//! becomes the empty string and unknown themes become [`Theme::Classic`].

use crate::record::{BusinessRecord, RawMenuItem, RawMenuItems};
use crate::theme::Theme;
use serde::Serialize;

/// Maximum output lengths, in characters.
pub struct LengthLimits;

impl LengthLimits {
    pub const BUSINESS_NAME: usize = 100;
    pub const BUSINESS_TYPE: usize = 50;
    pub const TAGLINE: usize = 150;
    pub const SHORT_DESCRIPTION: usize = 500;
    pub const CONTACT_WHATSAPP: usize = 20;
    pub const INSTAGRAM_HANDLE: usize = 30;
    pub const MENU_ITEM_NAME: usize = 100;
    pub const MENU_ITEM_PRICE: usize = 20;
}

/// A record whose every string is safe to drop into HTML as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedRecord {
    pub business_name: String,
    pub business_type: String,
    pub tagline: String,
    pub short_description: String,
    pub contact_whatsapp: String,
    pub instagram_handle: String,
    pub theme_choice: Theme,
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
}

/// Escape `& < > " '` as HTML entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep ASCII digits only.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Keep characters valid in an Instagram handle: ASCII letters, digits, `_`.
pub fn handle_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// First `max` characters of `input`.
pub fn truncate(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((byte_idx, _)) => input[..byte_idx].to_string(),
        None => input.to_string(),
    }
}

fn escaped(value: Option<&str>, max: usize) -> String {
    truncate(&escape_html(value.unwrap_or_default()), max)
}

fn sanitize_item(item: &RawMenuItem) -> MenuItem {
    MenuItem {
        name: escaped(item.name.as_deref(), LengthLimits::MENU_ITEM_NAME),
        price: escaped(item.price.as_deref(), LengthLimits::MENU_ITEM_PRICE),
    }
}

/// Produce the sanitized form of a raw record. Never fails.
pub fn sanitize(record: &BusinessRecord) -> SanitizedRecord {
    let menu_items = match &record.menu_items {
        Some(RawMenuItems::List(items)) => items.iter().map(sanitize_item).collect(),
        Some(RawMenuItems::NotAList) | None => Vec::new(),
    };

    SanitizedRecord {
        business_name: escaped(record.business_name.as_deref(), LengthLimits::BUSINESS_NAME),
        business_type: escaped(record.business_type.as_deref(), LengthLimits::BUSINESS_TYPE),
        tagline: escaped(record.tagline.as_deref(), LengthLimits::TAGLINE),
        short_description: escaped(
            record.short_description.as_deref(),
            LengthLimits::SHORT_DESCRIPTION,
        ),
        contact_whatsapp: truncate(
            &digits_only(record.contact_whatsapp.as_deref().unwrap_or_default()),
            LengthLimits::CONTACT_WHATSAPP,
        ),
        instagram_handle: truncate(
            &handle_chars(record.instagram_handle.as_deref().unwrap_or_default()),
            LengthLimits::INSTAGRAM_HANDLE,
        ),
        theme_choice: Theme::normalize(record.theme_choice.as_deref()),
        menu_items,
    }
}
