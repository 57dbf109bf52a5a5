//! Pre-flight checks on raw input.
//!
//! Runs on the untouched [`BusinessRecord`], before sanitization, and collects
//! every problem it finds rather than stopping at the first. Messages name the
//! offending field so they can be shown to the user as-is.
//!
//! A record with no menu items (absent or `[]`) is valid: not every business
//! has a menu.

use crate::record::{BusinessRecord, RawMenuItems};
use crate::sanitize::LengthLimits;
use crate::theme::Theme;
use thiserror::Error;

/// How much to check beyond presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Required fields, theme name, and per-item completeness.
    #[default]
    Standard,
    /// Standard plus contact formats and length limits on the raw values.
    Strict,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// All validation errors for one record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed:\n{}", .0.join("\n"))]
pub struct ValidationError(pub Vec<String>);

impl ValidationReport {
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationError(self.errors))
        }
    }
}

const REQUIRED_FIELDS: [&str; 6] = [
    "business_name",
    "business_type",
    "tagline",
    "short_description",
    "contact_whatsapp",
    "instagram_handle",
];

fn field<'a>(record: &'a BusinessRecord, name: &str) -> Option<&'a str> {
    match name {
        "business_name" => record.business_name.as_deref(),
        "business_type" => record.business_type.as_deref(),
        "tagline" => record.tagline.as_deref(),
        "short_description" => record.short_description.as_deref(),
        "contact_whatsapp" => record.contact_whatsapp.as_deref(),
        "instagram_handle" => record.instagram_handle.as_deref(),
        _ => None,
    }
}

fn max_length(name: &str) -> usize {
    match name {
        "business_name" => LengthLimits::BUSINESS_NAME,
        "business_type" => LengthLimits::BUSINESS_TYPE,
        "tagline" => LengthLimits::TAGLINE,
        "short_description" => LengthLimits::SHORT_DESCRIPTION,
        "contact_whatsapp" => LengthLimits::CONTACT_WHATSAPP,
        "instagram_handle" => LengthLimits::INSTAGRAM_HANDLE,
        "name" => LengthLimits::MENU_ITEM_NAME,
        "price" => LengthLimits::MENU_ITEM_PRICE,
        _ => usize::MAX,
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn too_long(label: &str, limit_key: &str) -> String {
    format!(
        "{label} exceeds the maximum length (max {} characters)",
        max_length(limit_key)
    )
}

fn check_length(errors: &mut Vec<String>, label: &str, limit_key: &str, value: &str) {
    if value.chars().count() > max_length(limit_key) {
        errors.push(too_long(label, limit_key));
    }
}

fn check_formats(record: &BusinessRecord, errors: &mut Vec<String>) {
    for name in REQUIRED_FIELDS {
        let Some(value) = field(record, name).map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };
        match name {
            "contact_whatsapp" if !value.chars().all(|c| c.is_ascii_digit()) => {
                errors.push("contact_whatsapp must contain digits only".to_string());
            }
            "instagram_handle"
                if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                errors.push(
                    "instagram_handle must contain only letters, numbers, and underscores"
                        .to_string(),
                );
            }
            _ => check_length(errors, name, name, value),
        }
    }
}

/// Check a raw record and report every problem found.
pub fn validate(record: &BusinessRecord, mode: ValidationMode) -> ValidationReport {
    let mut errors = Vec::new();

    for name in REQUIRED_FIELDS {
        if is_blank(field(record, name)) {
            errors.push(format!("{name} is required"));
        }
    }

    if record.theme_choice.as_deref().and_then(Theme::parse).is_none() {
        errors.push(r#"theme_choice must be either "classic" or "kiroween""#.to_string());
    }

    if mode == ValidationMode::Strict {
        check_formats(record, &mut errors);
    }

    match &record.menu_items {
        None => {}
        Some(RawMenuItems::NotAList) => errors.push("menu_items must be an array".to_string()),
        Some(RawMenuItems::List(items)) => {
            for (index, item) in items.iter().enumerate() {
                for (part, value) in [("name", &item.name), ("price", &item.price)] {
                    let label = format!("menu_items[{index}].{part}");
                    if is_blank(value.as_deref()) {
                        errors.push(format!("{label} is required"));
                    } else if mode == ValidationMode::Strict {
                        let trimmed = value.as_deref().unwrap_or_default().trim();
                        check_length(&mut errors, &label, part, trimmed);
                    }
                }
            }
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawMenuItem;
    use crate::test_helpers::*;

    fn standard(record: &BusinessRecord) -> ValidationReport {
        validate(record, ValidationMode::Standard)
    }

    #[test]
    fn valid_record_passes() {
        let report = standard(&valid_record());
        assert_eq!(report, ValidationReport { valid: true, errors: vec![] });
    }

    #[test]
    fn zero_menu_items_is_valid() {
        let mut record = valid_record();
        record.menu_items = Some(RawMenuItems::List(vec![]));
        assert_eq!(standard(&record), ValidationReport { valid: true, errors: vec![] });
    }

    #[test]
    fn absent_menu_items_is_valid() {
        let mut record = valid_record();
        record.menu_items = None;
        assert!(standard(&record).valid);
    }

    #[test]
    fn missing_business_name_is_reported() {
        let mut record = valid_record();
        record.business_name = None;
        let report = standard(&record);
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["business_name is required"]);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut record = valid_record();
        record.tagline = Some("   \t\n".into());
        assert_eq!(standard(&record).errors, vec!["tagline is required"]);
    }

    #[test]
    fn all_errors_are_accumulated() {
        let report = standard(&BusinessRecord::default());
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "business_name is required",
                "business_type is required",
                "tagline is required",
                "short_description is required",
                "contact_whatsapp is required",
                "instagram_handle is required",
                r#"theme_choice must be either "classic" or "kiroween""#,
            ]
        );
    }

    #[test]
    fn theme_must_be_exact() {
        let mut record = valid_record();
        for bad in ["Classic", "neon", "", " kiroween"] {
            record.theme_choice = Some(bad.into());
            assert_eq!(
                standard(&record).errors,
                vec![r#"theme_choice must be either "classic" or "kiroween""#],
                "theme {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn incomplete_menu_items_flagged_by_index() {
        let mut record = valid_record();
        record.menu_items = Some(RawMenuItems::List(vec![
            RawMenuItem::new("Espresso", "Rp 15,000"),
            RawMenuItem {
                name: Some(" ".into()),
                price: Some("Rp 5,000".into()),
            },
            RawMenuItem::default(),
        ]));
        assert_eq!(
            standard(&record).errors,
            vec![
                "menu_items[1].name is required",
                "menu_items[2].name is required",
                "menu_items[2].price is required",
            ]
        );
    }

    #[test]
    fn non_list_menu_items_is_error() {
        let mut record = valid_record();
        record.menu_items = Some(RawMenuItems::NotAList);
        assert_eq!(standard(&record).errors, vec!["menu_items must be an array"]);
    }

    #[test]
    fn standard_mode_ignores_formats() {
        let mut record = valid_record();
        record.contact_whatsapp = Some("+62 812".into());
        record.instagram_handle = Some("@moon".into());
        record.tagline = Some("x".repeat(500));
        assert!(standard(&record).valid);
    }

    #[test]
    fn strict_mode_checks_formats_and_lengths() {
        let mut record = valid_record();
        record.contact_whatsapp = Some("+62 812".into());
        record.instagram_handle = Some("@moon".into());
        record.tagline = Some("x".repeat(151));
        record.menu_items = Some(RawMenuItems::List(vec![RawMenuItem::new(
            "Espresso",
            "9".repeat(21),
        )]));
        assert_eq!(
            validate(&record, ValidationMode::Strict).errors,
            vec![
                "tagline exceeds the maximum length (max 150 characters)",
                "contact_whatsapp must contain digits only",
                "instagram_handle must contain only letters, numbers, and underscores",
                "menu_items[0].price exceeds the maximum length (max 20 characters)",
            ]
        );
    }

    #[test]
    fn strict_mode_accepts_valid_record() {
        assert!(validate(&valid_record(), ValidationMode::Strict).valid);
    }

    #[test]
    fn into_result_carries_errors() {
        let err = standard(&BusinessRecord::default()).into_result().unwrap_err();
        assert_eq!(err.0.len(), 7);
        assert!(err.to_string().starts_with("Validation failed:\nbusiness_name is required"));
        assert!(standard(&valid_record()).into_result().is_ok());
    }
}
