//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Validate
//!
//! ```text
//! Valid
//! ```
//!
//! ```text
//! Validation failed (2 errors)
//!     business_name is required
//!     menu_items[0].price is required
//! ```
//!
//! ## Generate
//!
//! ```text
//! Generated 4 files in generated/
//!     index.html                   4812 bytes  3f2a9c01be77
//!     styles.css                   6120 bytes  91cc0d4e2a15
//!     menu.json                     212 bytes  0b8e4411fa3c
//!     deployment-instructions.txt  2934 bytes  5de6a0c1f9b2
//! ```
//!
//! The trailing column is a short SHA-256 of each file, so a user can confirm
//! that what their host serves is what was generated.
//!
//! ## Preset list
//!
//! ```text
//! coffee_shop           Coffee Shop
//! bakery                Bakery
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure.

use crate::artifacts::{ArtifactBundle, short_digest};
use crate::presets::BusinessType;
use crate::validate::ValidationReport;
use std::path::Path;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Validate
// ============================================================================

pub fn format_validation_output(report: &ValidationReport) -> Vec<String> {
    if report.valid {
        return vec!["Valid".to_string()];
    }
    let mut lines = vec![format!(
        "Validation failed ({})",
        plural(report.errors.len(), "error")
    )];
    lines.extend(report.errors.iter().map(|e| format!("{}{e}", indent(1))));
    lines
}

pub fn print_validation_output(report: &ValidationReport) {
    for line in format_validation_output(report) {
        println!("{line}");
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(bundle: &ArtifactBundle, out_dir: &Path) -> Vec<String> {
    let files = bundle.files();
    let width = files.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut lines = vec![format!(
        "Generated {} in {}/",
        plural(files.len(), "file"),
        out_dir.display()
    )];
    for (name, contents) in files {
        lines.push(format!(
            "{}{name:<width$}  {:>5} bytes  {}",
            indent(1),
            contents.len(),
            short_digest(contents)
        ));
    }
    lines
}

pub fn print_generate_output(bundle: &ArtifactBundle, out_dir: &Path) {
    for line in format_generate_output(bundle, out_dir) {
        println!("{line}");
    }
}

// ============================================================================
// Presets
// ============================================================================

pub fn format_preset_list() -> Vec<String> {
    BusinessType::ALL
        .iter()
        .map(|t| format!("{:<22}{}", t.key(), t.label()))
        .collect()
}

pub fn print_preset_list() {
    for line in format_preset_list() {
        println!("{line}");
    }
}
