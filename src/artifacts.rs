//! Builds the complete website bundle from one business record.
//!
//! ## Pipeline
//!
//! ```text
//! BusinessRecord ──sanitize──▶ SanitizedRecord ──┐
//!                                                 ├─ expand ─▶ index.html
//! AssetSource::template() ─┐ (rayon::join)        │
//! AssetSource::theme()  ───┴─────────────────────┘ ──────────▶ styles.css
//! SanitizedRecord.menu_items ──────── serde_json ────────────▶ menu.json
//! (nothing) ─────────────────── deployment guide ────────────▶ deployment-instructions.txt
//! ```
//!
//! The two asset fetches are independent and run concurrently. If either
//! fails the build fails as a whole; there is no partial bundle. When both
//! fail, the template error is the one reported.
//!
//! The input record is expected to have passed [`crate::validate`] already,
//! but [`build`] does not depend on it: any record produces some bundle.

use crate::assets::{AssetSource, SourceError};
use crate::instructions::deployment_instructions;
use crate::record::BusinessRecord;
use crate::sanitize::{MenuItem, sanitize};
use crate::template::{Context, TemplateError, expand};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INDEX_HTML: &str = "index.html";
pub const STYLES_CSS: &str = "styles.css";
pub const MENU_JSON: &str = "menu.json";
pub const INSTRUCTIONS_TXT: &str = "deployment-instructions.txt";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to load template: {0}")]
    Template(#[source] SourceError),
    #[error("failed to load theme: {0}")]
    Theme(#[source] SourceError),
    #[error("failed to expand template: {0}")]
    Expand(#[from] TemplateError),
    #[error("failed to serialize menu: {0}")]
    MenuJson(#[from] serde_json::Error),
}

/// The generated site, ready to hand to whoever delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBundle {
    pub html: String,
    pub css: String,
    pub menu_json: String,
    pub instructions_txt: String,
}

#[derive(Serialize)]
struct MenuPayload<'a> {
    menu_items: &'a [MenuItem],
}

/// `{"menu_items": [...]}` pretty-printed with two-space indentation.
pub fn menu_json(items: &[MenuItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&MenuPayload { menu_items: items })
}

/// Sanitize, fetch assets, expand, and package.
pub fn build(record: &BusinessRecord, assets: &dyn AssetSource) -> Result<ArtifactBundle, BuildError> {
    let sanitized = sanitize(record);
    let theme = sanitized.theme_choice;

    let (template, css) = rayon::join(|| assets.template(), || assets.theme(theme));
    let template = template.map_err(BuildError::Template)?;
    let css = css.map_err(BuildError::Theme)?;

    let html = expand(&template, &Context::from(&sanitized))?;
    let menu_json = menu_json(&sanitized.menu_items)?;

    tracing::debug!(
        theme = %theme,
        menu_items = sanitized.menu_items.len(),
        html_bytes = html.len(),
        "built artifact bundle"
    );

    Ok(ArtifactBundle {
        html,
        css,
        menu_json,
        instructions_txt: deployment_instructions(),
    })
}

impl ArtifactBundle {
    /// `(filename, contents)` for every artifact, in a fixed order.
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            (INDEX_HTML, self.html.as_str()),
            (STYLES_CSS, self.css.as_str()),
            (MENU_JSON, self.menu_json.as_str()),
            (INSTRUCTIONS_TXT, self.instructions_txt.as_str()),
        ]
    }

    /// Write every artifact into `dir`, creating it if needed.
    ///
    /// Existing files with the same names are overwritten.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(4);
        for (name, contents) in self.files() {
            let path = dir.join(name);
            fs::write(&path, contents)?;
            written.push(path);
        }
        Ok(written)
    }
}

/// First 12 hex chars of the SHA-256 of `contents`.
pub fn short_digest(contents: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(contents.as_bytes()));
    digest[..12].to_string()
}
