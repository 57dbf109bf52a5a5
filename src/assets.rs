//! Where the base template and theme stylesheets come from.
//!
//! The [`AssetSource`] trait is the seam between the artifact builder and the
//! trusted static content it needs. Two sources ship:
//!
//! - [`EmbeddedAssets`]: compiled into the binary from `assets/`. The default.
//! - [`DirAssets`]: read from a directory at build time, for users who keep
//!   their own template and themes. Same layout as `assets/`:
//!
//! ```text
//! <dir>/
//! ├── templates/
//! │   └── base-template.html
//! └── themes/
//!     ├── classic.css
//!     └── kiroween.css
//! ```
//!
//! Sources must be `Sync`: the builder fetches the template and the theme on
//! two rayon workers at once.

use crate::theme::Theme;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is empty")]
    Empty(String),
}

pub const TEMPLATE_FILE: &str = "base-template.html";

pub trait AssetSource: Sync {
    /// The base HTML template.
    fn template(&self) -> Result<String, SourceError>;

    /// The stylesheet for `theme`.
    fn theme(&self, theme: Theme) -> Result<String, SourceError>;
}

const BASE_TEMPLATE: &str = include_str!("../assets/templates/base-template.html");
const CLASSIC_CSS: &str = include_str!("../assets/themes/classic.css");
const KIROWEEN_CSS: &str = include_str!("../assets/themes/kiroween.css");

/// Template and themes baked in at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn template(&self) -> Result<String, SourceError> {
        Ok(BASE_TEMPLATE.to_string())
    }

    fn theme(&self, theme: Theme) -> Result<String, SourceError> {
        Ok(match theme {
            Theme::Classic => CLASSIC_CSS,
            Theme::Kiroween => KIROWEEN_CSS,
        }
        .to_string())
    }
}

/// Template and themes read from a directory on every fetch.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, relative: &str) -> Result<String, SourceError> {
        let path = self.root.join(relative);
        let content = fs::read_to_string(&path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;
        if content.is_empty() {
            return Err(SourceError::Empty(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded asset");
        Ok(content)
    }
}

impl AssetSource for DirAssets {
    fn template(&self) -> Result<String, SourceError> {
        self.read(&format!("templates/{TEMPLATE_FILE}"))
    }

    fn theme(&self, theme: Theme) -> Result<String, SourceError> {
        self.read(&format!("themes/{}", theme.stylesheet()))
    }
}

/// A [`DirAssets`] over `dir` when given, the built-in assets otherwise.
pub fn source_for(dir: Option<&Path>) -> Box<dyn AssetSource> {
    match dir {
        Some(dir) => Box::new(DirAssets::new(dir)),
        None => Box::new(EmbeddedAssets),
    }
}
