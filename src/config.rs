//! Generator configuration.
//!
//! Handles loading and validating `ghosthost.toml`. The file is optional;
//! every key has a default, and command-line flags override whatever the file
//! says.
//!
//! ## Config File Location
//!
//! Looked up in the current directory unless `--config <path>` is given:
//!
//! ```text
//! my-site/
//! ├── ghosthost.toml     # Optional
//! ├── business.json      # Input record
//! └── generated/         # Default output directory
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # assets_dir = "assets"   # Custom templates/ and themes/ (default: built-in)
//!
//! [output]
//! dir = "generated"         # Where generated files are written
//!
//! [validation]
//! strict_formats = false    # Also check contact formats and lengths
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::validate::ValidationMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "ghosthost.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `ghosthost.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding `templates/` and `themes/`. Built-in assets when absent.
    pub assets_dir: Option<PathBuf>,
    pub output: OutputConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the four artifacts are written to.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Check WhatsApp/Instagram formats and field lengths on top of presence.
    pub strict_formats: bool,
}

impl GeneratorConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.dir must not be empty".into(),
            ));
        }
        if matches!(&self.assets_dir, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty when set".into(),
            ));
        }
        Ok(())
    }

    pub fn validation_mode(&self) -> ValidationMode {
        if self.validation.strict_formats {
            ValidationMode::Strict
        } else {
            ValidationMode::Standard
        }
    }

    /// Resolve relative paths against the directory the config file lives in.
    fn rebase(mut self, base: &Path) -> Self {
        if let Some(dir) = self.assets_dir.take() {
            self.assets_dir = Some(base.join(dir));
        }
        self.output.dir = base.join(&self.output.dir);
        self
    }
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a specific config file. It must exist.
///
/// Relative paths inside the file are taken relative to the file's directory.
pub fn load_config_file(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    let base = path.parent().unwrap_or(Path::new(""));
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config.rebase(base))
}

/// Load `ghosthost.toml` from `dir`, falling back to defaults if absent.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(dir = %dir.display(), "no config file, using defaults");
        return Ok(GeneratorConfig::default());
    }
    load_config_file(&path)
}

/// Returns a fully-commented stock `ghosthost.toml` with all keys.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# ghosthost configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Relative paths are resolved against the directory holding this file.
# Unknown keys will cause an error.

# Directory with your own templates/base-template.html and
# themes/classic.css + themes/kiroween.css. Uses the built-in
# template and themes when not set.
# assets_dir = "assets"

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Where index.html, styles.css, menu.json and
# deployment-instructions.txt are written.
dir = "generated"

# ---------------------------------------------------------------------------
# Validation
# ---------------------------------------------------------------------------
[validation]
# Besides required fields, also check that the WhatsApp number is digits
# only, the Instagram handle is letters/numbers/underscores, and no field
# is longer than the generated site keeps.
strict_formats = false
"##
}
