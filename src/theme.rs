//! The two visual themes a generated site can use.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    /// Dark, spooky palette.
    Kiroween,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Classic, Theme::Kiroween];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Kiroween => "kiroween",
        }
    }

    /// Strict parse: only the exact lowercase names are accepted.
    pub fn parse(value: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|theme| theme.as_str() == value)
    }

    /// Lenient parse used on untrusted input: `"kiroween"` or else `Classic`.
    pub fn normalize(value: Option<&str>) -> Theme {
        match value {
            Some("kiroween") => Theme::Kiroween,
            _ => Theme::Classic,
        }
    }

    /// Stylesheet file name under the `themes/` asset directory.
    pub fn stylesheet(self) -> &'static str {
        match self {
            Theme::Classic => "classic.css",
            Theme::Kiroween => "kiroween.css",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
