//! Backspace mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How backspace corrects the paper
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Strike the last unstruck character, like a correction ribbon.
    #[default]
    Vintage,
    /// Remove the last character, like a text editor.
    Minimal,
}

impl Mode {
    /// All modes, in the order the selector shows them.
    pub const ALL: &'static [Self] = &[Self::Vintage, Self::Minimal];

    /// Lowercase label, also the value accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vintage => "vintage",
            Self::Minimal => "minimal",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Vintage => Self::Minimal,
            Self::Minimal => Self::Vintage,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A mode name that is neither `vintage` nor `minimal`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}` (expected `vintage` or `minimal`)")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
