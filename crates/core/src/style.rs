use crate::error::{NameError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aesthetic category that decides which morpheme pool a name draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Cute,
    Cool,
    Elegant,
    Funny,
    Traditional,
}

impl Style {
    /// Every recognized style, in catalog order.
    pub const ALL: [Style; 5] = [
        Style::Cute,
        Style::Cool,
        Style::Elegant,
        Style::Funny,
        Style::Traditional,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Cute => "cute",
            Style::Cool => "cool",
            Style::Elegant => "elegant",
            Style::Funny => "funny",
            Style::Traditional => "traditional",
        }
    }

    /// Parse an optional caller-supplied style, using `default` when absent or blank.
    pub fn parse_or(raw: Option<&str>, default: Style) -> Result<Self> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => value.parse(),
            None => Ok(default),
        }
    }
}

impl FromStr for Style {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == needle)
            .ok_or_else(|| NameError::invalid_style(s.trim()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which half of a style's morpheme table to draw from. `Any` pools both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Any,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Any];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Any => "any",
        }
    }

    /// Parse an optional caller-supplied gender, using `default` when absent or blank.
    pub fn parse_or(raw: Option<&str>, default: Gender) -> Result<Self> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => value.parse(),
            None => Ok(default),
        }
    }
}

impl FromStr for Gender {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == needle)
            .ok_or_else(|| NameError::invalid_gender(s.trim()))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
