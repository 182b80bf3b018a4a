use crate::style::Style;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One synthesized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedName {
    /// Family name followed by the given name, e.g. "김봄이"
    pub full_name: String,
    /// Single-character family name
    pub family_name: String,
    /// One or two syllable given name
    pub given_name: String,
    pub style: Style,
    /// Keywords exactly as the caller supplied them
    pub keywords: Vec<String>,
    pub description: String,
}

/// Meaning gloss for one given-name character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CharacterGloss {
    pub character: String,
    pub gloss: String,
}

/// Result of decomposing a name into family/given parts and per-character glosses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Interpretation {
    pub name: String,
    /// Empty when the input is shorter than two characters
    pub family_name: String,
    pub given_name: String,
    /// Glosses in given-name order
    pub meanings: Vec<CharacterGloss>,
    /// Narrative sentence built from the glosses
    pub interpretation: String,
}

/// A named group of suggested keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}
