//! Lexical catalog: the read-only tables both the synthesizer and the interpreter draw from.
//!
//! Lookups never fail. Unknown keywords resolve to an empty morpheme list and unknown characters
//! to `None`, because callers treat "no match" as an ordinary branch.

mod data;
mod glossary;

pub use glossary::{GlossCollision, Glossary};

use crate::style::{Gender, Style};
use crate::types::KeywordCategory;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::builtin);

/// Shared built-in lexicon, constructed on first use.
#[must_use]
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// Immutable name tables with query methods.
#[derive(Debug, Clone)]
pub struct Lexicon {
    family_names: &'static [&'static str],
    keyword_index: HashMap<&'static str, &'static [&'static str]>,
    glossary: Glossary,
    categories: &'static [KeywordCategory],
}

impl Lexicon {
    /// Build the lexicon from the bundled tables.
    #[must_use]
    pub fn builtin() -> Self {
        let keyword_index = data::KEYWORD_INDEX.iter().copied().collect();
        let glossary = Glossary::from_entries(data::GLOSS_ENTRIES);
        log::debug!(
            "Built lexicon: {} family names, {} keywords, {} glossed characters ({} shadowed glosses)",
            data::FAMILY_NAMES.len(),
            data::KEYWORD_INDEX.len(),
            glossary.len(),
            glossary.collisions().len()
        );
        Self {
            family_names: data::FAMILY_NAMES,
            keyword_index,
            glossary,
            categories: data::KEYWORD_CATEGORIES,
        }
    }

    #[must_use]
    pub fn family_names(&self) -> &[&'static str] {
        self.family_names
    }

    /// Morpheme pool for a style. `Gender::Any` pools the male half followed by the female half;
    /// characters present in both halves appear twice.
    #[must_use]
    pub fn morphemes_for(&self, style: Style, gender: Gender) -> Vec<&'static str> {
        let table = data::style_morphemes(style);
        match gender {
            Gender::Male => table.male.to_vec(),
            Gender::Female => table.female.to_vec(),
            Gender::Any => table.male.iter().chain(table.female).copied().collect(),
        }
    }

    /// Morphemes associated with a keyword; empty when the keyword is not indexed.
    #[must_use]
    pub fn morphemes_for_keyword(&self, keyword: &str) -> &[&'static str] {
        self.keyword_index
            .get(keyword.trim())
            .copied()
            .unwrap_or_default()
    }

    /// The supplied keywords that have an index entry, in input order.
    #[must_use]
    pub fn recognized_keywords(&self, keywords: &[String]) -> Vec<String> {
        keywords
            .iter()
            .filter(|k| !self.morphemes_for_keyword(k).is_empty())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn gloss_for(&self, character: &str) -> Option<&'static str> {
        self.glossary.get(character)
    }

    #[must_use]
    pub fn glossary_collisions(&self) -> &[GlossCollision] {
        self.glossary.collisions()
    }

    #[must_use]
    pub fn keyword_categories(&self) -> &[KeywordCategory] {
        self.categories
    }
}
