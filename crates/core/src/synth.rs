// Keyword-driven name synthesizer.
//
// Every name is one family character plus a one- or two-syllable given name. The head syllable
// comes from the morphemes associated with the caller's keywords (or the style pool when no
// keyword is recognized); the optional second syllable always comes from the style pool. All
// draws go through the caller's `Rng`, so a seeded generator gives reproducible batches.

use crate::catalog::{default_lexicon, Lexicon};
use crate::config::NameConfig;
use crate::error::Result;
use crate::style::{Gender, Style};
use crate::types::GeneratedName;
use rand::Rng;

/// Keyword description used when the caller supplied none.
pub const GENERIC_KEYWORD_LABEL: &str = "일반적인";

/// A validated synthesis request. `count` is clamped when the batch is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    pub keywords: Vec<String>,
    pub style: Style,
    pub gender: Gender,
    pub count: i64,
}

impl NameRequest {
    /// Validate raw caller input, filling absent fields from `config`.
    ///
    /// Unknown styles and genders are rejected here so the synthesizer only ever sees values that
    /// have a morpheme table.
    pub fn parse(
        keywords: Vec<String>,
        style: Option<&str>,
        gender: Option<&str>,
        count: Option<i64>,
        config: &NameConfig,
    ) -> Result<Self> {
        Ok(Self {
            keywords,
            style: Style::parse_or(style, config.default_style)?,
            gender: Gender::parse_or(gender, config.default_gender)?,
            count: count.unwrap_or(config.default_count as i64),
        })
    }
}

pub struct Synthesizer<'a> {
    lexicon: &'a Lexicon,
    config: NameConfig,
}

impl<'a> Synthesizer<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_config(lexicon, NameConfig::default())
    }

    #[must_use]
    pub fn with_config(lexicon: &'a Lexicon, config: NameConfig) -> Self {
        Self { lexicon, config }
    }

    /// Produce a batch of names. The batch size is `request.count` clamped into the configured
    /// bounds; names are drawn independently and may repeat.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        request: &NameRequest,
        rng: &mut R,
    ) -> Vec<GeneratedName> {
        let count = self.config.clamp_count(request.count);
        // Both gender halves, whatever the requested gender.
        let style_pool = self.lexicon.morphemes_for(request.style, Gender::Any);
        let keyword_pool = self.keyword_pool(&request.keywords);
        let head_pool = if keyword_pool.is_empty() {
            log::debug!(
                "No indexed keywords in {:?}; drawing from the {} style pool",
                request.keywords,
                request.style
            );
            style_pool.as_slice()
        } else {
            keyword_pool.as_slice()
        };
        let description = describe(&request.keywords, request.style);

        (0..count)
            .map(|_| {
                let family = pick(self.lexicon.family_names(), rng);
                let mut given = pick(head_pool, rng).to_string();
                if rng.gen_bool(0.5) {
                    given.push_str(pick(&style_pool, rng));
                }
                GeneratedName {
                    full_name: format!("{family}{given}"),
                    family_name: family.to_string(),
                    given_name: given,
                    style: request.style,
                    keywords: request.keywords.clone(),
                    description: description.clone(),
                }
            })
            .collect()
    }

    /// Ordered union of the morphemes of every indexed keyword; first occurrence wins.
    fn keyword_pool(&self, keywords: &[String]) -> Vec<&'static str> {
        let mut pool: Vec<&'static str> = Vec::new();
        for keyword in keywords {
            for &morpheme in self.lexicon.morphemes_for_keyword(keyword) {
                if !pool.contains(&morpheme) {
                    pool.push(morpheme);
                }
            }
        }
        pool
    }
}

/// Synthesize with the built-in lexicon and default bounds.
pub fn synthesize<R: Rng + ?Sized>(
    keywords: &[String],
    style: &str,
    gender: &str,
    count: i64,
    rng: &mut R,
) -> Result<Vec<GeneratedName>> {
    let config = NameConfig::default();
    let request = NameRequest::parse(
        keywords.to_vec(),
        Some(style),
        Some(gender),
        Some(count),
        &config,
    )?;
    Ok(Synthesizer::with_config(default_lexicon(), config).synthesize(&request, rng))
}

/// Uniform draw. Every pool handed in here is non-empty by construction.
fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

fn describe(keywords: &[String], style: Style) -> String {
    let keyword_desc = if keywords.is_empty() {
        GENERIC_KEYWORD_LABEL.to_string()
    } else {
        keywords.join(", ")
    };
    format!("'{keyword_desc}' 키워드와 '{style}' 스타일로 생성된 이름")
}
