//! # Korean Name Core
//!
//! Keyword-driven Korean name synthesis and meaning interpretation.
//!
//! ## Architecture
//!
//! ```text
//! keywords + style + gender + count
//!     │
//!     ├──> Boundary validation (Style / Gender enums, count clamping)
//!     │
//!     └──> Synthesizer ──┐
//!                        ├──> Lexicon (family names, morphemes, keyword index, glossary)
//! name ──> Interpreter ──┘
//! ```
//!
//! The lexicon is immutable and shared; the synthesizer takes the caller's `rand::Rng` so a
//! seeded generator reproduces a batch exactly.
//!
//! ## Example
//!
//! ```rust
//! use korean_name_core::{interpret, synthesize};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let names = synthesize(&["봄".to_string()], "cute", "any", 3, &mut rng).unwrap();
//! assert_eq!(names.len(), 3);
//!
//! let meaning = interpret(&names[0].full_name);
//! assert_eq!(meaning.family_name, names[0].family_name);
//! ```

pub mod catalog;
mod config;
mod error;
mod interpret;
mod style;
mod synth;
mod types;

pub use catalog::{default_lexicon, GlossCollision, Lexicon};
pub use config::{
    NameConfig, CONFIG_PATH_ENV, DEFAULT_NAME_COUNT, MAX_NAME_COUNT, MIN_NAME_COUNT, SEED_ENV,
};
pub use error::{NameError, Result};
pub use interpret::{interpret, Interpreter, SHORT_NAME_GLOSS, UNKNOWN_CHARACTER_GLOSS};
pub use style::{Gender, Style};
pub use synth::{synthesize, NameRequest, Synthesizer, GENERIC_KEYWORD_LABEL};
pub use types::{CharacterGloss, GeneratedName, Interpretation, KeywordCategory};
