// Meaning interpreter: splits a name into family/given parts and glosses each given character.
//
// Fully deterministic. Characters are extended grapheme clusters, so a precomposed syllable and
// its conjoining-jamo spelling both count as one character.

use crate::catalog::{default_lexicon, Lexicon};
use crate::types::{CharacterGloss, Interpretation};
use unicode_segmentation::UnicodeSegmentation;

/// Gloss for inputs shorter than two characters.
pub const SHORT_NAME_GLOSS: &str = "독특하고 특별한 이름";

/// Gloss for characters missing from the glossary.
pub const UNKNOWN_CHARACTER_GLOSS: &str = "고유한 의미를 담은 특별한 글자";

pub struct Interpreter<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Interpreter<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn interpret(&self, name: &str) -> Interpretation {
        let characters: Vec<&str> = name.graphemes(true).collect();

        let (family_name, given_name, meanings) = if characters.len() >= 2 {
            let given = &characters[1..];
            let meanings = given
                .iter()
                .map(|&character| CharacterGloss {
                    character: character.to_string(),
                    gloss: self
                        .lexicon
                        .gloss_for(character)
                        .unwrap_or(UNKNOWN_CHARACTER_GLOSS)
                        .to_string(),
                })
                .collect();
            (characters[0].to_string(), given.concat(), meanings)
        } else {
            let meanings = vec![CharacterGloss {
                character: name.to_string(),
                gloss: SHORT_NAME_GLOSS.to_string(),
            }];
            (String::new(), name.to_string(), meanings)
        };

        let interpretation = narrative(name, &meanings);
        Interpretation {
            name: name.to_string(),
            family_name,
            given_name,
            meanings,
            interpretation,
        }
    }
}

/// Interpret with the built-in lexicon.
#[must_use]
pub fn interpret(name: &str) -> Interpretation {
    Interpreter::new(default_lexicon()).interpret(name)
}

fn narrative(name: &str, meanings: &[CharacterGloss]) -> String {
    let glosses = meanings
        .iter()
        .map(|m| m.gloss.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("'{name}'은(는) {glosses}을(를) 의미하는 아름다운 이름입니다.")
}
