use std::collections::HashMap;

/// A gloss that was replaced by a later declaration for the same character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossCollision {
    pub character: &'static str,
    /// The earlier gloss that no longer resolves
    pub shadowed: &'static str,
    /// The gloss the character resolves to after all overrides
    pub winner: &'static str,
}

/// Character → gloss lookup with one gloss per character.
///
/// Built from an ordered list of `(character, gloss)` overrides: entries are applied front to
/// back, so the last declaration for a character wins. Every replaced declaration is kept as a
/// [`GlossCollision`].
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    glosses: HashMap<&'static str, &'static str>,
    collisions: Vec<GlossCollision>,
}

impl Glossary {
    #[must_use]
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut glosses: HashMap<&'static str, &'static str> = HashMap::new();
        let mut shadowed = Vec::new();
        for &(character, gloss) in entries {
            if let Some(previous) = glosses.insert(character, gloss) {
                shadowed.push((character, previous));
            }
        }

        let collisions = shadowed
            .into_iter()
            .map(|(character, previous)| GlossCollision {
                character,
                shadowed: previous,
                winner: glosses.get(character).copied().unwrap_or(previous),
            })
            .collect();

        Self {
            glosses,
            collisions,
        }
    }

    #[must_use]
    pub fn get(&self, character: &str) -> Option<&'static str> {
        self.glosses.get(character).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }

    /// Replaced declarations, in the order they were shadowed.
    #[must_use]
    pub fn collisions(&self) -> &[GlossCollision] {
        &self.collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn later_entry_overrides_earlier() {
        let glossary = Glossary::from_entries(&[("봄", "first"), ("별", "star"), ("봄", "second")]);
        assert_eq!(glossary.get("봄"), Some("second"));
        assert_eq!(glossary.get("별"), Some("star"));
        assert_eq!(glossary.len(), 2);
    }

    #[test]
    fn every_shadowed_declaration_is_recorded_against_the_final_winner() {
        let glossary = Glossary::from_entries(&[("영", "a"), ("영", "b"), ("영", "c")]);
        assert_eq!(
            glossary.collisions(),
            &[
                GlossCollision {
                    character: "영",
                    shadowed: "a",
                    winner: "c",
                },
                GlossCollision {
                    character: "영",
                    shadowed: "b",
                    winner: "c",
                },
            ]
        );
    }

    #[test]
    fn unknown_character_is_absent() {
        let glossary = Glossary::from_entries(&[("봄", "spring")]);
        assert_eq!(glossary.get("이"), None);
        assert!(Glossary::default().is_empty());
    }
}
