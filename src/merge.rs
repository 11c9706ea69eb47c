use crate::models::{Category, Character, Keyword};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::hash_map::Entry;
use tracing::{debug, info};

/// Final record sets ready for ranking and loading.
///
/// Both vectors are sorted (characters by glyph, keywords by keyword then
/// glyph) so identical inputs always load in the same order.
#[derive(Debug, Default)]
pub struct Dataset {
    pub characters: Vec<Character>,
    pub keywords: Vec<Keyword>,
    /// Emoji records created because the registry had no entry for the glyph
    pub synthesized: usize,
}

impl Dataset {
    pub fn character(&self, glyph: &str) -> Option<&Character> {
        self.characters
            .binary_search_by(|c| c.glyph.as_str().cmp(glyph))
            .ok()
            .map(|i| &self.characters[i])
    }
}

/// Reconciles registry records with emoji keyword pairs.
///
/// Every glyph referenced by an emoji keyword gets a character record, named
/// after its first keyword when the registry lacks one. The keyword set is the
/// deduplicated union of emoji keywords and each non-control character's own
/// name.
pub fn merge(characters: Vec<Character>, emoji_keywords: Vec<Keyword>) -> Dataset {
    let mut by_glyph: FxHashMap<String, Character> = FxHashMap::default();
    by_glyph.reserve(characters.len());

    for character in characters {
        if let Some(previous) = by_glyph.insert(character.glyph.clone(), character) {
            debug!(glyph = %previous.glyph, name = %previous.name, "Registry entry replaced by later row");
        }
    }

    let mut synthesized = 0;
    for pair in &emoji_keywords {
        if let Entry::Vacant(slot) = by_glyph.entry(pair.glyph.clone()) {
            debug!(glyph = %pair.glyph, name = %pair.keyword, "Synthesizing emoji record");
            slot.insert(Character::new(
                pair.glyph.clone(),
                pair.keyword.clone(),
                Some(Category::Emoji),
            ));
            synthesized += 1;
        }
    }

    // A control glyph is never stored, so nothing may point at it.
    let mut seen: FxHashSet<Keyword> = emoji_keywords
        .into_iter()
        .filter(|pair| {
            let stored = by_glyph.get(&pair.glyph).is_some_and(|c| !c.is_control());
            if !stored {
                debug!(glyph = ?pair.glyph, keyword = %pair.keyword, "Dropping keyword for control glyph");
            }
            stored
        })
        .collect();
    seen.extend(
        by_glyph
            .values()
            .filter(|c| !c.is_control())
            .map(|c| Keyword::new(c.name.clone(), c.glyph.clone())),
    );

    let mut characters: Vec<Character> = by_glyph.into_values().collect();
    characters.sort_unstable_by(|a, b| a.glyph.cmp(&b.glyph));

    let mut keywords: Vec<Keyword> = seen.into_iter().collect();
    keywords.sort_unstable();

    info!(
        characters = characters.len(),
        keywords = keywords.len(),
        synthesized,
        "Records merged"
    );

    Dataset {
        characters,
        keywords,
        synthesized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<Character> {
        vec![
            Character::new("\u{0}", "<control>", None),
            Character::new("$", "dollar sign", Some(Category::Currency)),
            Character::new("😄", "grinning face with smiling eyes", None),
        ]
    }

    #[test]
    fn synthesizes_missing_emoji_from_first_keyword() {
        let dataset = merge(
            registry(),
            vec![
                Keyword::new("grinning face", "😀"),
                Keyword::new("happy", "😀"),
            ],
        );
        let grinning = dataset.character("😀").unwrap();
        assert_eq!(grinning.name, "grinning face");
        assert_eq!(grinning.category, Some(Category::Emoji));
        assert_eq!(dataset.synthesized, 1);
    }

    #[test]
    fn registry_entry_is_not_replaced_by_emoji() {
        let dataset = merge(registry(), vec![Keyword::new("smile", "😄")]);
        let smile = dataset.character("😄").unwrap();
        assert_eq!(smile.name, "grinning face with smiling eyes");
        assert_eq!(smile.category, None);
        assert_eq!(dataset.synthesized, 0);
    }

    #[test]
    fn later_registry_row_wins() {
        let dataset = merge(
            vec![
                Character::new("A", "first", None),
                Character::new("A", "second", None),
            ],
            vec![],
        );
        assert_eq!(dataset.characters.len(), 1);
        assert_eq!(dataset.characters[0].name, "second");
    }

    #[test]
    fn names_become_keywords_except_controls() {
        let dataset = merge(registry(), vec![]);
        assert!(dataset.keywords.contains(&Keyword::new("dollar sign", "$")));
        assert!(dataset.keywords.iter().all(|k| k.glyph != "\u{0}"));
        // The control character is still part of the record set.
        assert!(dataset.character("\u{0}").is_some());
    }

    #[test]
    fn duplicate_pairs_collapse() {
        let dataset = merge(
            registry(),
            vec![
                Keyword::new("grinning face", "😀"),
                Keyword::new("grinning face", "😀"),
                Keyword::new("dollar sign", "$"),
            ],
        );
        let grinning = dataset
            .keywords
            .iter()
            .filter(|k| **k == Keyword::new("grinning face", "😀"))
            .count();
        let dollar = dataset
            .keywords
            .iter()
            .filter(|k| **k == Keyword::new("dollar sign", "$"))
            .count();
        assert_eq!(grinning, 1);
        assert_eq!(dollar, 1);
    }

    #[test]
    fn every_keyword_glyph_has_a_character() {
        let dataset = merge(
            registry(),
            vec![
                Keyword::new("thumbs up", "👍"),
                Keyword::new("ok", "👍"),
                Keyword::new("money", "$"),
            ],
        );
        for keyword in &dataset.keywords {
            assert!(dataset.character(&keyword.glyph).is_some(), "{:?}", keyword);
        }
    }

    #[test]
    fn keywords_for_control_glyphs_are_dropped() {
        let dataset = merge(registry(), vec![Keyword::new("null", "\u{0}")]);
        assert!(dataset.keywords.iter().all(|k| k.glyph != "\u{0}"));
    }

    #[test]
    fn output_is_sorted() {
        let dataset = merge(
            registry(),
            vec![Keyword::new("zebra", "🦓"), Keyword::new("animal", "🦓")],
        );
        assert!(dataset.characters.windows(2).all(|w| w[0].glyph < w[1].glyph));
        assert!(dataset.keywords.windows(2).all(|w| w[0] < w[1]));
    }
}
