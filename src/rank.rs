//! Curated commonness ranking.
//!
//! The two glyph lists under `data/` are hand-picked and embedded verbatim;
//! they are lookup data, not something derived from usage.

use crate::config::{PRIORITY_COMMON_CHARACTER, PRIORITY_COMMON_EMOJI, PRIORITY_UNRANKED};
use rustc_hash::FxHashMap;

/// Frequently used emoji, ranked highest.
pub const COMMON_EMOJI: &str = include_str!("../data/common_emoji.txt");

/// Frequently used non-ASCII characters (Latin-1, Greek, Cyrillic, symbols, box drawing, ...).
pub const COMMON_CHARACTERS: &str = include_str!("../data/common_characters.txt");

pub struct Ranker {
    priorities: FxHashMap<char, i64>,
}

impl Ranker {
    /// Builds the lookup from the embedded lists.
    pub fn new() -> Self {
        Self::from_lists(COMMON_EMOJI, COMMON_CHARACTERS)
    }

    /// Characters are inserted before emoji, so a glyph on both lists keeps
    /// the emoji priority.
    pub fn from_lists(common_emoji: &str, common_characters: &str) -> Self {
        let mut priorities = FxHashMap::default();
        for c in strip_newline(common_characters).chars() {
            priorities.insert(c, PRIORITY_COMMON_CHARACTER);
        }
        for c in strip_newline(common_emoji).chars() {
            priorities.insert(c, PRIORITY_COMMON_EMOJI);
        }
        Self { priorities }
    }

    /// Only single-scalar glyphs can be ranked; sequences fall back to 0.
    pub fn priority(&self, glyph: &str) -> i64 {
        let mut chars = glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self
                .priorities
                .get(&c)
                .copied()
                .unwrap_or(PRIORITY_UNRANKED),
            _ => PRIORITY_UNRANKED,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

// Editors tend to append one; the lists themselves never contain a newline.
fn strip_newline(list: &str) -> &str {
    list.strip_suffix('\n').unwrap_or(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_emoji_rank_ten() {
        let ranker = Ranker::new();
        assert_eq!(ranker.priority("😂"), 10);
        assert_eq!(ranker.priority("👍"), 10);
        assert_eq!(ranker.priority("🦳"), 10);
    }

    #[test]
    fn common_characters_rank_eight() {
        let ranker = Ranker::new();
        assert_eq!(ranker.priority("é"), 8);
        assert_eq!(ranker.priority("€"), 8);
        assert_eq!(ranker.priority("→"), 8);
        assert_eq!(ranker.priority("\u{200B}"), 8);
        assert_eq!(ranker.priority("\u{FEFF}"), 8);
        assert_eq!(ranker.priority("\u{FFFD}"), 8);
    }

    #[test]
    fn everything_else_is_unranked() {
        let ranker = Ranker::new();
        assert_eq!(ranker.priority("A"), 0);
        assert_eq!(ranker.priority("$"), 0);
        assert_eq!(ranker.priority("\n"), 0);
        assert_eq!(ranker.priority(""), 0);
    }

    #[test]
    fn sequences_are_unranked() {
        let ranker = Ranker::new();
        assert_eq!(ranker.priority("👍🏽"), 0);
        assert_eq!(ranker.priority("😂😂"), 0);
    }

    #[test]
    fn emoji_wins_when_listed_twice() {
        let ranker = Ranker::from_lists("x😀", "xé");
        assert_eq!(ranker.priority("x"), 10);
        assert_eq!(ranker.priority("é"), 8);
        assert_eq!(ranker.priority("😀"), 10);
        // Space is the one glyph on both embedded lists.
        assert_eq!(Ranker::new().priority(" "), 10);
    }

    #[test]
    fn embedded_lists_are_intact() {
        assert_eq!(COMMON_EMOJI.chars().count(), 1002);
        assert_eq!(COMMON_CHARACTERS.chars().count(), 1898);
        assert_eq!(Ranker::new().priorities.len(), 1002 + 1898 - 1);
    }
}
