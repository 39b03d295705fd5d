//! Substring lookup is sound and complete.
//!
//! For any text and pattern, `search` returns exactly the offsets a linear
//! scan finds, in ascending order.

use super::common::naive_occurrences;
use proptest::prelude::*;
use quarto::CorpusIndex;

proptest! {
    #[test]
    fn prop_search_equals_linear_scan(text in "[abc ]{0,200}", pattern in "[abc]{1,4}") {
        let index = CorpusIndex::from_text(text.clone());
        prop_assert_eq!(index.search(&pattern), naive_occurrences(&text, &pattern));
    }

    #[test]
    fn prop_every_offset_is_a_match(text in "\\PC{0,120}", start in 0usize..120, len in 1usize..6) {
        let index = CorpusIndex::from_text(text.clone());
        let bytes = text.as_bytes();
        let start = start.min(bytes.len());
        let end = (start + len).min(bytes.len());
        // Patterns cut from the text itself always hit at least once
        if let Ok(pattern) = std::str::from_utf8(&bytes[start..end]) {
            if !pattern.is_empty() {
                let offsets = index.search(pattern);
                prop_assert!(offsets.contains(&start));
                for &offset in &offsets {
                    prop_assert!(bytes[offset..].starts_with(pattern.as_bytes()));
                }
            }
        }
    }

    #[test]
    fn prop_offsets_ascending(text in "[ab]{0,150}", pattern in "[ab]{1,3}") {
        let offsets = CorpusIndex::from_text(text).search(&pattern);
        prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_empty_pattern_matches_nothing(text in "\\PC{0,80}") {
        prop_assert!(CorpusIndex::from_text(text).search("").is_empty());
    }
}
