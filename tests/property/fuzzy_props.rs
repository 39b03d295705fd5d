//! Bounded edit distance and correction stability.

use proptest::prelude::*;
use quarto::fuzzy::{distance_within, SpellModel};
use quarto::Corrector;

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut curr = vec![i; b.len() + 1];
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        prev = curr;
    }
    prev[b.len()]
}

proptest! {
    #[test]
    fn prop_distance_within_agrees(a in "[a-d]{0,8}", b in "[a-d]{0,8}", max in 0usize..5) {
        let exact = levenshtein(&a, &b);
        let expected = (exact <= max).then_some(exact);
        prop_assert_eq!(distance_within(&a, &b, max), expected);
    }

    #[test]
    fn prop_known_words_are_kept(words in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let mut model = SpellModel::new();
        model.train_from_text(&words.join(" "));
        for word in &words {
            prop_assert_eq!(model.correct(word), word.clone());
        }
    }

    /// Correction never moves further than the model depth from the input.
    #[test]
    fn prop_correction_is_close(words in prop::collection::vec("[a-z]{1,8}", 1..20), query in "[a-z]{1,8}") {
        let mut model = SpellModel::new();
        model.train_from_text(&words.join(" "));
        let corrected = model.correct(&query);
        prop_assert!(levenshtein(&query, &corrected) <= model.depth());
    }

    #[test]
    fn prop_separators_survive(query in "[ ,.;!]{0,3}[a-z]{1,6}[ ,.;!]{1,3}[a-z]{1,6}[ ,.;!]{0,3}") {
        let mut model = SpellModel::new();
        model.train_from_text("winter summer spring autumn");
        let corrected = model.correct(&query);
        let strip = |s: &str| s.chars().filter(|c| !c.is_alphanumeric()).collect::<String>();
        prop_assert_eq!(strip(&corrected), strip(&query));
    }
}
