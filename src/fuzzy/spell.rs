// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling correction by symmetric deletion.
//!
//! Training records how often each word occurs and, for every new word, every
//! string reachable by deleting up to `depth` characters. Correcting a word
//! generates the same deletions of the input; any trained word sharing a
//! deletion variant is a candidate, confirmed with a bounded edit distance.
//!
//! ```text
//! trained "winter"  ──deletes──▶  "wintr", "inter", "wnter", ...
//! query   "wintr"   ──deletes──▶  "wintr", "wint", "intr", ...
//!                                    │
//!                       shared variant → candidate "winter" (distance 1)
//! ```
//!
//! Ranking: smallest distance, then highest corpus frequency, then
//! lexicographic order, so corrections are deterministic.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::levenshtein::distance_within;
use super::tokenize::{tokenize, word_spans};
use super::Corrector;

/// Deletion depth, and so the largest edit distance a correction may span.
pub const FUZZY_DEPTH: usize = 3;

/// Words longer than this (in characters) are never corrected.
///
/// Deletion variants grow as `len^depth`; this caps the work a single
/// query word can cause.
pub const MAX_CORRECTABLE_LEN: usize = 32;

/// Word-frequency model with a deletion-variant index.
#[derive(Debug, Clone)]
pub struct SpellModel {
    depth: usize,
    words: Vec<String>,
    ids: HashMap<String, u32>,
    counts: Vec<u64>,
    /// deletion variant → ids of trained words producing it
    variants: HashMap<String, Vec<u32>>,
}

impl Default for SpellModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellModel {
    pub fn new() -> Self {
        Self::with_depth(FUZZY_DEPTH)
    }

    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            words: Vec::new(),
            ids: HashMap::new(),
            counts: Vec::new(),
            variants: HashMap::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of distinct trained words.
    pub fn vocabulary_len(&self) -> usize {
        self.words.len()
    }

    /// How often `word` was seen during training.
    pub fn frequency(&self, word: &str) -> u64 {
        self.ids
            .get(word)
            .map_or(0, |&id| self.counts[id as usize])
    }

    /// Train on a batch of words.
    pub fn train_words<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        let mut fresh: Vec<u32> = Vec::new();
        for word in words {
            if word.is_empty() {
                continue;
            }
            match self.ids.get(word) {
                Some(&id) => self.counts[id as usize] += 1,
                None => {
                    let id = self.words.len() as u32;
                    self.ids.insert(word.to_string(), id);
                    self.words.push(word.to_string());
                    self.counts.push(1);
                    fresh.push(id);
                }
            }
        }
        self.index_variants(&fresh);
    }

    pub fn train_word(&mut self, word: &str) {
        self.train_words(std::iter::once(word));
    }

    fn index_variants(&mut self, fresh: &[u32]) {
        let depth = self.depth;
        let words = &self.words;

        #[cfg(feature = "parallel")]
        let generated: Vec<(u32, HashSet<String>)> = fresh
            .par_iter()
            .map(|&id| (id, deletion_variants(&words[id as usize], depth)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let generated: Vec<(u32, HashSet<String>)> = fresh
            .iter()
            .map(|&id| (id, deletion_variants(&words[id as usize], depth)))
            .collect();

        for (id, variants) in generated {
            for variant in variants {
                self.variants.entry(variant).or_default().push(id);
            }
        }
    }

    /// Best correction for a single word, or `None` when nothing is close.
    pub fn suggest(&self, word: &str) -> Option<&str> {
        if self.ids.contains_key(word) {
            return self.ids.get_key_value(word).map(|(known, _)| known.as_str());
        }
        if word.is_empty() || word.chars().count() > MAX_CORRECTABLE_LEN {
            return None;
        }

        let mut seen: HashSet<u32> = HashSet::new();
        let mut best: Option<(usize, u64, &str)> = None;

        for variant in deletion_variants(word, self.depth) {
            let Some(ids) = self.variants.get(&variant) else {
                continue;
            };
            for &id in ids {
                if !seen.insert(id) {
                    continue;
                }
                let candidate = self.words[id as usize].as_str();
                let Some(distance) = distance_within(word, candidate, self.depth) else {
                    continue;
                };
                let count = self.counts[id as usize];
                let better = match best {
                    None => true,
                    Some((d, c, w)) => (distance, std::cmp::Reverse(count), candidate)
                        < (d, std::cmp::Reverse(c), w),
                };
                if better {
                    best = Some((distance, count, candidate));
                }
            }
        }

        best.map(|(_, _, word)| word)
    }
}

impl Corrector for SpellModel {
    fn train_from_text(&mut self, text: &str) {
        self.train_words(tokenize(text));
    }

    /// Correct each word of `query` in place; everything between words is kept.
    fn correct(&self, query: &str) -> String {
        let mut corrected = String::with_capacity(query.len());
        let mut last = 0;
        for (start, word) in word_spans(query) {
            corrected.push_str(&query[last..start]);
            corrected.push_str(self.suggest(word).unwrap_or(word));
            last = start + word.len();
        }
        corrected.push_str(&query[last..]);
        corrected
    }
}

/// `word` plus every string reachable by deleting up to `depth` characters.
fn deletion_variants(word: &str, depth: usize) -> HashSet<String> {
    let mut all: HashSet<String> = HashSet::new();
    all.insert(word.to_string());

    let mut frontier: Vec<String> = vec![word.to_string()];
    for _ in 0..depth {
        let mut next = Vec::new();
        for current in &frontier {
            for (i, c) in current.char_indices() {
                let mut shorter = String::with_capacity(current.len() - c.len_utf8());
                shorter.push_str(&current[..i]);
                shorter.push_str(&current[i + c.len_utf8()..]);
                if all.insert(shorter.clone()) {
                    next.push(shorter);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    all
}
