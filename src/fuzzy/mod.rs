// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy fallback: typo correction for queries that match nothing.
//!
//! The searcher only needs two capabilities from a correction engine, so they
//! live behind [`Corrector`]. [`SpellModel`] is the real engine; tests swap in
//! stubs.

mod levenshtein;
mod spell;
mod tokenize;

pub use levenshtein::distance_within;
pub use spell::{SpellModel, FUZZY_DEPTH, MAX_CORRECTABLE_LEN};
pub use tokenize::{tokenize, word_spans};

/// A query-correction engine trained once from the corpus.
pub trait Corrector {
    /// Learn the vocabulary of `text`.
    fn train_from_text(&mut self, text: &str);

    /// Best-effort correction of `query`. Returns the input unchanged when
    /// nothing better is known.
    fn correct(&self, query: &str) -> String;
}

/// Message shown ahead of results for a corrected query.
pub fn fallback_notice(corrected: &str) -> String {
    format!("Nothing found showing results for {} instead.", corrected)
}
