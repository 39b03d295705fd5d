// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact search with a fuzzy fallback.
//!
//! ```text
//! query ──▶ index.search ──▶ offsets? ──yes──▶ snippets
//!                               │
//!                               no
//!                               ▼
//!            corrector.correct ──▶ notice + index.search(corrected) ──▶ snippets
//! ```
//!
//! A `Searcher` is built once at startup and never mutated, so it is shared
//! between request handlers behind an `Arc` without locks.

use std::path::Path;

use crate::error::Result;
use crate::fuzzy::{fallback_notice, Corrector, SpellModel};
use crate::index::CorpusIndex;
use crate::snippet::extract;

/// Outcome of one query before pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    /// Informational lines that precede the page (the fallback notice).
    pub notices: Vec<String>,
    /// Snippets in match-offset order.
    pub snippets: Vec<String>,
    /// The corrected query, when the fallback ran.
    pub corrected: Option<String>,
}

/// Corpus index plus a trained correction engine.
#[derive(Debug)]
pub struct Searcher<C = SpellModel> {
    index: CorpusIndex,
    corrector: C,
}

impl Searcher<SpellModel> {
    /// Load the corpus at `path`, index it and train the spelling model.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let index = CorpusIndex::load(path)?;
        Ok(Self::with_corrector(index, SpellModel::new()))
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::with_corrector(CorpusIndex::from_text(text), SpellModel::new())
    }
}

impl<C: Corrector> Searcher<C> {
    /// Train `corrector` on the corpus and pair it with `index`.
    pub fn with_corrector(index: CorpusIndex, mut corrector: C) -> Self {
        corrector.train_from_text(index.text());
        Self { index, corrector }
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn corrector(&self) -> &C {
        &self.corrector
    }

    /// Context snippets for every literal occurrence of `query`.
    pub fn snippets(&self, query: &str) -> Vec<String> {
        self.index
            .search(query)
            .into_iter()
            .map(|offset| extract(self.index.text(), offset).to_string())
            .collect()
    }

    /// Search `query`, retrying once with a corrected query if nothing matched.
    ///
    /// An empty corrected search is not an error: the result holds only the
    /// notice.
    pub fn query(&self, query: &str) -> ResultSet {
        let snippets = self.snippets(query);
        if !snippets.is_empty() {
            return ResultSet {
                snippets,
                ..ResultSet::default()
            };
        }

        let corrected = self.corrector.correct(query);
        ResultSet {
            notices: vec![fallback_notice(&corrected)],
            snippets: self.snippets(&corrected),
            corrected: Some(corrected),
        }
    }
}
