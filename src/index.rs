// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus index: the corpus text plus its suffix array.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_SORTED**: `suffix_array` is the lexicographic order of
//!    every suffix of `text.as_bytes()`
//! 2. **SUFFIX_ARRAY_COMPLETE**: every byte offset of the corpus has exactly one entry
//! 3. **IMMUTABLE**: nothing mutates the index after construction, so `search`
//!    is safe to call from any number of threads at once
//!
//! # Offsets
//!
//! Offsets are **byte offsets** into the corpus. Suffixes that share a prefix
//! sit in one contiguous run of the suffix array, so a substring lookup is two
//! binary searches: one for the start of the run, one for its end.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::sais::suffix_array;

/// Immutable corpus with a substring position index.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    text: String,
    suffix_array: Vec<usize>,
}

impl CorpusIndex {
    /// Read the whole file at `path` and index it.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD before indexing so that every
    /// snippet cut from the corpus is a valid string.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(String::from_utf8_lossy(&bytes).into_owned()))
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let suffix_array = suffix_array(text.as_bytes());
        Self { text, suffix_array }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Corpus length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// Every byte offset where `query` occurs literally, in ascending order.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }

        let hay = self.text.as_bytes();
        let needle = query.as_bytes();

        // First suffix >= needle
        let start = self
            .suffix_array
            .partition_point(|&pos| &hay[pos..] < needle);

        // Run of suffixes that start with needle
        let run = self.suffix_array[start..]
            .partition_point(|&pos| hay[pos..].starts_with(needle));

        let mut offsets = self.suffix_array[start..start + run].to_vec();
        offsets.sort_unstable();
        offsets
    }
}
