// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word tokenizer for training and correcting.
//!
//! A word is a run of alphanumeric characters. An apostrophe between two
//! alphanumerics stays inside the word, so "I'll" and "o'er" are one token
//! each while a trailing "lovers'" loses its apostrophe. Case is preserved;
//! the corpus search is case-sensitive and so is the model.

/// Words of `text` with their byte offsets.
pub fn word_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let joins_word = is_apostrophe(c)
            && start.is_some()
            && chars.peek().is_some_and(|&(_, next)| next.is_alphanumeric());

        if c.is_alphanumeric() || joins_word {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            spans.push((s, &text[s..i]));
        }
    }

    if let Some(s) = start {
        spans.push((s, &text[s..]));
    }

    spans
}

/// Words of `text`, in order.
pub fn tokenize(text: &str) -> Vec<&str> {
    word_spans(text).into_iter().map(|(_, word)| word).collect()
}

#[inline]
fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}
