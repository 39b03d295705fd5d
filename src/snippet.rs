// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-radius context windows around match offsets.
//!
//! ```text
//!            offset
//!              │
//!   ◀── 250 ──▶│◀── 250 ──▶
//! ──┬──────────┼──────────┬──
//!   start      │        end
//! ```
//!
//! Near either edge of the corpus the window is clipped instead of shifted, so
//! a match 10 bytes into the corpus gets a 260-byte snippet. Overlapping
//! matches produce overlapping snippets; nothing is merged.

/// Bytes of context on each side of a match.
pub const SNIPPET_RADIUS: usize = 250;

/// Longest possible snippet, in bytes.
pub const MAX_SNIPPET_LEN: usize = 2 * SNIPPET_RADIUS;

/// Cut the context window around `offset` out of `corpus`.
///
/// The window is `[offset - 250, offset + 250)` clipped to the corpus. If an
/// edge lands inside a multi-byte character it moves inward to the nearest
/// character boundary, so the result never exceeds [`MAX_SNIPPET_LEN`] bytes.
/// Out-of-range offsets produce a clipped (possibly empty) window, never a panic.
pub fn extract(corpus: &str, offset: usize) -> &str {
    let len = corpus.len();

    let mut start = offset.saturating_sub(SNIPPET_RADIUS).min(len);
    while !corpus.is_char_boundary(start) {
        start += 1;
    }

    let mut end = offset.saturating_add(SNIPPET_RADIUS).min(len).max(start);
    while !corpus.is_char_boundary(end) {
        end -= 1;
    }

    &corpus[start..end]
}
