// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time suffix array construction over the corpus bytes.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Shift bytes up by one, append sentinel (0), classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: LMS (leftmost S-type) positions: 1, 3, 6
//! Step 3: Induce L-type then S-type suffixes from the LMS seeds
//! Step 4: Name LMS substrings; recurse if any two names collide
//! Step 5: Induce again from correctly ordered LMS suffixes
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! The sentinel is the unique smallest symbol, so it always sorts first and is
//! dropped from the returned array.
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// Suffix is lexicographically smaller than the next one
    S,
    /// Suffix is lexicographically larger than the next one
    L,
}

/// Marker for an unfilled suffix array slot.
const EMPTY: usize = usize::MAX;

/// Byte alphabet plus the sentinel.
const BYTE_ALPHABET: usize = 257;

/// Build the suffix array of `text`.
///
/// `sa[i]` is the starting byte offset of the i-th smallest suffix.
pub fn suffix_array(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut symbols: Vec<usize> = text.iter().map(|&b| b as usize + 1).collect();
    symbols.push(0);

    let sa = sais(&symbols, BYTE_ALPHABET);
    debug_assert_eq!(sa[0], text.len());
    sa.into_iter().skip(1).collect()
}

/// Check that `sa` is a complete, sorted suffix array of `text`.
pub fn is_sorted(text: &[u8], sa: &[usize]) -> bool {
    sa.len() == text.len()
        && sa.iter().all(|&pos| pos < text.len())
        && sa.windows(2).all(|pair| text[pair[0]..] < text[pair[1]..])
}

/// Core SA-IS. `text` must end with a unique smallest symbol (0).
fn sais(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    if n == 1 {
        return vec![0];
    }

    let types = classify_suffixes(text);
    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    // First pass: LMS seeds in text order are enough to sort LMS substrings
    let mut sa = vec![EMPTY; n];
    induce(text, &types, &bucket_sizes, &lms_positions, &mut sa);

    let mut lms_names = vec![EMPTY; n];
    let mut name = 0usize;
    let mut prev: Option<usize> = None;
    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }
        if let Some(prev) = prev {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }
        lms_names[pos] = name;
        prev = Some(pos);
    }

    // Reduced string keeps the sentinel property: the sentinel's LMS is named 0
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();
    let unique_count = name + 1;

    let order = if unique_count < reduced.len() {
        sais(&reduced, unique_count)
    } else {
        let mut order = vec![0usize; reduced.len()];
        for (i, &rank) in reduced.iter().enumerate() {
            order[rank] = i;
        }
        order
    };

    let sorted_lms: Vec<usize> = order.iter().map(|&i| lms_positions[i]).collect();

    sa.fill(EMPTY);
    induce(text, &types, &bucket_sizes, &sorted_lms, &mut sa);
    sa
}

/// Place LMS seeds at bucket tails, then induce L-type and S-type suffixes.
fn induce(
    text: &[usize],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
    sa: &mut [usize],
) {
    let n = text.len();

    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

fn classify_suffixes(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    for i in (0..n - 1).rev() {
        types[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Greater => SuffixType::L,
            std::cmp::Ordering::Less => SuffixType::S,
            std::cmp::Ordering::Equal => types[i + 1],
        };
    }

    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        heads.push(sum);
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        sum += size;
        tails.push(sum);
    }
    tails
}

/// Compare the LMS substrings starting at `a` and `b` (both ends inclusive).
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], a: usize, b: usize) -> bool {
    let last = text.len() - 1;
    if a == last || b == last {
        return a == b;
    }

    let mut k = 0;
    loop {
        if text[a + k] != text[b + k] || types[a + k] != types[b + k] {
            return false;
        }
        if k > 0 {
            let a_end = is_lms(types, a + k);
            let b_end = is_lms(types, b + k);
            if a_end && b_end {
                return true;
            }
            if a_end != b_end {
                return false;
            }
        }
        k += 1;
    }
}
