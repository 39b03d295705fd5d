// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page selection over an ordered result list.
//!
//! # Validation order
//!
//! The checks run on the product before the factor:
//!
//! ```text
//! amount * page < 0      → PageUnderflow
//! amount <= 0            → InvalidAmount
//! len < amount * page    → PagesExceeded
//! ```
//!
//! So `(amount = -1, page = 0)` is `InvalidAmount`, because the product is 0.
//! `amount * page == len` passes and yields an empty last page.

use crate::error::PaginationError;

/// Page size when the request does not give one.
pub const DEFAULT_AMOUNT: i64 = 10;

/// One-based page number when the request does not give one.
pub const DEFAULT_PAGE: i64 = 1;

/// Summary line placed ahead of every page.
pub fn page_summary(page: i64, total: usize, amount: i64) -> String {
    format!(
        "Showing Page {} of {}",
        page.saturating_add(1),
        total as i64 / amount
    )
}

/// Select the zero-based `page` of size `amount` from `results`.
///
/// The output starts with a [`page_summary`] line, which does not count
/// towards `amount`. The product `amount * page` saturates, so overflowing
/// requests land in `PageUnderflow` or `PagesExceeded` rather than wrapping.
pub fn paginate<S: AsRef<str>>(
    results: &[S],
    amount: i64,
    page: i64,
) -> Result<Vec<String>, PaginationError> {
    let skip = amount.saturating_mul(page);
    let total = results.len();

    if skip < 0 {
        return Err(PaginationError::PageUnderflow);
    }
    if amount <= 0 {
        return Err(PaginationError::InvalidAmount);
    }
    let start = usize::try_from(skip).map_err(|_| PaginationError::PagesExceeded)?;
    if total < start {
        return Err(PaginationError::PagesExceeded);
    }

    let end = usize::try_from(amount)
        .ok()
        .and_then(|amount| start.checked_add(amount))
        .map_or(total, |end| end.min(total));

    let mut page_lines = Vec::with_capacity(end - start + 1);
    page_lines.push(page_summary(page, total, amount));
    page_lines.extend(results[start..end].iter().map(|s| s.as_ref().to_string()));
    Ok(page_lines)
}
