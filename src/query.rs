// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request parameters and the per-request pipeline.
//!
//! | Key | Meaning              | Default | On parse failure  |
//! |-----|----------------------|---------|-------------------|
//! | `q` | query (required)     | -       | 400               |
//! | `p` | page, one-based      | 1       | default, silently |
//! | `a` | page size            | 10      | default, silently |
//!
//! Pagination rejections are logged and swallowed: the client still gets a
//! 200 with whatever notices exist.

use crate::error::{QueryError, Result};
use crate::fuzzy::Corrector;
use crate::paginate::{paginate, DEFAULT_AMOUNT, DEFAULT_PAGE};
use crate::searcher::Searcher;

/// Raw request parameters. The first occurrence of each key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
    pub amount: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Collect `q`, `p` and `a` from decoded key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut params.query,
                "p" => &mut params.page,
                "a" => &mut params.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// The query, unless missing or empty.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Zero-based page. Unparseable input means page 1.
    pub fn page_index(&self) -> i64 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE).saturating_sub(1)
    }

    /// Page size. Unparseable input means [`DEFAULT_AMOUNT`]; the value is not
    /// range-checked here.
    pub fn amount(&self) -> i64 {
        parse_or(self.amount.as_deref(), DEFAULT_AMOUNT)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Run one request: search, fall back, paginate.
///
/// Output order is the fallback notice (if any), the page summary, then the
/// page's snippets. If pagination rejects the request only the notices remain.
pub fn handle<C: Corrector>(
    searcher: &Searcher<C>,
    params: &SearchParams,
) -> std::result::Result<Vec<String>, QueryError> {
    let query = params.query().ok_or(QueryError::MissingQuery)?;
    let amount = params.amount();
    let page = params.page_index();

    let result = searcher.query(query);
    let mut lines = result.notices;
    match paginate(&result.snippets, amount, page) {
        Ok(page_lines) => lines.extend(page_lines),
        Err(err) => log::warn!(
            "pagination rejected for {:?} (amount={}, page={}): {}",
            query,
            amount,
            page,
            err
        ),
    }
    Ok(lines)
}

/// Serialize response lines as a JSON array.
pub fn encode(lines: &[String]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(lines)?)
}
