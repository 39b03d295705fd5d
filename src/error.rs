// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Each error maps to one place in the request lifecycle: `Io` is fatal at
//! startup, `PaginationError` is logged and swallowed, `QueryError` becomes a
//! 400, and `Serialization` becomes a 500.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read corpus {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encoding failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Rejections from [`crate::paginate`], checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// `amount * page` is negative.
    #[error("Page sub-0")]
    PageUnderflow,

    /// `amount` is zero or negative.
    #[error("0 amount")]
    InvalidAmount,

    /// The requested page starts past the end of the results.
    #[error("Pages exceeded")]
    PagesExceeded,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("missing search query in URL params")]
    MissingQuery,
}
