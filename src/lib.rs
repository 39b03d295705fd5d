// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring search over a single static corpus.
//!
//! One text document is loaded at startup and indexed with a suffix array.
//! Queries return every literal occurrence wrapped in a fixed-radius context
//! snippet; a query with no occurrences is spell-corrected against the corpus
//! vocabulary and retried once. Results are paginated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   sais.rs   │────▶│   index.rs   │────▶│  snippet.rs  │
//! │  (SA-IS)    │     │ (CorpusIndex)│     │  (extract)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//! ┌─────────────┐            ▼                    ▼
//! │  fuzzy/     │     ┌──────────────────────────────────┐
//! │ (SpellModel,│────▶│           searcher.rs            │
//! │  Corrector) │     │  exact search, fuzzy fallback    │
//! └─────────────┘     └──────────────────────────────────┘
//!                                    │
//!                     ┌──────────────┴───────────────┐
//!                     ▼                              ▼
//!              ┌─────────────┐               ┌──────────────┐
//!              │ paginate.rs │──────────────▶│   query.rs   │──▶ server.rs
//!              └─────────────┘               └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use quarto::{handle, SearchParams, Searcher};
//!
//! let searcher = Searcher::from_text("to be or not to be");
//! let lines = handle(&searcher, &SearchParams::new("be")).unwrap();
//!
//! assert_eq!(lines[0], "Showing Page 1 of 0");
//! assert_eq!(lines.len(), 3);
//! ```

mod error;
pub mod fuzzy;
mod index;
mod paginate;
mod query;
pub mod sais;
mod searcher;
pub mod server;
mod snippet;

pub use error::{Error, PaginationError, QueryError, Result};
pub use fuzzy::{Corrector, SpellModel};
pub use index::CorpusIndex;
pub use paginate::{page_summary, paginate, DEFAULT_AMOUNT, DEFAULT_PAGE};
pub use query::{encode, handle, SearchParams};
pub use searcher::{ResultSet, Searcher};
pub use snippet::{extract, MAX_SNIPPET_LEN, SNIPPET_RADIUS};
