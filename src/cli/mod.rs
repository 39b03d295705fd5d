// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quarto command-line interface.
//!
//! Three subcommands: `serve` runs the HTTP service, `search` runs one query
//! through the same pipeline and prints the JSON array, and `inspect` prints
//! index statistics for a corpus.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Corpus read when `--corpus` is not given.
pub const DEFAULT_CORPUS: &str = "completeworks.txt";

#[derive(Parser)]
#[command(
    name = "quarto",
    about = "Substring search over a single corpus with fuzzy fallback",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search API and static assets over HTTP
    Serve {
        /// Corpus file to index at startup
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// Directory served at `/`
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Address to bind
        #[arg(long, env = "QUARTO_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 3001)]
        port: u16,
    },

    /// Run one query and print the JSON response body
    Search {
        /// Search query
        query: String,

        /// Corpus file to index
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// One-based page number
        #[arg(short, long, allow_hyphen_values = true)]
        page: Option<String>,

        /// Results per page
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Print index statistics for a corpus
    Inspect {
        /// Corpus file to index
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
