// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use quarto::fuzzy::{tokenize, FUZZY_DEPTH};
use quarto::{encode, handle, server, SearchParams, Searcher};

mod cli;
use cli::display::{use_colors, InspectReport};
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Serve {
            corpus,
            static_dir,
            host,
            port,
        } => run_serve(&corpus, static_dir, &host, port),
        Commands::Search {
            query,
            corpus,
            page,
            amount,
        } => run_search(&corpus, query, page, amount),
        Commands::Inspect { corpus, json } => run_inspect(&corpus, json),
    };

    if let Err(e) = outcome {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn load_searcher(corpus: &Path) -> Result<Searcher> {
    let started = Instant::now();
    let searcher = Searcher::load(corpus)
        .with_context(|| format!("Failed to load corpus {}", corpus.display()))?;
    log::info!(
        "indexed {} bytes, {} distinct words in {:.2?}",
        searcher.index().len(),
        searcher.corrector().vocabulary_len(),
        started.elapsed()
    );
    Ok(searcher)
}

fn run_serve(corpus: &Path, static_dir: PathBuf, host: &str, port: u16) -> Result<()> {
    let searcher = Arc::new(load_searcher(corpus)?);

    let static_dir = if static_dir.is_dir() {
        Some(static_dir)
    } else {
        log::warn!(
            "static directory {} not found, serving the API only",
            static_dir.display()
        );
        None
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(serve_http(searcher, static_dir, host, port))
}

async fn serve_http(
    searcher: Arc<Searcher>,
    static_dir: Option<PathBuf>,
    host: &str,
    port: u16,
) -> Result<()> {
    let bind = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    log::info!("Listening on {}...", listener.local_addr()?);

    server::serve(listener, server::router(searcher, static_dir))
        .await
        .context("HTTP server failed")
}

fn run_search(
    corpus: &Path,
    query: String,
    page: Option<String>,
    amount: Option<String>,
) -> Result<()> {
    let searcher = load_searcher(corpus)?;
    let params = SearchParams {
        query: Some(query),
        page,
        amount,
    };
    let lines = handle(&searcher, &params)?;
    let body = encode(&lines)?;
    println!("{}", String::from_utf8_lossy(&body));
    Ok(())
}

fn run_inspect(corpus: &Path, json: bool) -> Result<()> {
    let searcher = load_searcher(corpus)?;
    let index = searcher.index();
    let report = InspectReport {
        path: corpus.display().to_string(),
        corpus_bytes: index.len(),
        suffix_entries: index.suffix_array().len(),
        tokens: tokenize(index.text()).len(),
        vocabulary: searcher.corrector().vocabulary_len(),
        fuzzy_depth: FUZZY_DEPTH,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render(use_colors()));
    }
    Ok(())
}
