// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface.
//!
//! - `GET /search?q=&p=&a=`: JSON array of strings
//! - `GET /health`: liveness
//! - everything else: static files from the configured directory

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::fuzzy::Corrector;
use crate::query::{self, SearchParams};
use crate::searcher::Searcher;

/// Body sent when the response cannot be serialized.
pub const ENCODING_FAILURE: &str = "encoding failure";

/// Build the router. `static_dir`, when given, is served for every path the
/// API does not claim.
pub fn router<C>(searcher: Arc<Searcher<C>>, static_dir: Option<PathBuf>) -> Router
where
    C: Corrector + Send + Sync + 'static,
{
    let app = Router::new()
        .route("/search", get(search_handler::<C>))
        .route("/health", get(health_handler));

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.with_state(searcher)
}

/// Serve `app` on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app).await
}

async fn search_handler<C>(
    State(searcher): State<Arc<Searcher<C>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response
where
    C: Corrector + Send + Sync + 'static,
{
    let params = SearchParams::from_pairs(pairs);
    log::debug!("search request: {:?}", params);
    search_response(&searcher, &params)
}

/// Status and body for one search request.
pub fn search_response<C: Corrector>(searcher: &Searcher<C>, params: &SearchParams) -> Response {
    let lines = match query::handle(searcher, params) {
        Ok(lines) => lines,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    match query::encode(&lines) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            log::error!("{}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
    }
}

async fn health_handler() -> &'static str {
    "OK"
}
