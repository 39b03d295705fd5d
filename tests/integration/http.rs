//! End-to-end HTTP tests against a server on an ephemeral port.
//!
//! Verifies:
//! 1. Status codes and bodies for the three response classes
//! 2. Default and silently-defaulted pagination parameters
//! 3. Fuzzy fallback ordering in the JSON array
//! 4. Static file serving and the health route

use super::common::{spawn_server, SOLILOQUY, TO_BE};
use quarto::{Corrector, CorpusIndex, Searcher};
use reqwest::StatusCode;

async fn get(url: &str) -> (StatusCode, Option<String>, String) {
    let response = reqwest::get(url).await.expect("request failed");
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.expect("body");
    (status, content_type, body)
}

async fn get_lines(url: &str) -> Vec<String> {
    let (status, _, body) = get(url).await;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    serde_json::from_str(&body).expect("JSON array of strings")
}

/// Always suggests the same word, so fallback output is predictable.
struct Always(&'static str);

impl Corrector for Always {
    fn train_from_text(&mut self, _text: &str) {}

    fn correct(&self, _query: &str) -> String {
        self.0.to_string()
    }
}

#[tokio::test]
async fn test_search_default_page() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;
    let (status, content_type, body) = get(&format!("{}/search?q=be", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let lines: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(lines, vec!["Showing Page 1 of 0", TO_BE, TO_BE]);
}

#[tokio::test]
async fn test_missing_query_is_400() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;

    for url in [
        format!("{}/search", base),
        format!("{}/search?q=", base),
        format!("{}/search?p=2&a=5", base),
    ] {
        let (status, _, body) = get(&url).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "missing search query in URL params");
    }
}

#[tokio::test]
async fn test_fuzzy_fallback_notice_comes_first() {
    let base = spawn_server(Searcher::from_text(SOLILOQUY), None).await;
    let lines = get_lines(&format!("{}/search?q=slepe", base)).await;

    assert_eq!(lines[0], "Nothing found showing results for sleep instead.");
    assert_eq!(lines[1], "Showing Page 1 of 0");
    assert_eq!(lines.len(), 2 + 5);
    assert!(lines[2..].iter().all(|s| s.contains("sleep")));
}

#[tokio::test]
async fn test_unmatched_query_names_correction() {
    let searcher = Searcher::with_corrector(CorpusIndex::from_text(TO_BE), Always("nothing"));
    let base = spawn_server(searcher, None).await;
    let lines = get_lines(&format!("{}/search?q=xyzzynotfound", base)).await;

    assert_eq!(
        lines,
        vec![
            "Nothing found showing results for nothing instead.",
            "Showing Page 1 of 0",
        ]
    );
}

#[tokio::test]
async fn test_spell_model_leaves_unknown_query_alone() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;
    let lines = get_lines(&format!("{}/search?q=xyzzynotfound", base)).await;

    assert_eq!(
        lines,
        vec![
            "Nothing found showing results for xyzzynotfound instead.",
            "Showing Page 1 of 0",
        ]
    );
}

#[tokio::test]
async fn test_pages_walk_the_results() {
    let base = spawn_server(Searcher::from_text(SOLILOQUY), None).await;
    // Case-sensitive: lowercase "to" occurs 9 times
    let first = get_lines(&format!("{}/search?q=to&a=4", base)).await;
    let third = get_lines(&format!("{}/search?q=to&a=4&p=3", base)).await;

    assert_eq!(first[0], "Showing Page 1 of 2");
    assert_eq!(first.len(), 5);
    assert_eq!(third[0], "Showing Page 3 of 2");
    assert_eq!(third.len(), 2);
}

#[tokio::test]
async fn test_bad_page_params_fall_back_to_defaults() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;
    let defaulted = get_lines(&format!("{}/search?q=be&p=first&a=lots", base)).await;
    let plain = get_lines(&format!("{}/search?q=be", base)).await;

    assert_eq!(defaulted, plain);
}

#[tokio::test]
async fn test_pagination_errors_are_200_with_best_effort_body() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;

    // Past the end: no summary, no snippets
    assert!(get_lines(&format!("{}/search?q=be&p=7", base)).await.is_empty());
    // Zero amount
    assert!(get_lines(&format!("{}/search?q=be&a=0", base)).await.is_empty());
    // Negative page
    assert!(get_lines(&format!("{}/search?q=be&p=-1", base)).await.is_empty());
}

#[tokio::test]
async fn test_exact_last_page_is_empty() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;
    let lines = get_lines(&format!("{}/search?q=be&a=1&p=3", base)).await;

    assert_eq!(lines, vec!["Showing Page 3 of 2"]);
}

#[tokio::test]
async fn test_url_encoded_query() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;
    let lines = get_lines(&format!("{}/search?q=not%20to", base)).await;

    assert_eq!(lines, vec!["Showing Page 1 of 0", TO_BE]);
}

#[tokio::test]
async fn test_health() {
    let base = spawn_server(Searcher::from_text(TO_BE), None).await;
    let (status, _, body) = get(&format!("{}/health", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_static_files_served_at_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>quarto</h1>").unwrap();

    let base = spawn_server(Searcher::from_text(TO_BE), Some(dir.path().to_path_buf())).await;

    let (status, _, body) = get(&format!("{}/", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>quarto</h1>");

    let (status, _, _) = get(&format!("{}/missing.css", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The API still wins over the static directory
    let lines = get_lines(&format!("{}/search?q=be", base)).await;
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn test_concurrent_requests() {
    let base = spawn_server(Searcher::from_text(SOLILOQUY), None).await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let url = format!("{}/search?q=sleep", base);
        handles.push(tokio::spawn(async move { get_lines(&url).await }));
    }

    let mut bodies = Vec::new();
    for handle in handles {
        bodies.push(handle.await.unwrap());
    }
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(bodies[0].len(), 1 + 5);
}
