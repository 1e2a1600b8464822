// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use runkeeper_insights::config::Config;
use runkeeper_insights::routes::create_router;
use runkeeper_insights::services::TweetService;
use runkeeper_insights::AppState;
use std::sync::Arc;

/// Sample archive committed under data/.
pub const SAMPLE_ARCHIVE: &str = "data/runkeeper_tweets.json";

/// Load the sample archive.
#[allow(dead_code)]
pub fn load_sample_archive() -> TweetService {
    TweetService::load_from_file(SAMPLE_ARCHIVE)
        .unwrap_or_else(|e| panic!("Failed to load {} - is data/ committed? {}", SAMPLE_ARCHIVE, e))
}

/// Create a test app over the given posts.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with(tweet_service: TweetService) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        tweet_service,
    });

    (create_router(state.clone()), state)
}

/// Create a test app over the sample archive.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(load_sample_archive())
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Body should be JSON")
}
