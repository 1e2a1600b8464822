// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! RunKeeper Insights API Server
//!
//! Loads a RunKeeper post archive, interprets every post once, and serves the
//! results and aggregate statistics as JSON.

use anyhow::Context;
use runkeeper_insights::{config::Config, services::TweetService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting RunKeeper Insights API");

    // Load and interpret the post archive
    tracing::info!(path = %config.tweets_path, "Loading post archive");
    let tweet_service = TweetService::load_from_file(&config.tweets_path)
        .with_context(|| format!("Failed to load posts from {}", config.tweets_path))?;

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        tweet_service,
    });

    // Build router
    let app = runkeeper_insights::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("runkeeper_insights=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
