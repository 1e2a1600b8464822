// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only API over the interpreted post archive.

use crate::error::{AppError, Result};
use crate::models::{AboutStats, ActivityStats, ActivityType, Category, Tweet, TweetSummary};
use crate::services::tweets::MAX_QUERY_LEN;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tweets", get(get_tweets))
        .route("/api/tweets/{id}", get(get_tweet))
        .route("/api/stats/about", get(get_about_stats))
        .route("/api/stats/activities", get(get_activity_stats))
        .route("/api/search", get(search_written))
}

// ─── Posts ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct TweetsQuery {
    /// Filter by category label ("completed_event", ...)
    category: Option<String>,
    /// Pagination: page number (1-indexed)
    #[serde(default = "default_page")]
    page: u32,
    /// Pagination: items per page
    #[serde(default = "default_per_page")]
    per_page: u32,
}

fn default_page() -> u32 {
    1
}
fn default_per_page() -> u32 {
    50
}

const MAX_PER_PAGE: u32 = 100;

fn parse_category(raw: Option<&str>) -> Result<Option<Category>> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<Category>().map_err(AppError::BadRequest))
        .transpose()
}

/// A post and its position in the archive.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TweetEntry {
    pub id: usize,
    #[serde(flatten)]
    pub tweet: TweetSummary,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TweetsResponse {
    pub tweets: Vec<TweetEntry>,
    pub page: u32,
    pub per_page: u32,
    /// Number of posts matching the filter
    pub total: u32,
}

/// List interpreted posts, optionally filtered by category.
async fn get_tweets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TweetsQuery>,
) -> Result<Json<TweetsResponse>> {
    tracing::debug!(
        category = ?params.category,
        page = params.page,
        per_page = params.per_page,
        "Listing posts"
    );

    if params.page < 1 {
        return Err(AppError::BadRequest(
            "Page must be greater than 0".to_string(),
        ));
    }
    let category = parse_category(params.category.as_deref())?;
    let limit = params.per_page.clamp(1, MAX_PER_PAGE);

    let matching: Vec<(usize, &Tweet)> = state
        .tweet_service
        .tweets()
        .iter()
        .enumerate()
        .filter(|(_, t)| category.is_none_or(|c| t.category() == c))
        .collect();
    let total = matching.len() as u32;

    let start = (params.page as usize - 1)
        .checked_mul(limit as usize)
        .ok_or_else(|| AppError::BadRequest("Page number causes overflow".to_string()))?;

    let tweets = matching
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .map(|(id, t)| TweetEntry {
            id,
            tweet: t.summary(),
        })
        .collect();

    Ok(Json(TweetsResponse {
        tweets,
        page: params.page,
        per_page: limit,
        total,
    }))
}

/// Get a single interpreted post by archive position.
async fn get_tweet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> Result<Json<TweetEntry>> {
    let tweet = state
        .tweet_service
        .tweets()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    Ok(Json(TweetEntry {
        id,
        tweet: tweet.summary(),
    }))
}

// ─── Stats ───────────────────────────────────────────────────

async fn get_about_stats(State(state): State<Arc<AppState>>) -> Json<AboutStats> {
    Json(AboutStats::from_tweets(state.tweet_service.tweets()))
}

async fn get_activity_stats(State(state): State<Arc<AppState>>) -> Json<ActivityStats> {
    Json(ActivityStats::from_tweets(state.tweet_service.tweets()))
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResult {
    /// 1-based row number
    pub number: usize,
    pub activity_type: ActivityType,
    pub text: String,
    pub link: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchResult>,
}

/// Search the posts that carry user commentary.
async fn search_written(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    if params.q.chars().count() > MAX_QUERY_LEN {
        return Err(AppError::BadRequest(format!(
            "Query must be at most {} characters",
            MAX_QUERY_LEN
        )));
    }

    let query = params.q.trim().to_string();
    let results: Vec<SearchResult> = state
        .tweet_service
        .search(&query)
        .into_iter()
        .enumerate()
        .map(|(i, t)| SearchResult {
            number: i + 1,
            activity_type: t.activity_type(),
            text: t.text().to_string(),
            link: t.activity_url().map(str::to_string),
        })
        .collect();

    tracing::debug!(query = %query, count = results.len(), "Searched written posts");

    Ok(Json(SearchResponse {
        query,
        count: results.len(),
        results,
    }))
}
