// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! RunKeeper Insights: interpret RunKeeper-generated posts
//!
//! This crate classifies posts from a fitness-tracking app into event
//! categories, extracts activity type, distance and user commentary, and
//! serves the results and aggregate statistics over a JSON API.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::TweetService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub tweet_service: TweetService,
}
