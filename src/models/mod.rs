// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod stats;
pub mod tweet;

pub use stats::{AboutStats, ActivityStats};
pub use tweet::{ActivityType, Category, RawTweet, Tweet, TweetSummary};
