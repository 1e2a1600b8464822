// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post collection loading and queries.

use crate::models::{Category, RawTweet, Tweet};
use std::fs;
use std::path::Path;

/// Upper bound on search query length.
pub const MAX_QUERY_LEN: usize = 200;

/// Owns the interpreted post collection for the lifetime of the server.
#[derive(Default, Clone)]
pub struct TweetService {
    tweets: Vec<Tweet>,
}

impl TweetService {
    /// Load posts from a JSON file containing an array of post records.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| LoadError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load posts from a JSON array string.
    pub fn load_from_json(json_data: &str) -> Result<Self, LoadError> {
        let raw: Vec<RawTweet> =
            serde_json::from_str(json_data).map_err(|e| LoadError::ParseError(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    /// Interpret a batch of raw records.
    pub fn from_raw(raw: Vec<RawTweet>) -> Self {
        let tweets: Vec<Tweet> = raw.into_iter().map(Tweet::from).collect();

        let unparseable = tweets.iter().filter(|t| t.time().is_none()).count();
        if unparseable > 0 {
            tracing::warn!(count = unparseable, "Posts with unparseable timestamps");
        }

        for category in Category::ALL {
            let count = tweets.iter().filter(|t| t.category() == category).count();
            tracing::debug!(%category, count, "Classified posts");
        }

        tracing::info!(count = tweets.len(), "Loaded posts");
        Self { tweets }
    }

    pub fn tweets(&self) -> &[Tweet] {
        &self.tweets
    }

    /// Posts in the given category, or all posts.
    pub fn by_category(&self, category: Option<Category>) -> Vec<&Tweet> {
        self.tweets
            .iter()
            .filter(|t| category.is_none_or(|c| t.category() == c))
            .collect()
    }

    /// Posts carrying user commentary.
    pub fn written(&self) -> impl Iterator<Item = &Tweet> {
        self.tweets.iter().filter(|t| t.is_written())
    }

    /// Case-insensitive substring search over user-written posts.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Tweet> {
        let query = query.trim();
        if query.is_empty() {
            return vec![];
        }

        let needle = query.to_lowercase();
        self.written()
            .filter(|t| t.text().to_lowercase().contains(&needle))
            .collect()
    }
}

/// Errors from loading the post collection.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse posts: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"text": "Just completed a 5.00 mi run - Beautiful morning #RunKeeper http://a", "created_at": "Mon Jan 18 10:00:00 +0000 2021"},
        {"text": "Just completed a 2.00 mi walk #RunKeeper http://b", "created_at": "Sat Jan 16 10:00:00 +0000 2021"},
        {"text": "I'm now running #RunKeeper http://c", "created_at": "Sun Jan 17 10:00:00 +0000 2021"},
        {"text": "Just completed a 3.00 km hike - muddy TRAILS #RunKeeper http://d"},
        {"id": 5}
    ]"#;

    #[test]
    fn test_load_from_json() {
        let service = TweetService::load_from_json(SAMPLE).unwrap();
        assert_eq!(service.tweets().len(), 5);
        assert_eq!(service.tweets()[4].category(), Category::Miscellaneous);
        assert_eq!(service.tweets()[3].time(), None);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let err = TweetService::load_from_json(r#"{"text": "x"}"#).err().unwrap();
        assert!(matches!(err, LoadError::ParseError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TweetService::load_from_file("does/not/exist.json")
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::IoError(_)));
    }

    #[test]
    fn test_by_category() {
        let service = TweetService::load_from_json(SAMPLE).unwrap();
        assert_eq!(service.by_category(None).len(), 5);
        assert_eq!(service.by_category(Some(Category::CompletedEvent)).len(), 3);
        assert_eq!(service.by_category(Some(Category::LiveEvent)).len(), 1);
        assert_eq!(service.by_category(Some(Category::Achievement)).len(), 0);
    }

    #[test]
    fn test_search_written_only() {
        let service = TweetService::load_from_json(SAMPLE).unwrap();
        assert_eq!(service.written().count(), 2);

        let hits = service.search("trails");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].text().contains("hike"));

        // "running" appears only in a post without commentary.
        assert!(service.search("running").is_empty());
        // Matching runs over the raw text, trailer included.
        assert_eq!(service.search("runkeeper").len(), 2);
    }

    #[test]
    fn test_search_blank_query() {
        let service = TweetService::load_from_json(SAMPLE).unwrap();
        assert!(service.search("").is_empty());
        assert!(service.search("   ").is_empty());
    }
}
