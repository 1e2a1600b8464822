// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! RunKeeper post model and its interpretation.

use crate::services::classify::classify_normalized;
use crate::services::extract;
use crate::services::normalize::normalize;
use crate::time_utils::{format_utc_rfc3339, parse_created_at};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Post record as it appears in the archive. Other fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTweet {
    #[serde(default)]
    pub text: String,
    /// Creation time, usually in Twitter format ("Sat Sep 29 20:37:36 +0000 2018")
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
}

/// Event category of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    CompletedEvent,
    LiveEvent,
    Achievement,
    Miscellaneous,
}

impl Category {
    /// All categories in classification order.
    pub const ALL: [Category; 4] = [
        Category::CompletedEvent,
        Category::LiveEvent,
        Category::Achievement,
        Category::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::CompletedEvent => "completed_event",
            Category::LiveEvent => "live_event",
            Category::Achievement => "achievement",
            Category::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Activity recorded by a completed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    Run,
    Walk,
    Bike,
    Hike,
    Swim,
    Row,
    Ski,
    Yoga,
    Elliptical,
    Skate,
    Snowboard,
    Unknown,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Run => "run",
            ActivityType::Walk => "walk",
            ActivityType::Bike => "bike",
            ActivityType::Hike => "hike",
            ActivityType::Swim => "swim",
            ActivityType::Row => "row",
            ActivityType::Ski => "ski",
            ActivityType::Yoga => "yoga",
            ActivityType::Elliptical => "elliptical",
            ActivityType::Skate => "skate",
            ActivityType::Snowboard => "snowboard",
            ActivityType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An interpreted post.
///
/// The raw text and timestamp never change; every derived property is a pure
/// function of them. The normalized text and category are computed on first
/// use and reused by the other properties.
#[derive(Debug, Clone)]
pub struct Tweet {
    text: String,
    time: Option<DateTime<Utc>>,
    normalized: OnceLock<String>,
    category: OnceLock<Category>,
}

impl Tweet {
    pub fn new(text: impl Into<String>, created_at: &str) -> Self {
        Self {
            text: text.into(),
            time: parse_created_at(created_at),
            normalized: OnceLock::new(),
            category: OnceLock::new(),
        }
    }

    /// Raw text as received.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation time, `None` if it could not be parsed.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    /// Text with the RunKeeper trailer and tags removed.
    pub fn normalized_text(&self) -> &str {
        self.normalized.get_or_init(|| normalize(&self.text))
    }

    pub fn category(&self) -> Category {
        *self
            .category
            .get_or_init(|| classify_normalized(self.normalized_text()))
    }

    pub fn activity_type(&self) -> ActivityType {
        extract::extract_activity_type(self.normalized_text(), self.category())
    }

    /// Distance in miles, only for completed events that state one.
    pub fn distance(&self) -> Option<f64> {
        extract::extract_distance(self.normalized_text(), self.category())
    }

    pub fn is_written(&self) -> bool {
        extract::is_written(self.normalized_text())
    }

    /// User commentary, empty when there is none.
    pub fn written_text(&self) -> &str {
        extract::extract_commentary(self.normalized_text())
    }

    /// First link in the raw text (normally the RunKeeper activity page).
    pub fn activity_url(&self) -> Option<&str> {
        extract::extract_first_link(&self.text)
    }

    /// All derived properties in one serializable record.
    pub fn summary(&self) -> TweetSummary {
        TweetSummary {
            text: self.text.clone(),
            category: self.category(),
            activity_type: self.activity_type(),
            distance_miles: self.distance(),
            written: self.is_written(),
            written_text: self.written_text().to_string(),
            created_at: self.time.map(format_utc_rfc3339),
            link: self.activity_url().map(str::to_string),
        }
    }
}

impl From<RawTweet> for Tweet {
    fn from(raw: RawTweet) -> Self {
        Tweet::new(raw.text, &raw.created_at)
    }
}

/// Derived view of one post for API consumers.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TweetSummary {
    pub text: String,
    pub category: Category,
    pub activity_type: ActivityType,
    /// Distance in miles
    pub distance_miles: Option<f64>,
    pub written: bool,
    pub written_text: String,
    /// RFC3339, omitted when the timestamp was unparseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub link: Option<String>,
}
