//! Aggregate statistics over interpreted posts.
//!
//! These only read derived properties of [`Tweet`]; they never re-classify
//! text themselves.

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{ActivityType, Category, Tweet};
use crate::time_utils::{day_label, format_long_date, is_weekend};

/// Number of activity types shown in the distance breakdown.
pub const TOP_ACTIVITY_COUNT: usize = 3;

/// Percentage of `numerator / denominator`, rounded to two decimals.
pub fn percent(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let raw = f64::from(numerator) / f64::from(denominator) * 100.0;
    (raw * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

// ─── Overview ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u32,
    pub percent: f64,
}

/// Collection-wide overview.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AboutStats {
    pub total_tweets: u32,
    /// Earliest parseable timestamp ("Monday, January 18, 2021")
    pub first_date: Option<String>,
    /// Latest parseable timestamp
    pub last_date: Option<String>,
    /// One entry per category, in classification order
    pub categories: Vec<CategoryCount>,
    /// Completed events carrying user commentary
    pub completed_written: u32,
    pub completed_written_percent: f64,
}

impl AboutStats {
    pub fn from_tweets(tweets: &[Tweet]) -> Self {
        let total = tweets.len() as u32;

        let mut counts: HashMap<Category, u32> = HashMap::new();
        let mut completed = 0;
        let mut completed_written = 0;
        for tweet in tweets {
            let category = tweet.category();
            *counts.entry(category).or_insert(0) += 1;

            if category == Category::CompletedEvent {
                completed += 1;
                if tweet.is_written() {
                    completed_written += 1;
                }
            }
        }

        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let count = counts.get(&category).copied().unwrap_or(0);
                CategoryCount {
                    category,
                    count,
                    percent: percent(count, total),
                }
            })
            .collect();

        let times = tweets.iter().filter_map(Tweet::time);
        let first_date = times.clone().min().map(format_long_date);
        let last_date = times.max().map(format_long_date);

        Self {
            total_tweets: total,
            first_date,
            last_date,
            categories,
            completed_written,
            completed_written_percent: percent(completed_written, completed),
        }
    }

    pub fn count_for(&self, category: Category) -> u32 {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityCount {
    pub activity_type: ActivityType,
    pub count: u32,
}

/// One completed event in the distance-by-day breakdown.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistanceRow {
    pub activity_type: ActivityType,
    pub distance_miles: f64,
    /// "Sun".."Sat"
    pub day: String,
    pub weekend: bool,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityMean {
    pub activity_type: ActivityType,
    pub mean_distance_miles: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum LongerOn {
    Weekdays,
    Weekends,
}

/// Breakdown of completed events by activity type.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityStats {
    /// Distinct activity types seen (including `unknown`)
    pub number_activities: u32,
    /// Sorted by count descending, then label
    pub counts: Vec<ActivityCount>,
    pub top_activities: Vec<ActivityType>,
    /// Top activities with both a distance and a parseable timestamp
    pub distance_rows: Vec<DistanceRow>,
    /// Mean distance per top activity, longest first
    pub mean_distances: Vec<ActivityMean>,
    pub longest_activity: Option<ActivityType>,
    pub shortest_activity: Option<ActivityType>,
    pub longer_on: LongerOn,
}

impl ActivityStats {
    pub fn from_tweets(tweets: &[Tweet]) -> Self {
        let completed: Vec<&Tweet> = tweets
            .iter()
            .filter(|t| t.category() == Category::CompletedEvent)
            .collect();

        let mut by_type: HashMap<ActivityType, u32> = HashMap::new();
        for tweet in &completed {
            *by_type.entry(tweet.activity_type()).or_insert(0) += 1;
        }

        let mut counts: Vec<ActivityCount> = by_type
            .into_iter()
            .map(|(activity_type, count)| ActivityCount {
                activity_type,
                count,
            })
            .collect();
        counts.sort_by_key(|c| (Reverse(c.count), c.activity_type.label()));

        let top_activities: Vec<ActivityType> = counts
            .iter()
            .take(TOP_ACTIVITY_COUNT)
            .map(|c| c.activity_type)
            .collect();

        let distance_rows: Vec<DistanceRow> = completed
            .iter()
            .filter_map(|tweet| {
                let activity_type = tweet.activity_type();
                if !top_activities.contains(&activity_type) {
                    return None;
                }
                let distance_miles = tweet.distance()?;
                let time = tweet.time()?;
                Some(DistanceRow {
                    activity_type,
                    distance_miles,
                    day: day_label(time).to_string(),
                    weekend: is_weekend(time),
                })
            })
            .collect();

        let mut mean_distances: Vec<ActivityMean> = top_activities
            .iter()
            .filter_map(|activity_type| {
                let distances: Vec<f64> = distance_rows
                    .iter()
                    .filter(|r| r.activity_type == *activity_type)
                    .map(|r| r.distance_miles)
                    .collect();
                if distances.is_empty() {
                    return None;
                }
                Some(ActivityMean {
                    activity_type: *activity_type,
                    mean_distance_miles: mean(&distances),
                })
            })
            .collect();
        mean_distances.sort_by(|a, b| {
            b.mean_distance_miles
                .total_cmp(&a.mean_distance_miles)
                .then_with(|| a.activity_type.label().cmp(b.activity_type.label()))
        });

        let (weekend, weekday): (Vec<&DistanceRow>, Vec<&DistanceRow>) =
            distance_rows.iter().partition(|r| r.weekend);
        let weekend: Vec<f64> = weekend.iter().map(|r| r.distance_miles).collect();
        let weekday: Vec<f64> = weekday.iter().map(|r| r.distance_miles).collect();
        let longer_on = if mean(&weekend) > mean(&weekday) {
            LongerOn::Weekends
        } else {
            LongerOn::Weekdays
        };

        Self {
            number_activities: counts.len() as u32,
            longest_activity: mean_distances.first().map(|m| m.activity_type),
            shortest_activity: mean_distances.last().map(|m| m.activity_type),
            counts,
            top_activities,
            distance_rows,
            mean_distances,
            longer_on,
        }
    }
}
