// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field extraction from RunKeeper post text.
//!
//! Activity type and distance only mean something for completed events; for
//! any other category they report `Unknown` / `None` without looking at the text.
//! Functions taking `normalized` expect text that went through
//! [`normalize`](crate::services::normalize::normalize).

use crate::models::{ActivityType, Category};
use regex::Regex;
use std::sync::LazyLock;

/// Kilometers to miles.
pub const KM_TO_MILES: f64 = 0.621371;

/// Ordered keyword table, first match wins.
static ACTIVITY_KEYWORDS: LazyLock<Vec<(ActivityType, Regex)>> = LazyLock::new(|| {
    [
        (ActivityType::Run, r"\brun(?:ning)?\b"),
        (ActivityType::Walk, r"\bwalk(?:ing)?\b"),
        (
            ActivityType::Bike,
            r"\b(?:cycle|cycling|bike|biking|ride|riding)\b",
        ),
        (ActivityType::Hike, r"\bhik(?:e|ing)\b"),
        (ActivityType::Swim, r"\bswim(?:ming)?\b"),
        (ActivityType::Row, r"\brow(?:ing)?\b"),
        (ActivityType::Ski, r"\bski(?:ing)?\b"),
        (ActivityType::Yoga, r"\byoga\b"),
        (ActivityType::Elliptical, r"\belliptical\b"),
        (ActivityType::Skate, r"\bskat(?:e|ing)\b"),
        (ActivityType::Snowboard, r"\bsnowboard(?:ing)?\b"),
    ]
    .into_iter()
    .map(|(activity, pattern)| {
        let regex = Regex::new(pattern).expect("Invalid regex: activity keyword");
        (activity, regex)
    })
    .collect()
});

/// A number followed by a distance unit: "5.00 mi", "10km".
static DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mi|km)\b").expect("Invalid regex: distance pattern")
});

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("Invalid regex: link pattern"));

/// Separators between the generated summary and the user's own words.
const COMMENTARY_SEPARATORS: [&str; 3] = [" - ", " – ", " — "];

/// Activity type of a completed event, `Unknown` for anything else.
pub fn extract_activity_type(normalized: &str, category: Category) -> ActivityType {
    if category != Category::CompletedEvent {
        return ActivityType::Unknown;
    }

    let lowered = normalized.to_lowercase();
    ACTIVITY_KEYWORDS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&lowered))
        .map(|(activity, _)| *activity)
        .unwrap_or(ActivityType::Unknown)
}

/// Distance of a completed event in miles.
///
/// Only the first "<number> mi|km" expression counts. Kilometers are converted.
pub fn extract_distance(normalized: &str, category: Category) -> Option<f64> {
    if category != Category::CompletedEvent {
        return None;
    }

    let caps = DISTANCE.captures(normalized)?;
    let value: f64 = caps[1].parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    if caps[2].eq_ignore_ascii_case("km") {
        Some(value * KM_TO_MILES)
    } else {
        Some(value)
    }
}

/// Free-form commentary following the first spaced dash, if any.
///
/// "Just completed a 10.00 km walk - Felt amazing today!" yields
/// "Felt amazing today!". Later separators stay part of the commentary.
pub fn extract_commentary(normalized: &str) -> &str {
    COMMENTARY_SEPARATORS
        .iter()
        .filter_map(|sep| normalized.find(sep).map(|idx| (idx, sep.len())))
        .min()
        .map(|(idx, len)| normalized[idx + len..].trim())
        .unwrap_or("")
}

/// Whether the post carries user-written commentary.
pub fn is_written(normalized: &str) -> bool {
    !extract_commentary(normalized).is_empty()
}

/// First http(s) link in the raw (not normalized) text.
pub fn extract_first_link(raw: &str) -> Option<&str> {
    LINK.find(raw).map(|m| m.as_str())
}
