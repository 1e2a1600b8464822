// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Regression tests against the committed sample archive.
//!
//! The expected numbers were tallied by hand from data/runkeeper_tweets.json.
//! If the archive changes, these must be re-derived.

use runkeeper_insights::models::stats::LongerOn;
use runkeeper_insights::models::{AboutStats, ActivityStats, ActivityType, Category};

mod common;

#[test]
fn test_archive_loads_every_record() {
    let service = common::load_sample_archive();
    assert_eq!(service.tweets().len(), 19);

    // Two records have no usable timestamp.
    let undated = service.tweets().iter().filter(|t| t.time().is_none()).count();
    assert_eq!(undated, 2);
}

#[test]
fn test_archive_categories() {
    let service = common::load_sample_archive();
    let stats = AboutStats::from_tweets(service.tweets());

    assert_eq!(stats.total_tweets, 19);
    assert_eq!(stats.count_for(Category::CompletedEvent), 11);
    assert_eq!(stats.count_for(Category::LiveEvent), 3);
    assert_eq!(stats.count_for(Category::Achievement), 2);
    assert_eq!(stats.count_for(Category::Miscellaneous), 3);

    let percents: Vec<f64> = stats.categories.iter().map(|c| c.percent).collect();
    assert_eq!(percents, vec![57.89, 15.79, 10.53, 15.79]);
}

#[test]
fn test_archive_date_range_skips_bad_timestamps() {
    let service = common::load_sample_archive();
    let stats = AboutStats::from_tweets(service.tweets());

    assert_eq!(stats.first_date.as_deref(), Some("Friday, January 15, 2021"));
    assert_eq!(stats.last_date.as_deref(), Some("Sunday, January 31, 2021"));
}

#[test]
fn test_archive_written_completed_events() {
    let service = common::load_sample_archive();
    let stats = AboutStats::from_tweets(service.tweets());

    assert_eq!(stats.completed_written, 4);
    assert_eq!(stats.completed_written_percent, 36.36);

    let commentary: Vec<&str> = service.written().map(|t| t.written_text()).collect();
    assert_eq!(
        commentary,
        vec![
            "Beautiful morning along the river!",
            "Felt amazing today!",
            "Windy but worth it",
            "new personal record!",
        ]
    );
}

#[test]
fn test_archive_activity_breakdown() {
    let service = common::load_sample_archive();
    let stats = ActivityStats::from_tweets(service.tweets());

    assert_eq!(stats.number_activities, 6);
    let counts: Vec<(ActivityType, u32)> = stats
        .counts
        .iter()
        .map(|c| (c.activity_type, c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (ActivityType::Run, 4),
            (ActivityType::Bike, 2),
            (ActivityType::Walk, 2),
            (ActivityType::Hike, 1),
            (ActivityType::Swim, 1),
            (ActivityType::Yoga, 1),
        ]
    );
    assert_eq!(
        stats.top_activities,
        vec![ActivityType::Run, ActivityType::Bike, ActivityType::Walk]
    );
}

#[test]
fn test_archive_distance_breakdown() {
    let service = common::load_sample_archive();
    let stats = ActivityStats::from_tweets(service.tweets());

    // The undated run is left out.
    assert_eq!(stats.distance_rows.len(), 7);

    let order: Vec<ActivityType> = stats
        .mean_distances
        .iter()
        .map(|m| m.activity_type)
        .collect();
    assert_eq!(
        order,
        vec![ActivityType::Bike, ActivityType::Run, ActivityType::Walk]
    );
    assert!((stats.mean_distances[0].mean_distance_miles - 13.86371).abs() < 1e-4);
    assert!((stats.mean_distances[1].mean_distance_miles - 4.77).abs() < 1e-4);

    assert_eq!(stats.longest_activity, Some(ActivityType::Bike));
    assert_eq!(stats.shortest_activity, Some(ActivityType::Walk));
    // Weekday mean 7.6 mi beats weekend mean ~6.99 mi.
    assert_eq!(stats.longer_on, LongerOn::Weekdays);
}

#[test]
fn test_archive_search() {
    let service = common::load_sample_archive();

    assert_eq!(service.search("amazing").len(), 1);
    assert_eq!(service.search("AMAZING").len(), 1);
    assert_eq!(service.search("RunKeeper").len(), 4);
    // Present in the archive, but not in a written post.
    assert!(service.search("shoes").is_empty());
}
