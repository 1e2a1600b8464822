// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category classification for RunKeeper posts.
//!
//! Posts are matched against an ordered rule table and take the category of the
//! first rule that matches. The patterns overlap ("Just completed my run, new
//! personal record!"), so the table order is part of the behavior:
//!
//! 1. `CompletedEvent` - first-person completion ("just/I/we completed|finished")
//! 2. `LiveEvent` - live announcement ("I'm now running", "currently riding")
//! 3. `Achievement` - records and goals ("achieved", "personal record", "PR")
//! 4. `Miscellaneous` - everything else

use crate::models::Category;
use crate::services::normalize::normalize;
use regex::Regex;
use std::sync::LazyLock;

/// A single classification rule.
pub struct CategoryRule {
    pub category: Category,
    pub pattern: Regex,
}

/// Ordered rule table. `Miscellaneous` is the fallback and has no rule.
pub static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    vec![
        CategoryRule {
            category: Category::CompletedEvent,
            pattern: Regex::new(r"(?i)\b(?:just|i|we)\s+(?:completed|finished)\b")
                .expect("Invalid regex: completed event pattern"),
        },
        CategoryRule {
            category: Category::LiveEvent,
            pattern: Regex::new(
                r"(?i)\b(?:i['’]?m\s+)?(?:now|currently)\s+(?:running|walking|cycling|hiking|swimming|biking|riding)\b",
            )
            .expect("Invalid regex: live event pattern"),
        },
        CategoryRule {
            category: Category::Achievement,
            pattern: Regex::new(
                r"(?i)\b(?:achiev(?:ed|ement)|personal\s+record|new\s+record|pr|set\s+a\s+goal)\b",
            )
            .expect("Invalid regex: achievement pattern"),
        },
    ]
});

/// Classify raw post text. Always returns a category.
pub fn classify(text: &str) -> Category {
    classify_normalized(&normalize(text))
}

/// Classify text that has already been through [`normalize`].
pub fn classify_normalized(normalized: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(normalized))
        .map(|rule| rule.category)
        .unwrap_or(Category::Miscellaneous)
}
