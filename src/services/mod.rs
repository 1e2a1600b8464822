// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - post interpretation and the archive it runs over.

pub mod classify;
pub mod extract;
pub mod normalize;
pub mod tweets;

pub use classify::classify;
pub use normalize::normalize;
pub use tweets::{LoadError, TweetService};
