// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Boilerplate stripping for RunKeeper posts.
//!
//! RunKeeper appends `#RunKeeper <link>` to every post it generates. Everything
//! downstream works on the text with that trailer (and any stray tag) removed.

use regex::Regex;
use std::sync::LazyLock;

/// Auto-appended trailer: the tag, anything after it, then a link ending the post.
static TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#runkeeper.*https?://\S+$").expect("Invalid regex: trailer pattern")
});

/// Bare boilerplate tag left anywhere in the body.
static BARE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#runkeeper").expect("Invalid regex: bare tag pattern"));

/// Strip the RunKeeper trailer and stray tags, then trim.
///
/// Applied until the text stops changing, so `normalize(normalize(x)) ==
/// normalize(x)` even when removing one tag exposes another. Every pass that
/// changes the text shortens it, which bounds the loop.
pub fn normalize(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let without_trailer = TRAILER.replace(text, "");
    let without_tags = BARE_TAG.replace_all(&without_trailer, "");
    without_tags.trim().to_string()
}
