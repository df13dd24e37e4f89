//! Excerpt and reading-time analysis for the Quill blog generator.
//!
//! Both functions operate on raw authored content, before markdown
//! rendering, so excerpt boundaries land where the author put them and
//! reading time is not skewed by generated markup.

use std::sync::LazyLock;

use regex::Regex;

/// Sentinel an author places in a post body to mark the excerpt boundary.
pub const EXCERPT_MARKER: &str = "<!-- more -->";

/// Words per minute assumed by [`reading_time`].
const WORDS_PER_MINUTE: u32 = 200;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid HTML tag pattern"));

/// Extract the excerpt of a post body.
///
/// Returns everything before the first [`EXCERPT_MARKER`], or the full
/// content unchanged when no marker is present. The marker is a fixed
/// sentinel, matched literally.
#[must_use]
pub fn excerpt(content: &str) -> &str {
    match content.find(EXCERPT_MARKER) {
        Some(index) => &content[..index],
        None => content,
    }
}

/// Estimate reading time in whole minutes.
///
/// Strips HTML tags, counts whitespace-separated words, and divides by
/// 200 words per minute, rounding up. Any non-empty content takes at
/// least one minute; empty or whitespace-only content is a defined
/// zero-minute result, not an error.
#[must_use]
pub fn reading_time(content: &str) -> u32 {
    let stripped = HTML_TAG.replace_all(content, "");
    let words = u32::try_from(stripped.split_whitespace().count()).unwrap_or(u32::MAX);
    words.div_ceil(WORDS_PER_MINUTE)
}
