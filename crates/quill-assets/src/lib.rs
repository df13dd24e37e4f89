//! Embedded frontend assets for the Quill blog generator.
//!
//! Build-time output only ships one piece of client-side code: the
//! view-counter widget. It runs after page load, issues a single
//! non-blocking request to the counting service, and has a strict
//! two-outcome contract — a numeric count on success, the fallback
//! glyph on any failure (non-200, transport error, malformed body).
//! The DOM is updated exactly once either way; there is no retry and
//! no cancellation.

use serde::{Deserialize, Serialize};

/// View-counter client script, with the counting-service origin left
/// as a placeholder.
const VIEW_COUNTER_TEMPLATE: &str = include_str!("../assets/views.js");

/// Placeholder substituted by [`view_counter_script`].
const ENDPOINT_PLACEHOLDER: &str = "__QUILL_VIEWS_ENDPOINT__";

/// Glyph shown in counter elements when the count cannot be retrieved.
pub const FALLBACK_GLYPH: &str = "?";

/// CSS class of the elements the counter script updates.
///
/// A page may carry several; the script updates all of them together.
pub const COUNTER_CLASS: &str = "view-counter";

/// Response body of the counting service.
///
/// Wire contract: `GET {endpoint}/views?pageUrl=<url-encoded path>`
/// answers `200` with this JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewsResponse {
    pub views: u64,
}

/// Produce the view-counter script for a counting-service origin,
/// e.g. `https://api.example.com`.
#[must_use]
pub fn view_counter_script(endpoint: &str) -> String {
    VIEW_COUNTER_TEMPLATE.replace(ENDPOINT_PLACEHOLDER, endpoint.trim_end_matches('/'))
}
