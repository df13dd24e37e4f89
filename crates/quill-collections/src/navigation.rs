//! Previous/next navigation for post pages.

use quill_meta::Document;
use serde::Serialize;

use crate::builders::feed_order;

/// Neighbors of a pivot post in the newest-first feed.
///
/// `next` is the newer neighbor, `prev` the older one, matching the
/// "descending = newest first" convention of the feed. A boundary post
/// is missing the corresponding side.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Navigation {
    pub prev: Option<Document>,
    pub next: Option<Document>,
}

/// Resolve the previous and next posts relative to `current`.
///
/// The input is expected newest-first as produced by
/// [`build_posts`](crate::build_posts), but is re-sorted defensively to
/// the same order before the pivot is located by URL equality.
///
/// A pivot absent from the set (a draft or an excluded page asking for
/// navigation) is not an error: the result is the defined empty
/// navigation, logged for diagnostics only.
#[must_use]
pub fn post_navigation(posts: &[Document], current: &Document) -> Navigation {
    let mut sorted: Vec<&Document> = posts.iter().collect();
    sorted.sort_by(|a, b| feed_order(a, b));

    let Some(index) = sorted.iter().position(|post| post.url == current.url) else {
        tracing::warn!(url = %current.url, "pivot not found in navigation set");
        return Navigation::default();
    };

    Navigation {
        prev: sorted.get(index + 1).map(|post| (*post).clone()),
        next: index
            .checked_sub(1)
            .and_then(|newer| sorted.get(newer))
            .map(|post| (*post).clone()),
    }
}
