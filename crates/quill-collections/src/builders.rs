//! Named collection builders.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use quill_dates::year_number;
use quill_meta::Document;
use serde::Serialize;

/// Newest-first ordering with ascending source path as tie-break.
///
/// Shared by the feed builders and the navigation resolver so a pivot
/// lookup sees exactly the order the feed was built with.
pub(crate) fn feed_order(a: &Document, b: &Document) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| a.source_path.cmp(&b.source_path))
}

/// Oldest-first ordering with the same tie-break, for archive pages.
fn archive_order(a: &Document, b: &Document) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.source_path.cmp(&b.source_path))
}

/// Posts grouped under one year of the archive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearBucket {
    pub year: i32,
    /// Posts of this year, oldest first.
    pub posts: Vec<Document>,
}

/// Build the `posts` collection: all post documents, newest first.
#[must_use]
pub fn build_posts(docs: &[Document]) -> Vec<Document> {
    let mut posts: Vec<Document> = docs.iter().filter(|d| d.is_post()).cloned().collect();
    posts.sort_by(feed_order);
    posts
}

/// Build the `pinnedPosts` collection: pinned posts, newest first.
///
/// Always a subset of [`build_posts`] preserving relative order.
#[must_use]
pub fn build_pinned_posts(docs: &[Document]) -> Vec<Document> {
    let mut pinned: Vec<Document> = docs
        .iter()
        .filter(|d| d.is_post() && d.data.pinned)
        .cloned()
        .collect();
    pinned.sort_by(feed_order);
    pinned
}

/// Build the `tagList` collection: every tag used anywhere in the
/// document set, deduplicated and sorted ascending.
///
/// Aggregates over all documents, not just posts, matching the tag
/// index page which links every tagged page.
#[must_use]
pub fn build_tag_list(docs: &[Document]) -> Vec<String> {
    let mut tags: Vec<String> = docs
        .iter()
        .flat_map(|d| d.data.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Build the `postsByYear` collection: year buckets ascending, posts
/// inside each bucket ascending by date.
///
/// The opposite direction from [`build_posts`]: the archive page reads
/// top-down through history while the feed leads with the newest post.
#[must_use]
pub fn build_posts_by_year(docs: &[Document]) -> Vec<YearBucket> {
    let mut grouped: BTreeMap<i32, Vec<Document>> = BTreeMap::new();
    for doc in docs.iter().filter(|d| d.is_post()) {
        grouped
            .entry(year_number(&doc.date))
            .or_default()
            .push(doc.clone());
    }

    grouped
        .into_iter()
        .map(|(year, mut posts)| {
            posts.sort_by(archive_order);
            YearBucket { year, posts }
        })
        .collect()
}
