//! Derived collections, navigation and grouping for the Quill blog
//! generator.
//!
//! This crate provides:
//! - [`build_posts`], [`build_pinned_posts`], [`build_tag_list`],
//!   [`build_posts_by_year`]: the named collection builders
//! - [`post_navigation`]: previous/next resolution for a post
//! - [`group_by`]: generic group-by-key filter for templates
//!
//! Every builder takes the full document set and returns a fresh
//! sequence; nothing here mutates shared state, so the whole surface
//! runs once per build on a single thread.
//!
//! # Ordering
//!
//! The main feed sorts newest-first; the year archive sorts
//! oldest-first, both across buckets and inside them. The two
//! directions serve different pages (feed vs. archive) and are kept
//! deliberately distinct. Documents sharing a date tie-break on
//! ascending source path so the order is deterministic across builds.

mod builders;
mod group;
mod navigation;

pub use builders::{
    YearBucket, build_pinned_posts, build_posts, build_posts_by_year, build_tag_list,
};
pub use group::{GroupKey, group_by};
pub use navigation::{Navigation, post_navigation};
