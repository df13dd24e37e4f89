//! Generic group-by-key filter for templates.
//!
//! Distinct from [`build_posts_by_year`](crate::build_posts_by_year):
//! this filter supports arbitrary keys and emits groups in descending
//! key order, where the year archive is a fixed ascending view. Both
//! orders are relied on by different templates.

use std::collections::BTreeMap;

use quill_dates::{to_iso_date, year_number};
use quill_meta::Document;
use serde::Serialize;

/// Key a group was formed under.
///
/// Years compare numerically, everything else lexicographically. One
/// `group_by` call only ever produces keys of a single variant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Year(i32),
    Text(String),
}

/// Group documents by a named field, descending by group key.
///
/// When `subkey` is the literal `"year"` the grouping key is the year
/// of the named date field; otherwise the field value is the key
/// directly. `key` resolves against the built-in document fields
/// (`date`, `url`, `source_path`, `title`) and then against the
/// front-matter `vars`. Items whose key does not resolve are skipped.
#[must_use]
pub fn group_by(items: &[Document], key: &str, subkey: Option<&str>) -> Vec<(GroupKey, Vec<Document>)> {
    if subkey == Some("year") && key != "date" {
        // Almost certainly a template typo; every item will be skipped
        // and the page would otherwise come out empty with no signal.
        tracing::warn!(key, "\"year\" grouping needs a date-valued key, result will be empty");
    }

    let mut grouped: BTreeMap<GroupKey, Vec<Document>> = BTreeMap::new();
    for item in items {
        let Some(group_key) = resolve_key(item, key, subkey) else {
            tracing::debug!(key, url = %item.url, "no grouping key for document, skipping");
            continue;
        };
        grouped.entry(group_key).or_default().push(item.clone());
    }
    grouped.into_iter().rev().collect()
}

fn resolve_key(item: &Document, key: &str, subkey: Option<&str>) -> Option<GroupKey> {
    if subkey == Some("year") {
        // Year extraction only applies to date-valued fields.
        return (key == "date").then(|| GroupKey::Year(year_number(&item.date)));
    }

    match key {
        "date" => Some(GroupKey::Text(to_iso_date(&item.date))),
        "url" => Some(GroupKey::Text(item.url.clone())),
        "source_path" => Some(GroupKey::Text(item.source_path.clone())),
        "title" => item.data.title.clone().map(GroupKey::Text),
        _ => item.data.vars.get(key).and_then(value_key),
    }
}

fn value_key(value: &serde_json::Value) -> Option<GroupKey> {
    match value {
        serde_json::Value::String(s) => Some(GroupKey::Text(s.clone())),
        serde_json::Value::Number(n) => Some(GroupKey::Text(n.to_string())),
        serde_json::Value::Bool(b) => Some(GroupKey::Text(b.to_string())),
        _ => None,
    }
}
