//! Document model for the Quill blog generator.
//!
//! A [`Document`] is one authored content unit: raw body text, a UTC
//! publish date, the output URL, and author-supplied metadata. The host
//! generator creates the full document set once per build (front matter
//! already parsed); everything downstream treats it as read-only and
//! derives fresh collections from it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One authored content unit.
///
/// Immutable for the duration of a build. Dates are UTC-normalized by
/// the host; a source date without a zone marker is interpreted as UTC
/// midnight before it reaches this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source file path relative to the content root (e.g. `posts/hello.md`).
    ///
    /// Doubles as the secondary sort key wherever documents share a date,
    /// so equal-date ordering stays deterministic across builds.
    pub source_path: String,

    /// Output URL of the rendered page (e.g. `/hello/`).
    pub url: String,

    /// Publish date.
    pub date: DateTime<Utc>,

    /// Raw authored body, pre-render.
    pub content: String,

    /// Author-supplied metadata from front matter.
    #[serde(default)]
    pub data: DocumentData,
}

/// Metadata attached to a [`Document`] by its author.
///
/// All fields are optional in front matter. Keys the core does not
/// interpret are passed through in `vars` for templates to use.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentData {
    /// Page title, when set explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Tags for the tag index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Pinned posts surface ahead of the regular feed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pinned: bool,

    /// Uninterpreted front-matter keys, available to templates.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub vars: HashMap<String, serde_json::Value>,
}

/// Namespace prefix identifying post documents.
pub const POSTS_NAMESPACE: &str = "posts/";

impl Document {
    /// Whether this document lives under the posts namespace.
    #[must_use]
    pub fn is_post(&self) -> bool {
        self.source_path.starts_with(POSTS_NAMESPACE)
    }
}

impl DocumentData {
    /// Check if the metadata has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.tags.is_empty() && !self.pinned && self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(source_path: &str) -> Document {
        Document {
            source_path: source_path.to_owned(),
            url: "/hello/".to_owned(),
            date: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
            content: String::new(),
            data: DocumentData::default(),
        }
    }

    #[test]
    fn test_is_post() {
        assert!(doc("posts/hello.md").is_post());
        assert!(!doc("pages/about.md").is_post());
        assert!(!doc("hello.md").is_post());
    }

    #[test]
    fn test_data_is_empty() {
        assert!(DocumentData::default().is_empty());

        let data = DocumentData {
            tags: vec!["aws".to_owned()],
            ..Default::default()
        };
        assert!(!data.is_empty());
    }

    #[test]
    fn test_document_roundtrip() {
        let mut document = doc("posts/hello.md");
        document.data.pinned = true;
        document.data.tags = vec!["aws".to_owned(), "linux".to_owned()];

        let json = serde_json::to_string(&document).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(document, back);
    }
}
