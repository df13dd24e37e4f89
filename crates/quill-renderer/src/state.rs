//! Shared helpers and heading state for rendering.

use std::collections::HashSet;

/// Convert heading text to a URL-safe anchor slug.
///
/// Lowercases, collapses runs of whitespace/dashes/underscores into a
/// single dash, and drops any other non-alphanumeric character, so
/// `Rotating IAM keys, part 2` becomes `rotating-iam-keys-part-2`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if (c.is_whitespace() || c == '-' || c == '_') && !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Tracks heading anchor ids issued within one document.
///
/// Anchors must stay uniquely addressable, so a second heading
/// slugifying to an id already issued is rejected rather than silently
/// renamed.
#[derive(Debug, Default)]
pub(crate) struct AnchorTracker {
    issued: HashSet<String>,
}

impl AnchorTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Issue an id for heading text.
    ///
    /// Returns `None` if the id was already issued in this document.
    pub(crate) fn issue(&mut self, text: &str) -> Option<String> {
        let id = slugify(text);
        self.issued.insert(id.clone()).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slugify_post_headings() {
        assert_eq!(
            slugify("Rotating IAM keys, part 2"),
            "rotating-iam-keys-part-2"
        );
        assert_eq!(slugify("Why tmux?"), "why-tmux");
        assert_eq!(slugify("  Setup & teardown  "), "setup-teardown");
        assert_eq!(slugify("systemd_unit files"), "systemd-unit-files");
        assert_eq!(slugify("Cache — then what?"), "cache-then-what");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_escape_html_in_code_and_titles() {
        assert_eq!(escape_html("grep -E '^#'"), "grep -E &#x27;^#&#x27;");
        assert_eq!(escape_html("a < b && b > c"), "a &lt; b &amp;&amp; b &gt; c");
        assert_eq!(
            escape_html(r#"<a href="x">"#),
            "&lt;a href=&quot;x&quot;&gt;"
        );
    }

    #[test]
    fn test_anchor_tracker_rejects_duplicates() {
        let mut tracker = AnchorTracker::new();
        assert_eq!(tracker.issue("Setup"), Some("setup".to_owned()));
        assert_eq!(tracker.issue("Teardown"), Some("teardown".to_owned()));
        assert_eq!(tracker.issue("Setup"), None);
        // Different text, same slug: still a duplicate.
        assert_eq!(tracker.issue("setup!"), None);
    }
}
