//! Admonition container preprocessing.
//!
//! Admonitions use triple-colon container syntax:
//!
//! ```markdown
//! :::warning Careful
//! Anything in the body renders as markdown.
//! :::
//! ```
//!
//! The preprocessor runs before pulldown-cmark and replaces container
//! markers with raw HTML wrappers; the body stays untouched and renders
//! as regular markdown. Markers inside code fences are literal text and
//! pass through. Nesting an admonition inside itself is undefined
//! behavior and not handled.

use std::fmt::Write;

use crate::fence::FenceTracker;
use crate::state::escape_html;

/// The closed set of admonition kinds.
///
/// A fixed enumeration with a lookup from kind to CSS class and default
/// title; there is no runtime registration of new kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdmonitionKind {
    Note,
    Info,
    Tip,
    Warning,
    Danger,
    Quote,
}

impl AdmonitionKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 6] = [
        Self::Note,
        Self::Info,
        Self::Tip,
        Self::Warning,
        Self::Danger,
        Self::Quote,
    ];

    /// CSS class the wrapper carries, also the syntax name.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Info => "info",
            Self::Tip => "tip",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Quote => "quote",
        }
    }

    /// Title used when the container declares none.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Info => "Info",
            Self::Tip => "Tip",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
            Self::Quote => "Quote",
        }
    }

    /// Parse a syntax name into a kind.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class() == name)
    }
}

/// Replace admonition markers with HTML wrappers.
///
/// Returns the preprocessed markdown and any warnings (currently only
/// unclosed containers at end of input, which are closed implicitly).
pub(crate) fn preprocess(input: &str) -> (String, Vec<String>) {
    let mut output = String::with_capacity(input.len());
    let mut warnings = Vec::new();
    let mut fence = FenceTracker::new();
    let mut open_stack: Vec<AdmonitionKind> = Vec::new();

    for line in input.lines() {
        fence.update(line);

        if !fence.in_fence() {
            if let Some((kind, title)) = parse_open(line) {
                open_stack.push(kind);
                // Blank lines around the wrapper end the HTML block, so
                // the body is parsed as markdown rather than swallowed
                // into raw HTML.
                write!(
                    output,
                    "<div class=\"admonition {}\">\n<p class=\"admonition-title\">{}</p>\n\n",
                    kind.class(),
                    escape_html(title.unwrap_or(kind.default_title())),
                )
                .expect("writing to String cannot fail");
                continue;
            }

            if is_close(line) {
                if open_stack.pop().is_some() {
                    output.push_str("\n</div>\n");
                    continue;
                }
                // Dangling close with nothing open: literal text.
            }
        }

        output.push_str(line);
        output.push('\n');
    }

    for kind in open_stack.drain(..).rev() {
        warnings.push(format!("unclosed {} admonition", kind.class()));
        output.push_str("\n</div>\n");
    }

    (output, warnings)
}

/// Parse an opening line: `:::kind optional-title`.
///
/// Unknown container names are not ours; the line passes through for
/// pulldown-cmark to treat as text.
fn parse_open(line: &str) -> Option<(AdmonitionKind, Option<&str>)> {
    let rest = line.trim_start().strip_prefix(":::")?;
    let rest = rest.trim_start_matches(':');

    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }

    let (name, title) = match rest.split_once(char::is_whitespace) {
        Some((name, title)) => (name, title.trim()),
        None => (rest, ""),
    };

    let kind = AdmonitionKind::parse(name)?;
    Some((kind, (!title.is_empty()).then_some(title)))
}

/// Whether a line closes a container: colons only.
fn is_close(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == ':')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_kind_lookup_table() {
        assert_eq!(AdmonitionKind::parse("warning"), Some(AdmonitionKind::Warning));
        assert_eq!(AdmonitionKind::parse("sidebar"), None);
        assert_eq!(AdmonitionKind::Danger.default_title(), "Danger");
        assert_eq!(AdmonitionKind::Quote.class(), "quote");
        assert_eq!(AdmonitionKind::ALL.len(), 6);
    }

    #[test]
    fn test_preprocess_with_inline_title() {
        let (out, warnings) = preprocess(":::warning Careful\ntext\n:::\n");
        assert!(out.contains(r#"<div class="admonition warning">"#));
        assert!(out.contains(r#"<p class="admonition-title">Careful</p>"#));
        assert!(out.contains("\ntext\n"));
        assert!(out.contains("</div>"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_preprocess_default_title() {
        let (out, _) = preprocess(":::note\nbody\n:::\n");
        assert!(out.contains(r#"<p class="admonition-title">Note</p>"#));
    }

    #[test]
    fn test_unknown_container_passes_through() {
        let input = ":::sidebar\nbody\n:::\n";
        let (out, _) = preprocess(input);
        assert!(out.contains(":::sidebar"));
    }

    #[test]
    fn test_markers_inside_code_fence_are_literal() {
        let input = "```\n:::note\n:::\n```\n";
        let (out, _) = preprocess(input);
        assert!(!out.contains("<div"));
        assert_eq!(out, input);
    }

    #[test]
    fn test_title_is_escaped() {
        let (out, _) = preprocess(":::note <b>x</b>\n:::\n");
        assert!(out.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_unclosed_container_warns_and_closes() {
        let (out, warnings) = preprocess(":::tip\nbody\n");
        assert_eq!(warnings, vec!["unclosed tip admonition".to_owned()]);
        assert!(out.ends_with("</div>\n"));
    }
}
