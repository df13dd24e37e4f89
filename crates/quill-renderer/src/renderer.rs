//! Markdown renderer with blog extensions.

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html::push_html,
};

use crate::admonition;
use crate::state::{AnchorTracker, escape_html, slugify};

/// Error type for rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Two headings in one document slugified to the same anchor id.
    ///
    /// Anchors must stay uniquely addressable, so this fails the build
    /// outright instead of silently renaming one of them.
    #[error("duplicate heading anchor id {id:?}")]
    DuplicateAnchor { id: String },
}

/// Result of rendering one document body.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Non-fatal conditions found while rendering (e.g. an unclosed
    /// admonition container).
    pub warnings: Vec<String>,
}

/// Markdown renderer for post and page bodies.
///
/// Installed once per build and applied uniformly to every document.
/// Construction is cheap; per-document state (anchor ids, link stack)
/// lives inside [`render`](Self::render).
///
/// # Example
///
/// ```
/// use quill_renderer::MarkdownRenderer;
///
/// let renderer = MarkdownRenderer::new()
///     .with_exempt_domain("notes.example.com");
/// let result = renderer.render("See [docs](https://docs.rs).")?;
/// assert!(result.html.contains(r#"target="_blank""#));
/// # Ok::<(), quill_renderer::RenderError>(())
/// ```
pub struct MarkdownRenderer {
    exempt_domains: Vec<String>,
    anchor_levels: [HeadingLevel; 2],
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with default options: anchors on H2/H3, no
    /// exempt domains.
    #[must_use]
    pub fn new() -> Self {
        Self {
            exempt_domains: Vec::new(),
            anchor_levels: [HeadingLevel::H2, HeadingLevel::H3],
        }
    }

    /// Exempt a same-family domain from external link hardening.
    #[must_use]
    pub fn with_exempt_domain(mut self, domain: impl Into<String>) -> Self {
        self.exempt_domains.push(domain.into());
        self
    }

    /// Set the two heading levels that receive anchor ids and
    /// permalinks.
    #[must_use]
    pub fn with_anchor_levels(mut self, levels: [HeadingLevel; 2]) -> Self {
        self.anchor_levels = levels;
        self
    }

    fn parser_options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_TASKLISTS
    }

    /// Render one document body to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DuplicateAnchor`] when two headings
    /// collide on the same anchor id.
    pub fn render(&self, markdown: &str) -> Result<RenderResult, RenderError> {
        let (preprocessed, warnings) = admonition::preprocess(markdown);

        let mut parser = Parser::new_ext(&preprocessed, Self::parser_options());
        let mut events: Vec<Event<'_>> = Vec::new();
        let mut anchors = AnchorTracker::new();

        while let Some(event) = parser.next() {
            match event {
                Event::Start(Tag::Heading { level, .. }) if self.anchors_at(level) => {
                    events.push(self.anchored_heading(level, &mut parser, &mut anchors)?);
                }
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    let language = info
                        .split_whitespace()
                        .next()
                        .filter(|lang| !lang.is_empty())
                        .map(str::to_owned);
                    let code = collect_code(&mut parser);
                    events.push(Event::Html(code_block(language.as_deref(), &code).into()));
                }
                other => events.push(other),
            }
        }

        let events = self.harden_links(events);

        let mut html = String::with_capacity(preprocessed.len() * 2);
        push_html(&mut html, events.into_iter());

        Ok(RenderResult { html, warnings })
    }

    /// Replace open/close events of external links with hardened HTML.
    ///
    /// Runs over the full document stream, and separately over buffered
    /// heading events, so links inside anchored headings are hardened
    /// the same way as links in body text.
    fn harden_links<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());
        // Tracks which open links were replaced, so the matching close
        // is replaced too.
        let mut link_stack: Vec<bool> = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    if self.needs_hardening(&dest_url) {
                        link_stack.push(true);
                        out.push(Event::InlineHtml(hardened_link(&dest_url, &title).into()));
                    } else {
                        link_stack.push(false);
                        out.push(Event::Start(Tag::Link {
                            link_type,
                            dest_url,
                            title,
                            id,
                        }));
                    }
                }
                Event::End(TagEnd::Link) => {
                    if link_stack.pop().unwrap_or(false) {
                        out.push(Event::InlineHtml("</a>".into()));
                    } else {
                        out.push(Event::End(TagEnd::Link));
                    }
                }
                other => out.push(other),
            }
        }

        out
    }

    fn anchors_at(&self, level: HeadingLevel) -> bool {
        self.anchor_levels.contains(&level)
    }

    /// Absolute HTTP(S) links get hardened unless they point at an
    /// exempt same-family domain. Relative and fragment links are
    /// internal by construction.
    fn needs_hardening(&self, url: &str) -> bool {
        let external = url.starts_with("http://") || url.starts_with("https://");
        external && !self.exempt_domains.iter().any(|domain| url.contains(domain))
    }

    /// Consume heading events and emit the anchored heading HTML.
    fn anchored_heading<'a>(
        &self,
        level: HeadingLevel,
        parser: &mut Parser<'a>,
        anchors: &mut AnchorTracker,
    ) -> Result<Event<'a>, RenderError> {
        let mut inner: Vec<Event<'a>> = Vec::new();
        let mut text = String::new();

        for event in parser.by_ref() {
            if matches!(event, Event::End(TagEnd::Heading(_))) {
                break;
            }
            if let Event::Text(chunk) | Event::Code(chunk) = &event {
                text.push_str(chunk);
            }
            inner.push(event);
        }

        let id = anchors.issue(&text).ok_or_else(|| RenderError::DuplicateAnchor {
            id: slugify(&text),
        })?;

        let mut inner_html = String::new();
        push_html(&mut inner_html, self.harden_links(inner).into_iter());

        let tag = heading_tag(level);
        let label = escape_html(&text);
        Ok(Event::Html(
            format!(
                "<{tag} id=\"{id}\">{inner_html}\
                 <a class=\"headerlink\" href=\"#{id}\" \
                 aria-label=\"Permalink to \u{201c}{label}\u{201d}\">#</a></{tag}>\n"
            )
            .into(),
        ))
    }
}

/// Consume events up to the end of the current code block, returning
/// its text content.
fn collect_code(parser: &mut Parser<'_>) -> String {
    let mut code = String::new();
    for event in parser.by_ref() {
        match event {
            Event::End(TagEnd::CodeBlock) => break,
            Event::Text(chunk) => code.push_str(&chunk),
            _ => {}
        }
    }
    code
}

/// Render a fenced code block.
///
/// A declared language yields a highlighting class plus a visible badge
/// right after the opening `<pre>`; a language-less fence renders plain.
fn code_block(language: Option<&str>, code: &str) -> String {
    match language {
        Some(lang) => {
            let lang = escape_html(lang);
            format!(
                "<pre><span class=\"code-lang\">{lang}</span>\
                 <code class=\"language-{lang}\">{}</code></pre>\n",
                escape_html(code)
            )
        }
        None => format!("<pre><code>{}</code></pre>\n", escape_html(code)),
    }
}

fn hardened_link(url: &str, title: &str) -> String {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(" title=\"{}\"", escape_html(title))
    };
    format!(
        "<a href=\"{}\"{title_attr} target=\"_blank\" rel=\"noopener noreferrer\">",
        escape_html(url)
    )
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}
