//! Markdown rendering with blog extensions for the Quill blog
//! generator.
//!
//! Wraps pulldown-cmark with the custom syntax and HTML post-shaping a
//! blog needs:
//!
//! - **Admonition containers**: `:::kind optional-title` … `:::` for a
//!   fixed set of six kinds (note, info, tip, warning, danger, quote)
//! - **Code fence language badges**: a visible label on fences that
//!   declared a highlighting language
//! - **External link hardening**: `target="_blank"` and safe `rel`
//!   attributes on outbound links, with exempt same-family domains
//! - **Heading anchors**: slug ids and permalinks on two heading
//!   levels, with duplicate ids failing the build
//!
//! # Example
//!
//! ```
//! use quill_renderer::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let result = renderer.render(":::tip\nUse `--dry-run` first.\n:::\n")?;
//! assert!(result.html.contains(r#"<div class="admonition tip">"#));
//! # Ok::<(), quill_renderer::RenderError>(())
//! ```

mod admonition;
mod fence;
mod renderer;
mod state;

pub use admonition::AdmonitionKind;
pub use renderer::{MarkdownRenderer, RenderError, RenderResult};
pub use state::{escape_html, slugify};
