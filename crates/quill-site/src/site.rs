//! Site structure: the loaded document set and its derived collections.

use quill_collections::{
    Navigation, YearBucket, build_pinned_posts, build_posts, build_posts_by_year, build_tag_list,
    post_navigation,
};
use quill_meta::Document;
use quill_renderer::MarkdownRenderer;

/// Build-time site configuration.
#[derive(Clone, Debug, Default)]
pub struct SiteConfig {
    /// Same-family domains exempt from external link hardening.
    pub exempt_domains: Vec<String>,
    /// Origin of the view-counting service; `None` disables the
    /// counter widget.
    pub views_endpoint: Option<String>,
}

/// One build's worth of site state.
///
/// Created once after the host generator has loaded every document;
/// all named collections are derived up front in a single synchronous
/// pass (nothing here blocks or shares mutable state). Templates then
/// read the accessors while rendering each page.
pub struct Site {
    documents: Vec<Document>,
    posts: Vec<Document>,
    pinned_posts: Vec<Document>,
    tag_list: Vec<String>,
    posts_by_year: Vec<YearBucket>,
    renderer: MarkdownRenderer,
    config: SiteConfig,
}

impl Site {
    /// Materialize a site from the full document set.
    #[must_use]
    pub fn new(documents: Vec<Document>, config: SiteConfig) -> Self {
        let posts = build_posts(&documents);
        let pinned_posts = build_pinned_posts(&documents);
        let tag_list = build_tag_list(&documents);
        let posts_by_year = build_posts_by_year(&documents);

        tracing::debug!(
            documents = documents.len(),
            posts = posts.len(),
            pinned = pinned_posts.len(),
            tags = tag_list.len(),
            years = posts_by_year.len(),
            "derived site collections"
        );

        let mut renderer = MarkdownRenderer::new();
        for domain in &config.exempt_domains {
            renderer = renderer.with_exempt_domain(domain.clone());
        }

        Self {
            documents,
            posts,
            pinned_posts,
            tag_list,
            posts_by_year,
            renderer,
            config,
        }
    }

    /// All loaded documents, in load order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The `posts` collection: newest first.
    #[must_use]
    pub fn posts(&self) -> &[Document] {
        &self.posts
    }

    /// The `pinnedPosts` collection: pinned posts, newest first.
    #[must_use]
    pub fn pinned_posts(&self) -> &[Document] {
        &self.pinned_posts
    }

    /// The `tagList` collection: all tags, deduplicated and sorted.
    #[must_use]
    pub fn tag_list(&self) -> &[String] {
        &self.tag_list
    }

    /// The `postsByYear` collection: ascending year buckets.
    #[must_use]
    pub fn posts_by_year(&self) -> &[YearBucket] {
        &self.posts_by_year
    }

    /// Previous/next navigation for a post page.
    #[must_use]
    pub fn navigation_for(&self, current: &Document) -> Navigation {
        post_navigation(&self.posts, current)
    }

    /// The markdown renderer, installed once per build and applied
    /// uniformly to every document body.
    #[must_use]
    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }

    /// The view-counter client script, when a counting service is
    /// configured.
    #[must_use]
    pub fn view_counter_script(&self) -> Option<String> {
        self.config
            .views_endpoint
            .as_deref()
            .map(quill_assets::view_counter_script)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use quill_meta::DocumentData;

    use super::*;

    fn post(name: &str, y: i32, m: u32, d: u32, tags: &[&str], pinned: bool) -> Document {
        Document {
            source_path: format!("posts/{name}.md"),
            url: format!("/{name}/"),
            date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            content: format!("# {name}\n\nbody\n"),
            data: DocumentData {
                title: Some(name.to_owned()),
                tags: tags.iter().map(ToString::to_string).collect(),
                pinned,
                vars: std::collections::HashMap::new(),
            },
        }
    }

    fn site() -> Site {
        Site::new(
            vec![
                post("terraform-state", 2023, 4, 2, &["terraform", "aws"], false),
                post("ssh-tricks", 2024, 2, 10, &["linux", "ssh"], true),
                post("bash-pitfalls", 2022, 8, 30, &["bash", "linux"], false),
            ],
            SiteConfig::default(),
        )
    }

    #[test]
    fn test_collections_derived_once_and_consistent() {
        let site = site();

        let urls: Vec<&str> = site.posts().iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, ["/ssh-tricks/", "/terraform-state/", "/bash-pitfalls/"]);

        assert_eq!(site.pinned_posts().len(), 1);
        assert_eq!(site.pinned_posts()[0].url, "/ssh-tricks/");

        assert_eq!(site.tag_list(), ["aws", "bash", "linux", "ssh", "terraform"]);

        let years: Vec<i32> = site.posts_by_year().iter().map(|b| b.year).collect();
        assert_eq!(years, [2022, 2023, 2024]);
    }

    #[test]
    fn test_navigation_from_site_posts() {
        let site = site();
        let nav = site.navigation_for(&site.posts()[1]);
        assert_eq!(nav.next.as_ref().map(|p| p.url.as_str()), Some("/ssh-tricks/"));
        assert_eq!(nav.prev.as_ref().map(|p| p.url.as_str()), Some("/bash-pitfalls/"));
    }

    #[test]
    fn test_renderer_honors_exempt_domains() {
        let site = Site::new(
            Vec::new(),
            SiteConfig {
                exempt_domains: vec!["notes.example.com".to_owned()],
                views_endpoint: None,
            },
        );

        let result = site
            .renderer()
            .render("[in](https://notes.example.com/a/) [out](https://docs.rs)")
            .unwrap();
        assert!(result.html.contains(r#"<a href="https://notes.example.com/a/">in</a>"#));
        assert!(result.html.contains("noopener noreferrer"));
    }

    #[test]
    fn test_view_counter_script_requires_endpoint() {
        assert_eq!(site().view_counter_script(), None);

        let site = Site::new(
            Vec::new(),
            SiteConfig {
                exempt_domains: Vec::new(),
                views_endpoint: Some("https://api.example.com".to_owned()),
            },
        );
        let script = site.view_counter_script().unwrap();
        assert!(script.contains("https://api.example.com/views?pageUrl="));
    }
}
