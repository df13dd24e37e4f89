//! Site assembly for the Quill blog generator.
//!
//! This crate provides:
//! - [`Site`]: owns the loaded document set and the per-build derived
//!   collections
//! - [`filters`]: the stable-name function surface a templating layer
//!   registers
//!
//! # Quick Start
//!
//! ```
//! use quill_site::{Site, SiteConfig};
//!
//! let site = Site::new(Vec::new(), SiteConfig::default());
//! assert!(site.posts().is_empty());
//! ```

mod site;

pub use site::{Site, SiteConfig};

/// Template filter surface.
///
/// Every function here is a pure callable a templating layer registers
/// by name. Names and arities are stable:
///
/// | template name       | function |
/// |---------------------|----------|
/// | `excerpt`           | [`excerpt`](quill_content::excerpt) |
/// | `readingTime`       | [`reading_time`](quill_content::reading_time) |
/// | `groupBy`           | [`group_by`](quill_collections::group_by) |
/// | `getPostNavigation` | [`post_navigation`](quill_collections::post_navigation) |
/// | `toIsoString`       | [`to_iso_date`](quill_dates::to_iso_date) |
/// | `formatDate`        | [`format_with_pattern`](quill_dates::format_with_pattern) |
/// | `readableDate`      | [`readable_date`](quill_dates::readable_date) |
/// | `postDate`          | [`post_date`](quill_dates::post_date) |
/// | `year`              | [`year_of`](quill_dates::year_of) |
/// | `currentYear`       | [`current_year`](quill_dates::current_year) |
pub mod filters {
    pub use quill_collections::{group_by, post_navigation};
    pub use quill_content::{excerpt, reading_time};
    pub use quill_dates::{
        current_year, format_with_pattern, post_date, readable_date, to_iso_date, year_of,
    };
}
