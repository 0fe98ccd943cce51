//! Page resolution, navigation and page views for CCC.
//!
//! This crate provides:
//! - [`Site`]: resolves route parameters to pages and renders [`PageView`]s
//! - [`PageControls`]: prev/next availability and push-style navigation
//! - Breadcrumbs derived from the table of contents
//! - [`check_store`]: verification of the derived index invariants
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use std::sync::Arc;
//! use ccc_site::{Site, SiteConfig};
//! use ccc_store::EnhancedStore;
//!
//! let store = Arc::new(EnhancedStore::load(Path::new("data/ccc.json"))?);
//! let site = Site::new(store, SiteConfig::default());
//!
//! if let Some(view) = site.render(Some("__P1.HTM")) {
//!     let _html = view.to_html();
//! }
//! # Ok(())
//! # }
//! ```

mod breadcrumbs;
mod check;
mod navigation;
mod page;
mod resolver;
mod site;

#[cfg(test)]
mod fixtures;

pub use breadcrumbs::{BreadcrumbItem, breadcrumbs};
pub use check::{CheckReport, Issue, Severity, check_store};
pub use navigation::{
    DEFAULT_PAGE_PREFIX, Direction, History, MemoryHistory, NavControl, PageControls,
    page_controls, page_path,
};
pub use page::PageView;
pub use resolver::{ResolvedPage, resolve_page, resolve_slug, resolve_toc_id};
pub use site::{Site, SiteConfig};
