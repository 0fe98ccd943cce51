//! Site facade over an enhanced store.
//!
//! [`Site`] holds the shared, immutable [`EnhancedStore`] and answers the
//! per-navigation questions: which page a route names, how it renders, and
//! where its controls lead.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ccc_site::{Site, SiteConfig};
//! use ccc_store::{EnhancedStore, RawStore};
//!
//! let raw = RawStore::from_json_str(r#"{
//!     "toc_link_tree": [{"id": "1"}, {"id": "2"}],
//!     "toc_nodes": {"1": {"link": "__a.HTM"}, "2": {"link": "__b.HTM"}},
//!     "page_nodes": {"1": {}, "2": {}}
//! }"#)?;
//! let site = Site::new(Arc::new(EnhancedStore::new(raw)), SiteConfig::default());
//!
//! let view = site.render(Some("__a.HTM")).unwrap();
//! assert_eq!(view.controls.next.unwrap().path.as_deref(), Some("/p/b"));
//! assert!(site.render(Some("z")).is_none());
//! # Ok::<(), ccc_store::StoreError>(())
//! ```

use std::sync::Arc;

use ccc_renderer::{DEFAULT_ANCHOR_TEXT, PageRenderer, render_footnotes};
use ccc_store::EnhancedStore;

use crate::breadcrumbs::{BreadcrumbItem, breadcrumbs};
use crate::check::{CheckReport, check_store};
use crate::navigation::{DEFAULT_PAGE_PREFIX, PageControls, page_controls, page_path};
use crate::page::PageView;
use crate::resolver::{ResolvedPage, resolve_page};

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Route prefix of page paths, without trailing slash.
    pub page_prefix: String,
    /// Text shown inside cross-reference links.
    pub anchor_text: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_prefix: DEFAULT_PAGE_PREFIX.to_owned(),
            anchor_text: DEFAULT_ANCHOR_TEXT.to_owned(),
        }
    }
}

/// Page resolution and rendering over a shared store.
pub struct Site {
    store: Arc<EnhancedStore>,
    renderer: PageRenderer,
    page_prefix: String,
}

impl Site {
    #[must_use]
    pub fn new(store: Arc<EnhancedStore>, config: SiteConfig) -> Self {
        Self {
            store,
            renderer: PageRenderer::new().with_anchor_text(config.anchor_text),
            page_prefix: config.page_prefix,
        }
    }

    #[must_use]
    pub fn store(&self) -> &EnhancedStore {
        &self.store
    }

    /// Resolve a route parameter to a page.
    #[must_use]
    pub fn resolve(&self, route_param: Option<&str>) -> Option<ResolvedPage<'_>> {
        resolve_page(&self.store, route_param)
    }

    #[must_use]
    pub fn page_controls(&self, toc_id: &str) -> PageControls {
        page_controls(&self.store.meta().page_meta_map, toc_id, &self.page_prefix)
    }

    #[must_use]
    pub fn breadcrumbs(&self, toc_id: &str) -> Vec<BreadcrumbItem> {
        breadcrumbs(&self.store, toc_id, &self.page_prefix)
    }

    /// Canonical path of a page, if it has a URL.
    #[must_use]
    pub fn page_path(&self, toc_id: &str) -> Option<String> {
        let url = self.store.page_meta(toc_id)?.url.as_deref()?;
        Some(page_path(&self.page_prefix, url))
    }

    /// Resolve and render a page. `None` means there is nothing to render.
    #[must_use]
    pub fn render(&self, route_param: Option<&str>) -> Option<PageView> {
        let ResolvedPage { toc_id, page } = self.resolve(route_param)?;

        Some(PageView {
            toc_id: toc_id.to_owned(),
            title: self
                .store
                .page_meta(toc_id)
                .map(|meta| meta.title.clone())
                .unwrap_or_default(),
            breadcrumbs: self.breadcrumbs(toc_id),
            paragraphs: self.renderer.render_paragraphs(&page.paragraphs),
            footnotes: render_footnotes(&page.footnotes),
            controls: self.page_controls(toc_id),
        })
    }

    /// Check the store invariants.
    #[must_use]
    pub fn check(&self) -> CheckReport {
        check_store(&self.store)
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    use std::collections::BTreeMap;

    use ccc_renderer::{Inline, StyledContent, TextStyle};
    use ccc_store::{CccMeta, Footnote, FootnoteRef, PageNode, RawStore};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::{generated_store, two_page_store};
    use crate::navigation::{Direction, MemoryHistory};

    fn site(store: EnhancedStore) -> Site {
        Site::new(Arc::new(store), SiteConfig::default())
    }

    #[test]
    fn test_render_first_page_controls() {
        let site = site(two_page_store());

        let view = site.render(Some("a")).unwrap();

        assert_eq!(view.toc_id, "1");
        assert!(!view.controls.is_available(Direction::Prev));
        assert_eq!(
            view.controls.next.as_ref().unwrap().path.as_deref(),
            Some("/p/b")
        );
    }

    #[test]
    fn test_render_unknown_slug_is_nothing() {
        let site = site(two_page_store());
        assert_eq!(site.render(Some("z")), None);
    }

    #[test]
    fn test_render_full_page() {
        let site = site(generated_store());

        let view = site.render(Some("__P1.HTM")).unwrap();

        assert_eq!(view.title, "Prologue");
        assert_eq!(view.breadcrumbs.len(), 1);
        assert_eq!(view.paragraphs.len(), 2);
        assert!(view.paragraphs[0].indent);
        assert_eq!(
            view.paragraphs[0].children,
            vec![
                Inline::RefNumber { number: 1 },
                Inline::Styled {
                    style: TextStyle {
                        bold: true,
                        italic: false
                    },
                    content: StyledContent::Text {
                        text: "God, infinitely perfect".to_owned()
                    },
                },
                Inline::FootnoteRef { number: 1 },
            ]
        );
        assert_eq!(view.paragraphs[1].children[2], Inline::Empty);

        let labels: Vec<String> = view
            .footnotes
            .as_ref()
            .unwrap()
            .iter()
            .map(ccc_renderer::RenderedFootnote::label)
            .collect();
        assert_eq!(labels, vec!["1. r2, r3", "2. r1"]);

        assert_eq!(
            view.controls.next.as_ref().unwrap().path.as_deref(),
            Some("/p/P1A")
        );
        assert!(view.controls.prev.is_none());
    }

    #[test]
    fn test_render_html_contains_expected_parts() {
        let site = site(generated_store());

        let html = site.render(Some("P1")).unwrap().to_html();

        assert!(html.contains(r#"<nav class="breadcrumbs"><span>Part One</span></nav>"#));
        assert!(html.contains(
            r#"<p class="paragraph-indented">1 <span class="element-text element-text-bold">God, infinitely perfect</span><sup>1</sup></p>"#
        ));
        assert!(html.contains(
            r#"<span class="element-text element-text-italic"><a href="/p/P2">⇒</a></span><br>"#
        ));
        assert!(html.contains(r#"<div class="footnotes"><p>1. r2, r3</p><p>2. r1</p></div>"#));
        assert!(html.contains(r#"href="/p/P1A">›</a>"#));
    }

    #[test]
    fn test_page_without_footnotes_has_no_footnote_block() {
        let site = site(generated_store());

        let view = site.render(Some("P2")).unwrap();

        assert_eq!(view.footnotes, None);
        assert!(!view.to_html().contains("footnotes"));
    }

    #[test]
    fn test_walk_reading_order_with_history() {
        let site = site(generated_store());
        let mut history = MemoryHistory::starting_at("/p/P1");

        loop {
            let route = history.current().and_then(|p| p.rsplit('/').next());
            let view = site.render(route).unwrap();
            if !view.controls.navigate(Direction::Next, &mut history) {
                break;
            }
        }

        assert_eq!(history.entries(), ["/p/P1", "/p/P1A", "/p/P2", "/p/P3"]);
    }

    #[test]
    fn test_config_prefix_and_anchor_text() {
        let config = SiteConfig {
            page_prefix: "/ccc".to_owned(),
            anchor_text: "→".to_owned(),
        };
        let site = Site::new(Arc::new(generated_store()), config);

        let view = site.render(Some("P1")).unwrap();

        assert_eq!(site.page_path("2").as_deref(), Some("/ccc/P2"));
        assert_eq!(
            view.controls.next.as_ref().unwrap().path.as_deref(),
            Some("/ccc/P1A")
        );
        assert!(view.to_html().contains(r#"<a href="/p/P2">→</a>"#));
    }

    #[test]
    fn test_page_path_unknown() {
        let site = site(generated_store());
        assert_eq!(site.page_path("part-1"), None);
    }

    #[test]
    fn test_footnotes_rendered_in_number_order() {
        let page = PageNode {
            id: "1".to_owned(),
            paragraphs: Vec::new(),
            footnotes: BTreeMap::from([
                (
                    "x".to_owned(),
                    Footnote {
                        number: 2,
                        refs: vec![FootnoteRef {
                            text: "r1".to_owned(),
                        }],
                    },
                ),
                (
                    "y".to_owned(),
                    Footnote {
                        number: 1,
                        refs: vec![
                            FootnoteRef {
                                text: "r2".to_owned(),
                            },
                            FootnoteRef {
                                text: "r3".to_owned(),
                            },
                        ],
                    },
                ),
            ]),
        };
        let raw = RawStore {
            page_nodes: BTreeMap::from([("1".to_owned(), page)]),
            ..Default::default()
        };
        let site = site(EnhancedStore::new(raw));

        let html = site.render(Some("1")).unwrap().to_html();

        assert!(html.contains(r#"<div class="footnotes"><p>1. r2, r3</p><p>2. r1</p></div>"#));
    }

    #[test]
    fn test_check_delegates_to_store_check() {
        let meta = CccMeta {
            url_map: BTreeMap::from([("x".to_owned(), "missing".to_owned())]),
            ..Default::default()
        };
        let site = site(EnhancedStore::from_parts(RawStore::default(), meta));

        assert!(!site.check().is_ok());
    }
}
