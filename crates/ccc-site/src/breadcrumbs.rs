//! Breadcrumbs from the table of contents.

use std::collections::HashSet;

use ccc_store::EnhancedStore;
use serde::Serialize;

use crate::navigation::page_path;

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path. `None` for entries that are not addressable pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Build breadcrumbs for a page, root first.
///
/// The current page is not included. Pages outside the table of contents
/// have no breadcrumbs.
#[must_use]
pub fn breadcrumbs(store: &EnhancedStore, toc_id: &str, prefix: &str) -> Vec<BreadcrumbItem> {
    let meta = store.meta();

    // Walk up parent chain
    let mut ancestors = Vec::new();
    let mut visited = HashSet::from([toc_id]);
    let mut current = meta.toc_parents.get(toc_id);
    while let Some(parent) = current {
        if !visited.insert(parent.as_str()) {
            tracing::warn!(toc_id, parent = %parent, "Cycle in table of contents parents");
            break;
        }
        ancestors.push(parent.as_str());
        current = meta.toc_parents.get(parent);
    }
    ancestors.reverse();

    ancestors
        .into_iter()
        .map(|id| BreadcrumbItem {
            title: store
                .store()
                .toc_nodes
                .get(id)
                .map(|node| node.text.clone())
                .unwrap_or_default(),
            path: store
                .page_meta(id)
                .and_then(|m| m.url.as_deref())
                .map(|url| page_path(prefix, url)),
        })
        .collect()
}
