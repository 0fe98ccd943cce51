//! Route parameter to page resolution.
//!
//! Resolution never fails loudly: an empty parameter, an unknown slug, or a
//! slug whose page is missing all resolve to `None`, which callers render as
//! nothing.

use ccc_store::{CccMeta, EnhancedStore, PageNode, strip_url_short_link};

/// A page resolved from a route parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedPage<'a> {
    pub toc_id: &'a str,
    pub page: &'a PageNode,
}

/// Normalize a route parameter to a bare slug. Absent input yields `""`.
#[must_use]
pub fn resolve_slug(route_param: Option<&str>) -> String {
    route_param.map(strip_url_short_link).unwrap_or_default()
}

/// Resolve a route parameter to a `tocId` through the URL map.
#[must_use]
pub fn resolve_toc_id<'a>(meta: &'a CccMeta, route_param: Option<&str>) -> Option<&'a str> {
    let slug = resolve_slug(route_param);
    if slug.is_empty() {
        return None;
    }

    let toc_id = meta
        .url_map
        .get(&slug)
        .map(String::as_str)
        .filter(|id| !id.is_empty());
    tracing::debug!(slug = %slug, toc_id = ?toc_id, "Resolved slug");
    toc_id
}

/// Resolve a route parameter to a page.
///
/// A URL map entry pointing at a missing page is logged and treated as not
/// found.
#[must_use]
pub fn resolve_page<'a>(
    store: &'a EnhancedStore,
    route_param: Option<&str>,
) -> Option<ResolvedPage<'a>> {
    let toc_id = resolve_toc_id(store.meta(), route_param)?;

    let Some(page) = store.page(toc_id) else {
        tracing::warn!(toc_id, "URL map points at a missing page");
        return None;
    };

    Some(ResolvedPage { toc_id, page })
}
