//! Derived page indices.
//!
//! [`generate_meta`] walks the table of contents once and builds:
//! - the reading order of pages (depth-first pre-order of `toc_link_tree`)
//! - [`PageMetaMap`]: per-page title, canonical URL slug and `prev`/`next` links
//! - [`UrlMap`]: the inverse index from slug to `tocId`
//! - the table of contents parent of every entry, used for breadcrumbs
//!
//! Generation is a pure function of the raw store. Ordered maps keep repeated
//! runs identical.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::{RawStore, TocLinkNode};
use crate::short_link::strip_url_short_link;

/// Metadata of one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Display title from the table of contents (empty when absent).
    pub title: String,
    /// Canonical slug. `None` when every candidate slug was already taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Previous page in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Next page in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Page metadata keyed by `tocId`.
pub type PageMetaMap = BTreeMap<String, PageMeta>;

/// `tocId` keyed by slug.
pub type UrlMap = BTreeMap<String, String>;

/// Metadata derived from a [`RawStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CccMeta {
    pub page_meta_map: PageMetaMap,
    pub url_map: UrlMap,
    /// Page ids in reading order.
    pub reading_order: Vec<String>,
    /// Table of contents parent of every nested entry, pages or not.
    pub toc_parents: BTreeMap<String, String>,
}

/// Build the derived indices of a store.
pub fn generate_meta(store: &RawStore) -> CccMeta {
    let mut walk = TocWalk::new(store);
    walk.visit(&store.toc_link_tree, None);

    // Pages the table of contents never reaches still get a place in the order.
    let orphans: Vec<&str> = store
        .page_nodes
        .keys()
        .map(String::as_str)
        .filter(|id| !walk.seen.contains(id))
        .collect();
    if !orphans.is_empty() {
        tracing::debug!(
            orphan_count = orphans.len(),
            "Pages missing from table of contents appended to reading order"
        );
    }
    walk.order.extend(orphans);

    let order = walk.order;
    let mut url_map = UrlMap::new();
    let mut page_meta_map = PageMetaMap::new();

    for (i, &toc_id) in order.iter().enumerate() {
        let toc_node = store.toc_nodes.get(toc_id);
        let link = toc_node.map_or("", |node| node.link.as_str());

        let meta = PageMeta {
            title: toc_node.map(|node| node.text.clone()).unwrap_or_default(),
            url: claim_slug(&mut url_map, &strip_url_short_link(link), toc_id),
            prev: i.checked_sub(1).map(|j| order[j].to_owned()),
            next: order.get(i + 1).map(|&id| id.to_owned()),
        };
        page_meta_map.insert(toc_id.to_owned(), meta);
    }

    let toc_parents = walk
        .parents
        .into_iter()
        .map(|(child, parent)| (child.to_owned(), parent.to_owned()))
        .collect();

    CccMeta {
        page_meta_map,
        url_map,
        reading_order: order.into_iter().map(str::to_owned).collect(),
        toc_parents,
    }
}

/// Register a slug for `toc_id`, falling back to the id itself.
///
/// The first page in reading order keeps a contested slug. A candidate is
/// only claimed when stripping it again leaves it unchanged, so every
/// canonical URL resolves back to its page.
fn claim_slug(url_map: &mut UrlMap, preferred: &str, toc_id: &str) -> Option<String> {
    for candidate in [preferred, toc_id] {
        if candidate.is_empty() {
            continue;
        }
        if strip_url_short_link(candidate) != candidate {
            tracing::warn!(toc_id, slug = candidate, "Slug is not a stable short link, skipping");
            continue;
        }
        if let Some(owner) = url_map.get(candidate) {
            tracing::warn!(toc_id, slug = candidate, owner = %owner, "Duplicate page slug");
            continue;
        }
        url_map.insert(candidate.to_owned(), toc_id.to_owned());
        return Some(candidate.to_owned());
    }

    tracing::warn!(toc_id, "No free slug for page, page is not addressable");
    None
}

struct TocWalk<'a> {
    store: &'a RawStore,
    order: Vec<&'a str>,
    seen: HashSet<&'a str>,
    parents: HashMap<&'a str, &'a str>,
}

impl<'a> TocWalk<'a> {
    fn new(store: &'a RawStore) -> Self {
        Self {
            store,
            order: Vec::with_capacity(store.page_nodes.len()),
            seen: HashSet::new(),
            parents: HashMap::new(),
        }
    }

    fn visit(&mut self, nodes: &'a [TocLinkNode], parent: Option<&'a str>) {
        for node in nodes {
            let id = node.id.as_str();
            // Each entry is placed once, at its first occurrence.
            if !self.seen.insert(id) {
                continue;
            }
            if let Some(parent) = parent {
                self.parents.insert(id, parent);
            }
            if self.store.page_nodes.contains_key(id) {
                self.order.push(id);
            }
            self.visit(&node.children, Some(id));
        }
    }
}
