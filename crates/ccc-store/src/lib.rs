//! Typed CCC document store and derived page indices.
//!
//! This crate provides:
//! - [`RawStore`]: the serialized document store (pages, table of contents)
//! - [`generate_meta`]: derives the page meta map and the short URL map
//! - [`EnhancedStore`]: the raw store bundled with its derived [`CccMeta`]
//!
//! The enhanced store is built once at startup and never mutated afterward,
//! so it can be shared freely between readers.
//!
//! # Example
//!
//! ```
//! use ccc_store::{EnhancedStore, RawStore};
//!
//! let raw = RawStore::from_json_str(r#"{
//!     "toc_link_tree": [{ "id": "1" }],
//!     "toc_nodes": { "1": { "id": "1", "text": "Prologue", "link": "__P1.HTM" } },
//!     "page_nodes": { "1": { "id": "1", "paragraphs": [] } }
//! }"#)?;
//! let store = EnhancedStore::new(raw);
//!
//! assert_eq!(store.meta().url_map.get("P1").map(String::as_str), Some("1"));
//! # Ok::<(), ccc_store::StoreError>(())
//! ```

mod meta;
mod model;
mod short_link;
mod store;

pub use meta::{CccMeta, PageMeta, PageMetaMap, UrlMap, generate_meta};
pub use model::{
    Footnote, FootnoteRef, PageNode, Paragraph, ParagraphAttrs, ParagraphElement, RawStore,
    TextAttrs, TocLinkNode, TocNode,
};
pub use short_link::strip_url_short_link;
pub use store::{EnhancedStore, StoreError, import_store};
