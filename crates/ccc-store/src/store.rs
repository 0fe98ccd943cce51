//! Enhanced store: raw data bundled with its derived metadata.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::meta::{CccMeta, PageMeta, generate_meta};
use crate::model::{PageNode, RawStore};

/// Error loading a document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Store file could not be read.
    #[error("Failed to read store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Store content is not valid JSON.
    #[error("Store parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only document store with derived indices.
///
/// Built once at startup. Nothing mutates it afterward, so it is shared
/// between readers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct EnhancedStore {
    store: RawStore,
    meta: CccMeta,
}

impl EnhancedStore {
    /// Derive metadata for `store` and bundle the two.
    #[must_use]
    pub fn new(store: RawStore) -> Self {
        let start = Instant::now();
        let meta = generate_meta(&store);

        tracing::info!(
            page_count = store.page_nodes.len(),
            slug_count = meta.url_map.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Store imported"
        );

        Self { store, meta }
    }

    /// Bundle a store with metadata that was derived elsewhere.
    ///
    /// Seam for tests and tooling that need hand-written or deliberately
    /// inconsistent indices. Nothing checks that `meta` matches `store`; run
    /// the store check on the result when it matters.
    #[doc(hidden)]
    #[must_use]
    pub fn from_parts(store: RawStore, meta: CccMeta) -> Self {
        Self { store, meta }
    }

    /// Load a store file and derive its metadata.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let store = RawStore::load(path)?;
        tracing::debug!(path = %path.display(), "Store file parsed");
        Ok(Self::new(store))
    }

    #[must_use]
    pub fn store(&self) -> &RawStore {
        &self.store
    }

    #[must_use]
    pub fn meta(&self) -> &CccMeta {
        &self.meta
    }

    /// Get a page by `tocId`.
    #[must_use]
    pub fn page(&self, toc_id: &str) -> Option<&PageNode> {
        self.store.page_nodes.get(toc_id)
    }

    /// Get page metadata by `tocId`.
    #[must_use]
    pub fn page_meta(&self, toc_id: &str) -> Option<&PageMeta> {
        self.meta.page_meta_map.get(toc_id)
    }
}

/// Import a raw store, producing the enhanced store.
#[must_use]
pub fn import_store(store: RawStore) -> EnhancedStore {
    EnhancedStore::new(store)
}
