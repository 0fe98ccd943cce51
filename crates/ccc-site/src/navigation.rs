//! Prev/next page controls.
//!
//! A control is available iff its target `tocId` is a non-empty key of the
//! page meta map. Navigating pushes a new history entry rather than
//! replacing the current one.

use ccc_store::PageMetaMap;
use serde::Serialize;

/// Route prefix of page paths.
pub const DEFAULT_PAGE_PREFIX: &str = "/p";

/// Navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

/// Available navigation target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavControl {
    pub toc_id: String,
    /// Page path (`<prefix>/<url>`). `None` if the target has no URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Prev/next controls of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageControls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<NavControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NavControl>,
}

impl PageControls {
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<&NavControl> {
        match direction {
            Direction::Prev => self.prev.as_ref(),
            Direction::Next => self.next.as_ref(),
        }
    }

    #[must_use]
    pub fn is_available(&self, direction: Direction) -> bool {
        self.get(direction).is_some()
    }

    /// Push the target path of `direction` onto `history`.
    ///
    /// Returns false, leaving history untouched, when the control is
    /// unavailable or its target has no path.
    pub fn navigate(&self, direction: Direction, history: &mut impl History) -> bool {
        let Some(path) = self.get(direction).and_then(|c| c.path.as_deref()) else {
            return false;
        };
        history.push(path);
        true
    }
}

/// History navigation primitive supplied by the embedding UI.
pub trait History {
    /// Add a new entry on top of the current one.
    fn push(&mut self, path: &str);
}

/// In-memory history stack.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a single entry.
    #[must_use]
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: vec![path.into()],
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        self.entries.push(path.to_owned());
    }
}

/// Build the path of a page from its URL slug.
///
/// ```
/// assert_eq!(ccc_site::page_path("/p", "P1"), "/p/P1");
/// ```
#[must_use]
pub fn page_path(prefix: &str, url: &str) -> String {
    format!("{prefix}/{url}")
}

/// Compute the controls of `toc_id`. Unknown pages have no controls.
#[must_use]
pub fn page_controls(page_meta_map: &PageMetaMap, toc_id: &str, prefix: &str) -> PageControls {
    let Some(meta) = page_meta_map.get(toc_id) else {
        return PageControls::default();
    };

    PageControls {
        prev: control(page_meta_map, meta.prev.as_deref(), prefix),
        next: control(page_meta_map, meta.next.as_deref(), prefix),
    }
}

fn control(page_meta_map: &PageMetaMap, target: Option<&str>, prefix: &str) -> Option<NavControl> {
    let target = target.filter(|id| !id.is_empty())?;
    let target_meta = page_meta_map.get(target)?;

    Some(NavControl {
        toc_id: target.to_owned(),
        path: target_meta.url.as_deref().map(|url| page_path(prefix, url)),
    })
}
