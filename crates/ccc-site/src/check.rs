//! Verification of derived index invariants.

use std::fmt;

use ccc_store::EnhancedStore;
use serde::Serialize;

use crate::navigation::Direction;

/// How serious an [`Issue`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found in an enhanced store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// `prev`/`next` names a page that does not exist.
    DanglingLink {
        toc_id: String,
        direction: Direction,
        target: String,
    },
    /// `url_map[url]` does not lead back to the page.
    BrokenRoundTrip {
        toc_id: String,
        url: String,
        resolved: Option<String>,
    },
    /// URL map entry names a page that does not exist.
    MissingPage { slug: String, toc_id: String },
    /// Page has no URL and cannot be reached by slug.
    Unaddressable { toc_id: String },
    /// `next` of one page and `prev` of its target disagree.
    AsymmetricLink { toc_id: String, target: String },
}

impl Issue {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::DanglingLink { .. } | Self::BrokenRoundTrip { .. } | Self::MissingPage { .. } => {
                Severity::Error
            }
            Self::Unaddressable { .. } | Self::AsymmetricLink { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingLink {
                toc_id,
                direction,
                target,
            } => {
                let direction = match direction {
                    Direction::Prev => "prev",
                    Direction::Next => "next",
                };
                write!(f, "{toc_id}: {direction} link to missing page {target}")
            }
            Self::BrokenRoundTrip {
                toc_id,
                url,
                resolved,
            } => match resolved {
                Some(other) => write!(f, "{toc_id}: slug {url} resolves to {other}"),
                None => write!(f, "{toc_id}: slug {url} is not in the URL map"),
            },
            Self::MissingPage { slug, toc_id } => {
                write!(f, "slug {slug}: points at missing page {toc_id}")
            }
            Self::Unaddressable { toc_id } => write!(f, "{toc_id}: page has no URL"),
            Self::AsymmetricLink { toc_id, target } => {
                write!(f, "{toc_id}: next is {target} but {target} does not point back")
            }
        }
    }
}

/// Result of [`check_store`].
#[derive(Clone, Debug, Default, Serialize)]
pub struct CheckReport {
    pub page_count: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    /// True if no issue is an error.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !self.issues.iter().any(|i| i.severity() == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }
}

/// Check the page meta map and URL map of `store` against its pages.
#[must_use]
pub fn check_store(store: &EnhancedStore) -> CheckReport {
    let meta = store.meta();
    let mut issues = Vec::new();

    for (toc_id, page_meta) in &meta.page_meta_map {
        for (direction, target) in [
            (Direction::Prev, &page_meta.prev),
            (Direction::Next, &page_meta.next),
        ] {
            let Some(target) = target.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            if !meta.page_meta_map.contains_key(target) || store.page(target).is_none() {
                issues.push(Issue::DanglingLink {
                    toc_id: toc_id.clone(),
                    direction,
                    target: target.to_owned(),
                });
            }
        }

        if let Some(next) = page_meta.next.as_deref()
            && let Some(next_meta) = meta.page_meta_map.get(next)
            && next_meta.prev.as_deref() != Some(toc_id.as_str())
        {
            issues.push(Issue::AsymmetricLink {
                toc_id: toc_id.clone(),
                target: next.to_owned(),
            });
        }

        match &page_meta.url {
            Some(url) => {
                let resolved = meta.url_map.get(url);
                if resolved != Some(toc_id) {
                    issues.push(Issue::BrokenRoundTrip {
                        toc_id: toc_id.clone(),
                        url: url.clone(),
                        resolved: resolved.cloned(),
                    });
                }
            }
            None => issues.push(Issue::Unaddressable {
                toc_id: toc_id.clone(),
            }),
        }
    }

    for (slug, toc_id) in &meta.url_map {
        if store.page(toc_id).is_none() {
            issues.push(Issue::MissingPage {
                slug: slug.clone(),
                toc_id: toc_id.clone(),
            });
        }
    }

    CheckReport {
        page_count: store.store().page_nodes.len(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::{generated_store, two_page_store};

    #[test]
    fn test_generated_store_is_clean() {
        let report = check_store(&generated_store());

        assert!(report.is_ok());
        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert_eq!(report.page_count, 4);
    }

    #[test]
    fn test_hand_written_store_is_clean() {
        assert!(check_store(&two_page_store()).issues.is_empty());
    }

    #[test]
    fn test_reports_dangling_link() {
        let store = two_page_store();
        let (raw, mut meta) = (store.store().clone(), store.meta().clone());
        meta.page_meta_map.get_mut("2").unwrap().next = Some("3".to_owned());

        let report = check_store(&ccc_store::EnhancedStore::from_parts(raw, meta));

        assert!(!report.is_ok());
        assert_eq!(
            report.errors().collect::<Vec<_>>(),
            vec![&Issue::DanglingLink {
                toc_id: "2".to_owned(),
                direction: Direction::Next,
                target: "3".to_owned(),
            }]
        );
    }

    #[test]
    fn test_reports_broken_round_trip_and_missing_page() {
        let store = two_page_store();
        let (raw, mut meta) = (store.store().clone(), store.meta().clone());
        meta.url_map.insert("b".to_owned(), "9".to_owned());

        let report = check_store(&ccc_store::EnhancedStore::from_parts(raw, meta));

        assert!(report.issues.contains(&Issue::BrokenRoundTrip {
            toc_id: "2".to_owned(),
            url: "b".to_owned(),
            resolved: Some("9".to_owned()),
        }));
        assert!(report.issues.contains(&Issue::MissingPage {
            slug: "b".to_owned(),
            toc_id: "9".to_owned(),
        }));
    }

    #[test]
    fn test_asymmetric_link_is_warning() {
        let store = two_page_store();
        let (raw, mut meta) = (store.store().clone(), store.meta().clone());
        meta.page_meta_map.get_mut("2").unwrap().prev = None;

        let report = check_store(&ccc_store::EnhancedStore::from_parts(raw, meta));

        assert!(report.is_ok());
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(
            report.issues[0].to_string(),
            "1: next is 2 but 2 does not point back"
        );
    }
}
