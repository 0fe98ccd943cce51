//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;
pub(crate) mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use ccc_config::{CliSettings, Config};
use ccc_site::{Site, SiteConfig};
use ccc_store::EnhancedStore;
use clap::Args;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use routes::RoutesArgs;

/// Arguments shared by every command that reads a store.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Path to configuration file (default: auto-discover ccc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON store file (overrides config).
    #[arg(short, long, env = "CCC_STORE")]
    store: Option<PathBuf>,

    /// Route prefix of page paths (overrides config).
    #[arg(long)]
    page_prefix: Option<String>,

    /// Enable verbose output (show import timing and slug warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl StoreArgs {
    /// Load configuration and import the store it names.
    pub(crate) fn load_site(&self) -> Result<Site, CliError> {
        let cli_settings = CliSettings {
            store_path: self.store.clone(),
            page_prefix: self.page_prefix.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::info!(path = %config.store_resolved.path.display(), "Loading store");
        let store = EnhancedStore::load(&config.store_resolved.path)?;

        Ok(Site::new(
            Arc::new(store),
            SiteConfig {
                page_prefix: config.routes.page_prefix,
                anchor_text: config.render.anchor_text,
            },
        ))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use ccc_site::{Site, SiteConfig};
    use ccc_store::{EnhancedStore, RawStore};

    pub(crate) fn site() -> Site {
        let raw = RawStore::from_json_str(
            r#"{
                "toc_link_tree": [
                    {"id": "part-1", "children": [{"id": "1"}, {"id": "2"}]}
                ],
                "toc_nodes": {
                    "part-1": {"text": "Part One"},
                    "1": {"text": "Prologue", "link": "__P1.HTM"},
                    "2": {"text": "Faith", "link": "__P2.HTM"}
                },
                "page_nodes": {
                    "1": {
                        "paragraphs": [{
                            "attrs": {"indent": true},
                            "elements": [
                                {"type": "text", "text": "Hi", "attrs": {"b": true}},
                                {"type": "ref", "number": 1}
                            ]
                        }],
                        "footnotes": {"a": {"number": 1, "refs": [{"text": "Jn 17:3"}]}}
                    },
                    "2": {}
                }
            }"#,
        )
        .unwrap();
        Site::new(Arc::new(EnhancedStore::new(raw)), SiteConfig::default())
    }
}
