//! `ccc routes` command implementation.

use std::io::Write;

use ccc_site::Site;
use clap::Args;

use super::StoreArgs;
use crate::error::CliError;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

impl RoutesArgs {
    /// Execute the routes command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let site = self.store.load_site()?;

        let mut stdout = std::io::stdout().lock();
        write_routes(&site, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Write one `path<TAB>tocId<TAB>title` line per page in reading order.
///
/// Pages without a URL are listed with `-` as their path.
fn write_routes(site: &Site, out: &mut impl Write) -> std::io::Result<()> {
    let meta = site.store().meta();
    for toc_id in &meta.reading_order {
        let path = site.page_path(toc_id);
        let title = meta
            .page_meta_map
            .get(toc_id)
            .map_or("", |m| m.title.as_str());
        writeln!(out, "{}\t{toc_id}\t{title}", path.as_deref().unwrap_or("-"))?;
    }
    Ok(())
}
