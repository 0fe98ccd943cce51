//! `ccc render` command implementation.

use std::io::Write;

use ccc_site::PageView;
use clap::{Args, ValueEnum};

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Output format of a rendered page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Html,
    Json,
    Text,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page slug or short link (e.g. `P1` or `__P1.HTM`).
    slug: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// An unknown slug is not an error: there is simply nothing to render.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let site = self.store.load_site()?;

        let Some(view) = site.render(self.slug.as_deref()) else {
            Output::new().warning(&format!(
                "No page for {}",
                self.slug.as_deref().unwrap_or("<empty>")
            ));
            return Ok(());
        };

        let mut stdout = std::io::stdout().lock();
        write_view(&view, self.format, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

fn write_view(view: &PageView, format: Format, out: &mut impl Write) -> Result<(), CliError> {
    match format {
        Format::Html => out.write_all(view.to_html().as_bytes())?,
        Format::Text => out.write_all(view.to_text().as_bytes())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
