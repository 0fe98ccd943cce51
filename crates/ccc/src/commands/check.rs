//! `ccc check` command implementation.

use ccc_site::{CheckReport, Severity};
use clap::Args;

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Print the report as JSON on standard output.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::CheckFailed`] if the report contains errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let site = self.store.load_site()?;
        let report = site.check();

        if self.json {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            std::io::Write::write_all(&mut stdout, b"\n")?;
        } else {
            print_report(&report, &Output::new());
        }

        let errors = report.errors().count();
        if errors > 0 {
            return Err(CliError::CheckFailed(errors));
        }
        Ok(())
    }
}

fn print_report(report: &CheckReport, output: &Output) {
    for issue in &report.issues {
        match issue.severity() {
            Severity::Error => output.error(&format!("error: {issue}")),
            Severity::Warning => output.warning(&format!("warning: {issue}")),
        }
    }

    let warnings = report.warnings().count();
    if report.is_ok() {
        output.success(&format!(
            "Checked {} pages: OK ({warnings} warning(s))",
            report.page_count
        ));
    } else {
        output.info(&format!(
            "Checked {} pages: {} error(s), {warnings} warning(s)",
            report.page_count,
            report.errors().count()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::site;

    #[test]
    fn test_fixture_store_passes_check() {
        let report = site().check();

        assert!(report.is_ok());
        assert_eq!(report.page_count, 2);
        assert_eq!(report.warnings().count(), 0);
    }
}
