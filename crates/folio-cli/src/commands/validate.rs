use std::path::PathBuf;

use anyhow::{Context, bail};
use folio_config::{ConfigError, Violation};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub valid: bool,
    pub projects: usize,
    pub violations: Vec<Violation>,
}

/// Handle `folio validate`.
///
/// Invalid content is reported in full and then surfaces as an error so the
/// exit code reflects the outcome.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = bootstrap::content_path(flags)?;

    let report = match folio_config::load_portfolio(&path) {
        Ok(portfolio) => ValidationReport {
            path,
            valid: true,
            projects: portfolio.projects.items.len(),
            violations: Vec::new(),
        },
        Err(ConfigError::InvalidContent { violations }) => ValidationReport {
            path,
            valid: false,
            projects: 0,
            violations,
        },
        Err(error) => {
            let context = format!("failed to load portfolio content from {}", path.display());
            return Err(error).context(context);
        }
    };

    match flags.format {
        OutputFormat::Table if !report.valid => output(&report.violations, flags.format)?,
        _ => output(&report, flags.format)?,
    }

    if !report.valid {
        bail!(
            "{} has {} violation(s)",
            report.path.display(),
            report.violations.len()
        );
    }
    Ok(())
}
