use folio_filter::migrate_all;

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::project_rows;
use crate::output::output;

/// Handle `folio migrate`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let portfolio = bootstrap::load_portfolio(flags)?;
    let legacy = portfolio
        .projects
        .items
        .iter()
        .filter(|record| !record.is_enhanced())
        .count();
    tracing::debug!(
        legacy,
        total = portfolio.projects.items.len(),
        "migrating projects"
    );

    let migrated = migrate_all(portfolio.projects.items);
    match flags.format {
        OutputFormat::Table => output(&project_rows(&migrated), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&migrated, flags.format),
    }
}
