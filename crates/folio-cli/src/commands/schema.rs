use folio_core::entities::Portfolio;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `folio schema`.
///
/// A schema does not tabulate, so table output falls back to pretty JSON.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Portfolio);
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema, format)
}
