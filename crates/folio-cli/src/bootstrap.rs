use std::path::PathBuf;

use anyhow::Context;
use folio_config::FolioConfig;
use folio_core::entities::Portfolio;

use crate::cli::GlobalFlags;

/// Load layered config and apply the `--content` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FolioConfig> {
    let mut config = FolioConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(path) = &flags.content {
        config.content.path.clone_from(path);
    }
    Ok(config)
}

/// Content path after config and flag resolution.
pub fn content_path(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    Ok(load_config(flags)?.content.path)
}

/// Load and validate the configured portfolio content.
pub fn load_portfolio(flags: &GlobalFlags) -> anyhow::Result<Portfolio> {
    let path = content_path(flags)?;
    folio_config::load_portfolio(&path)
        .with_context(|| format!("failed to load portfolio content from {}", path.display()))
}
