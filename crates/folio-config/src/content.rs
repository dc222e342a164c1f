//! Portfolio content loading.
//!
//! Content is authored as TOML (or JSON) and read through figment, then
//! passed through [`validate_portfolio`](crate::validate_portfolio) before
//! anything downstream sees it.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format, Json, Toml},
};
use folio_core::entities::Portfolio;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validate::validate_portfolio;

/// Default content file, relative to the working directory.
fn default_path() -> PathBuf {
    PathBuf::from("portfolio.toml")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Path to the portfolio content file (`.toml` or `.json`).
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl ContentConfig {
    /// Load and validate the configured content file.
    ///
    /// # Errors
    ///
    /// See [`load_portfolio`].
    pub fn load(&self) -> Result<Portfolio, ConfigError> {
        load_portfolio(&self.path)
    }
}

/// Load portfolio content from a `.toml` or `.json` file and validate it.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the file does not exist,
/// [`ConfigError::UnsupportedFormat`] for other extensions,
/// [`ConfigError::Figment`] if the file does not parse into a [`Portfolio`],
/// and [`ConfigError::InvalidContent`] if validation finds violations.
pub fn load_portfolio(path: &Path) -> Result<Portfolio, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::InvalidValue {
            field: "content.path".to_string(),
            reason: format!("file not found: {}", path.display()),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let figment = match extension.as_deref() {
        Some("toml") => Figment::from(Toml::file(path)),
        Some("json") => Figment::from(Json::file(path)),
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let portfolio = checked(figment.extract()?)?;
    tracing::info!(
        path = %path.display(),
        projects = portfolio.projects.items.len(),
        "loaded portfolio content"
    );
    Ok(portfolio)
}

/// Parse and validate portfolio content from a TOML string.
///
/// # Errors
///
/// Returns [`ConfigError::Figment`] on parse failure and
/// [`ConfigError::InvalidContent`] if validation finds violations.
pub fn parse_portfolio_toml(source: &str) -> Result<Portfolio, ConfigError> {
    checked(Figment::from(Toml::string(source)).extract()?)
}

fn checked(portfolio: Portfolio) -> Result<Portfolio, ConfigError> {
    let violations = validate_portfolio(&portfolio);
    if violations.is_empty() {
        Ok(portfolio)
    } else {
        Err(ConfigError::InvalidContent { violations })
    }
}
