//! Site presentation configuration.

use folio_core::enums::SiteMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Layout served: `live` or `coming_soon`.
    #[serde(default)]
    pub mode: SiteMode,

    /// Public origin, e.g. `https://rhyan.dev`. Empty when not deployed.
    #[serde(default)]
    pub base_url: String,
}

impl SiteConfig {
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.mode == SiteMode::Live
    }
}
