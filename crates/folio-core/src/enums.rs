//! Site layout enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// A top-level block of the single-page site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Navigation,
    Hero,
    About,
    Experience,
    Projects,
    Contact,
    Footer,
    ComingSoon,
}

impl Section {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::ComingSoon => "coming_soon",
        }
    }

    /// In-page anchor the navigation links to, if the section has one.
    #[must_use]
    pub const fn anchor(self) -> Option<&'static str> {
        match self {
            Self::About => Some("#about"),
            Self::Experience => Some("#experience"),
            Self::Projects => Some("#projects"),
            Self::Contact => Some("#contact"),
            Self::Navigation | Self::Hero | Self::Footer | Self::ComingSoon => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SiteMode
// ---------------------------------------------------------------------------

/// Which page layout the site serves.
///
/// ```text
/// coming_soon: navigation → hero → coming_soon
/// live:        navigation → hero → about → experience → projects → contact → footer
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SiteMode {
    Live,
    #[default]
    ComingSoon,
}

impl SiteMode {
    /// Sections rendered in this mode, top to bottom.
    #[must_use]
    pub const fn sections(self) -> &'static [Section] {
        match self {
            Self::Live => &[
                Section::Navigation,
                Section::Hero,
                Section::About,
                Section::Experience,
                Section::Projects,
                Section::Contact,
                Section::Footer,
            ],
            Self::ComingSoon => &[Section::Navigation, Section::Hero, Section::ComingSoon],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::ComingSoon => "coming_soon",
        }
    }
}

impl fmt::Display for SiteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "live" => Ok(Self::Live),
            "coming_soon" => Ok(Self::ComingSoon),
            _ => Err(CoreError::Validation(format!(
                "site mode must be 'live' or 'coming_soon', got '{s}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// BuildStage / StageStatus
// ---------------------------------------------------------------------------

/// Progress marker shown on the coming-soon placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}

impl StageStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Steps of the build pipeline displayed while the site is in coming-soon mode.
///
/// ```text
/// ideation (completed) → design (completed) → development (active) → launch (pending)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BuildStage {
    Ideation,
    Design,
    Development,
    Launch,
}

impl BuildStage {
    pub const ALL: &'static [Self] = &[
        Self::Ideation,
        Self::Design,
        Self::Development,
        Self::Launch,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ideation => "Ideation",
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Launch => "Launch",
        }
    }

    #[must_use]
    pub const fn status(self) -> StageStatus {
        match self {
            Self::Ideation | Self::Design => StageStatus::Completed,
            Self::Development => StageStatus::Active,
            Self::Launch => StageStatus::Pending,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
