//! Filter selection state and its reducer.
//!
//! [`FilterState`] is a plain value. It only changes through [`reduce`],
//! which takes the current state and an action and returns a new, fully
//! formed state. The input state is never modified.
//!
//! ```text
//! initial ── toggle/set ──▶ state' ── clear_category ──▶ state'' ── clear_all ──▶ initial
//! ```

use std::fmt;
use std::str::FromStr;

use folio_core::errors::CoreError;
use folio_core::vocabulary::{DomainCategory, RoleType, SkillCategory};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FilterMode
// ---------------------------------------------------------------------------

/// How multiple selected technologies combine.
///
/// Only the technology selection honours this; roles, skill categories and
/// domains always match on any selected value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterMode {
    /// Every selected technology must be present.
    #[serde(rename = "AND")]
    And,
    /// At least one selected technology must be present.
    #[default]
    #[serde(rename = "OR")]
    Or,
}

impl FilterMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            mode if mode.eq_ignore_ascii_case("and") => Ok(Self::And),
            mode if mode.eq_ignore_ascii_case("or") => Ok(Self::Or),
            _ => Err(CoreError::Validation(format!(
                "filter mode must be AND or OR, got '{s}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterCategory
// ---------------------------------------------------------------------------

/// One of the four selection sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    Technologies,
    Roles,
    SkillCategories,
    Domains,
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// The user's current filter selection.
///
/// Each selection list is duplicate-free; its order is insertion order and
/// carries no meaning for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub technologies: Vec<String>,
    pub roles: Vec<RoleType>,
    pub skill_categories: Vec<SkillCategory>,
    pub domains: Vec<DomainCategory>,
    pub search_query: String,
    pub filter_mode: FilterMode,
}

impl FilterState {
    /// Empty selections, empty query, `OR` mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for [`reduce`].
    #[must_use]
    pub fn apply(&self, action: FilterAction) -> Self {
        reduce(self, action)
    }

    /// Search query with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_query(&self) -> &str {
        self.search_query.trim()
    }
}

// ---------------------------------------------------------------------------
// FilterAction / reduce
// ---------------------------------------------------------------------------

/// Every way the filter state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    ToggleTechnology(String),
    ToggleRole(RoleType),
    ToggleSkillCategory(SkillCategory),
    ToggleDomain(DomainCategory),
    SetSearchQuery(String),
    SetFilterMode(FilterMode),
    /// Back to the initial state, mode included.
    ClearAll,
    /// Empty one selection set; query and mode are kept.
    ClearCategory(FilterCategory),
}

/// Remove `item` if present, otherwise append it.
fn toggle<T: PartialEq + Clone>(items: &[T], item: &T) -> Vec<T> {
    if items.contains(item) {
        items
            .iter()
            .filter(|existing| *existing != item)
            .cloned()
            .collect()
    } else {
        let mut next = items.to_vec();
        next.push(item.clone());
        next
    }
}

/// Compute the state that follows `state` after `action`.
///
/// Total over all states and actions: never panics, never yields a partial state.
#[must_use]
pub fn reduce(state: &FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::ToggleTechnology(technology) => FilterState {
            technologies: toggle(&state.technologies, &technology),
            ..state.clone()
        },
        FilterAction::ToggleRole(role) => FilterState {
            roles: toggle(&state.roles, &role),
            ..state.clone()
        },
        FilterAction::ToggleSkillCategory(category) => FilterState {
            skill_categories: toggle(&state.skill_categories, &category),
            ..state.clone()
        },
        FilterAction::ToggleDomain(domain) => FilterState {
            domains: toggle(&state.domains, &domain),
            ..state.clone()
        },
        FilterAction::SetSearchQuery(search_query) => FilterState {
            search_query,
            ..state.clone()
        },
        FilterAction::SetFilterMode(filter_mode) => FilterState {
            filter_mode,
            ..state.clone()
        },
        FilterAction::ClearAll => FilterState::default(),
        FilterAction::ClearCategory(category) => {
            let mut next = state.clone();
            match category {
                FilterCategory::Technologies => next.technologies.clear(),
                FilterCategory::Roles => next.roles.clear(),
                FilterCategory::SkillCategories => next.skill_categories.clear(),
                FilterCategory::Domains => next.domains.clear(),
            }
            next
        }
    }
}
