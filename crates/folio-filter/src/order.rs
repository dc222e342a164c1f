//! Id ordering and the featured/other split used by the project grid.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use folio_core::entities::ProjectView;
use folio_core::errors::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(CoreError::Validation(format!(
                "sort order must be asc or desc, got '{s}'"
            ))),
        }
    }
}

/// A copy of `projects` sorted by id. The input is not reordered.
///
/// The sort is stable, so equal ids keep their relative order.
#[must_use]
pub fn sort_by_id<T: ProjectView + Clone>(projects: &[T], order: SortOrder) -> Vec<T> {
    let mut sorted = projects.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by_key(|project| project.id()),
        SortOrder::Descending => sorted.sort_by_key(|project| Reverse(project.id())),
    }
    sorted
}

/// Featured projects, sorted by id.
#[must_use]
pub fn featured<T: ProjectView + Clone>(projects: &[T], order: SortOrder) -> Vec<T> {
    let picked: Vec<T> = projects
        .iter()
        .filter(|p| p.is_featured())
        .cloned()
        .collect();
    sort_by_id(&picked, order)
}

/// Projects that are not featured (flag false or absent), sorted by id.
#[must_use]
pub fn other<T: ProjectView + Clone>(projects: &[T], order: SortOrder) -> Vec<T> {
    let picked: Vec<T> = projects
        .iter()
        .filter(|p| !p.is_featured())
        .cloned()
        .collect();
    sort_by_id(&picked, order)
}

/// Featured block followed by the other block, each sorted by id.
#[must_use]
pub fn all_sorted<T: ProjectView + Clone>(projects: &[T], order: SortOrder) -> Vec<T> {
    let mut sorted = featured(projects, order);
    sorted.extend(other(projects, order));
    sorted
}
