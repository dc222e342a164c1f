//! Whether one project satisfies a filter state.
//!
//! Five independent criteria, combined with logical AND. A criterion with an
//! empty selection (or a blank query) is vacuously true. Legacy records are
//! migrated on the fly before evaluation; enhanced records are used as is.

use folio_core::entities::{EnhancedProject, ProjectRecord};

use crate::migrate::normalized;
use crate::state::{FilterMode, FilterState};

/// True when `record` passes every active criterion in `filters`.
#[must_use]
pub fn matches(record: &ProjectRecord, filters: &FilterState) -> bool {
    matches_enhanced(&normalized(record), filters)
}

/// [`matches`] for a project that is already in enhanced shape.
#[must_use]
pub fn matches_enhanced(project: &EnhancedProject, filters: &FilterState) -> bool {
    matches_technologies(project, &filters.technologies, filters.filter_mode)
        && matches_any(&project.roles, &filters.roles)
        && matches_any(&project.skill_categories, &filters.skill_categories)
        && matches_domains(project, filters)
        && matches_search(project, &filters.search_query)
}

fn matches_technologies(project: &EnhancedProject, selected: &[String], mode: FilterMode) -> bool {
    if selected.is_empty() {
        return true;
    }
    let has = |technology: &String| project.project.tech.contains(technology);
    match mode {
        FilterMode::And => selected.iter().all(has),
        FilterMode::Or => selected.iter().any(has),
    }
}

fn matches_any<T: PartialEq>(tags: &[T], selected: &[T]) -> bool {
    selected.is_empty() || selected.iter().any(|value| tags.contains(value))
}

/// A project with no known domain never satisfies a non-empty domain selection.
fn matches_domains(project: &EnhancedProject, filters: &FilterState) -> bool {
    if filters.domains.is_empty() {
        return true;
    }
    let domains = project.domains();
    !domains.is_empty() && matches_any(domains, &filters.domains)
}

/// Case-insensitive substring search over title, summary, highlights and tech.
fn matches_search(project: &EnhancedProject, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let project = &project.project;
    let hit = |text: &String| text.to_lowercase().contains(&query);

    hit(&project.title)
        || hit(&project.summary)
        || project.highlights.iter().any(hit)
        || project.tech.iter().any(hit)
}
