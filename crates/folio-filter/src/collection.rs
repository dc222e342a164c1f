//! Collection-level helpers built on the predicate.

use folio_core::entities::ProjectRecord;
use folio_core::vocabulary::{DomainCategory, RoleType, SkillCategory};
use serde::Serialize;

use crate::predicate::matches;
use crate::state::FilterState;

/// Records that satisfy `filters`, in input order.
#[must_use]
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    filters: &FilterState,
) -> Vec<&'a ProjectRecord> {
    let matched: Vec<&ProjectRecord> = projects
        .iter()
        .filter(|record| matches(record, filters))
        .collect();

    tracing::debug!(
        total = projects.len(),
        matched = matched.len(),
        mode = %filters.filter_mode,
        "filtered projects"
    );
    matched
}

/// Number of records that satisfy `filters`.
#[must_use]
pub fn count_matching(projects: &[ProjectRecord], filters: &FilterState) -> usize {
    projects
        .iter()
        .filter(|record| matches(record, filters))
        .count()
}

/// True when any selection is non-empty or the trimmed query is non-blank.
///
/// The filter mode alone never counts as an active filter.
#[must_use]
pub fn has_active_filters(filters: &FilterState) -> bool {
    !filters.technologies.is_empty()
        || !filters.roles.is_empty()
        || !filters.skill_categories.is_empty()
        || !filters.domains.is_empty()
        || !filters.trimmed_query().is_empty()
}

/// Display-oriented summary of the active selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFiltersSummary {
    pub technologies: Vec<String>,
    pub roles: Vec<RoleType>,
    pub skill_categories: Vec<SkillCategory>,
    pub domains: Vec<DomainCategory>,
    /// Already trimmed.
    pub search_query: String,
    /// Sum of the selection sizes, plus one for a non-blank query.
    pub total_active_filters: usize,
}

#[must_use]
pub fn active_filters_summary(filters: &FilterState) -> ActiveFiltersSummary {
    let search_query = filters.trimmed_query().to_string();
    let total_active_filters = filters.technologies.len()
        + filters.roles.len()
        + filters.skill_categories.len()
        + filters.domains.len()
        + usize::from(!search_query.is_empty());

    ActiveFiltersSummary {
        technologies: filters.technologies.clone(),
        roles: filters.roles.clone(),
        skill_categories: filters.skill_categories.clone(),
        domains: filters.domains.clone(),
        search_query,
        total_active_filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FilterAction, FilterMode};
    use folio_core::entities::{Project, ProjectLinks, ProjectView};
    use pretty_assertions::assert_eq;

    fn project(id: u32, title: &str, tech: &[&str]) -> ProjectRecord {
        ProjectRecord::Legacy(Project {
            id,
            slug: format!("project-{id}"),
            title: title.into(),
            role: "Frontend Developer".into(),
            summary: format!("{title} summary"),
            highlights: vec!["Shipped".into()],
            tech: tech.iter().map(ToString::to_string).collect(),
            links: ProjectLinks::default(),
            metrics: None,
            thumbnail: format!("/{id}.png"),
            is_featured: None,
        })
    }

    fn catalogue() -> Vec<ProjectRecord> {
        vec![
            project(1, "Alpha", &["React", "TypeScript"]),
            project(2, "Beta", &["Vue.js"]),
            project(3, "Gamma", &["React"]),
        ]
    }

    #[test]
    fn filter_keeps_input_order() {
        let projects = catalogue();
        let state = FilterState::new().apply(FilterAction::ToggleTechnology("React".into()));
        let ids: Vec<u32> = filter_projects(&projects, &state)
            .iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn count_agrees_with_filter() {
        let projects = catalogue();
        let state = FilterState::new()
            .apply(FilterAction::ToggleTechnology("React".into()))
            .apply(FilterAction::ToggleTechnology("TypeScript".into()))
            .apply(FilterAction::SetFilterMode(FilterMode::And));
        assert_eq!(count_matching(&projects, &state), 1);
        assert_eq!(
            count_matching(&projects, &state),
            filter_projects(&projects, &state).len()
        );
    }

    #[test]
    fn empty_collection_yields_nothing() {
        assert!(filter_projects(&[], &FilterState::new()).is_empty());
        assert_eq!(count_matching(&[], &FilterState::new()), 0);
    }

    #[test]
    fn mode_alone_is_not_an_active_filter() {
        let state = FilterState::new().apply(FilterAction::SetFilterMode(FilterMode::And));
        assert!(!has_active_filters(&state));

        let blank = FilterState::new().apply(FilterAction::SetSearchQuery("   ".into()));
        assert!(!has_active_filters(&blank));

        let tech = FilterState::new().apply(FilterAction::ToggleTechnology("React".into()));
        assert!(has_active_filters(&tech));
    }

    #[test]
    fn summary_counts_every_selection_and_the_query() {
        let state = FilterState::new()
            .apply(FilterAction::ToggleTechnology("React".into()))
            .apply(FilterAction::ToggleRole(RoleType::Frontend))
            .apply(FilterAction::ToggleRole(RoleType::Designer))
            .apply(FilterAction::ToggleDomain(DomainCategory::Education))
            .apply(FilterAction::SetSearchQuery("  shop ".into()));

        let summary = active_filters_summary(&state);
        assert_eq!(summary.search_query, "shop");
        assert_eq!(summary.roles, vec![RoleType::Frontend, RoleType::Designer]);
        assert!(summary.skill_categories.is_empty());
        assert_eq!(summary.total_active_filters, 5);
    }

    #[test]
    fn summary_of_initial_state_is_zero() {
        let summary = active_filters_summary(&FilterState::new());
        assert_eq!(summary.total_active_filters, 0);
        assert!(summary.search_query.is_empty());
    }
}
