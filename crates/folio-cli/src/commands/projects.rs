use folio_core::entities::{EnhancedProject, ProjectRecord};
use folio_core::vocabulary::Technology;
use folio_filter::{
    ActiveFiltersSummary, FilterAction, FilterMode, FilterState, active_filters_summary,
    all_sorted, featured, filter_projects, has_active_filters, normalized, other, reduce,
};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::root_commands::ProjectsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::project_rows;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub filter_mode: FilterMode,
    pub has_active_filters: bool,
    pub filters: ActiveFiltersSummary,
    pub total: usize,
    pub matched: usize,
    pub projects: Vec<EnhancedProject>,
}

/// Handle `folio projects`.
pub fn handle(args: &ProjectsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let portfolio = bootstrap::load_portfolio(flags)?;
    let response = list(&portfolio.projects.items, args);

    match flags.format {
        OutputFormat::Table => {
            if !flags.quiet {
                println!(
                    "{} of {} projects ({} active filters, tech mode {})",
                    response.matched,
                    response.total,
                    response.filters.total_active_filters,
                    response.filter_mode
                );
            }
            output(&project_rows(&response.projects), flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}

/// Filter `records` by `args` and order the matches featured-first.
pub fn list(records: &[ProjectRecord], args: &ProjectsArgs) -> ProjectsResponse {
    let filters = filter_state(args);
    let matched = filter_projects(records, &filters);

    let listed = if args.featured {
        featured(&matched, args.order)
    } else if args.other {
        other(&matched, args.order)
    } else {
        all_sorted(&matched, args.order)
    };

    ProjectsResponse {
        filter_mode: filters.filter_mode,
        has_active_filters: has_active_filters(&filters),
        filters: active_filters_summary(&filters),
        total: records.len(),
        matched: matched.len(),
        projects: listed
            .into_iter()
            .map(|record| normalized(record).into_owned())
            .collect(),
    }
}

/// Fold the command-line selections into a [`FilterState`].
///
/// Values repeated on the command line are selected once rather than
/// toggled back off.
pub fn filter_state(args: &ProjectsArgs) -> FilterState {
    let technologies = args
        .technologies
        .iter()
        .map(|name| FilterAction::ToggleTechnology(canonical_technology(name)));
    let roles = args.roles.iter().copied().map(FilterAction::ToggleRole);
    let skills = args
        .skills
        .iter()
        .copied()
        .map(FilterAction::ToggleSkillCategory);
    let domains = args
        .domains
        .iter()
        .map(|&domain| FilterAction::ToggleDomain(domain));
    let search = args.search.clone().map(FilterAction::SetSearchQuery);

    technologies
        .chain(roles)
        .chain(skills)
        .chain(domains)
        .chain(search)
        .chain([FilterAction::SetFilterMode(args.mode)])
        .fold(FilterState::new(), |state, action| {
            if already_selected(&state, &action) {
                state
            } else {
                reduce(&state, action)
            }
        })
}

fn already_selected(state: &FilterState, action: &FilterAction) -> bool {
    match action {
        FilterAction::ToggleTechnology(technology) => state.technologies.contains(technology),
        FilterAction::ToggleRole(role) => state.roles.contains(role),
        FilterAction::ToggleSkillCategory(category) => state.skill_categories.contains(category),
        FilterAction::ToggleDomain(domain) => state.domains.contains(domain),
        _ => false,
    }
}

/// Canonical spelling for known technologies, the trimmed input otherwise.
fn canonical_technology(name: &str) -> String {
    match name.parse::<Technology>() {
        Ok(technology) => technology.to_string(),
        Err(_) => name.trim().to_string(),
    }
}
