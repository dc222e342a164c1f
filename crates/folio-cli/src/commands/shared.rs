use folio_core::entities::EnhancedProject;
use serde::Serialize;

/// Flat, table-friendly view of an enhanced project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    pub id: u32,
    pub title: String,
    pub featured: bool,
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    pub domains: Vec<String>,
    pub tech: Vec<String>,
}

impl From<&EnhancedProject> for ProjectRow {
    fn from(project: &EnhancedProject) -> Self {
        Self {
            id: project.project.id,
            title: project.project.title.clone(),
            featured: project.project.is_featured.unwrap_or(false),
            roles: names(&project.roles),
            skills: names(&project.skill_categories),
            domains: names(project.domains()),
            tech: project.project.tech.clone(),
        }
    }
}

fn names<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn project_rows(projects: &[EnhancedProject]) -> Vec<ProjectRow> {
    projects.iter().map(ProjectRow::from).collect()
}
