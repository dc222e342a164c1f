use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::vocabulary::{DomainCategory, RoleType, SkillCategory};

/// Outbound links for a project. All optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Path or URL to supporting material (case study, screenshots).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// A headline number shown on a project card, e.g. `"Users" / "10k+"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

/// A project record in its legacy shape: one free-text role, raw tech names.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    /// Unique, positive. Stable sort key.
    pub id: u32,
    pub slug: String,
    pub title: String,
    /// Free text, e.g. `"Full-Stack Developer"`.
    pub role: String,
    pub summary: String,
    pub highlights: Vec<String>,
    /// Technology names; not required to be canonical.
    pub tech: Vec<String>,
    pub links: ProjectLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<ProjectMetric>>,
    pub thumbnail: String,
    #[serde(default, alias = "isFeatured", skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// A project augmented with multi-valued role, skill, and domain tags.
///
/// Serialized flat: the legacy fields sit next to `roles`, `skill_categories`
/// and `domains`, so an enhanced record is a superset of a legacy one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnhancedProject {
    #[serde(flatten)]
    pub project: Project,
    pub roles: Vec<RoleType>,
    #[serde(alias = "skillCategories")]
    pub skill_categories: Vec<SkillCategory>,
    /// `None` and `Some(vec![])` both mean "no known domain".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<DomainCategory>>,
}

impl EnhancedProject {
    /// Domains as a slice, empty when absent.
    #[must_use]
    pub fn domains(&self) -> &[DomainCategory] {
        self.domains.as_deref().unwrap_or_default()
    }
}

/// Either shape, as found in authored content.
///
/// A record is enhanced iff it carries both `roles` and `skill_categories`.
/// The shape is decided by which keys are present, so an unknown vocabulary
/// value in an enhanced record is a deserialization error.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProjectRecord {
    Enhanced(EnhancedProject),
    Legacy(Project),
}

/// Wire form of a [`ProjectRecord`] before the shape is known.
#[derive(Deserialize)]
struct RawProject {
    #[serde(flatten)]
    project: Project,
    #[serde(default)]
    roles: Option<Vec<RoleType>>,
    #[serde(default, alias = "skillCategories")]
    skill_categories: Option<Vec<SkillCategory>>,
    #[serde(default)]
    domains: Option<Vec<DomainCategory>>,
}

impl From<RawProject> for ProjectRecord {
    fn from(raw: RawProject) -> Self {
        match (raw.roles, raw.skill_categories) {
            (Some(roles), Some(skill_categories)) => Self::Enhanced(EnhancedProject {
                project: raw.project,
                roles,
                skill_categories,
                domains: raw.domains,
            }),
            _ => Self::Legacy(raw.project),
        }
    }
}

impl<'de> Deserialize<'de> for ProjectRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawProject::deserialize(deserializer).map(Self::from)
    }
}

impl ProjectRecord {
    #[must_use]
    pub const fn is_enhanced(&self) -> bool {
        matches!(self, Self::Enhanced(_))
    }
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        Self::Legacy(project)
    }
}

impl From<EnhancedProject> for ProjectRecord {
    fn from(project: EnhancedProject) -> Self {
        Self::Enhanced(project)
    }
}

/// Read access to the legacy fields shared by every project shape.
pub trait ProjectView {
    fn project(&self) -> &Project;

    fn id(&self) -> u32 {
        self.project().id
    }

    /// Absence of the flag counts as not featured.
    fn is_featured(&self) -> bool {
        self.project().is_featured.unwrap_or(false)
    }
}

impl ProjectView for Project {
    fn project(&self) -> &Project {
        self
    }
}

impl ProjectView for EnhancedProject {
    fn project(&self) -> &Project {
        &self.project
    }
}

impl ProjectView for ProjectRecord {
    fn project(&self) -> &Project {
        match self {
            Self::Enhanced(enhanced) => &enhanced.project,
            Self::Legacy(project) => project,
        }
    }
}

impl<T: ProjectView> ProjectView for &T {
    fn project(&self) -> &Project {
        (**self).project()
    }
}
