use clap::{Args, Subcommand, ValueEnum};
use folio_core::vocabulary::{DomainCategory, RoleType, SkillCategory};
use folio_filter::{FilterMode, SortOrder};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Filter projects and list the matches, featured first.
    Projects(ProjectsArgs),
    /// Print every project in enhanced shape.
    Migrate,
    /// Show the section layout for the configured site mode.
    Site,
    /// Load and validate the portfolio content.
    Validate,
    /// List the closed category vocabularies.
    Vocabulary(VocabularyArgs),
    /// Dump the JSON schema of the portfolio content.
    Schema,
}

/// Arguments for `folio projects`.
#[derive(Clone, Debug, Default, Args)]
pub struct ProjectsArgs {
    /// Technology to filter by (repeatable).
    #[arg(long = "tech", value_name = "TECH")]
    pub technologies: Vec<String>,
    /// Role to filter by (repeatable), e.g. "Full Stack".
    #[arg(long = "role", value_name = "ROLE")]
    pub roles: Vec<RoleType>,
    /// Skill category to filter by (repeatable).
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<SkillCategory>,
    /// Domain to filter by (repeatable).
    #[arg(long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<DomainCategory>,
    /// Case-insensitive text search over title, summary, highlights and tech.
    #[arg(long)]
    pub search: Option<String>,
    /// How selected technologies combine: and, or.
    #[arg(long, default_value = "or")]
    pub mode: FilterMode,
    /// Id order within the featured and other blocks: asc, desc.
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
    /// Only featured projects.
    #[arg(long, conflicts_with = "other")]
    pub featured: bool,
    /// Only non-featured projects.
    #[arg(long)]
    pub other: bool,
}

/// Arguments for `folio vocabulary`.
#[derive(Clone, Debug, Args)]
pub struct VocabularyArgs {
    /// Which vocabulary to list (all when omitted).
    pub kind: Option<VocabularyKind>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum VocabularyKind {
    Technologies,
    Skills,
    Roles,
    Domains,
}
