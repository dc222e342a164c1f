//! Legacy → enhanced project migration.
//!
//! Legacy records carry one free-text role and raw technology names. The
//! migrator derives the enhanced tags from static lookup tables:
//!
//! - role: synonym table, unmatched → `Full Stack`
//! - skill categories: role table ∪ technology table (raw tech names), never empty
//! - domains: keyword substring scan over summary + highlights, may be empty
//! - tech: synonym table, then keep only canonical [`Technology`] names, deduplicated
//!
//! Records that are already enhanced pass through untouched.

use std::borrow::Cow;

use folio_core::entities::{EnhancedProject, Project, ProjectRecord};
use folio_core::vocabulary::SkillCategory as Skill;
use folio_core::vocabulary::{DomainCategory, RoleType, SkillCategory, Technology};

/// Role assigned when the legacy role string is not recognised.
const DEFAULT_ROLE: RoleType = RoleType::FullStack;

/// Skills assigned when the legacy role string has no skill mapping.
const DEFAULT_SKILLS: &[SkillCategory] = &[Skill::FullStack];

const ROLE_SYNONYMS: &[(&str, RoleType)] = &[
    ("Frontend Developer", RoleType::Frontend),
    ("Backend Developer", RoleType::Backend),
    ("Full Stack Developer", RoleType::FullStack),
    ("Full-Stack Developer", RoleType::FullStack),
    ("Fullstack Developer", RoleType::FullStack),
    ("AI Engineer", RoleType::AiEngineer),
    ("DevOps Engineer", RoleType::DevOps),
    ("Mobile Developer", RoleType::Mobile),
    ("Game Developer", RoleType::GameDeveloper),
    ("UI/UX Designer", RoleType::Designer),
    ("Designer", RoleType::Designer),
    ("Data Engineer", RoleType::DataEngineer),
    ("DevTools Engineer", RoleType::DevTools),
    ("Frontend", RoleType::Frontend),
    ("Backend", RoleType::Backend),
    ("Full Stack", RoleType::FullStack),
    ("Mobile", RoleType::Mobile),
    ("DevOps", RoleType::DevOps),
];

const FULL_STACK_SKILLS: &[SkillCategory] = &[Skill::FullStack, Skill::Frontend, Skill::Backend];

// Keyed by the raw legacy role string, not by the mapped RoleType.
const ROLE_SKILLS: &[(&str, &[SkillCategory])] = &[
    ("Frontend Developer", &[Skill::Frontend]),
    ("Backend Developer", &[Skill::Backend]),
    ("Full Stack Developer", FULL_STACK_SKILLS),
    ("Full-Stack Developer", FULL_STACK_SKILLS),
    ("Fullstack Developer", FULL_STACK_SKILLS),
    ("AI Engineer", &[Skill::AiMachineLearning, Skill::Backend]),
    ("DevOps Engineer", &[Skill::DevOpsInfrastructure]),
    ("Mobile Developer", &[Skill::Mobile]),
    ("Game Developer", &[Skill::Game]),
    ("UI/UX Designer", &[Skill::UiUxDesign]),
    ("Designer", &[Skill::UiUxDesign]),
    ("Data Engineer", &[Skill::DataEngineering, Skill::Backend]),
    ("DevTools Engineer", &[Skill::Frontend, Skill::Backend]),
];

// Keyed by the raw tech entry, before synonym normalization.
const TECH_SKILLS: &[(&str, &[SkillCategory])] = &[
    ("React", &[Skill::Frontend]),
    ("Next.js", &[Skill::FullStack, Skill::Frontend]),
    ("Vue.js", &[Skill::Frontend]),
    ("Angular", &[Skill::Frontend]),
    ("React Native", &[Skill::Mobile]),
    ("Flutter", &[Skill::Mobile]),
    ("Unity", &[Skill::Game]),
    ("Node.js", &[Skill::Backend]),
    ("Express.js", &[Skill::Backend]),
    ("FastAPI", &[Skill::Backend]),
    ("Django", &[Skill::Backend]),
    ("Flask", &[Skill::Backend]),
    ("PostgreSQL", &[Skill::Backend, Skill::DataEngineering]),
    ("MongoDB", &[Skill::Backend, Skill::DataEngineering]),
    ("AWS", &[Skill::DevOpsInfrastructure, Skill::Backend]),
    ("Docker", &[Skill::DevOpsInfrastructure]),
    ("Kubernetes", &[Skill::DevOpsInfrastructure]),
    ("OpenAI", &[Skill::AiMachineLearning]),
    ("TensorFlow", &[Skill::AiMachineLearning]),
    ("PyTorch", &[Skill::AiMachineLearning]),
    ("GraphQL", &[Skill::Api, Skill::Backend]),
    ("REST API", &[Skill::Api, Skill::Backend]),
    ("Figma", &[Skill::UiUxDesign]),
];

const DOMAIN_KEYWORDS: &[(DomainCategory, &[&str])] = &[
    (
        DomainCategory::ECommerce,
        &[
            "ecommerce",
            "e-commerce",
            "shop",
            "store",
            "payment",
            "stripe",
            "checkout",
            "cart",
        ],
    ),
    (
        DomainCategory::Education,
        &[
            "education",
            "learning",
            "course",
            "tutorial",
            "student",
            "teacher",
            "lms",
        ],
    ),
    (
        DomainCategory::Healthcare,
        &[
            "health", "medical", "patient", "doctor", "clinic", "hospital",
        ],
    ),
    (
        DomainCategory::Finance,
        &[
            "finance",
            "financial",
            "banking",
            "investment",
            "trading",
            "crypto",
        ],
    ),
    (
        DomainCategory::Entertainment,
        &[
            "game",
            "gaming",
            "entertainment",
            "media",
            "video",
            "music",
            "streaming",
        ],
    ),
    (
        DomainCategory::Productivity,
        &[
            "productivity",
            "task",
            "todo",
            "project management",
            "workflow",
            "automation",
        ],
    ),
    (
        DomainCategory::Social,
        &[
            "social",
            "chat",
            "messaging",
            "community",
            "network",
            "collaboration",
        ],
    ),
    (
        DomainCategory::Enterprise,
        &[
            "enterprise",
            "business",
            "corporate",
            "saas",
            "b2b",
            "crm",
            "erp",
        ],
    ),
    (
        DomainCategory::OpenSource,
        &[
            "open source",
            "opensource",
            "github",
            "library",
            "framework",
            "tool",
        ],
    ),
    (
        DomainCategory::Personal,
        &["personal", "portfolio", "blog", "resume", "profile"],
    ),
];

const TECH_SYNONYMS: &[(&str, Technology)] = &[
    ("NextJS", Technology::NextJs),
    ("ReactJS", Technology::React),
    ("TailwindCSS", Technology::TailwindCss),
    ("shadcn", Technology::ShadcnUi),
    ("OpenAI API", Technology::OpenAi),
    ("AWS Amplify Gen 2", Technology::AwsAmplify),
    ("NodeJS", Technology::NodeJs),
    ("ExpressJS", Technology::ExpressJs),
    ("MongoDB Atlas", Technology::MongoDb),
    ("PostgresQL", Technology::PostgreSql),
    ("Github", Technology::GitHub),
    ("Github Actions", Technology::GitHubActions),
    ("CSS3", Technology::HtmlCss),
    ("HTML5", Technology::HtmlCss),
    ("Javascript", Technology::JavaScript),
    ("Typescript", Technology::TypeScript),
];

fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Map a free-text legacy role to its canonical [`RoleType`].
///
/// Unrecognised roles become `Full Stack`.
#[must_use]
pub fn map_role(role: &str) -> RoleType {
    lookup(ROLE_SYNONYMS, role).unwrap_or_else(|| {
        tracing::debug!(role, default = %DEFAULT_ROLE, "unmapped role, using default");
        DEFAULT_ROLE
    })
}

/// Infer skill categories from the raw role string and raw tech names.
///
/// Role-derived categories come first, then tech-derived ones; duplicates
/// keep their first position. The result is never empty.
#[must_use]
pub fn infer_skill_categories(role: &str, tech: &[String]) -> Vec<SkillCategory> {
    let mut categories = Vec::new();

    let role_skills = lookup(ROLE_SKILLS, role).unwrap_or(DEFAULT_SKILLS);
    let tech_skills = tech
        .iter()
        .filter_map(|name| lookup(TECH_SKILLS, name))
        .flatten();

    for skill in role_skills.iter().chain(tech_skills) {
        push_unique(&mut categories, *skill);
    }

    if categories.is_empty() {
        categories.extend_from_slice(DEFAULT_SKILLS);
    }
    categories
}

/// Infer domains by keyword substring match over the summary and highlights.
///
/// Domains are returned in [`DomainCategory`] declaration order. Zero matches
/// yields an empty vector.
#[must_use]
pub fn infer_domains(summary: &str, highlights: &[String]) -> Vec<DomainCategory> {
    let text = format!("{summary} {}", highlights.join(" ")).to_lowercase();

    DOMAIN_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(domain, _)| *domain)
        .collect()
}

/// Normalize tech names to canonical spellings.
///
/// Synonyms are rewritten, anything that is still not a [`Technology`] is
/// dropped, and duplicates collapse onto their first occurrence.
#[must_use]
pub fn normalize_technologies(tech: &[String]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(tech.len());

    for raw in tech {
        let canonical = lookup(TECH_SYNONYMS, raw).or_else(|| Technology::from_name(raw));
        match canonical {
            Some(technology) => push_unique(&mut normalized, technology.as_str().to_string()),
            None => tracing::debug!(technology = %raw, "dropping non-canonical technology"),
        }
    }

    normalized
}

/// Derive an enhanced record from a legacy one.
///
/// The legacy `role` string is kept as-is for display.
#[must_use]
pub fn migrate_project(project: &Project) -> EnhancedProject {
    EnhancedProject {
        roles: vec![map_role(&project.role)],
        skill_categories: infer_skill_categories(&project.role, &project.tech),
        domains: Some(infer_domains(&project.summary, &project.highlights)),
        project: Project {
            tech: normalize_technologies(&project.tech),
            ..project.clone()
        },
    }
}

/// Migrate one record. Enhanced records are returned unchanged.
#[must_use]
pub fn migrate(record: ProjectRecord) -> EnhancedProject {
    match record {
        ProjectRecord::Enhanced(enhanced) => enhanced,
        ProjectRecord::Legacy(project) => migrate_project(&project),
    }
}

/// Migrate a batch of records, preserving order.
#[must_use]
pub fn migrate_all<I>(records: I) -> Vec<EnhancedProject>
where
    I: IntoIterator<Item = ProjectRecord>,
{
    records.into_iter().map(migrate).collect()
}

/// Borrowing view of a record in enhanced shape, migrating legacy records
/// on the fly without touching the original.
#[must_use]
pub fn normalized(record: &ProjectRecord) -> Cow<'_, EnhancedProject> {
    match record {
        ProjectRecord::Enhanced(enhanced) => Cow::Borrowed(enhanced),
        ProjectRecord::Legacy(project) => Cow::Owned(migrate_project(project)),
    }
}
