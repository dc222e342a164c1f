use folio_core::vocabulary::{DomainCategory, RoleType, SkillCategory, Technology};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{VocabularyArgs, VocabularyKind};
use crate::output::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub kind: &'static str,
    pub value: &'static str,
}

/// Handle `folio vocabulary`.
pub fn handle(args: &VocabularyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&entries(args.kind), flags.format)
}

/// Canonical names in declaration order, optionally restricted to one kind.
#[must_use]
pub fn entries(kind: Option<VocabularyKind>) -> Vec<VocabularyEntry> {
    let wanted = |candidate: VocabularyKind| kind.is_none_or(|kind| kind == candidate);
    let mut entries = Vec::new();

    if wanted(VocabularyKind::Technologies) {
        extend(
            &mut entries,
            "technology",
            Technology::ALL.iter().map(|v| v.as_str()),
        );
    }
    if wanted(VocabularyKind::Skills) {
        extend(
            &mut entries,
            "skill_category",
            SkillCategory::ALL.iter().map(|v| v.as_str()),
        );
    }
    if wanted(VocabularyKind::Roles) {
        extend(
            &mut entries,
            "role",
            RoleType::ALL.iter().map(|v| v.as_str()),
        );
    }
    if wanted(VocabularyKind::Domains) {
        extend(
            &mut entries,
            "domain",
            DomainCategory::ALL.iter().map(|v| v.as_str()),
        );
    }
    entries
}

fn extend(
    entries: &mut Vec<VocabularyEntry>,
    kind: &'static str,
    values: impl Iterator<Item = &'static str>,
) {
    entries.extend(values.map(|value| VocabularyEntry { kind, value }));
}
