use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::project::ProjectRecord;

/// Who the site is about.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub tagline: String,
    pub description: String,
    pub avatar: String,
    /// Optional logo path shown in the navigation bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl PersonalInfo {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub website: String,
    /// Free text, not necessarily a URL.
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NavigationItem {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct About {
    pub title: String,
    pub content: String,
    pub technologies: Vec<String>,
}

/// One position in the work history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    /// Display string, e.g. `"May 2022 - Present"`.
    pub duration: String,
    pub location: String,
    pub description: Vec<String>,
}

/// Project showcase. Records may be legacy or already enhanced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Projects {
    #[serde(default)]
    pub items: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
    pub year: i64,
}

/// The whole site content, as authored in `portfolio.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub social: SocialLinks,
    pub navigation: Vec<NavigationItem>,
    pub about: About,
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
}
