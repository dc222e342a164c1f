//! Entity structs for the portfolio content.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! TOML/JSON loading and schema export.

mod project;
mod site;

pub use project::{
    EnhancedProject, Project, ProjectLinks, ProjectMetric, ProjectRecord, ProjectView,
};
pub use site::{
    About, Contact, ExperienceItem, Footer, NavigationItem, PersonalInfo, Portfolio, Projects,
    SocialLinks,
};
