//! Validation boundary for authored portfolio content.
//!
//! Every check runs and every failure is reported; nothing short-circuits.
//! The filtering core assumes these invariants and never re-checks them.

use std::collections::HashSet;
use std::fmt;

use folio_core::entities::{Portfolio, Project, ProjectRecord, ProjectView};
use serde::{Deserialize, Serialize};

/// Footer years outside this range are rejected.
const FOOTER_YEARS: std::ops::RangeInclusive<i64> = 2000..=3000;

/// One failed check, addressed by a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn fail(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(Violation {
            field: field.into(),
            reason: reason.into(),
        });
    }

    fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
    }

    fn url(&mut self, field: &str, value: &str) {
        if !is_http_url(value) {
            self.fail(field, format!("'{value}' is not an http(s) URL"));
        }
    }

    fn non_empty_list(&mut self, field: &str, items: &[String]) {
        if items.is_empty() {
            self.fail(field, "needs at least one entry");
        }
        for (index, item) in items.iter().enumerate() {
            if item.trim().is_empty() {
                self.fail(format!("{field}[{index}]"), "cannot be empty");
            }
        }
    }
}

/// Absolute `http://` or `https://` URL with a non-empty host.
fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.and_then(|rest| rest.split(['/', '?', '#']).next())
        .is_some_and(|host| !host.is_empty() && !host.contains(char::is_whitespace))
}

/// Check authored content against the portfolio schema.
///
/// Returns every violation found; an empty vector means the content is valid.
#[must_use]
pub fn validate_portfolio(portfolio: &Portfolio) -> Vec<Violation> {
    let mut check = Checker::default();

    let personal = &portfolio.personal;
    check.required("personal.first_name", &personal.first_name);
    check.required("personal.last_name", &personal.last_name);
    if !personal.email.contains('@') {
        check.fail(
            "personal.email",
            format!("'{}' is not an email address", personal.email),
        );
    }
    check.required("personal.phone", &personal.phone);
    check.required("personal.location", &personal.location);
    check.required("personal.tagline", &personal.tagline);
    check.required("personal.description", &personal.description);
    check.required("personal.avatar", &personal.avatar);
    if let Some(logo) = &personal.logo {
        check.required("personal.logo", logo);
    }

    let social = &portfolio.social;
    check.url("social.github", &social.github);
    check.url("social.linkedin", &social.linkedin);
    check.url("social.twitter", &social.twitter);
    check.url("social.website", &social.website);
    check.required("social.resume", &social.resume);

    if portfolio.navigation.is_empty() {
        check.fail("navigation", "needs at least one entry");
    }
    for (index, item) in portfolio.navigation.iter().enumerate() {
        check.required(&format!("navigation[{index}].name"), &item.name);
        check.required(&format!("navigation[{index}].href"), &item.href);
    }

    check.required("about.title", &portfolio.about.title);
    check.required("about.content", &portfolio.about.content);
    check.non_empty_list("about.technologies", &portfolio.about.technologies);

    if portfolio.experience.is_empty() {
        check.fail("experience", "needs at least one entry");
    }
    for (index, item) in portfolio.experience.iter().enumerate() {
        let at = format!("experience[{index}]");
        check.required(&format!("{at}.company"), &item.company);
        check.required(&format!("{at}.position"), &item.position);
        check.required(&format!("{at}.duration"), &item.duration);
        check.required(&format!("{at}.location"), &item.location);
        check.non_empty_list(&format!("{at}.description"), &item.description);
    }

    let mut seen_ids = HashSet::new();
    for (index, record) in portfolio.projects.items.iter().enumerate() {
        let at = format!("projects.items[{index}]");
        check_project(&mut check, &at, record.project());
        if let ProjectRecord::Enhanced(enhanced) = record {
            if enhanced.roles.is_empty() {
                check.fail(format!("{at}.roles"), "needs at least one entry");
            }
            if enhanced.skill_categories.is_empty() {
                check.fail(format!("{at}.skill_categories"), "needs at least one entry");
            }
        }
        if !seen_ids.insert(record.id()) {
            check.fail(
                format!("{at}.id"),
                format!("duplicate project id {}", record.id()),
            );
        }
    }

    let contact = &portfolio.contact;
    check.required("contact.title", &contact.title);
    check.required("contact.subtitle", &contact.subtitle);
    check.required("contact.description", &contact.description);
    check.required("contact.cta", &contact.cta);

    check.required("footer.text", &portfolio.footer.text);
    if !FOOTER_YEARS.contains(&portfolio.footer.year) {
        check.fail(
            "footer.year",
            format!(
                "{} is outside {}..={}",
                portfolio.footer.year,
                FOOTER_YEARS.start(),
                FOOTER_YEARS.end()
            ),
        );
    }

    check.violations
}

fn check_project(check: &mut Checker, at: &str, project: &Project) {
    if project.id == 0 {
        check.fail(format!("{at}.id"), "must be a positive integer");
    }
    check.required(&format!("{at}.slug"), &project.slug);
    check.required(&format!("{at}.title"), &project.title);
    check.required(&format!("{at}.role"), &project.role);
    check.required(&format!("{at}.summary"), &project.summary);
    check.non_empty_list(&format!("{at}.highlights"), &project.highlights);
    check.non_empty_list(&format!("{at}.tech"), &project.tech);
    check.required(&format!("{at}.thumbnail"), &project.thumbnail);

    if let Some(demo) = &project.links.demo {
        check.url(&format!("{at}.links.demo"), demo);
    }
    if let Some(repo) = &project.links.repo {
        check.url(&format!("{at}.links.repo"), repo);
    }
    if let Some(evidence) = &project.links.evidence {
        check.required(&format!("{at}.links.evidence"), evidence);
    }
    for (index, metric) in project.metrics.iter().flatten().enumerate() {
        check.required(&format!("{at}.metrics[{index}].label"), &metric.label);
        check.required(&format!("{at}.metrics[{index}].value"), &metric.value);
    }
}
