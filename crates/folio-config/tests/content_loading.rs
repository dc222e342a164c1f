//! Integration tests for portfolio content loading and validation.

use std::io::Write;
use std::path::Path;

use figment::Jail;
use folio_config::{ConfigError, load_portfolio, parse_portfolio_toml, validate_portfolio};
use folio_core::entities::{ProjectRecord, ProjectView};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("fixtures/portfolio.toml");

fn violated_fields(err: ConfigError) -> Vec<String> {
    match err {
        ConfigError::InvalidContent { violations } => {
            violations.into_iter().map(|v| v.field).collect()
        }
        other => panic!("expected InvalidContent, got {other}"),
    }
}

#[test]
fn fixture_parses_and_validates() {
    let portfolio = parse_portfolio_toml(FIXTURE).expect("fixture is valid");

    assert_eq!(portfolio.personal.full_name(), "Rhyan Vargas");
    assert_eq!(portfolio.navigation.len(), 2);
    assert_eq!(portfolio.projects.items.len(), 2);
    assert!(validate_portfolio(&portfolio).is_empty());
}

#[test]
fn fixture_mixes_legacy_and_enhanced_records() {
    let portfolio = parse_portfolio_toml(FIXTURE).expect("fixture is valid");
    let items = &portfolio.projects.items;

    assert!(matches!(items[0], ProjectRecord::Legacy(_)));
    assert!(items[0].is_featured());
    assert_eq!(
        items[0].project().links.demo.as_deref(),
        Some("https://rhyglot.example.com")
    );

    let ProjectRecord::Enhanced(enhanced) = &items[1] else {
        panic!("second record should be enhanced");
    };
    assert_eq!(enhanced.roles.len(), 1);
    assert_eq!(enhanced.domains().len(), 1);
    assert!(!items[1].is_featured());
}

#[test]
fn loads_toml_file_from_disk() {
    Jail::expect_with(|jail| {
        jail.create_file("portfolio.toml", FIXTURE)?;
        let portfolio = load_portfolio(Path::new("portfolio.toml")).expect("loads");
        assert_eq!(portfolio.footer.year, 2025);
        Ok(())
    });
}

#[test]
fn loads_json_file_from_disk() {
    let portfolio = parse_portfolio_toml(FIXTURE).expect("fixture is valid");
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("tempfile");
    file.write_all(serde_json::to_string(&portfolio).unwrap().as_bytes())
        .expect("write");

    let loaded = load_portfolio(file.path()).expect("json loads");
    assert_eq!(loaded, portfolio);
}

#[test]
fn missing_file_is_reported() {
    let err = load_portfolio(Path::new("/definitely/not/here/portfolio.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "content.path"));
}

#[test]
fn unsupported_extension_is_reported() {
    let file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    let err = load_portfolio(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn duplicate_project_ids_are_rejected() {
    let source = FIXTURE.replace("id = 1\n", "id = 2\n");
    let fields = violated_fields(parse_portfolio_toml(&source).unwrap_err());
    assert_eq!(fields, vec!["projects.items[1].id".to_string()]);
}

#[test]
fn zero_project_id_is_rejected() {
    let source = FIXTURE.replace("id = 1\n", "id = 0\n");
    let fields = violated_fields(parse_portfolio_toml(&source).unwrap_err());
    assert_eq!(fields, vec!["projects.items[1].id".to_string()]);
}

#[test]
fn empty_enhanced_tags_are_rejected() {
    let source = FIXTURE
        .replace("roles = [\"Full Stack\"]", "roles = []")
        .replace(
            "skill_categories = [\"Full Stack Development\"]",
            "skill_categories = []",
        );
    let fields = violated_fields(parse_portfolio_toml(&source).unwrap_err());
    assert_eq!(
        fields,
        vec![
            "projects.items[1].roles".to_string(),
            "projects.items[1].skill_categories".to_string(),
        ]
    );
}

#[test]
fn unknown_role_in_enhanced_record_fails_to_load() {
    let source = FIXTURE.replace("roles = [\"Full Stack\"]", "roles = [\"Fullstack\"]");
    let err = parse_portfolio_toml(&source).unwrap_err();
    assert!(matches!(err, ConfigError::Figment(_)), "{err}");
    assert!(err.to_string().contains("Fullstack"), "{err}");
}

#[test]
fn unknown_domain_in_enhanced_record_fails_to_load() {
    let source = FIXTURE.replace("domains = [\"E-commerce\"]", "domains = [\"Retail\"]");
    let result = parse_portfolio_toml(&source);
    assert!(matches!(result, Err(ConfigError::Figment(_))));
}

#[test]
fn roles_without_skill_categories_stay_legacy() {
    let source = FIXTURE.replace("skill_categories = [\"Full Stack Development\"]\n", "");
    let portfolio = parse_portfolio_toml(&source).expect("legacy record is valid");
    assert!(matches!(
        portfolio.projects.items[1],
        ProjectRecord::Legacy(_)
    ));
}

#[test]
fn footer_year_beyond_u16_is_a_violation() {
    let source = FIXTURE.replace("year = 2025", "year = 70000");
    let fields = violated_fields(parse_portfolio_toml(&source).unwrap_err());
    assert_eq!(fields, vec!["footer.year".to_string()]);
}

#[test]
fn every_violation_is_collected() {
    let source = FIXTURE
        .replace("email = \"hello@rhyan.dev\"", "email = \"hello\"")
        .replace(
            "github = \"https://github.com/rhyanvargas\"",
            "github = \"github.com/rhyanvargas\"",
        )
        .replace(
            "tech = [\"Next.js\", \"TypeScript\", \"OpenAI\"]",
            "tech = []",
        )
        .replace("year = 2025", "year = 1999");

    let fields = violated_fields(parse_portfolio_toml(&source).unwrap_err());
    assert_eq!(
        fields,
        vec![
            "personal.email".to_string(),
            "social.github".to_string(),
            "projects.items[0].tech".to_string(),
            "footer.year".to_string(),
        ]
    );
}

#[test]
fn invalid_content_error_lists_violations() {
    let source = FIXTURE.replace("cta = \"Say Hello\"", "cta = \"  \"");
    let err = parse_portfolio_toml(&source).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Portfolio content is invalid (1 violation(s)): contact.cta: is required"
    );
}

#[test]
fn malformed_toml_is_a_figment_error() {
    let err = parse_portfolio_toml("[personal\nfirst_name = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Figment(_)));
}

#[test]
fn sample_content_at_workspace_root_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../portfolio.toml");
    let portfolio = load_portfolio(&path).expect("sample content should validate");

    let items = &portfolio.projects.items;
    let ids: Vec<u32> = items.iter().map(ProjectView::id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    let enhanced = items.iter().filter(|r| r.is_enhanced()).count();
    assert_eq!(enhanced, 1);
    assert_eq!(items[1].project().metrics.as_ref().map(Vec::len), Some(1));
}
