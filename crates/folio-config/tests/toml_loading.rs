//! Integration tests for layered settings loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use folio_config::FolioConfig;
use folio_core::enums::SiteMode;

#[test]
fn loads_site_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[site]
mode = "live"
base_url = "https://rhyan.dev"

[content]
path = "content/site.json"
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.site.mode, SiteMode::Live);
        assert!(config.site.is_live());
        assert_eq!(config.site.base_url, "https://rhyan.dev");
        assert_eq!(config.content.path, PathBuf::from("content/site.json"));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[site]
base_url = "https://staging.rhyan.dev"
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.site.mode, SiteMode::ComingSoon);
        assert_eq!(config.content.path, PathBuf::from("portfolio.toml"));
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[site]
mode = "coming_soon"
"#,
        )?;
        jail.set_env("FOLIO_SITE__MODE", "live");

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FOLIO_").split("__"))
            .extract()?;

        assert_eq!(config.site.mode, SiteMode::Live);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[content]
path = "site/portfolio.toml"
"#,
        )?;

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.content.path, PathBuf::from("site/portfolio.toml"));
        Ok(())
    });
}

#[test]
fn env_beats_project_local_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[site]
mode = "live"
"#,
        )?;
        jail.set_env("FOLIO_SITE__MODE", "coming_soon");

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.site.mode, SiteMode::ComingSoon);
        Ok(())
    });
}

#[test]
fn unknown_site_mode_is_an_error() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_SITE__MODE", "draft");
        assert!(FolioConfig::load().is_err());
        Ok(())
    });
}
