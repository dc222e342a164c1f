use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - portfolio project catalogue")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Portfolio content file (overrides content.path)
    #[arg(short, long, global = true)]
    pub content: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use folio_core::vocabulary::{DomainCategory, RoleType, SkillCategory};
    use folio_filter::{FilterMode, SortOrder};
    use pretty_assertions::assert_eq;

    use super::root_commands::VocabularyKind;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "table", "--verbose", "site"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Site));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "migrate", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Migrate));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "xml", "site"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn projects_accepts_repeated_filters() {
        let cli = Cli::try_parse_from([
            "folio",
            "projects",
            "--tech",
            "React",
            "--tech",
            "Next.js",
            "--role",
            "full stack",
            "--skill",
            "Frontend Development",
            "--domain",
            "e-commerce",
            "--search",
            "shop",
            "--mode",
            "AND",
            "--featured",
        ])
        .expect("cli should parse");

        let Commands::Projects(args) = cli.command else {
            panic!("expected projects command");
        };
        assert_eq!(args.technologies, vec!["React", "Next.js"]);
        assert_eq!(args.roles, vec![RoleType::FullStack]);
        assert_eq!(args.skills, vec![SkillCategory::Frontend]);
        assert_eq!(args.domains, vec![DomainCategory::ECommerce]);
        assert_eq!(args.search.as_deref(), Some("shop"));
        assert_eq!(args.mode, FilterMode::And);
        assert!(args.featured);
    }

    #[test]
    fn projects_mode_defaults_to_or() {
        let cli = Cli::try_parse_from(["folio", "projects"]).expect("cli should parse");
        let Commands::Projects(args) = cli.command else {
            panic!("expected projects command");
        };
        assert_eq!(args.mode, FilterMode::Or);
        assert_eq!(args.order, SortOrder::Ascending);
        assert!(args.technologies.is_empty());
    }

    #[test]
    fn projects_order_accepts_desc() {
        let cli = Cli::try_parse_from(["folio", "projects", "--order", "desc"])
            .expect("cli should parse");
        let Commands::Projects(args) = cli.command else {
            panic!("expected projects command");
        };
        assert_eq!(args.order, SortOrder::Descending);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = Cli::try_parse_from(["folio", "projects", "--role", "Wizard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn featured_and_other_conflict() {
        let parsed = Cli::try_parse_from(["folio", "projects", "--featured", "--other"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn vocabulary_kind_is_optional() {
        let cli = Cli::try_parse_from(["folio", "vocabulary", "skills"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Vocabulary(ref args) if args.kind == Some(VocabularyKind::Skills)
        ));

        let cli = Cli::try_parse_from(["folio", "vocabulary"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Vocabulary(ref args) if args.kind.is_none()));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["folio", "--content", "site/portfolio.json", "validate"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.content.as_deref(),
            Some(Path::new("site/portfolio.json"))
        );
    }
}
