use folio_config::SiteConfig;
use folio_core::enums::{BuildStage, Section, SiteMode, StageStatus};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct SectionEntry {
    pub section: Section,
    pub anchor: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct StageEntry {
    pub stage: BuildStage,
    pub label: &'static str,
    pub status: StageStatus,
}

#[derive(Debug, Serialize)]
pub struct SiteReport {
    pub mode: SiteMode,
    pub base_url: String,
    pub sections: Vec<SectionEntry>,
    /// Only shown while the site is in coming-soon mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pipeline: Vec<StageEntry>,
}

/// Handle `folio site`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags)?;
    let report = report(&config.site);

    match flags.format {
        OutputFormat::Table => {
            output(&report.sections, flags.format)?;
            if !report.pipeline.is_empty() {
                println!();
                output(&report.pipeline, flags.format)?;
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}

#[must_use]
pub fn report(site: &SiteConfig) -> SiteReport {
    let sections = site
        .mode
        .sections()
        .iter()
        .map(|&section| SectionEntry {
            section,
            anchor: section.anchor(),
        })
        .collect();

    let pipeline = if site.is_live() {
        Vec::new()
    } else {
        BuildStage::ALL
            .iter()
            .map(|&stage| StageEntry {
                stage,
                label: stage.label(),
                status: stage.status(),
            })
            .collect()
    };

    SiteReport {
        mode: site.mode,
        base_url: site.base_url.clone(),
        sections,
        pipeline,
    }
}
