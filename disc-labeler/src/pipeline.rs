//! The label pipeline: ensure placeholders, render, persist, compile.
//!
//! A single linear pass; the `create_placeholders` flag selects between
//! "create placeholders first" and "render existing records only".

use std::path::Path;

use disc_store::{DiscRecord, RecordStore, ensure_placeholders};
use label_engine::{LabelFont, label};

use crate::config::AppConfig;
use crate::output::{self, CompileOutcome};

/// Counters describing one completed run.
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub placeholders_created: usize,
    pub labels_rendered: usize,
    pub skipped: usize,
    pub pages: usize,
}

/// Run the pipeline to completion, aborting on the first fatal error.
pub fn run(
    store: &dyn RecordStore,
    font: &LabelFont,
    config: &AppConfig,
) -> anyhow::Result<PipelineReport> {
    std::fs::create_dir_all(&config.output_dir)?;

    let mut report = PipelineReport::default();

    if config.create_placeholders {
        let created = ensure_placeholders(
            store,
            &config.placeholder_prefix,
            config.placeholder_count,
        )?;
        report.placeholders_created = created.len();
        // Newly created records are rendered immediately so a label exists
        // before any real data does.
        for record in &created {
            render_and_persist(record, font, &config.output_dir)?;
        }
    }

    let records = store.list_all()?;
    tracing::info!(count = records.len(), "Fetched records from store");

    for record in &records {
        if record.uid.is_empty() {
            tracing::warn!("Skipping record with empty uid");
            report.skipped += 1;
            continue;
        }
        render_and_persist(record, font, &config.output_dir)?;
        report.labels_rendered += 1;
    }

    let images = output::collect(&config.output_dir)?;
    match output::compile(&images, &config.pdf_path)? {
        CompileOutcome::Written { pages } => {
            report.pages = pages;
            tracing::info!(pages, path = %config.pdf_path.display(), "PDF written");
        }
        CompileOutcome::NothingToDo => {
            tracing::info!("No label images found, skipping PDF");
        }
    }

    Ok(report)
}

fn render_and_persist(
    record: &DiscRecord,
    font: &LabelFont,
    dir: &Path,
) -> anyhow::Result<()> {
    let image = label::render(record, font)?;
    label::persist(&image, &record.uid, dir)?;
    Ok(())
}
