//! Disc QR label pipeline entry point.
//!
//! Fetches disc records from the remote store, renders one QR label image
//! per record into the output directory, and compiles the images into a
//! single multi-page PDF.

mod config;
mod output;
mod pipeline;

use tracing_subscriber::EnvFilter;

use disc_store::HttpStore;
use label_engine::LabelFont;

use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        collection = %config.store_collection,
        output_dir = %config.output_dir.display(),
        create_placeholders = config.create_placeholders,
        "Starting disc label pipeline"
    );

    let store = HttpStore::new(
        &config.store_base_url,
        &config.store_collection,
        config.store_auth_token.clone(),
    );
    let font = LabelFont::load(config.font_path.as_deref())?;
    tracing::info!(font = %font.path().display(), "Label font loaded");

    let report = pipeline::run(&store, &font, &config)?;
    tracing::info!(
        placeholders = report.placeholders_created,
        labels = report.labels_rendered,
        skipped = report.skipped,
        pages = report.pages,
        "Pipeline finished"
    );
    Ok(())
}
