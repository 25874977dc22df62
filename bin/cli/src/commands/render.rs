use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use datocms::IntegrationsPageQuery;
use marketplace::output::write_page;
use marketplace::render_page;
use tracing::info;

use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(about = "Render the page from a previously saved content payload")]
pub struct RenderCommand {
    #[arg(long, short, help = "JSON payload saved by `build --save-payload`")]
    pub payload: PathBuf,

    #[arg(long, short, help = "Directory to write the page to. Overrides the configured one.")]
    pub out_dir: Option<PathBuf>,
}

pub(crate) async fn invoke(cmd: RenderCommand, settings: Settings) -> anyhow::Result<Option<String>> {
    let bytes = tokio::fs::read(&cmd.payload)
        .await
        .with_context(|| format!("unable to read payload {}", cmd.payload.display()))?;
    let query = IntegrationsPageQuery::from_slice(&bytes)?;

    let path = write(&query, settings, cmd.out_dir.as_deref())?;
    Ok(Some(path.display().to_string()))
}

/// Shared by `build` and `render` so both fail the same way on malformed content.
pub(crate) fn write(
    query: &IntegrationsPageQuery,
    settings: Settings,
    out_dir: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    let html = render_page(&query.page, settings.styles)?;
    let out_dir = out_dir.unwrap_or(&settings.output.dir);

    let path = write_page(out_dir, &settings.output.path, &html)?;
    info!(
        demos = query.page.demos.len(),
        plugins = query.page.plugins.len(),
        hosting = query.page.hosting_building.len(),
        assets_storage = query.page.assets_storage.len(),
        single_sign_on = query.page.single_sign_on.len(),
        "generated integrations page"
    );

    Ok(path)
}
