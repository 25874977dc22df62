use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use datocms::{Client, Credentials, IntegrationsPageQuery};
use tracing::{info, warn};

use crate::commands::render::write;
use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(about = "Fetch content and generate the integrations page")]
pub struct BuildCommand {
    #[arg(long, short, help = "Directory to write the page to. Overrides the configured one.")]
    pub out_dir: Option<PathBuf>,

    #[arg(long, short, help = "Fetch draft content from the preview endpoint")]
    pub preview: bool,

    #[arg(long, help = "Also write the fetched content to this file")]
    pub save_payload: Option<PathBuf>,
}

pub(crate) async fn invoke(cmd: BuildCommand, settings: Settings) -> anyhow::Result<Option<String>> {
    let content = &settings.content;
    if content.api_token.is_none() {
        warn!("no API token configured, set DATOCMS_API_TOKEN or content.api_token");
    }

    let client = Client::new(content.api_token.clone().map(Credentials::ApiToken))?
        .with_endpoint(content.endpoint(cmd.preview))?;

    info!(endpoint = %client.endpoint(), "fetching integrations page content");
    let payload = client.fetch_integrations_payload().await?;

    if let Some(path) = &cmd.save_payload {
        tokio::fs::write(path, serde_json::to_vec_pretty(&payload)?)
            .await
            .with_context(|| format!("unable to save payload to {}", path.display()))?;
        info!(path = %path.display(), "saved content payload");
    }

    let query = IntegrationsPageQuery::from_value(payload)?;
    let path = write(&query, settings, cmd.out_dir.as_deref())?;

    Ok(Some(path.display().to_string()))
}
