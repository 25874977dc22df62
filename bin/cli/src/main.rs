use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::commands::{build, query, render, Command, Opt};
use crate::config::Settings;

mod commands;
mod config;

#[tokio::main]
async fn main() {
    let opt = Opt::parse();

    let default_level = if opt.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // diagnostics go to stderr so stdout only carries the command result
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::load(opt.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let result = match opt.cmd {
        Command::Build(cmd) => build::invoke(cmd, settings).await,
        Command::Query(_) => query::invoke(),
        Command::Render(cmd) => render::invoke(cmd, settings).await,
    };

    match result {
        Ok(output) => {
            if let Some(output) = output {
                println!("{output}");
            }
        }
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };
}
