use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::build::BuildCommand;
use crate::commands::query::QueryCommand;
use crate::commands::render::RenderCommand;

pub mod build;
pub mod query;
pub mod render;

#[derive(Debug, Parser)]
#[command(name = "integrations", about = "Generate the Integrations Marketplace page")]
pub struct Opt {
    #[arg(
        long,
        help = "Prints a verbose output during the program execution",
        global = true
    )]
    pub debug: bool,

    #[arg(
        long,
        short,
        help = "Path to the configuration file. Defaults to integrations.toml",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Build(BuildCommand),
    Query(QueryCommand),
    Render(RenderCommand),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{Command, Opt};

    #[test]
    fn should_parse_build() {
        let opt = Opt::try_parse_from([
            "integrations",
            "--debug",
            "build",
            "--preview",
            "--out-dir",
            "public",
            "--save-payload",
            "payload.json",
        ])
        .expect("Should parse build command");

        assert!(opt.debug);
        match opt.cmd {
            Command::Build(cmd) => {
                assert!(cmd.preview);
                assert_eq!(Some(PathBuf::from("public")), cmd.out_dir);
                assert_eq!(Some(PathBuf::from("payload.json")), cmd.save_payload);
            }
            other => panic!("expected build command, got {other:?}"),
        }
    }

    #[test]
    fn should_require_payload_for_render() {
        assert!(Opt::try_parse_from(["integrations", "render"]).is_err());
    }

    #[test]
    fn should_accept_global_config_after_subcommand() {
        let opt = Opt::try_parse_from(["integrations", "query", "--config", "site.toml"])
            .expect("Should parse query command");

        assert_eq!(Some(PathBuf::from("site.toml")), opt.config);
        assert!(matches!(opt.cmd, Command::Query(_)));
    }
}
