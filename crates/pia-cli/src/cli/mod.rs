//! CLI for the Page Inventory Analytics report client.

mod commands;
mod input;
mod terminal;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use pia_core::config;
use pia_core::naming::NamingMode;
use std::path::PathBuf;

use commands::{run_completions, run_names, run_process, ProcessArgs};

/// Top-level CLI for the report client.
#[derive(Debug, Parser)]
#[command(name = "pia")]
#[command(about = "PIA: request page inventory analytics reports", long_about = None)]
pub struct Cli {
    /// More log detail (repeatable). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Submit section URLs to the report backend and show the results.
    Process {
        /// Section URLs, one report each.
        urls: Vec<String>,

        /// Read more URLs from a file, one per line ("-" reads stdin).
        #[arg(long, short = 'f', value_name = "PATH")]
        file: Option<PathBuf>,

        /// Output naming: default, prefix, or custom.
        #[arg(long, default_value = "default", value_name = "MODE")]
        naming: NamingMode,

        /// Filename prefix used with `--naming prefix`.
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,

        /// Custom filename for one URL with `--naming custom` (repeatable).
        #[arg(long = "name", value_name = "URL=FILE", value_parser = parse_name_pair)]
        names: Vec<(String, String)>,

        /// Backend base URL; overrides `server_url` from the config file.
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },

    /// Print the filename suggested for each URL in custom naming mode.
    Names {
        /// Section URLs.
        urls: Vec<String>,

        /// Read more URLs from a file, one per line ("-" reads stdin).
        #[arg(long, short = 'f', value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Splits `URL=FILE` on the last `=` so query strings survive.
fn parse_name_pair(raw: &str) -> Result<(String, String), String> {
    let (url, file) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected URL=FILE, got {raw:?}"))?;
    let url = url.trim();
    if url.is_empty() {
        return Err(format!("missing URL in {raw:?}"));
    }
    Ok((url.to_string(), file.to_string()))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        crate::init_logging(cli.verbose);

        match cli.command {
            CliCommand::Process {
                urls,
                file,
                naming,
                prefix,
                names,
                server,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = ProcessArgs {
                    urls,
                    file,
                    naming,
                    prefix,
                    names,
                    server,
                };
                run_process(&cfg, args).await?;
            }
            CliCommand::Names { urls, file } => run_names(&urls, file.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
