//! `pia process <url>...` – run one report submission.

use anyhow::{bail, Context, Result};
use pia_core::config::PiaConfig;
use pia_core::controller::{ControllerSettings, FormController, FormSurface};
use pia_core::input::parse_urls;
use pia_core::naming::NamingMode;
use pia_core::transport::{CurlTransport, Transport};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::input::read_url_text;
use crate::cli::terminal::TerminalSurface;

/// Parsed `process` arguments.
#[derive(Debug)]
pub struct ProcessArgs {
    pub urls: Vec<String>,
    pub file: Option<PathBuf>,
    pub naming: NamingMode,
    pub prefix: Option<String>,
    pub names: Vec<(String, String)>,
    pub server: Option<String>,
}

pub async fn run_process(cfg: &PiaConfig, args: ProcessArgs) -> Result<()> {
    let raw = read_url_text(&args.urls, args.file.as_deref())?;
    check_names(args.naming, &args.names, &parse_urls(&raw))?;

    let mut cfg = cfg.clone();
    if let Some(server) = &args.server {
        cfg.server_url = server.clone();
    }

    let transport = CurlTransport::new(
        &cfg.server_url,
        cfg.connect_timeout(),
        cfg.request_timeout(),
    )
    .with_context(|| format!("invalid server URL {:?}", cfg.server_url))?;
    tracing::debug!(server = %transport.base_url(), "using report backend");

    let surface = TerminalSurface::new(io::stdout(), io::stderr(), cfg.download_url());
    let mut controller = FormController::new(
        Arc::new(transport),
        surface,
        ControllerSettings::from(&cfg),
    );
    submit_form(&mut controller, &raw, &args).await
}

/// `--name` only applies in custom mode, and only to URLs being submitted.
pub(crate) fn check_names(
    naming: NamingMode,
    names: &[(String, String)],
    urls: &[String],
) -> Result<()> {
    if !names.is_empty() && naming != NamingMode::Custom {
        bail!("--name requires --naming custom");
    }
    for (url, _) in names {
        if !urls.contains(url) {
            bail!("--name {url}: URL is not in the submitted list");
        }
    }
    Ok(())
}

/// Fills the form the way a user would, then submits it once.
pub(crate) async fn submit_form<T: Transport, S: FormSurface>(
    controller: &mut FormController<T, S>,
    raw: &str,
    args: &ProcessArgs,
) -> Result<()> {
    controller.set_url_text(raw);
    controller.set_custom_prefix(args.prefix.as_deref().unwrap_or_default());
    controller.select_naming_mode(args.naming);
    for (url, file) in &args.names {
        if !controller.set_custom_name(url, file) {
            bail!("--name {url}: URL is not in the submitted list");
        }
    }

    controller.submit().await?;
    Ok(())
}
