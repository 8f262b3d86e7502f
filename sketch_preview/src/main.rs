//! # sketch-preview
//!
//! Renders the SketchUploader view to a standalone HTML page, without a
//! desktop runtime. The `hello_world` command is served in-process, and
//! clicks can be simulated before rendering.
//!
//! ## Usage
//!
//! ```bash
//! # Initial state
//! sketch-preview -o preview.html
//!
//! # After one click
//! sketch-preview --clicks 1 --reply pong
//!
//! # After a failed click, with errors surfaced
//! sketch-preview --clicks 1 --fail offline --config view.toml
//! ```

mod args;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use sketch_view::{
    ClickOutcome, HELLO_WORLD, LocalHost, ViewConfig, ViewController, render_document,
};
use tracing::{debug, info, warn};

use args::Args;

fn build_host(args: &Args) -> LocalHost {
    match &args.fail {
        Some(message) => {
            let message = message.clone();
            LocalHost::new().register(HELLO_WORLD, move |_| Err(message.clone()))
        }
        None => {
            let reply = args.reply.clone();
            LocalHost::new().register(HELLO_WORLD, move |_| Ok(Value::from(reply.clone())))
        }
    }
}

fn load_config(args: &Args) -> Result<ViewConfig> {
    match &args.config {
        Some(path) => ViewConfig::load_from_path(path)
            .with_context(|| format!("loading view config from {}", path.display())),
        None => Ok(ViewConfig::default()),
    }
}

async fn run(args: Args) -> Result<()> {
    let controller = ViewController::with_config(build_host(&args), load_config(&args)?);
    debug!(config = ?controller.config(), "view config");
    for click in 1..=args.clicks {
        match controller.on_button_click().await {
            ClickOutcome::Failed(err) => warn!(click, error = %err, "simulated click failed"),
            outcome => debug!(click, ?outcome, "simulated click"),
        }
    }
    info!(line = %controller.result_line(), "rendering view");

    let html = render_document(&controller.text());
    match &args.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("writing preview to {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "preview written");
        }
        None => println!("{}", html),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[sketch-preview] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
