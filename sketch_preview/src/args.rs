//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use sketch_view::HELLO_WORLD_REPLY;

#[derive(Parser, Debug)]
#[command(name = "sketch-preview")]
#[command(about = "Render the SketchUploader view to a standalone HTML page")]
#[command(version)]
pub struct Args {
    /// Reply returned by the local `hello_world` command
    #[arg(long, default_value = HELLO_WORLD_REPLY)]
    pub reply: String,

    /// Make `hello_world` fail with this message instead of replying
    #[arg(long, value_name = "MESSAGE", conflicts_with = "reply")]
    pub fail: Option<String>,

    /// Number of button clicks to simulate before rendering
    #[arg(long, default_value_t = 0)]
    pub clicks: u32,

    /// TOML file with overlap/failure policies
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the page here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
