// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "game-shell")]
#[command(about = "Event-driven window shell with a free-fly camera", long_about = None)]
pub struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Start with an orthographic projection
    #[arg(long, default_value = "false")]
    pub orthographic: bool,

    /// Disable periodic FPS logging
    #[arg(long = "no-fps", default_value = "false")]
    pub no_fps: bool,
}
