// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "globe-tour")]
#[command(about = "Textured globe with an orbiting airplane and chase camera", long_about = None)]
pub struct Cli {
    /// Directory holding the globe texture, airplane model, label font,
    /// and city images
    #[arg(long = "assets", default_value = "assets")]
    pub assets: PathBuf,

    /// JSON file replacing the built-in city table
    #[arg(long = "cities")]
    pub cities: Option<PathBuf>,

    /// Disable the HUD overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
