//! Vista Viewer
//!
//! Interactive orbit viewer. Left drag orbits, right drag pans, the wheel
//! dollies. W/A/S/D steer the light, Space resets camera and light, Escape quits.

mod scene;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use vista_window::ViewerConfig;

use crate::scene::SphereScene;

/// Vista - interactive orbit viewer
#[derive(Parser, Debug)]
#[command(name = "vista")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Window title
    #[arg(short, long)]
    title: Option<String>,

    /// Present without waiting for vertical blank
    #[arg(long)]
    no_vsync: bool,
}

impl Args {
    fn into_config(self) -> Result<ViewerConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(title) = self.title {
            config = config.with_title(title);
        }
        let width = self.width.unwrap_or(config.window.width);
        let height = self.height.unwrap_or(config.window.height);
        config = config.with_window_size(width, height);
        if self.no_vsync {
            config.window.vsync = false;
        }
        Ok(config)
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = args.into_config()?;
    info!(
        "Starting {} ({}x{})",
        config.window.title, config.window.width, config.window.height
    );
    let mut scene = SphereScene::new();
    vista_window::run(&config, &mut scene)?;
    Ok(())
}

fn main() {
    vista_window::init_tracing();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
