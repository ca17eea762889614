//! # Kirana Dashboard Entry Point
//!
//! Parses arguments, sets up logging and state, then hands stdin to the
//! console.
//!
//! ```text
//! kirana [--settings <path>] [--language <code>] [--no-camera]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use kirana_dashboard::console::{self, Console};
use kirana_dashboard::state::{ConfigState, Settings, SettingsState, SimulatedCamera};
use kirana_dashboard::{commands, init_tracing, App};
use tracing::{error, info, warn};

/// Kirana POS dashboard console.
#[derive(Debug, Parser)]
#[command(name = "kirana", version, about)]
struct Cli {
    /// Settings file holding the display language
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Switch the display language at startup (saved like `lang <code>`)
    #[arg(long, value_name = "CODE")]
    language: Option<String>,

    /// Start without a camera, as on a machine that has none
    #[arg(long)]
    no_camera: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    info!("Starting Kirana POS dashboard");

    let config = ConfigState::from_env();
    let settings = SettingsState::load(Settings::resolve_path(cli.settings));

    if let Some(code) = cli.language.as_deref() {
        if let Err(e) = commands::config::set_language(&settings, code) {
            warn!(error = %e, "Ignoring --language");
        }
    }

    let camera = if cli.no_camera {
        SimulatedCamera::unavailable("No camera found")
    } else {
        SimulatedCamera::new()
    };

    let app = App::new(config, settings, Arc::new(camera));
    match console::run(Console::new(app)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Console I/O failed");
            ExitCode::FAILURE
        }
    }
}
