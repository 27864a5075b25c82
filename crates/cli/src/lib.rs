use std::io::stderr;

use clap::Parser;
use is_terminal::IsTerminal;
use pengine_build_layout::Project;
use pengine_telemetry::TelemetryConfig;
use tracing::{debug, info};

pub mod commands;
pub mod config;

use crate::{commands::launch::DirectLauncher, config::Config};

/// Run the latest internal build of a PEngine project.
///
/// The executable is looked up under `./build/<platform>-internal/` relative to the current
/// working directory and started without arguments.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {}

/// Entry point shared by the per-project binaries.
pub fn run(project: Project) {
    pengine_telemetry::install_error_handler();

    let _cli = Cli::parse();

    let telemetry_config = TelemetryConfig::default()
        .with_console_writer(stderr)
        .with_ansi(stderr().is_terminal());

    pengine_telemetry::install(telemetry_config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        %project,
        "starting run helper"
    );

    let config = Config::default();
    debug!(cwd = ?config.cwd(), "resolved working directory");

    let result = pengine_telemetry::with_root_span("pengine-run", "launch", || {
        commands::launch::launch(&config, project, DirectLauncher)
    });

    if let Err(report) = result {
        eprintln!("Error: {report:?}");
        std::process::exit(1);
    }
}
