use std::{
    fmt::Debug,
    path::PathBuf,
    process::{Command, ExitStatus},
};

use color_eyre::eyre::WrapErr;
use pengine_build_layout::Project;
use tracing::info;

use crate::config::Config;

pub trait Launcher: Debug {
    fn into_command(self, binary: PathBuf) -> color_eyre::Result<Command>;
}

/// Runs the binary in place, without arguments and with the inherited environment and stdio.
#[derive(Debug)]
pub struct DirectLauncher;

impl Launcher for DirectLauncher {
    fn into_command(self, binary: PathBuf) -> color_eyre::Result<Command> {
        Ok(Command::new(binary))
    }
}

/// Print the path of `project`'s build output, run it and wait for it to exit.
///
/// The child's exit status is returned but never treated as a failure of the launch itself.
#[tracing::instrument(skip(config, launcher))]
pub fn launch(
    config: &Config,
    project: Project,
    launcher: impl Launcher,
) -> color_eyre::Result<ExitStatus> {
    let layout = config.layout()?;
    let bin_path = layout.binary_path(project.name());

    println!("{}", bin_path.display());

    let mut command = launcher.into_command(bin_path.clone())?;
    info!(?command, ?layout, "running binary");

    let status = command
        .status()
        .wrap_err_with(|| format!("failed to launch {}", bin_path.display()))?;

    info!(%status, "binary exited");

    Ok(status)
}
