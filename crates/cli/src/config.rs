use std::path::{Path, PathBuf};

use color_eyre::{eyre::OptionExt, Result};
use pengine_build_layout::BuildLayout;

#[derive(Debug)]
pub struct Config {
    /// The current working directory we launched from.
    pub(crate) cwd: Option<Box<Path>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir()
                .map(PathBuf::into_boxed_path)
                .ok(),
        }
    }
}

impl Config {
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// The layout binaries are launched from: an `internal` build for the host platform under
    /// `<cwd>/build`.
    pub fn layout(&self) -> Result<BuildLayout> {
        let root = self
            .cwd()
            .ok_or_eyre("unable to determine the current working directory")?;

        Ok(BuildLayout::for_host(root))
    }
}

#[cfg(test)]
mod test {
    use std::{error::Error, path::Path};

    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pengine_build_layout::{BuildPlatform, Project};
    use pretty_assertions::assert_eq;

    use super::Config;

    #[test]
    fn layout_is_internal_host_build_under_cwd() -> Result<(), Box<dyn Error>> {
        let config = Config {
            cwd: Some(Box::from(Path::new("/home/dev/project"))),
        };

        assert_eq!(
            Path::new("/home/dev/project")
                .join("build")
                .join(format!("{}-internal", BuildPlatform::host()))
                .join("PEngineRuntime"),
            config.layout()?.binary_path(Project::PEngineRuntime.name())
        );

        Ok(())
    }

    #[test]
    fn layout_requires_working_directory() {
        let config = Config { cwd: None };

        assert!(config.layout().is_err());
    }

    #[test]
    fn files_in_working_directory_do_not_change_layout() -> Result<(), Box<dyn Error>> {
        let temp_dir = assert_fs::TempDir::new()?;
        temp_dir
            .child("pengine.toml")
            .write_str("build_dir = \"/elsewhere\"\nplatform = \"Plan9\"\n")?;

        let config = Config {
            cwd: Some(Box::from(temp_dir.path())),
        };

        assert_eq!(
            temp_dir
                .path()
                .join("build")
                .join(format!("{}-internal", BuildPlatform::host()))
                .join("eg_project"),
            config.layout()?.binary_path(Project::EgProject.name())
        );

        Ok(())
    }
}
