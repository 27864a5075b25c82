//! On-disk layout of PEngine build output.
//!
//! The external build system places executables under
//! `<root>/build/<platform>-<build type>/<project>`. This crate only composes those paths, it
//! never touches the filesystem.

use std::{
    borrow::Cow,
    fmt::Display,
    path::{Path, PathBuf},
};

mod project;

pub use self::project::{InvalidProject, Project};

/// Name of the directory holding build output, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Lowercase name of an operating system, as used in build directory names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildPlatform(Cow<'static, str>);

impl BuildPlatform {
    pub const WINDOWS: Self = Self(Cow::Borrowed("windows"));
    pub const LINUX: Self = Self(Cow::Borrowed("linux"));
    pub const DARWIN: Self = Self(Cow::Borrowed("darwin"));

    /// The platform this process is running on.
    ///
    /// Names follow the kernel name reported by the host (`uname -s` on Unix), so macOS is
    /// `darwin` rather than `macos`.
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier from [`std::env::consts::OS`] to its build directory name.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Self::DARWIN,
            "solaris" | "illumos" => Self(Cow::Borrowed("sunos")),
            other => Self::new(other),
        }
    }

    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Cow::Owned(name.as_ref().to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BuildPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label of a build configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildType(Cow<'static, str>);

impl BuildType {
    pub const INTERNAL: Self = Self(Cow::Borrowed("internal"));

    pub fn new(label: impl Into<String>) -> Self {
        Self(Cow::Owned(label.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BuildType {
    fn default() -> Self {
        Self::INTERNAL
    }
}

impl Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a build configuration keeps its executables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildLayout {
    pub root: PathBuf,
    pub build_dir: PathBuf,
    pub platform: BuildPlatform,
    pub build_type: BuildType,
}

impl BuildLayout {
    /// Layout of an `internal` build for the host platform under `root`.
    pub fn for_host(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            platform: BuildPlatform::host(),
            build_type: BuildType::default(),
        }
    }

    /// The `<platform>-<build type>` directory segment.
    pub fn build_argument(&self) -> String {
        format!("{}-{}", self.platform, self.build_type)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(&self.build_dir).join(self.build_argument())
    }

    pub fn binary_path(&self, project_name: impl AsRef<Path>) -> PathBuf {
        self.bin_dir().join(project_name)
    }
}

/// Compose `<cwd>/build/<platform>-<build type>/<project name>`.
pub fn compute_binary_path(
    cwd: impl Into<PathBuf>,
    platform: &BuildPlatform,
    build_type: &BuildType,
    project_name: impl AsRef<Path>,
) -> PathBuf {
    BuildLayout {
        root: cwd.into(),
        build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
        platform: platform.clone(),
        build_type: build_type.clone(),
    }
    .binary_path(project_name)
}
