use std::{error::Error, fmt::Display, str::FromStr};

/// Projects whose build output can be launched by the run helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Project {
    PEngineRuntime,
    EgProject,
}

impl Project {
    /// File name of the executable produced by the build.
    pub const fn name(self) -> &'static str {
        use Project::*;
        match self {
            PEngineRuntime => "PEngineRuntime",
            EgProject => "eg_project",
        }
    }

    /// All accepted names of a project as lowercase strings, including the primary name.
    pub fn possible_names(self) -> &'static [&'static str] {
        use Project::*;
        match self {
            PEngineRuntime => &["pengineruntime", "pengine", "runtime"],
            EgProject => &["eg_project", "eg", "egproject"],
        }
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Project {
    type Err = InvalidProject;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        use Project::*;
        match name.to_ascii_lowercase() {
            name if PEngineRuntime.possible_names().contains(&&*name) => Ok(PEngineRuntime),
            name if EgProject.possible_names().contains(&&*name) => Ok(EgProject),
            name => Err(InvalidProject(name)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidProject(String);

impl Display for InvalidProject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a known project", self.0)
    }
}

impl Error for InvalidProject {}

#[cfg(test)]
mod test {
    use super::{InvalidProject, Project};

    #[test]
    fn binary_names_match_build_output() {
        assert_eq!("PEngineRuntime", Project::PEngineRuntime.name());
        assert_eq!("eg_project", Project::EgProject.name());
        assert_eq!("eg_project", Project::EgProject.to_string());
    }

    #[test]
    fn parses_names_and_aliases_case_insensitively() {
        assert_eq!(Ok(Project::PEngineRuntime), "PEngineRuntime".parse());
        assert_eq!(Ok(Project::PEngineRuntime), "runtime".parse());
        assert_eq!(Ok(Project::EgProject), "EG".parse());
        assert_eq!(Ok(Project::EgProject), "eg_project".parse());
    }

    #[test]
    fn rejects_unknown_projects() {
        let error = "editor".parse::<Project>().unwrap_err();

        assert_eq!(InvalidProject("editor".to_string()), error);
        assert_eq!("editor is not a known project", error.to_string());
    }
}
