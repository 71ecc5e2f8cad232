//! Loading the initial state from a file.

use anyhow::{Context, Result};
use liferun_lib::Config;
use log::info;
use std::{fs, path::Path};

/// Formats of the initial state file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// A [`Config`] in TOML.
    Toml,
    /// A [`Config`] in YAML.
    Yaml,
    /// A [`Config`] in JSON.
    Json,
    /// The dimensions followed by the coordinates of the living cells.
    State,
}

impl Format {
    /// Chooses a format by the extension of the file.
    pub(crate) fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Format::Toml,
            Some("yaml") | Some("yml") => Format::Yaml,
            Some("json") => Format::Json,
            _ => Format::State,
        }
    }

    /// Parses a configuration in this format.
    pub(crate) fn parse(self, s: &str) -> Result<Config> {
        let config = match self {
            Format::Toml => toml::from_str(s)?,
            Format::Yaml => serde_yaml::from_str(s)?,
            Format::Json => serde_json::from_str(s)?,
            Format::State => Config::from_state_str(s)?,
        };
        Ok(config)
    }
}

/// Reads the initial state from a file.
pub(crate) fn load(path: &Path) -> Result<Config> {
    let format = Format::from_path(path);
    let s = fs::read_to_string(path)
        .with_context(|| format!("Unable to read the file {}", path.display()))?;
    let config = format
        .parse(&s)
        .with_context(|| format!("Invalid initial state in {}", path.display()))?;
    info!(
        "Loaded {:?} initial state from {}: {}x{}",
        format,
        path.display(),
        config.rows,
        config.columns
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use liferun_lib::Error;

    fn glider() -> Config {
        Config::new(8, 8)
            .set_alive(vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    #[test]
    fn from_path() {
        assert_eq!(Format::from_path(Path::new("a.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("a.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a/b.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("glider.txt")), Format::State);
        assert_eq!(Format::from_path(Path::new("glider")), Format::State);
    }

    #[test]
    fn toml() -> Result<()> {
        let s = "rows = 8\n\
                 columns = 8\n\
                 alive = [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]]\n";
        assert_eq!(Format::Toml.parse(s)?, glider());
        Ok(())
    }

    #[test]
    fn yaml() -> Result<()> {
        let s = "rows: 8\n\
                 columns: 8\n\
                 alive:\n\
                 - [0, 1]\n\
                 - [1, 2]\n\
                 - [2, 0]\n\
                 - [2, 1]\n\
                 - [2, 2]\n";
        assert_eq!(Format::Yaml.parse(s)?, glider());
        Ok(())
    }

    #[test]
    fn json() -> Result<()> {
        let s = r#"{"rows": 8, "columns": 8, "alive": [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]]}"#;
        assert_eq!(Format::Json.parse(s)?, glider());
        Ok(())
    }

    #[test]
    fn state() -> Result<()> {
        let s = "8 8\n0 1\n1 2\n2 0\n2 1\n2 2\n";
        assert_eq!(Format::State.parse(s)?, glider());
        Ok(())
    }

    #[test]
    fn state_error() {
        let err = Format::State.parse("8 8\n0 1\n1\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidCoordinates { line: 3 })
        );
    }

    #[test]
    fn missing_file() {
        let err = load(Path::new("this/file/does/not/exist.txt")).unwrap_err();
        assert!(err.to_string().contains("Unable to read the file"));
    }
}
