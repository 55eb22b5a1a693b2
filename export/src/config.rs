//! Config file format for the export CLI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Optional TOML config. Every key may be omitted; CLI flags win over it.
///
/// ```toml
/// checkout_url = "https://payfast.greenn.com.br/153513"
/// out = "dist/index.html"
/// log_level = "info"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub checkout_url: Option<String>,
    pub out: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load `path` when given, otherwise an empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_all_keys() {
        let file = write_config(
            r#"
checkout_url = "https://pay.example.com/1"
out = "public/index.html"
log_level = "debug"
"#,
        );

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(
            config,
            FileConfig {
                checkout_url: Some("https://pay.example.com/1".into()),
                out: Some(PathBuf::from("public/index.html")),
                log_level: Some("debug".into()),
            }
        );
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file = write_config("");
        assert_eq!(FileConfig::load(file.path()).unwrap(), FileConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let file = write_config("theme = \"dark\"\n");
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FileConfig::load(Path::new("/nonexistent/anamnese.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/anamnese.toml"));
    }

    #[test]
    fn no_path_means_default() {
        assert_eq!(FileConfig::load_optional(None).unwrap(), FileConfig::default());
    }
}
