//! @ai:module:intent Configuration structs for the comparison analyzer
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalyzerConfig, ScoringConfig, OutputConfig
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::subject::SubjectPair;
use crate::verdict::WeightPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "commbench.toml";

/// @ai:intent Main configuration for the analyzer
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub subjects: SubjectPair,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// @ai:intent Scoring configuration
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub policy: WeightPolicy,
}

/// @ai:intent Output locations for generated artifacts
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_charts_dir")]
    pub charts_dir: PathBuf,
    #[serde(default = "default_csv_file")]
    pub csv_file: PathBuf,
    #[serde(default)]
    pub json_file: Option<PathBuf>,
    #[serde(default = "default_charts")]
    pub charts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            charts_dir: default_charts_dir(),
            csv_file: default_csv_file(),
            json_file: None,
            charts: default_charts(),
        }
    }
}

fn default_charts_dir() -> PathBuf {
    PathBuf::from("./charts")
}

fn default_csv_file() -> PathBuf {
    PathBuf::from("benchmark_comparison.csv")
}

fn default_charts() -> bool {
    true
}

impl AnalyzerConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// @ai:intent Load the given file, else commbench.toml if present, else defaults
    /// @ai:effects fs:read
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);

                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AnalyzerConfig = toml::from_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.scoring.policy, WeightPolicy::ExplicitOnly);
        assert_eq!(config.subjects.a.label, "p2p-comm");
        assert_eq!(config.output.csv_file, PathBuf::from("benchmark_comparison.csv"));
        assert!(config.output.charts);
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("commbench.toml");
        std::fs::write(
            &path,
            r#"
[scoring]
policy = "default-one"

[subjects.a]
id = "Old"
label = "old"
legend = "old stack"

[subjects.b]
id = "New"
label = "new"
legend = "new stack"

[output]
charts = false
json_file = "out/report.json"
"#,
        )
        .unwrap();

        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.scoring.policy, WeightPolicy::DefaultOne);
        assert_eq!(config.subjects.b.id, "New");
        assert!(!config.output.charts);
        assert_eq!(config.output.json_file, Some(PathBuf::from("out/report.json")));
        assert_eq!(config.output.charts_dir, PathBuf::from("./charts"));
    }

    #[test]
    fn test_invalid_policy_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[scoring]\npolicy = \"everything\"\n").unwrap();

        let err = AnalyzerConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
