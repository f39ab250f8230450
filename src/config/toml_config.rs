use crate::core::ConfigProvider;
use crate::domain::model::Mode;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a matching run, loaded from a TOML file. Mirrors the CLI
/// flags so a recurring setup can be kept in a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub run: RunConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub mode: Mode,
    pub delay_seconds: f64,
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            delay_seconds: 0.5,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for FileConfig {
    fn source_path(&self) -> &str {
        &self.source.path
    }

    fn mode(&self) -> Mode {
        self.run.mode
    }

    fn delay_seconds(&self) -> f64 {
        self.run.delay_seconds
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }

    fn seed(&self) -> Option<u64> {
        self.run.seed
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_delay_seconds("run.delay_seconds", self.run.delay_seconds)?;

        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_file_config() {
        let toml_content = r#"
[source]
path = "./names.txt"

[run]
mode = "pairs"
delay_seconds = 0.2
seed = 42

[output]
path = "./results.txt"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.path, "./names.txt");
        assert_eq!(config.run.mode, Mode::Pairs);
        assert_eq!(config.run.delay_seconds, 0.2);
        assert_eq!(config.run.seed, Some(42));
        assert_eq!(config.output_path(), Some("./results.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_run_section_defaults() {
        let toml_content = r#"
[source]
path = "./names.txt"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.run.mode, Mode::Auto);
        assert_eq!(config.run.delay_seconds, 0.5);
        assert_eq!(config.run.seed, None);
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn test_negative_delay_fails_validation() {
        let toml_content = r#"
[source]
path = "./names.txt"

[run]
delay_seconds = -1.0
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
path = "./roster.txt"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.path, "./roster.txt");
    }
}
