pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::Mode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "name-matcher")]
#[command(about = "Randomly pairs up names from a text file, or assigns everyone someone else")]
pub struct CliConfig {
    /// Path to the names file, one name per line
    #[arg(long)]
    pub source: Option<String>,

    #[arg(long, value_enum, default_value_t = Mode::Auto)]
    pub mode: Mode,

    /// Seconds to wait between displayed matches
    #[arg(long, default_value_t = 0.5)]
    pub delay: f64,

    /// Save the emitted result lines to this file as well
    #[arg(long)]
    pub output: Option<String>,

    /// Fixed RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Load settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &str {
        self.source.as_deref().unwrap_or_default()
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn delay_seconds(&self) -> f64 {
        self.delay
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let source = validation::validate_required_field("source", &self.source)?;
        validation::validate_path("source", source)?;
        validation::validate_delay_seconds("delay", self.delay)?;

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        Ok(())
    }
}
