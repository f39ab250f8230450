pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ConsoleSink, MemorySink};
pub use crate::config::{storage::LocalStorage, toml_config::FileConfig};
pub use crate::core::generator;
pub use crate::core::pipeline::{cancel_channel, MatchPipeline};
pub use crate::core::engine::MatchEngine;
pub use crate::domain::model::{
    Assignment, MatchKind, MatchOutcome, Mode, Name, NameRoster, Pair, Pairing,
};
pub use crate::utils::error::{MatchError, Result};
