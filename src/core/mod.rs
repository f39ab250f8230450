pub mod engine;
pub mod generator;
pub mod pipeline;

pub use crate::domain::model::{
    Assignment, MatchKind, MatchOutcome, Mode, Name, NameRoster, Pair, Pairing,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ResultSink, Storage};
pub use crate::utils::error::Result;
