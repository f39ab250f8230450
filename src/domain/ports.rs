use crate::domain::model::{MatchOutcome, Mode, NameRoster};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn mode(&self) -> Mode;
    fn delay_seconds(&self) -> f64;
    fn output_path(&self) -> Option<&str>;
    fn seed(&self) -> Option<u64>;
}

/// Destination for the incrementally displayed result lines.
pub trait ResultSink: Send + Sync {
    fn emit(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> impl std::future::Future<Output = Result<NameRoster>> + Send;
    fn transform(
        &self,
        roster: NameRoster,
    ) -> impl std::future::Future<Output = Result<MatchOutcome>> + Send;
    fn load(&self, outcome: MatchOutcome)
        -> impl std::future::Future<Output = Result<String>> + Send;
}
