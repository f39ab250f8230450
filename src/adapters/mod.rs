use crate::core::ResultSink;
use crate::utils::error::Result;
use std::sync::{Arc, Mutex};

/// Prints each result line to stdout as it is produced.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    async fn emit(&self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}

/// Collects result lines in memory; used by tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }
}

impl ResultSink for MemorySink {
    async fn emit(&self, line: &str) -> Result<()> {
        self.lines.lock().expect("sink lock poisoned").push(line.to_string());
        Ok(())
    }
}
