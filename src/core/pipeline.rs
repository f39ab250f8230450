use crate::core::generator::{generate_derangement, generate_pairing};
use crate::core::{ConfigProvider, MatchKind, MatchOutcome, NameRoster, Pipeline, ResultSink, Storage};
use crate::utils::error::{MatchError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tokio::sync::watch;

/// The one pipeline this tool has: read a roster from storage, run the
/// selected generator, stream the result lines to the sink with the
/// configured pacing delay, optionally persisting them at the end.
pub struct MatchPipeline<S: Storage, C: ConfigProvider, K: ResultSink> {
    storage: S,
    config: C,
    sink: K,
    cancel: watch::Receiver<bool>,
}

/// Cancellation channel for a run. Flip the sender to `true` to stop
/// streaming between items.
pub fn cancel_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Resolves once cancellation is requested. A dropped sender means no
/// cancellation can ever arrive, so this pends forever in that case.
async fn wait_for_cancel(cancel: &mut watch::Receiver<bool>) {
    if cancel.wait_for(|stop| *stop).await.is_err() {
        std::future::pending::<()>().await;
    }
}

impl<S: Storage, C: ConfigProvider, K: ResultSink> MatchPipeline<S, C, K> {
    pub fn new(storage: S, config: C, sink: K, cancel: watch::Receiver<bool>) -> Self {
        Self {
            storage,
            config,
            sink,
            cancel,
        }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using fixed RNG seed {}", seed);
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl<S: Storage, C: ConfigProvider, K: ResultSink> Pipeline for MatchPipeline<S, C, K> {
    async fn extract(&self) -> Result<NameRoster> {
        let path = self.config.source_path();
        tracing::debug!("Reading names from: {}", path);

        let data = self.storage.read_file(path).await?;
        let text = String::from_utf8(data).map_err(|e| MatchError::InvalidInputError {
            message: format!("Source file is not valid UTF-8: {}", e),
        })?;

        NameRoster::parse(&text)
    }

    async fn transform(&self, roster: NameRoster) -> Result<MatchOutcome> {
        let mode = self.config.mode();
        let kind = mode.select(roster.len())?;
        tracing::debug!("Mode {} selected {:?} for {} names", mode, kind, roster.len());

        let mut rng = self.rng();
        match kind {
            MatchKind::Pairs => Ok(MatchOutcome::Pairs(generate_pairing(&roster, &mut rng))),
            MatchKind::Assignments => Ok(MatchOutcome::Assignments(generate_derangement(
                &roster, &mut rng,
            )?)),
        }
    }

    async fn load(&self, outcome: MatchOutcome) -> Result<String> {
        let delay = Duration::from_secs_f64(self.config.delay_seconds());
        let lines = outcome.lines();
        let total = lines.len();
        let mut cancel = self.cancel.clone();

        for (index, line) in lines.iter().enumerate() {
            if *cancel.borrow() {
                tracing::warn!("Run stopped after {} of {} matches", index, total);
                return Ok(format!("Stopped after {} of {} matches", index, total));
            }

            self.sink.emit(line).await?;

            // Pacing between items, interruptible by the cancel signal.
            if index + 1 < total && !delay.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = wait_for_cancel(&mut cancel) => {
                        let emitted = index + 1;
                        tracing::warn!("Run stopped after {} of {} matches", emitted, total);
                        return Ok(format!("Stopped after {} of {} matches", emitted, total));
                    }
                }
            }
        }

        if let Some(path) = self.config.output_path() {
            let mut content = lines.join("\n");
            content.push('\n');
            self.storage.write_file(path, content.as_bytes()).await?;
            tracing::info!("Results saved to: {}", path);
            return Ok(format!("{} matches emitted, saved to {}", total, path));
        }

        Ok(format!("{} matches emitted", total))
    }
}
