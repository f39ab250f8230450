use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting matching run");

        let roster = self.pipeline.extract().await?;
        tracing::info!("Loaded {} names", roster.len());

        let outcome = self.pipeline.transform(roster).await?;
        tracing::info!("Generated {} {}", outcome.len(), outcome.kind_label());

        let summary = self.pipeline.load(outcome).await?;
        tracing::info!("{}", summary);

        Ok(summary)
    }
}
