use clap::Parser;
use name_matcher::core::ConfigProvider;
use name_matcher::utils::{logger, validation::Validate};
use name_matcher::{
    cancel_channel, CliConfig, ConsoleSink, FileConfig, LocalStorage, MatchEngine, MatchPipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting name-matcher CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(path) = cli.config.clone() {
        let config = match FileConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(e.exit_code());
            }
        };
        run(config).await;
    } else {
        run(cli).await;
    }

    Ok(())
}

async fn run<C>(config: C)
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let (cancel_tx, cancel_rx) = cancel_channel();

    // Ctrl-C stops the paced display between items.
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current match");
            let _ = cancel_tx.send(true);
        }
    });

    let storage = LocalStorage::new(".".to_string());
    let pipeline = MatchPipeline::new(storage, config, ConsoleSink, cancel_rx);
    let engine = MatchEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ {}", summary);
        }
        Err(e) => {
            tracing::error!("❌ Matching run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
