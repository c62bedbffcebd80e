use clap::Parser;
use hr_dashboard::utils::{logger, validation::Validate};
use hr_dashboard::{CliConfig, DashboardEngine, DashboardPipeline, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hr-dashboard pipeline");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = DashboardPipeline::new(storage, config);
    let engine = DashboardEngine::new(pipeline);

    let output_path = engine.run().await?;
    println!("Dashboard data exported to: {}", output_path);

    Ok(())
}
