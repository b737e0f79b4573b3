use clap::Parser;
use wur::core::domains::load_domains;
use wur::core::ConfigProvider;
use wur::utils::{logger, validation::Validate};
use wur::{
    ApiEndpoint, CliConfig, LocalStorage, ReportEmitter, ReportEngine, RunSummary,
    SummaryReporter, TomlConfig, WpUserFetcher, WurError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting wur");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => execute(&config).await,
                Err(e) => Err(e),
            }
        }
        None => execute(&cli).await,
    };

    match outcome {
        Ok((summary, output_dir)) => {
            tracing::info!("Report generated in {}", output_dir);
            SummaryReporter::new(cli.quiet, cli.clear_screen).print(&summary, &output_dir)?;
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn execute<C: ConfigProvider + Validate>(
    config: &C,
) -> Result<(RunSummary, String), WurError> {
    // 驗證配置
    config.validate()?;

    let domains = load_domains(config.domains_file()).await?;

    let fetcher = WpUserFetcher::from_config(config)?;
    let storage = LocalStorage::new(config.output_dir());
    let emitter = ReportEmitter::new(storage, ApiEndpoint::new(config.scheme()));
    let engine =
        ReportEngine::new(fetcher, emitter).with_concurrency(config.concurrent_requests());

    let summary = engine.run(&domains).await?;
    Ok((summary, config.output_dir().to_string()))
}
