use clap::Parser;
use logging_middleware::utils::{logger, validation::Validate};
use logging_middleware::{CliConfig, LogDispatcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.verbose {
        tracing::debug!("Dispatcher config: {:?}", config);
    }

    let dispatcher = LogDispatcher::new(config);

    match dispatcher
        .log(&cli.stack, &cli.level, &cli.package, &cli.message)
        .await
    {
        Some(response) => {
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
        None => {
            eprintln!("❌ Log record was not delivered");
            std::process::exit(2);
        }
    }
}
