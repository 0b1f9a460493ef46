use clap::Parser;
use skillup::app::cli;
use skillup::utils::{logger, validation::Validate};
use skillup::CliConfig;

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // Validação das flags antes de tocar em qualquer arquivo
    if let Err(e) = args.validate() {
        logger::init_cli_logger(args.verbose);
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config = match args.resolver() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(args.verbose);
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if args.log_json || config.log_json() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = cli::executar(args.comando, &config) {
        tracing::error!("❌ Command failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
