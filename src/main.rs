use clap::Parser;
use item_registry::api::RegistryServer;
use item_registry::config::{Cli, ServerConfig};
use item_registry::logging::{init_logging, LoggingConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LoggingConfig::from_args(cli.quiet, cli.verbose > 0, cli.json)
        .with_file_output(cli.log_file.clone());

    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = ServerConfig::from_cli(&cli);

    if let Err(e) = RegistryServer::new(config).run().await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
