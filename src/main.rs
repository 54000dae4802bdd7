use clap::Parser;
use statsdesc::cli::CliArgs;
use statsdesc::config::{config_schema, load_config, load_config_from};
use statsdesc::startup::run;
use statsdesc::utils::logger::init_logging;
use tracing::error;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.print_schema {
        match config_schema() {
            Ok(schema) => println!("{}", schema),
            Err(e) => {
                eprintln!("Error rendering configuration schema: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match &args.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => load_config(),
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match run(&config, args.format).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Failed to fetch statistics description: {}", e);
            std::process::exit(1);
        }
    }
}
