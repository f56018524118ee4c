use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::{factory::DialectRegistry, handle::DbHandle};
use tracing::{Level, info};
use typegen_config::settings::Config;
use typegen_core::{tables::get_tables_for_database, typings::TypingsGenerator};

mod commands;
mod error;

#[derive(Parser)]
#[command(
    name = "typegen",
    version = "0.1.0",
    about = "SQL schema to TypeScript declaration generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config, output } => {
            let config = load_config(&config)?;
            let db = DbHandle::connect(&config.dialect, &config.connection).await?;

            let typings = TypingsGenerator::default().generate(&db, &config).await?;

            let target = output.or_else(|| config.output.clone());
            match target {
                Some(path) => {
                    std::fs::write(&path, typings)?;
                    info!("wrote typings to {path}");
                }
                None => println!("{typings}"),
            }
        }
        Commands::Tables { config } => {
            let config = load_config(&config)?;
            let db = DbHandle::connect(&config.dialect, &config.connection).await?;

            let tables = get_tables_for_database(&db, &config, &DialectRegistry).await?;
            let json = serde_json::to_string_pretty(&tables)?;
            println!("{json}");
        }
        Commands::TestConn { dialect, conn_str } => {
            let db = DbHandle::connect(&dialect, &conn_str).await?;
            db.ping().await?;
            info!("connection OK ({dialect})");
        }
    }

    Ok(())
}

fn load_config(path: &str) -> Result<Config, CliError> {
    let config = Config::from_json_file(path)?;
    config.validate()?;
    Ok(config)
}
