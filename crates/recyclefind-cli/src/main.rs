mod search;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "recyclefind")]
#[command(about = "Find recycling businesses near a city")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for recycling businesses in a city
    Search {
        /// City to search in
        #[arg(long, default_value = "")]
        city: String,
        /// Country the city is in
        #[arg(long, default_value = "")]
        country: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Write the output to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Also save the records as JSON in this directory (default: current directory)
        #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
        save_json: Option<PathBuf>,
        /// Also write SQL inserts for the records in this directory (default: current directory)
        #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
        save_sql: Option<PathBuf>,
    },
    /// Print the resolved configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = recyclefind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Search {
            city,
            country,
            format,
            output,
            save_json,
            save_sql,
        }) => {
            let request = search::SearchRequest {
                city,
                country,
                format,
                output,
                save_json,
                save_sql,
            };
            let status = search::run_search(&config, request).await?;
            Ok(status.into())
        }
        Some(Commands::Config) => {
            println!("{config}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("recyclefind: run `recyclefind search --city <CITY> --country <COUNTRY>`");
            Ok(ExitCode::SUCCESS)
        }
    }
}
