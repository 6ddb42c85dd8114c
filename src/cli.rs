use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::constants::DEFAULT_PORT;

#[derive(Parser)]
#[command(name = "painel-comercial")]
#[command(about = "Monthly sales potential reporting CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print period metrics, seller ranking and the detail table
    Report {
        /// Path to the sales CSV (default: $SALES_DATA_PATH or data/ventas_2025.csv)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// First month of the range, e.g. Enero (default: first month in the data)
        #[arg(long)]
        start: Option<String>,

        /// Last month of the range, inclusive (default: last month in the data)
        #[arg(long)]
        end: Option<String>,

        /// Seller to include; repeat for several (default: all sellers)
        #[arg(long = "seller")]
        sellers: Vec<String>,
    },
    /// Start the JSON report API server
    Serve {
        /// Path to the sales CSV
        #[arg(short, long)]
        source: Option<PathBuf>,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Show a quick look at the data source
    Status {
        /// Path to the sales CSV
        #[arg(short, long)]
        source: Option<PathBuf>,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            source,
            start,
            end,
            sellers,
        } => {
            commands::report::run(source, start, end, sellers);
        }
        Commands::Serve { source, port } => {
            commands::serve::run(source, port).await;
        }
        Commands::Status { source } => {
            commands::status::run(source);
        }
    }
}
