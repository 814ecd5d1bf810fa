//! Boost Note backup exporter
//!
//! Mirrors every folder of the workspace as a directory and every document
//! as a Markdown file under the output directory.

use anyhow::{Context, Result};
use boost_export::boost_service::boost_client::BoostClient;
use boost_export::config::ExportConfig;
use boost_export::sync::tree_sync::{RunSummary, TreeSync};
use clap::{Arg, Command};
use log::{error, info};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    // Initialize logging, progress lines are emitted at info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let matches = Command::new("boost-export")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Back up Boost Note folders and documents as Markdown files")
        .arg(
            Arg::new("output")
                .value_name("OUTPUT_DIR")
                .help("Directory to export into (defaults to $BASE_DIR or ./backup)")
                .num_args(1),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the Boost Note API")
                .num_args(1),
        )
        .get_matches();

    let output_dir = matches.get_one::<String>("output").map(PathBuf::from);
    let api_url = matches.get_one::<String>("api-url").cloned();

    let result = run_export(output_dir, api_url).await;
    std::process::exit(report_outcome(&result));
}

async fn run_export(output_dir: Option<PathBuf>, api_url: Option<String>) -> Result<RunSummary> {
    let config = ExportConfig::from_env(output_dir, api_url)
        .context("Failed to load configuration")?;
    info!("Output directory: {}", config.output_dir.display());
    info!("API base: {}", config.api_base);

    let client = BoostClient::new(&config.api_base, &config.token)
        .context("Failed to create Boost Note client")?;

    let mut sync = TreeSync::new(client, config.output_dir);
    sync.run().await.context("Export aborted")
}

/// Log the end of the run and pick the process exit code
fn report_outcome(result: &Result<RunSummary>) -> i32 {
    match result {
        Ok(summary) => {
            info!(
                "Exported {} documents from {} folders",
                summary.documents, summary.folders
            );
            0
        }
        Err(e) => {
            error!("Export failed: {:#}", e);
            1
        }
    }
}
