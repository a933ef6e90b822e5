//! baseline-check-rs: Web platform baseline checker for source files.

mod cli;
mod config;
mod orchestrator;
mod output;

use baseline_data::FeatureRegistry;
use clap::Parser;
use cli::Args;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle dataset version command
    if args.dataset_version {
        match FeatureRegistry::load() {
            Ok(registry) => {
                println!("web-features {}", registry.version());
                println!("features: {}", registry.len());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let result = orchestrator::run(args).await;

    match result {
        Ok(summary) => {
            if summary.fail_on_limited && summary.limited_count > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
