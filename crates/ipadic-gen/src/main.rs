use anyhow::Context;
use clap::Parser;

pub mod config;
pub mod logging;

use self::config::{Cli, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    // Optional .env lets RUST_LOG be set per checkout
    dotenvy::dotenv().ok();

    let config = GeneratorConfig::from(Cli::parse());
    logging::init_tracing(config.log_json);
    tracing::debug!(?config, "Starting generator");
    if !config.ignored_args.is_empty() {
        tracing::warn!("Ignoring extra arguments: {:?}", config.ignored_args);
    }

    // anyhow reports the error chain on stderr and exits non-zero
    run(&config)?;

    println!("Done!");
    Ok(())
}

fn run(config: &GeneratorConfig) -> anyhow::Result<()> {
    let report = ipadic_subset::generate(&config.output)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;

    if config.verify {
        let entries = ipadic_subset::verify_subset(&report.path, report.entry_count)
            .with_context(|| format!("verification of {} failed", report.path.display()))?;
        tracing::info!("Verified {} entries", entries.len());
    }

    Ok(())
}
