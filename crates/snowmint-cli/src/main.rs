#![doc = include_str!("../README.md")]

mod config;
mod mint;
mod telemetry;

use std::io::{BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, MintConfig};
use mint::next_id_with_retry;
use snowmint::{LockSnowflakeGenerator, SnowflakeClassicId};
use telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = MintConfig::try_from(args)?;

    init_tracing(config.log_filter.as_deref())?;
    log_startup_info(&config);

    let generator = LockSnowflakeGenerator::<SnowflakeClassicId, _>::new(
        config.datacenter_id,
        config.machine_id,
        config.clock,
    )?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for n in 0..config.count {
        let id = next_id_with_retry(&generator, config.clock_retries, std::thread::sleep)
            .with_context(|| format!("failed to mint id {} of {}", n + 1, config.count))?;
        writeln!(out, "{}", config.format.render(id, &config.clock))?;
    }
    out.flush()?;

    tracing::debug!(count = config.count, "done");
    Ok(())
}

fn log_startup_info(config: &MintConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Minting with full config: {:#?}", config);
    } else {
        tracing::info!(
            datacenter_id = config.datacenter_id,
            machine_id = config.machine_id,
            count = config.count,
            "Minting IDs"
        );
    }
}
