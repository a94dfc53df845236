// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # telemetry
//!
//! Command-line driver for the telemetry samplers. Stands in for the
//! presentation layer: readings go to stdout, logs and faults to stderr.
//!
//! ## Usage
//! ```bash
//! # Stream every metric until Ctrl-C
//! telemetry watch
//!
//! # Five CPU and governor readings, fixed-rate pacing
//! telemetry watch --only cpu,governor --count 5 --pacing fixed-rate
//!
//! # One-shot reading of every data source
//! telemetry status --json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use sampler::{Pacing, SamplerConfig};

#[derive(Parser)]
#[command(
    name = "telemetry",
    about = "Stream RAM, GPU, CPU and governor readings at a fixed cadence",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file with data-source paths.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the samplers and print each reading as it arrives.
    Watch {
        /// Metrics to sample (comma-separated). Defaults to all.
        #[arg(long, value_enum, value_delimiter = ',')]
        only: Vec<commands::Metric>,

        /// Stop each sampler after this many readings.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Override the configured pacing: after-sample or fixed-rate.
        #[arg(long)]
        pacing: Option<Pacing>,
    },

    /// Take a single reading from every data source.
    Status {
        /// Print the readings as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => SamplerConfig::from_file(path)?,
        None => SamplerConfig::default(),
    };

    match cli.command {
        Commands::Watch {
            only,
            count,
            pacing,
        } => {
            let config = SamplerConfig {
                pacing: pacing.unwrap_or(config.pacing),
                ..config
            };
            commands::watch::execute(config, only, count).await
        }
        Commands::Status { json } => commands::status::execute(config, json).await,
    }
}
