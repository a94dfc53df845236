// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod status;
pub mod watch;

use resource_monitor::{HostCpuUsage, CPU_SETTLE_INTERVAL};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Metrics selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Ram,
    Gpu,
    Cpu,
    Governor,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Ram, Metric::Gpu, Metric::Cpu, Metric::Governor];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Ram => "ram",
            Metric::Gpu => "gpu",
            Metric::Cpu => "cpu",
            Metric::Governor => "governor",
        }
    }
}

/// A host CPU counter that has been running for [`CPU_SETTLE_INTERVAL`],
/// so its first reading is a real delta.
pub async fn settled_cpu_usage() -> Arc<HostCpuUsage> {
    let usage = Arc::new(HostCpuUsage::new());
    tokio::time::sleep(CPU_SETTLE_INTERVAL).await;
    usage
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
