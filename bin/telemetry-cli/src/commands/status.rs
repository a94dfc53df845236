// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `telemetry status` command: one reading from every data source.
//!
//! Uses the same samplers as `watch`, so the values printed here are
//! exactly what a worker would emit. A failing source is shown with its
//! error instead of aborting the command.

use super::{settled_cpu_usage, Metric};
use sampler::{CpuSampler, GovernorSampler, GpuSampler, RamSampler, Sampler, SamplerConfig};
use std::sync::Arc;

#[derive(Debug, serde::Serialize)]
struct Reading {
    metric: Metric,
    value: Option<String>,
    error: Option<String>,
}

impl Reading {
    fn take(metric: Metric, sampler: &dyn Sampler) -> Self {
        match sampler.sample() {
            Ok(value) => Self {
                metric,
                value: Some(value),
                error: None,
            },
            Err(e) => Self {
                metric,
                value: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub async fn execute(config: SamplerConfig, json: bool) -> anyhow::Result<()> {
    let stats = Arc::new(config.stats_provider());

    let cpu_usage = settled_cpu_usage().await;

    let readings = [
        Reading::take(Metric::Ram, &RamSampler::new(stats.clone())),
        Reading::take(Metric::Gpu, &GpuSampler::new(stats.clone())),
        Reading::take(Metric::Cpu, &CpuSampler::new(cpu_usage, stats)),
        Reading::take(
            Metric::Governor,
            &GovernorSampler::new(Arc::new(config.governor_reader())),
        ),
    ];

    if json {
        println!("{}", serde_json::to_string_pretty(&readings)?);
        return Ok(());
    }

    println!("  {:<10} {:<20} {}", "Metric", "Reading", "Source");
    println!("  {}", "-".repeat(72));
    for r in &readings {
        let label = r.metric.label();
        match (&r.value, &r.error) {
            (Some(value), _) => {
                let source = source_path(r.metric, &config);
                println!("  {label:<10} {value:<20} {source}");
            }
            (None, Some(error)) => println!("  {label:<10} {:<20} {error}", "unavailable"),
            (None, None) => {}
        }
    }

    Ok(())
}

fn source_path(metric: Metric, config: &SamplerConfig) -> String {
    match metric {
        Metric::Ram => config.meminfo_path.display().to_string(),
        Metric::Gpu => config.gpu_load_path.display().to_string(),
        Metric::Cpu => format!("host + {}", config.thermal_path.display()),
        Metric::Governor => config.governor_path.display().to_string(),
    }
}
