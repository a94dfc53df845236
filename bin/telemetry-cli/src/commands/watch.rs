// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `telemetry watch` command: run one worker per metric and print readings.
//!
//! Each worker gets its own task and its own emission channel; a forwarder
//! task per channel prints `<metric>: <reading>`. Ctrl-C stops every
//! worker; the command returns once all of them have emitted their
//! terminal event.

use super::{settled_cpu_usage, Metric};
use resource_monitor::{CpuUsageSource, GovernorReader, MonitorError, StatsProvider};
use sampler::{
    emission_channel, CpuSampler, Emission, EmissionReceiver, Emitter, ErrorSink, GovernorSampler,
    GpuSampler, RamSampler, Sampler, SamplerConfig, StopHandle, Worker,
};
use std::sync::Arc;
use tokio::task::JoinSet;

pub async fn execute(
    config: SamplerConfig,
    only: Vec<Metric>,
    count: Option<usize>,
) -> anyhow::Result<()> {
    let metrics = if only.is_empty() {
        Metric::ALL.to_vec()
    } else {
        only
    };

    let stats: Arc<dyn StatsProvider> = Arc::new(config.stats_provider());
    let governor: Arc<dyn GovernorReader> = Arc::new(config.governor_reader());
    let cpu_usage = if metrics.contains(&Metric::Cpu) {
        let usage: Arc<dyn CpuUsageSource> = settled_cpu_usage().await;
        Some(usage)
    } else {
        None
    };
    let sink: Arc<dyn ErrorSink> = Arc::new(report_fault);
    let launcher = Launcher {
        config: &config,
        sink,
    };

    tracing::info!(metrics = ?metrics, pacing = %config.pacing, "starting workers");

    let mut stops = Vec::with_capacity(metrics.len());
    let mut forwarders = JoinSet::new();

    for metric in metrics {
        let (emitter, rx) = emission_channel();
        let stop = match metric {
            Metric::Ram => launcher.launch(RamSampler::new(Arc::clone(&stats)), emitter),
            Metric::Gpu => launcher.launch(GpuSampler::new(Arc::clone(&stats)), emitter),
            Metric::Cpu => match &cpu_usage {
                Some(usage) => launcher.launch(
                    CpuSampler::new(Arc::clone(usage), Arc::clone(&stats)),
                    emitter,
                ),
                None => continue,
            },
            Metric::Governor => {
                launcher.launch(GovernorSampler::new(Arc::clone(&governor)), emitter)
            }
        };
        forwarders.spawn(forward(metric, rx, stop.clone(), count));
        stops.push(stop);
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupt received, stopping workers");
                for stop in &stops {
                    stop.stop();
                }
            }
            joined = forwarders.join_next() => match joined {
                Some(result) => {
                    result?;
                }
                None => break,
            },
        }
    }

    Ok(())
}

struct Launcher<'a> {
    config: &'a SamplerConfig,
    sink: Arc<dyn ErrorSink>,
}

impl Launcher<'_> {
    fn launch<S: Sampler + 'static>(&self, sampler: S, emitter: Emitter) -> StopHandle {
        let worker = Worker::new(sampler, emitter)
            .with_pacing(self.config.pacing)
            .with_error_sink(Arc::clone(&self.sink));
        let stop = worker.stop_handle();
        tokio::spawn(async move { worker.start().await });
        stop
    }
}

/// Prints readings until the worker's channel closes and returns how many
/// were seen. Stops the worker once `limit` readings have arrived.
async fn forward(
    metric: Metric,
    mut rx: EmissionReceiver,
    stop: StopHandle,
    limit: Option<usize>,
) -> usize {
    let mut seen = 0usize;
    while let Some(emission) = rx.recv().await {
        match emission {
            Emission::Progress(text) => {
                println!("{}: {text}", metric.label());
                seen += 1;
                if limit.is_some_and(|n| seen >= n) {
                    stop.stop();
                }
            }
            Emission::Finished => {
                tracing::debug!(metric = metric.label(), readings = seen, "worker finished");
            }
        }
    }
    seen
}

/// The CLI's error popup.
fn report_fault(sampler: &'static str, error: &MonitorError) {
    eprintln!("error: {sampler} sampler stopped: {error}");
}
