// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Inter-sample waiting.
//!
//! The interval is fixed at [`SAMPLE_INTERVAL`]. What is selectable is how
//! the time spent acquiring a sample interacts with it:
//!
//! ```text
//! AfterSample:  |sample|----- 1000 ms -----|sample|----- 1000 ms -----|
//! FixedRate:    |sample|------ 1000 ms ------|sample|------ ...
//!               ^ ticks anchored at loop start, acquisition time absorbed
//! ```
//!
//! Neither wait can be cut short; a stop request is observed on wake-up.

use std::str::FromStr;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Time between two iterations of every worker.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(1000);

/// How the wait between iterations is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pacing {
    /// Sleep the full interval after each emission; the period drifts by
    /// the acquisition time.
    #[default]
    AfterSample,
    /// Ticks every interval from loop start regardless of acquisition time.
    /// A tick missed by a slow sample is delayed, not bursted.
    FixedRate,
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::AfterSample => "after-sample",
            Pacing::FixedRate => "fixed-rate",
        }
    }
}

impl std::fmt::Display for Pacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "after-sample" => Ok(Pacing::AfterSample),
            "fixed-rate" => Ok(Pacing::FixedRate),
            other => Err(format!(
                "unknown pacing '{other}'; expected 'after-sample' or 'fixed-rate'"
            )),
        }
    }
}

pub(crate) struct Ticker {
    kind: TickerKind,
}

enum TickerKind {
    Sleep(Duration),
    Interval(Interval),
}

impl Ticker {
    /// Must be called from within a tokio runtime.
    pub(crate) fn new(pacing: Pacing, period: Duration) -> Self {
        let kind = match pacing {
            Pacing::AfterSample => TickerKind::Sleep(period),
            Pacing::FixedRate => {
                let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                TickerKind::Interval(interval)
            }
        };
        Self { kind }
    }

    pub(crate) async fn wait(&mut self) {
        match &mut self.kind {
            TickerKind::Sleep(period) => tokio::time::sleep(*period).await,
            TickerKind::Interval(interval) => {
                interval.tick().await;
            }
        }
    }
}
