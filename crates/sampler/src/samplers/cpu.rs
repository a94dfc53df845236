// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU usage and temperature sampler.

use super::{decimal_string, join_fields};
use crate::Sampler;
use resource_monitor::{CpuUsageSource, MonitorError, StatsProvider};
use std::sync::Arc;

/// Emits `percent;temperature`.
///
/// The percent comes from the host OS counter and keeps its natural
/// precision. The temperature comes from the stats provider.
pub struct CpuSampler {
    usage: Arc<dyn CpuUsageSource>,
    stats: Arc<dyn StatsProvider>,
}

impl CpuSampler {
    pub fn new(usage: Arc<dyn CpuUsageSource>, stats: Arc<dyn StatsProvider>) -> Self {
        Self { usage, stats }
    }
}

impl Sampler for CpuSampler {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn sample(&self) -> Result<String, MonitorError> {
        let percent = self.usage.cpu_percent()?;
        let temperature = self.stats.cpu_temperature()?;
        Ok(join_fields([
            decimal_string(percent),
            decimal_string(temperature),
        ]))
    }
}
