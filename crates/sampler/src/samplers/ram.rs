// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory usage sampler.

use super::{decimal_string, round_2dp};
use crate::Sampler;
use resource_monitor::{MonitorError, StatsProvider};
use std::sync::Arc;

/// Emits memory in use as a percentage rounded to two decimals, no unit.
pub struct RamSampler {
    stats: Arc<dyn StatsProvider>,
}

impl RamSampler {
    pub fn new(stats: Arc<dyn StatsProvider>) -> Self {
        Self { stats }
    }
}

impl Sampler for RamSampler {
    fn name(&self) -> &'static str {
        "ram"
    }

    fn sample(&self) -> Result<String, MonitorError> {
        let percent = self.stats.memory_percentage()?;
        Ok(decimal_string(round_2dp(f64::from(percent))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::fakes::FixedStats;

    fn ram(percent: f32) -> RamSampler {
        RamSampler::new(Arc::new(FixedStats::new(percent, 0, 0.0)))
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(ram(42.567).sample().unwrap(), "42.57");
    }

    #[test]
    fn test_whole_percent_keeps_fraction() {
        assert_eq!(ram(50.0).sample().unwrap(), "50.0");
    }

    #[test]
    fn test_short_fraction_not_padded() {
        assert_eq!(ram(12.5).sample().unwrap(), "12.5");
    }

    #[test]
    fn test_provider_fault_propagates() {
        let s = RamSampler::new(Arc::new(FixedStats::failing()));
        assert!(s.sample().is_err());
    }
}
