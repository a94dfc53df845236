// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! GPU usage sampler.

use super::join_fields;
use crate::Sampler;
use resource_monitor::{MonitorError, StatsProvider};
use std::sync::Arc;

/// Emits the integer GPU load as a one-field semicolon record, which for a
/// single field is just the number.
pub struct GpuSampler {
    stats: Arc<dyn StatsProvider>,
}

impl GpuSampler {
    pub fn new(stats: Arc<dyn StatsProvider>) -> Self {
        Self { stats }
    }
}

impl Sampler for GpuSampler {
    fn name(&self) -> &'static str {
        "gpu"
    }

    fn sample(&self) -> Result<String, MonitorError> {
        let usage = self.stats.gpu_usage()?;
        Ok(join_fields([usage.to_string()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::fakes::FixedStats;

    #[test]
    fn test_integer_usage() {
        let s = GpuSampler::new(Arc::new(FixedStats::new(0.0, 7, 0.0)));
        assert_eq!(s.sample().unwrap(), "7");
    }

    #[test]
    fn test_idle_gpu() {
        let s = GpuSampler::new(Arc::new(FixedStats::new(0.0, 0, 0.0)));
        assert_eq!(s.sample().unwrap(), "0");
    }

    #[test]
    fn test_provider_fault_propagates() {
        let s = GpuSampler::new(Arc::new(FixedStats::failing()));
        assert!(s.sample().is_err());
    }
}
