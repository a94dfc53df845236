// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Capability traits consumed by the samplers, plus the sysfs-backed
//! [`StatsProvider`].

use crate::{GpuLoad, MemoryInfo, MonitorError, ThermalInfo};
use crate::{gpu::GPU_LOAD_PATH, memory::MEMINFO_PATH, thermal::THERMAL_ZONE_PATH};
use std::path::PathBuf;

/// Hardware counters: memory, GPU and CPU temperature.
pub trait StatsProvider: Send + Sync {
    /// Share of physical memory in use, in `[0.0, 100.0]`.
    fn memory_percentage(&self) -> Result<f32, MonitorError>;

    /// GPU busy percentage.
    fn gpu_usage(&self) -> Result<i32, MonitorError>;

    /// SoC temperature in degrees Celsius.
    fn cpu_temperature(&self) -> Result<f32, MonitorError>;
}

/// Host-wide CPU utilisation, aggregated over all cores.
pub trait CpuUsageSource: Send + Sync {
    fn cpu_percent(&self) -> Result<f32, MonitorError>;
}

/// Active CPU frequency-scaling governor.
pub trait GovernorReader: Send + Sync {
    fn read_governor(&self) -> Result<String, MonitorError>;
}

/// [`StatsProvider`] reading `/proc/meminfo`, a thermal zone and a devfreq
/// GPU load file.
#[derive(Debug, Clone)]
pub struct SysfsStats {
    meminfo_path: PathBuf,
    thermal_path: PathBuf,
    gpu_load_path: PathBuf,
}

impl SysfsStats {
    /// Uses the default kernel paths.
    pub fn new() -> Self {
        Self {
            meminfo_path: PathBuf::from(MEMINFO_PATH),
            thermal_path: PathBuf::from(THERMAL_ZONE_PATH),
            gpu_load_path: PathBuf::from(GPU_LOAD_PATH),
        }
    }

    pub fn with_meminfo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.meminfo_path = path.into();
        self
    }

    pub fn with_thermal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.thermal_path = path.into();
        self
    }

    pub fn with_gpu_load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.gpu_load_path = path.into();
        self
    }
}

impl Default for SysfsStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsProvider for SysfsStats {
    fn memory_percentage(&self) -> Result<f32, MonitorError> {
        MemoryInfo::read_from(&self.meminfo_path).map(|m| m.percentage())
    }

    fn gpu_usage(&self) -> Result<i32, MonitorError> {
        GpuLoad::read_from(&self.gpu_load_path).map(|g| g.percent)
    }

    fn cpu_temperature(&self) -> Result<f32, MonitorError> {
        ThermalInfo::read_from(&self.thermal_path).map(|t| t.cpu_temp_celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysfs::write_temp;

    #[test]
    fn test_sysfs_stats_from_files() {
        let mem = write_temp(
            "provider_meminfo",
            "MemTotal: 1000 kB\nMemAvailable: 250 kB\n",
        );
        let therm = write_temp("provider_thermal", "61250\n");
        let gpu = write_temp("provider_gpu", "12@400000000Hz\n");

        let stats = SysfsStats::new()
            .with_meminfo_path(&mem)
            .with_thermal_path(&therm)
            .with_gpu_load_path(&gpu);

        assert!((stats.memory_percentage().unwrap() - 75.0).abs() < 0.001);
        assert!((stats.cpu_temperature().unwrap() - 61.25).abs() < 0.001);
        assert_eq!(stats.gpu_usage().unwrap(), 12);

        for p in [mem, therm, gpu] {
            let _ = std::fs::remove_file(p);
        }
    }

    #[test]
    fn test_missing_paths_are_not_available() {
        let stats = SysfsStats::new()
            .with_meminfo_path("/nonexistent/meminfo")
            .with_thermal_path("/nonexistent/temp")
            .with_gpu_load_path("/nonexistent/load");

        assert!(matches!(
            stats.memory_percentage(),
            Err(MonitorError::NotAvailable { .. })
        ));
        assert!(matches!(
            stats.cpu_temperature(),
            Err(MonitorError::NotAvailable { .. })
        ));
        assert!(matches!(
            stats.gpu_usage(),
            Err(MonitorError::NotAvailable { .. })
        ));
    }
}
