// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sampler configuration loaded from TOML files or built programmatically.
//!
//! # TOML Format
//! ```toml
//! meminfo_path = "/proc/meminfo"
//! thermal_path = "/sys/class/thermal/thermal_zone0/temp"
//! gpu_load_path = "/sys/class/devfreq/fb000000.gpu/load"
//! governor_path = "/sys/devices/system/cpu/cpufreq/policy0/scaling_governor"
//! pacing = "after-sample"
//! ```
//!
//! Every key is optional. The sampling interval is fixed and not a key;
//! unknown keys are rejected.

use crate::{Pacing, SamplerError};
use resource_monitor::{
    SysfsGovernor, SysfsStats, GOVERNOR_PATH, GPU_LOAD_PATH, MEMINFO_PATH, THERMAL_ZONE_PATH,
};
use std::path::{Path, PathBuf};

/// Data-source paths and pacing for a set of workers.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// `/proc/meminfo`-formatted file for the RAM sampler.
    pub meminfo_path: PathBuf,
    /// Thermal zone file (millidegrees) for the CPU sampler.
    pub thermal_path: PathBuf,
    /// devfreq `load` file for the GPU sampler.
    pub gpu_load_path: PathBuf,
    /// cpufreq `scaling_governor` file for the governor sampler.
    pub governor_path: PathBuf,
    /// How the fixed interval is measured.
    pub pacing: Pacing,
}

impl SamplerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SamplerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SamplerError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SamplerError> {
        toml::from_str(toml_str)
            .map_err(|e| SamplerError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SamplerError> {
        toml::to_string_pretty(self)
            .map_err(|e| SamplerError::Config(format!("TOML serialise error: {e}")))
    }

    /// Builds the sysfs stats provider for these paths.
    pub fn stats_provider(&self) -> SysfsStats {
        SysfsStats::new()
            .with_meminfo_path(&self.meminfo_path)
            .with_thermal_path(&self.thermal_path)
            .with_gpu_load_path(&self.gpu_load_path)
    }

    /// Builds the governor reader for this path.
    pub fn governor_reader(&self) -> SysfsGovernor {
        SysfsGovernor::with_path(&self.governor_path)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            meminfo_path: PathBuf::from(MEMINFO_PATH),
            thermal_path: PathBuf::from(THERMAL_ZONE_PATH),
            gpu_load_path: PathBuf::from(GPU_LOAD_PATH),
            governor_path: PathBuf::from(GOVERNOR_PATH),
            pacing: Pacing::AfterSample,
        }
    }
}
