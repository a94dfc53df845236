// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU thermal monitoring via `/sys/class/thermal/`.
//!
//! Thermal zone 0 reports the SoC temperature in millidegrees Celsius on
//! every ARM board this crate targets.

use crate::sysfs::read_sysfs_file;
use crate::MonitorError;
use std::path::Path;

/// Default sysfs path for the CPU thermal zone.
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Thermal state of the SoC.
#[derive(Debug, Clone)]
pub struct ThermalInfo {
    /// CPU temperature in degrees Celsius.
    pub cpu_temp_celsius: f32,
}

impl ThermalInfo {
    /// Reads the CPU temperature from a specific sysfs path.
    ///
    /// The kernel reports millidegrees (`54321` means 54.321 °C).
    pub fn read_from(path: &Path) -> Result<Self, MonitorError> {
        let content = read_sysfs_file(path)?;
        let millidegrees: i64 = content.parse::<i64>().map_err(|_| {
            MonitorError::parse(path, format!("expected integer millidegrees, got '{content}'"))
        })?;

        Ok(Self {
            cpu_temp_celsius: millidegrees as f32 / 1000.0,
        })
    }
}
