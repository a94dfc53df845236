// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Aggregate CPU utilisation from the host OS.
//!
//! Utilisation is a delta between two readings of the kernel's CPU time
//! counters, so [`HostCpuUsage`] keeps a long-lived [`sysinfo::System`] and
//! reports usage since the previous call. Construction takes the first
//! reading; the value returned by the very first query therefore covers the
//! time since construction.

use crate::{CpuUsageSource, MonitorError};
use std::sync::Mutex;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Minimum gap between two readings for the delta to mean anything.
pub const CPU_SETTLE_INTERVAL: Duration = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;

/// [`CpuUsageSource`] backed by `sysinfo`'s global (all-core) usage.
pub struct HostCpuUsage {
    system: Mutex<System>,
}

impl HostCpuUsage {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::new().with_cpu_usage()),
        );
        Self {
            system: Mutex::new(system),
        }
    }
}

impl Default for HostCpuUsage {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuUsageSource for HostCpuUsage {
    fn cpu_percent(&self) -> Result<f32, MonitorError> {
        let mut system = self.system.lock().map_err(|_| MonitorError::Unsupported {
            detail: "cpu usage counter lock poisoned".to_string(),
        })?;
        system.refresh_cpu_usage();
        if system.cpus().is_empty() {
            return Err(MonitorError::Unsupported {
                detail: "host reports no CPUs".to_string(),
            });
        }
        Ok(system.global_cpu_usage())
    }
}

impl std::fmt::Debug for HostCpuUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostCpuUsage").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_in_range() {
        let cpu = HostCpuUsage::new();
        std::thread::sleep(CPU_SETTLE_INTERVAL);
        if let Ok(pct) = cpu.cpu_percent() {
            assert!(pct >= 0.0);
            assert!(pct <= 100.0 + f32::EPSILON);
        }
    }
}
