// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # resource-monitor
//!
//! Reads hardware and OS counters on Linux ARM boards for the telemetry
//! samplers.
//!
//! # Capabilities
//! The samplers only see three traits:
//! - [`StatsProvider`]: memory percentage, GPU load, CPU temperature.
//! - [`CpuUsageSource`]: aggregate CPU utilisation from the host OS.
//! - [`GovernorReader`]: the active cpufreq governor.
//!
//! # Default implementations
//! - [`SysfsStats`]: `/proc/meminfo`, thermal zone 0, devfreq GPU `load`.
//! - [`HostCpuUsage`]: `sysinfo` global CPU usage.
//! - [`SysfsGovernor`]: `cpufreq/policy0/scaling_governor`.
//!
//! Every path is overridable so the same code runs against fixture files.
//!
//! # Example
//! ```no_run
//! use resource_monitor::{StatsProvider, SysfsStats};
//!
//! let stats = SysfsStats::new();
//! println!("memory in use: {:.2}%", stats.memory_percentage().unwrap());
//! ```

mod cpu;
mod error;
mod governor;
mod gpu;
mod memory;
mod provider;
mod sysfs;
mod thermal;

pub use cpu::{HostCpuUsage, CPU_SETTLE_INTERVAL};
pub use error::MonitorError;
pub use governor::{SysfsGovernor, GOVERNOR_PATH};
pub use gpu::{GpuLoad, GPU_LOAD_PATH};
pub use memory::{MemoryInfo, MEMINFO_PATH};
pub use provider::{CpuUsageSource, GovernorReader, StatsProvider, SysfsStats};
pub use thermal::{ThermalInfo, THERMAL_ZONE_PATH};
