// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! GPU utilisation via the devfreq `load` attribute.
//!
//! Mali GPUs on Rockchip SoCs expose their busy percentage through devfreq
//! as `<load>@<frequency>Hz`, e.g. `37@800000000Hz`. Some vendor kernels
//! drop the frequency suffix and print only the load. Only the load is kept.

use crate::sysfs::read_sysfs_file;
use crate::MonitorError;
use std::path::Path;

/// Default devfreq load file for the GPU.
pub const GPU_LOAD_PATH: &str = "/sys/class/devfreq/fb000000.gpu/load";

/// A single GPU load reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuLoad {
    /// Busy percentage over the last devfreq polling window.
    pub percent: i32,
}

impl GpuLoad {
    /// Reads the GPU load from a specific devfreq `load` file.
    pub fn read_from(path: &Path) -> Result<Self, MonitorError> {
        let content = read_sysfs_file(path)?;
        Self::parse(&content, path)
    }

    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, MonitorError> {
        let load = content.split_once('@').map_or(content, |(load, _)| load);
        let percent = load.trim().parse::<i32>().map_err(|_| {
            MonitorError::parse(source_path, format!("expected integer load, got '{content}'"))
        })?;
        Ok(Self { percent })
    }
}
