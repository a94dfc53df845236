// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU frequency governor lookup.
//!
//! The governor of policy 0 is read from cpufreq sysfs. The file holds a
//! single line such as `schedutil`; only the first whitespace-separated
//! token is taken.

use crate::sysfs::read_sysfs_file;
use crate::{GovernorReader, MonitorError};
use std::path::{Path, PathBuf};

/// Default cpufreq governor file for the first CPU policy.
pub const GOVERNOR_PATH: &str = "/sys/devices/system/cpu/cpufreq/policy0/scaling_governor";

/// [`GovernorReader`] backed by a cpufreq `scaling_governor` file.
#[derive(Debug, Clone)]
pub struct SysfsGovernor {
    path: PathBuf,
}

impl SysfsGovernor {
    /// Reads from [`GOVERNOR_PATH`].
    pub fn new() -> Self {
        Self::with_path(GOVERNOR_PATH)
    }

    /// Reads from an arbitrary file (alternate policies, tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for SysfsGovernor {
    fn default() -> Self {
        Self::new()
    }
}

impl GovernorReader for SysfsGovernor {
    fn read_governor(&self) -> Result<String, MonitorError> {
        let content = read_sysfs_file(&self.path)?;
        parse_governor(&content, &self.path)
    }
}

/// Extracts the governor name from the file content: first line, first token.
pub(crate) fn parse_governor(content: &str, source_path: &Path) -> Result<String, MonitorError> {
    content
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
        .ok_or_else(|| MonitorError::parse(source_path, "governor file is empty"))
}
