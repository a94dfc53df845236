// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System memory monitoring via `/proc/meminfo`.
//!
//! Parses `MemTotal` and `MemAvailable` to derive the share of physical
//! memory currently in use.

use crate::sysfs::read_sysfs_file;
use crate::MonitorError;
use std::path::Path;

/// Default path to the kernel memory info file.
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// System memory state.
#[derive(Debug, Clone)]
pub struct MemoryInfo {
    /// Total physical memory in bytes.
    pub total_bytes: u64,
    /// Available memory (as reported by the kernel) in bytes.
    ///
    /// Includes reclaimable cache, so `total - available` is what is
    /// actually pinned by processes and the kernel.
    pub available_bytes: u64,
    /// Memory in use in bytes (`total - available`).
    pub used_bytes: u64,
}

impl MemoryInfo {
    /// Reads memory information from a `/proc/meminfo`-formatted file.
    pub fn read_from(path: &Path) -> Result<Self, MonitorError> {
        let content = read_sysfs_file(path)?;
        Self::parse(&content, path)
    }

    /// Parses the content of a `/proc/meminfo`-formatted string.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, MonitorError> {
        let mut total_kb: Option<u64> = None;
        let mut available_kb: Option<u64> = None;

        for line in content.lines() {
            let mut parts = line.split_whitespace();
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            match key {
                "MemTotal:" => total_kb = Some(parse_kb_value(value, source_path)?),
                "MemAvailable:" => available_kb = Some(parse_kb_value(value, source_path)?),
                _ => {}
            }

            if total_kb.is_some() && available_kb.is_some() {
                break;
            }
        }

        let total_kb =
            total_kb.ok_or_else(|| MonitorError::parse(source_path, "MemTotal not found"))?;
        let available_kb = available_kb
            .ok_or_else(|| MonitorError::parse(source_path, "MemAvailable not found"))?;

        let total_bytes = total_kb * 1024;
        let available_bytes = available_kb * 1024;
        let used_bytes = total_bytes.saturating_sub(available_bytes);

        Ok(Self {
            total_bytes,
            available_bytes,
            used_bytes,
        })
    }

    /// Returns the memory in use as a percentage in `[0.0, 100.0]`.
    pub fn percentage(&self) -> f32 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        (self.used_bytes as f64 / self.total_bytes as f64 * 100.0) as f32
    }
}

/// Parses a numeric string from `/proc/meminfo` (values are in kB).
fn parse_kb_value(s: &str, source_path: &Path) -> Result<u64, MonitorError> {
    s.parse::<u64>().map_err(|_| {
        MonitorError::parse(source_path, format!("expected integer kB value, got '{s}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysfs::write_temp;

    const SAMPLE_MEMINFO: &str = "\
MemTotal:        4000000 kB
MemFree:          218456 kB
MemAvailable:    1000000 kB
Buffers:          123456 kB
Cached:          1987654 kB
";

    #[test]
    fn test_parse_meminfo() {
        let info = MemoryInfo::parse(SAMPLE_MEMINFO, Path::new(MEMINFO_PATH)).unwrap();
        assert_eq!(info.total_bytes, 4_000_000 * 1024);
        assert_eq!(info.available_bytes, 1_000_000 * 1024);
        assert_eq!(info.used_bytes, 3_000_000 * 1024);
    }

    #[test]
    fn test_percentage() {
        let info = MemoryInfo::parse(SAMPLE_MEMINFO, Path::new(MEMINFO_PATH)).unwrap();
        assert!((info.percentage() - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_percentage_zero_total() {
        let info = MemoryInfo {
            total_bytes: 0,
            available_bytes: 0,
            used_bytes: 0,
        };
        assert_eq!(info.percentage(), 0.0);
    }

    #[test]
    fn test_read_from_file() {
        let path = write_temp("meminfo_test", SAMPLE_MEMINFO);
        let info = MemoryInfo::read_from(&path).unwrap();
        assert_eq!(info.total_bytes, 4_000_000 * 1024);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_mem_available() {
        let incomplete = "MemTotal:        3884292 kB\nMemFree:          218456 kB\n";
        let result = MemoryInfo::parse(incomplete, Path::new(MEMINFO_PATH));
        assert!(matches!(result, Err(MonitorError::ParseError { .. })));
    }

    #[test]
    fn test_garbage_value() {
        let bad = "MemTotal:        lots kB\n";
        let result = MemoryInfo::parse(bad, Path::new(MEMINFO_PATH));
        assert!(matches!(result, Err(MonitorError::ParseError { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = MemoryInfo::read_from(Path::new("/nonexistent/proc/meminfo"));
        assert!(matches!(result, Err(MonitorError::NotAvailable { .. })));
    }

    #[test]
    fn test_read_real_meminfo() {
        if Path::new(MEMINFO_PATH).exists() {
            let info = MemoryInfo::read_from(Path::new(MEMINFO_PATH)).unwrap();
            assert!(info.total_bytes > 0);
            assert!((0.0..=100.0).contains(&info.percentage()));
        }
    }
}
