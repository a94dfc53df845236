// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shared helper for reading single-value sysfs/procfs files.

use crate::MonitorError;
use std::path::Path;

/// Reads a sysfs/procfs file and returns its trimmed content.
///
/// A missing path maps to [`MonitorError::NotAvailable`] so callers can tell
/// "this board has no such counter" apart from a genuine I/O failure.
pub(crate) fn read_sysfs_file(path: &Path) -> Result<String, MonitorError> {
    if !path.exists() {
        return Err(MonitorError::NotAvailable {
            path: path.display().to_string(),
        });
    }
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| MonitorError::ReadError {
            path: path.display().to_string(),
            source: e,
        })
}

/// Temp-file helper shared by the unit tests of this crate.
#[cfg(test)]
pub(crate) fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("telemetry_sampler_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_content() {
        let p = write_temp("sysfs_trim", "  1234 \n");
        assert_eq!(read_sysfs_file(&p).unwrap(), "1234");
        let _ = std::fs::remove_file(&p);
    }

    #[test]
    fn test_missing_file() {
        let result = read_sysfs_file(Path::new("/nonexistent/sysfs/value"));
        assert!(matches!(result, Err(MonitorError::NotAvailable { .. })));
    }
}
