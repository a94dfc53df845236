// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU frequency governor sampler.

use crate::Sampler;
use resource_monitor::{GovernorReader, MonitorError};
use std::sync::Arc;

/// Emits the active governor name as plain text.
pub struct GovernorSampler {
    reader: Arc<dyn GovernorReader>,
}

impl GovernorSampler {
    pub fn new(reader: Arc<dyn GovernorReader>) -> Self {
        Self { reader }
    }
}

impl Sampler for GovernorSampler {
    fn name(&self) -> &'static str {
        "governor"
    }

    fn sample(&self) -> Result<String, MonitorError> {
        self.reader.read_governor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::fakes::FixedGovernor;

    #[test]
    fn test_governor_verbatim() {
        let s = GovernorSampler::new(Arc::new(FixedGovernor(Ok("performance"))));
        assert_eq!(s.sample().unwrap(), "performance");
    }

    #[test]
    fn test_unreadable_governor() {
        let s = GovernorSampler::new(Arc::new(FixedGovernor(Err(()))));
        assert!(matches!(s.sample(), Err(MonitorError::NotAvailable { .. })));
    }
}
