// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Where sampler faults are reported.

use resource_monitor::MonitorError;

/// Receives a notification when a worker terminates on a fault.
///
/// Called at most once per worker, from the worker's own task, before the
/// error sentinel is emitted. Implementations should return promptly.
pub trait ErrorSink: Send + Sync {
    fn notify(&self, sampler: &'static str, error: &MonitorError);
}

/// Default sink: logs the fault with `tracing::error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn notify(&self, sampler: &'static str, error: &MonitorError) {
        tracing::error!(sampler, error = %error, "sampler fault");
    }
}

impl<F> ErrorSink for F
where
    F: Fn(&'static str, &MonitorError) + Send + Sync,
{
    fn notify(&self, sampler: &'static str, error: &MonitorError) {
        self(sampler, error)
    }
}
