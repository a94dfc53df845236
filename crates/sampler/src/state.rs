// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Worker run state shared between the loop and whoever stops it.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

const IDLE: u8 = 0;
const RUNNING: u8 = 1;
const STOPPING: u8 = 2;
const DONE: u8 = 3;

/// Lifecycle phase of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not yet started.
    Idle,
    /// Loop is active.
    Running,
    /// Stop requested; the loop exits at its next flag check.
    Stopping,
    /// Terminal event emitted. The worker is inert.
    Done,
}

impl Phase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            IDLE => Phase::Idle,
            RUNNING => Phase::Running,
            STOPPING => Phase::Stopping,
            _ => Phase::Done,
        }
    }
}

/// Atomic run flag. Only `Running` counts as "running".
#[derive(Debug, Clone, Default)]
pub(crate) struct RunState(Arc<AtomicU8>);

impl RunState {
    /// `Idle -> Running`. On failure returns the phase that blocked it.
    pub(crate) fn begin(&self) -> Result<(), Phase> {
        self.0
            .compare_exchange(IDLE, RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(Phase::from_raw)
    }

    /// `Idle | Running -> Stopping`; later phases are left alone.
    pub(crate) fn request_stop(&self) {
        let _ = self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| match raw {
                IDLE | RUNNING => Some(STOPPING),
                _ => None,
            });
    }

    pub(crate) fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire) == RUNNING
    }

    /// Marks the worker terminal. Returns `false` if it already was.
    pub(crate) fn finish(&self) -> bool {
        self.0.swap(DONE, Ordering::AcqRel) != DONE
    }

    pub(crate) fn phase(&self) -> Phase {
        Phase::from_raw(self.0.load(Ordering::Acquire))
    }
}

/// Cloneable handle that stops a worker from any thread or task.
#[derive(Debug, Clone)]
pub struct StopHandle {
    state: RunState,
}

impl StopHandle {
    pub(crate) fn new(state: RunState) -> Self {
        Self { state }
    }

    /// Requests the worker to stop. Idempotent.
    pub fn stop(&self) {
        self.state.request_stop();
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
