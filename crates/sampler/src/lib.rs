// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # sampler
//!
//! Background telemetry workers. Each [`Worker`] repeatedly takes one
//! reading from its [`Sampler`], streams it as text through an emission
//! channel, waits a fixed second, and repeats until stopped.
//!
//! # Lifecycle
//! ```text
//! let (emitter, rx) = emission_channel();
//! let worker = Worker::new(RamSampler::new(stats), emitter);
//! tokio::spawn(async move { worker.start().await });   // owns its task
//!
//! rx: Progress("42.57"), Progress("42.61"), ... , Finished
//! ```
//!
//! - `stop()` is cooperative: the loop exits at its next flag check, after
//!   the current sleep. Worst-case latency is one interval plus one sample.
//! - Exactly one terminal event per worker: [`Emission::Finished`] after a
//!   stop, or the [`ERROR_SENTINEL`] progress value after a fault.
//! - A faulting worker notifies its [`ErrorSink`] once and emits no
//!   `Finished`. All four samplers share this policy.
//! - A worker that reached its terminal event is inert; build a new one.
//!
//! # Samplers
//! [`RamSampler`], [`GpuSampler`], [`CpuSampler`], [`GovernorSampler`].
//! Their data sources are the capability traits of `resource-monitor`.

mod config;
mod emission;
mod error;
mod sink;
mod state;
mod ticker;
mod worker;

pub mod samplers;

pub use config::SamplerConfig;
pub use emission::{emission_channel, Emission, EmissionReceiver, Emitter};
pub use error::SamplerError;
pub use samplers::{CpuSampler, GovernorSampler, GpuSampler, RamSampler, FIELD_SEPARATOR};
pub use sink::{ErrorSink, LogErrorSink};
pub use state::{Phase, StopHandle};
pub use ticker::{Pacing, SAMPLE_INTERVAL};
pub use worker::{Sampler, Worker, ERROR_SENTINEL};
