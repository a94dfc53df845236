// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The four metric samplers and their shared formatting rules.
//!
//! | Sampler | Source | Emitted text |
//! |---------|--------|--------------|
//! | [`RamSampler`] | memory percentage | `42.57` (2 decimals) |
//! | [`GpuSampler`] | GPU load | `7` (single semicolon field) |
//! | [`CpuSampler`] | host CPU % + SoC temperature | `13.2;55.5` |
//! | [`GovernorSampler`] | cpufreq governor file | `schedutil` |

mod cpu;
mod governor;
mod gpu;
mod ram;

pub use cpu::CpuSampler;
pub use governor::GovernorSampler;
pub use gpu::GpuSampler;
pub use ram::RamSampler;

/// Separator between fields of a multi-value reading.
pub const FIELD_SEPARATOR: &str = ";";

/// Renders a float with the shortest text that round-trips, keeping at
/// least one fractional digit (`50.0`, not `50`).
pub(crate) fn decimal_string<T: std::fmt::Debug>(value: T) -> String {
    format!("{value:?}")
}

/// Rounds to two decimal places.
pub(crate) fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn join_fields<I>(fields: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fields.into_iter().collect::<Vec<_>>().join(FIELD_SEPARATOR)
}
