// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for per-iteration sample formatting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resource_monitor::{CpuUsageSource, MonitorError, StatsProvider};
use sampler::{CpuSampler, GpuSampler, RamSampler, Sampler};
use std::sync::Arc;

struct Fixed;

impl StatsProvider for Fixed {
    fn memory_percentage(&self) -> Result<f32, MonitorError> {
        Ok(black_box(42.567))
    }

    fn gpu_usage(&self) -> Result<i32, MonitorError> {
        Ok(black_box(7))
    }

    fn cpu_temperature(&self) -> Result<f32, MonitorError> {
        Ok(black_box(55.5))
    }
}

impl CpuUsageSource for Fixed {
    fn cpu_percent(&self) -> Result<f32, MonitorError> {
        Ok(black_box(13.2))
    }
}

fn bench_ram(c: &mut Criterion) {
    let s = RamSampler::new(Arc::new(Fixed));
    c.bench_function("ram_sample", |b| b.iter(|| s.sample()));
}

fn bench_gpu(c: &mut Criterion) {
    let s = GpuSampler::new(Arc::new(Fixed));
    c.bench_function("gpu_sample", |b| b.iter(|| s.sample()));
}

fn bench_cpu(c: &mut Criterion) {
    let s = CpuSampler::new(Arc::new(Fixed), Arc::new(Fixed));
    c.bench_function("cpu_sample", |b| b.iter(|| s.sample()));
}

criterion_group!(benches, bench_ram, bench_gpu, bench_cpu);
criterion_main!(benches);
