// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the sampler crate.

/// Errors surfaced to callers that configure samplers.
///
/// Faults raised *inside* a running worker never leave it as a `Result`;
/// they go to the worker's [`ErrorSink`](crate::ErrorSink) instead.
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// Configuration could not be read or is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
