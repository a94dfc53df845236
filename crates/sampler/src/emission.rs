// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The channel a worker streams its readings through.
//!
//! Per worker: zero or more [`Emission::Progress`], then at most one
//! terminal event. The worker owns the only [`Emitter`]; once the worker is
//! dropped the receiver drains and then yields `None`.

use tokio::sync::mpsc;

/// An event emitted by a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// One formatted reading.
    Progress(String),
    /// The loop exited after a stop request.
    Finished,
}

impl Emission {
    /// Returns the reading text, if this is a progress event.
    pub fn text(&self) -> Option<&str> {
        match self {
            Emission::Progress(text) => Some(text),
            Emission::Finished => None,
        }
    }
}

/// Receive side, owned by the consumer.
pub type EmissionReceiver = mpsc::UnboundedReceiver<Emission>;

/// Send side, owned by exactly one worker.
#[derive(Debug)]
pub struct Emitter {
    tx: mpsc::UnboundedSender<Emission>,
}

/// Creates a connected emitter/receiver pair.
pub fn emission_channel() -> (Emitter, EmissionReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Emitter { tx }, rx)
}

impl Emitter {
    pub(crate) fn progress(&self, text: String) {
        self.send(Emission::Progress(text));
    }

    pub(crate) fn finished(&self) {
        self.send(Emission::Finished);
    }

    // A vanished consumer does not stop the worker.
    fn send(&self, emission: Emission) {
        if self.tx.send(emission).is_err() {
            tracing::trace!("emission dropped: receiver closed");
        }
    }
}
