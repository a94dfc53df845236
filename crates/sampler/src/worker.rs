// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The worker lifecycle shared by every sampler.
//!
//! ```text
//!            start()                    stop()
//!   Idle ───────────▶ Running ─────────────────▶ Stopping
//!    │                 │  ▲  sample ok: Progress     │ loop wakes
//!    │ stop()          │  └──────────────────────┘   ▼
//!    ▼                 │ sample fault:             Done + Finished
//!  Stopping            └──▶ sink.notify, Progress("error"), Done
//!    │ start()
//!    ▼
//!  Done + Finished
//! ```
//!
//! [`Worker`] owns the run flag, the emitter, the error sink and the pacing.
//! A [`Sampler`] only knows how to take and format one reading.

use crate::state::{Phase, RunState, StopHandle};
use crate::ticker::{Pacing, Ticker, SAMPLE_INTERVAL};
use crate::{Emitter, ErrorSink, LogErrorSink};
use resource_monitor::MonitorError;
use std::sync::Arc;

/// Literal emitted as the last progress value when a worker fails.
pub const ERROR_SENTINEL: &str = "error";

/// One metric: how to acquire a reading and render it as text.
pub trait Sampler: Send + Sync {
    /// Short identifier used in logs and error reports.
    fn name(&self) -> &'static str;

    /// Acquires and formats one reading.
    fn sample(&self) -> Result<String, MonitorError>;
}

/// Runs a [`Sampler`] in a loop until stopped or until it faults.
///
/// # Example
/// ```no_run
/// use sampler::{emission_channel, Emission, GovernorSampler, Worker};
/// use resource_monitor::SysfsGovernor;
/// use std::sync::Arc;
///
/// # async fn example() {
/// let (emitter, mut rx) = emission_channel();
/// let worker = Worker::new(GovernorSampler::new(Arc::new(SysfsGovernor::new())), emitter);
/// let stop = worker.stop_handle();
/// tokio::spawn(async move { worker.start().await });
///
/// if let Some(Emission::Progress(governor)) = rx.recv().await {
///     println!("governor: {governor}");
/// }
/// stop.stop();
/// # }
/// ```
pub struct Worker<S> {
    sampler: S,
    state: RunState,
    emitter: Emitter,
    errors: Arc<dyn ErrorSink>,
    pacing: Pacing,
}

impl<S: Sampler> Worker<S> {
    /// Creates an idle worker that reports faults to [`LogErrorSink`] and
    /// paces with [`Pacing::AfterSample`].
    pub fn new(sampler: S, emitter: Emitter) -> Self {
        Self {
            sampler,
            state: RunState::default(),
            emitter,
            errors: Arc::new(LogErrorSink),
            pacing: Pacing::default(),
        }
    }

    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.errors = sink;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn name(&self) -> &'static str {
        self.sampler.name()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns a handle that can stop this worker from another task.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle::new(self.state.clone())
    }

    /// Requests the loop to exit after its current iteration. Idempotent,
    /// and a no-op once the worker has emitted its terminal event.
    pub fn stop(&self) {
        self.state.request_stop();
    }

    /// Runs the sampling loop on the calling task until it exits.
    ///
    /// Spawn this on its own task; it does not return while running. A
    /// stop requested before `start` is honoured: the worker emits
    /// [`Finished`](crate::Emission::Finished) without sampling. Calling
    /// `start` again after the terminal event does nothing.
    pub async fn start(&self) {
        match self.state.begin() {
            Ok(()) => self.run_loop().await,
            Err(Phase::Stopping) => {
                tracing::debug!(sampler = self.name(), "stopped before start");
                self.finish();
            }
            Err(phase) => {
                tracing::warn!(sampler = self.name(), ?phase, "start ignored");
            }
        }
    }

    async fn run_loop(&self) {
        let name = self.name();
        let mut ticker = Ticker::new(self.pacing, SAMPLE_INTERVAL);
        tracing::info!(sampler = name, pacing = %self.pacing, "worker started");

        while self.state.is_running() {
            match self.sampler.sample() {
                Ok(text) => {
                    tracing::debug!(sampler = name, %text, "progress");
                    self.emitter.progress(text);
                }
                Err(error) => {
                    self.fail(&error);
                    return;
                }
            }
            ticker.wait().await;
        }

        self.finish();
    }

    fn finish(&self) {
        if self.state.finish() {
            tracing::info!(sampler = self.name(), "worker finished");
            self.emitter.finished();
        }
    }

    // Fault path: report, emit the sentinel, go terminal without Finished.
    fn fail(&self, error: &MonitorError) {
        if !self.state.finish() {
            return;
        }
        self.errors.notify(self.name(), error);
        self.emitter.progress(ERROR_SENTINEL.to_string());
        tracing::debug!(sampler = self.name(), "worker terminated by fault");
    }
}

impl<S: Sampler> std::fmt::Debug for Worker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("sampler", &self.name())
            .field("phase", &self.phase())
            .field("pacing", &self.pacing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{emission_channel, Emission, EmissionReceiver};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Counts up from 0; fails once `fail_at` readings have been taken.
    struct Counter {
        taken: AtomicUsize,
        fail_at: Option<usize>,
    }

    impl Counter {
        fn new() -> Self {
            Self {
                taken: AtomicUsize::new(0),
                fail_at: None,
            }
        }

        fn failing_at(n: usize) -> Self {
            Self {
                taken: AtomicUsize::new(0),
                fail_at: Some(n),
            }
        }
    }

    impl Sampler for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn sample(&self) -> Result<String, MonitorError> {
            let n = self.taken.fetch_add(1, Ordering::SeqCst);
            if self.fail_at == Some(n) {
                return Err(MonitorError::Unsupported {
                    detail: "counter exhausted".into(),
                });
            }
            Ok(n.to_string())
        }
    }

    async fn drain(mut rx: EmissionReceiver) -> Vec<Emission> {
        let mut out = Vec::new();
        while let Some(e) = rx.recv().await {
            out.push(e);
        }
        out
    }

    fn progress(values: &[&str]) -> Vec<Emission> {
        values
            .iter()
            .map(|v| Emission::Progress(v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_stop_before_start_emits_only_finished() {
        let (emitter, rx) = emission_channel();
        let worker = Worker::new(Counter::new(), emitter);
        worker.stop();
        worker.start().await;
        assert_eq!(worker.phase(), Phase::Done);
        drop(worker);

        assert_eq!(drain(rx).await, vec![Emission::Finished]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_until_stopped() {
        let (emitter, rx) = emission_channel();
        let worker = Worker::new(Counter::new(), emitter);
        let stop = worker.stop_handle();
        let handle = tokio::spawn(async move { worker.start().await });

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert!(stop.is_running());
        stop.stop();
        handle.await.unwrap();

        let mut expected = progress(&["0", "1", "2", "3"]);
        expected.push(Emission::Finished);
        assert_eq!(drain(rx).await, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_stop_emits_one_finished() {
        let (emitter, rx) = emission_channel();
        let worker = Worker::new(Counter::new(), emitter);
        let stop = worker.stop_handle();
        let handle = tokio::spawn(async move { worker.start().await });

        tokio::time::sleep(Duration::from_millis(500)).await;
        stop.stop();
        stop.stop();
        handle.await.unwrap();
        stop.stop();

        let events = drain(rx).await;
        let finished = events.iter().filter(|e| **e == Emission::Finished).count();
        assert_eq!(finished, 1);
        assert_eq!(events.last(), Some(&Emission::Finished));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fault_reports_once_and_skips_finished() {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let reports = Arc::clone(&reports);
            move |name: &'static str, err: &MonitorError| {
                reports.lock().unwrap().push(format!("{name}: {err}"));
            }
        };

        let (emitter, rx) = emission_channel();
        let worker = Worker::new(Counter::failing_at(2), emitter).with_error_sink(Arc::new(sink));
        worker.start().await;
        assert_eq!(worker.phase(), Phase::Done);
        drop(worker);

        assert_eq!(drain(rx).await, progress(&["0", "1", ERROR_SENTINEL]));
        let reports = reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("counter: "));
    }

    #[tokio::test]
    async fn test_restart_after_terminal_is_inert() {
        let (emitter, rx) = emission_channel();
        let worker = Worker::new(Counter::new(), emitter);
        worker.stop();
        worker.start().await;
        worker.start().await;
        worker.stop();
        drop(worker);

        assert_eq!(drain(rx).await, vec![Emission::Finished]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_consumer_gone_does_not_stop_worker() {
        let (emitter, rx) = emission_channel();
        drop(rx);
        let worker = Worker::new(Counter::new(), emitter);
        let stop = worker.stop_handle();
        let handle = tokio::spawn(async move { worker.start().await });

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(stop.is_running());
        stop.stop();
        handle.await.unwrap();
    }

    #[test]
    fn test_debug_format() {
        let (emitter, _rx) = emission_channel();
        let worker = Worker::new(Counter::new(), emitter).with_pacing(Pacing::FixedRate);
        let debug = format!("{worker:?}");
        assert!(debug.contains("counter"));
        assert!(debug.contains("Idle"));
        assert!(debug.contains("FixedRate"));
    }
}
