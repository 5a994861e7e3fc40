// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::consts::{DEFAULT_PROGRESS_INCREMENT, DEFAULT_TICK_INTERVAL_MS};
use crate::model::ProgressState;

/// How a progress run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    Completed,
    Cancelled { reached: ProgressState },
}

/// Cosmetic progress counter.
///
/// Every run starts at 0% and gains `increment` percent per `tick_interval`
/// until it reaches 100%. Nothing real is measured: the counter only delays
/// the moment a result is shown.
#[derive(Debug, Clone)]
pub struct ProgressSimulator {
    tick_interval: Duration,
    increment: u8,
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            DEFAULT_PROGRESS_INCREMENT,
        )
    }
}

impl ProgressSimulator {
    pub fn new(tick_interval: Duration, increment: u8) -> Self {
        Self {
            tick_interval,
            increment: increment.clamp(1, 100),
        }
    }

    /// A simulator that jumps straight to 100% on its first tick.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, 100)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn increment(&self) -> u8 {
        self.increment
    }

    /// Number of ticks a full run takes.
    pub fn ticks_per_run(&self) -> u32 {
        (100u32).div_ceil(self.increment as u32)
    }

    pub fn total_duration(&self) -> Duration {
        self.tick_interval * self.ticks_per_run()
    }

    /// Spawn the timer task for one run. Requires a tokio runtime.
    pub fn start(&self) -> ProgressRun {
        let (sender, receiver) = watch::channel(ProgressState::START);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(drive(
            self.tick_interval,
            self.increment,
            sender,
            cancel.clone(),
        ));

        ProgressRun {
            receiver,
            cancel,
            task: Some(task),
        }
    }
}

async fn drive(
    tick_interval: Duration,
    increment: u8,
    sender: watch::Sender<ProgressState>,
    cancel: CancellationToken,
) -> RunEnd {
    let mut state = ProgressState::START;

    if tick_interval.is_zero() {
        let _ = sender.send(ProgressState::COMPLETE);
        return RunEnd::Completed;
    }

    let mut ticker = tokio::time::interval(tick_interval);
    // first tick of a tokio interval fires immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                return RunEnd::Cancelled { reached: state };
            }
            _ = ticker.tick() => {
                state = state.advance(increment);
                // receivers may be gone; the run still completes
                let _ = sender.send(state);
                if state.is_complete() {
                    return RunEnd::Completed;
                }
            }
        }
    }
}

/// Handle to one running progress timer.
///
/// Dropping the handle clears the timer, so at most one timer is alive for a
/// session that always replaces its previous run.
#[derive(Debug)]
pub struct ProgressRun {
    receiver: watch::Receiver<ProgressState>,
    cancel: CancellationToken,
    task: Option<JoinHandle<RunEnd>>,
}

impl ProgressRun {
    pub fn subscribe(&self) -> watch::Receiver<ProgressState> {
        self.receiver.clone()
    }

    pub fn current(&self) -> ProgressState {
        *self.receiver.borrow()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the run to end. Consumes the handle, so completion is
    /// observed exactly once.
    pub async fn finished(mut self) -> RunEnd {
        let reached = self.current();
        match self.task.take() {
            Some(task) => task.await.unwrap_or(RunEnd::Cancelled { reached }),
            None => RunEnd::Cancelled { reached },
        }
    }
}

impl Drop for ProgressRun {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> ProgressSimulator {
        ProgressSimulator::new(Duration::from_millis(1), 10)
    }

    #[test]
    fn run_length_follows_increment() {
        assert_eq!(fast().ticks_per_run(), 10);
        assert_eq!(ProgressSimulator::new(Duration::from_millis(50), 30).ticks_per_run(), 4);
        assert_eq!(
            ProgressSimulator::new(Duration::from_millis(50), 30).total_duration(),
            Duration::from_millis(200)
        );
        assert_eq!(ProgressSimulator::new(Duration::from_millis(1), 0).increment(), 1);
    }

    #[tokio::test]
    async fn progress_is_monotonic_from_zero_to_hundred() {
        let run = fast().start();
        let mut receiver = run.subscribe();

        let mut seen = vec![*receiver.borrow_and_update()];
        while receiver.changed().await.is_ok() {
            let state = *receiver.borrow_and_update();
            seen.push(state);
            if state.is_complete() {
                break;
            }
        }

        assert_eq!(seen.first(), Some(&ProgressState::START));
        assert_eq!(seen.last(), Some(&ProgressState::COMPLETE));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(run.finished().await, RunEnd::Completed);
    }

    #[tokio::test]
    async fn cancel_stops_the_timer() {
        let run = ProgressSimulator::new(Duration::from_secs(60), 10).start();
        run.cancel();
        assert!(matches!(run.finished().await, RunEnd::Cancelled { .. }));
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels() {
        let run = ProgressSimulator::new(Duration::from_secs(60), 10).start();
        let token = run.cancel.clone();
        drop(run);
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn instant_completes_immediately() {
        let run = ProgressSimulator::instant().start();
        assert_eq!(run.finished().await, RunEnd::Completed);
    }
}
