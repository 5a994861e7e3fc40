// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::engine::progress::{ProgressRun, ProgressSimulator, RunEnd};
use crate::errors::ToolError;
use crate::model::{ProgressState, ToolParameters, TransformResult};
use crate::observability::messages::engine::{
    ProgressAdvanced, RunCancelled, RunCompleted, RunRejected, RunStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Notice, Notifier, Tool};

/// Where a session is in its submit cycle.
///
/// `Idle → Validating → (Rejected → Idle) | (Running → Complete → Idle)`
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Validating,
    Rejected { reason: String },
    Running { progress: ProgressState },
    Complete { result: TransformResult },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Validating => "validating",
            SessionState::Rejected { .. } => "rejected",
            SessionState::Running { .. } => "running",
            SessionState::Complete { .. } => "complete",
        }
    }
}

/// UI state for one hosted tool.
///
/// Owns at most one progress run. Each submit clears the previous run's timer
/// before doing anything else; sessions never share state with each other.
pub struct ToolSession {
    tool_id: String,
    tool: Arc<dyn Tool>,
    simulator: ProgressSimulator,
    notifier: Arc<dyn Notifier>,
    state: SessionState,
    active_run: Option<ProgressRun>,
}

impl ToolSession {
    pub fn new(
        tool_id: impl Into<String>,
        tool: Arc<dyn Tool>,
        simulator: ProgressSimulator,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            tool_id: tool_id.into(),
            tool,
            simulator,
            notifier,
            state: SessionState::Idle,
            active_run: None,
        }
    }

    pub fn tool_id(&self) -> &str {
        &self.tool_id
    }

    pub fn tool(&self) -> &Arc<dyn Tool> {
        &self.tool
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Result of the last completed run, until the next submit or clear.
    pub fn result(&self) -> Option<&TransformResult> {
        match &self.state {
            SessionState::Complete { result } => Some(result),
            _ => None,
        }
    }

    pub async fn submit(&mut self, params: ToolParameters) -> Result<TransformResult, ToolError> {
        self.submit_with_observer(params, |_| {}).await
    }

    /// Validate, run the progress simulation, then transform.
    ///
    /// `observer` sees every progress value the session observes, starting at
    /// 0% and ending at 100%.
    pub async fn submit_with_observer<F>(
        &mut self,
        params: ToolParameters,
        mut observer: F,
    ) -> Result<TransformResult, ToolError>
    where
        F: FnMut(ProgressState),
    {
        self.cancel_active_run();

        self.state = SessionState::Validating;
        if let Err(err) = self.tool.validate(&params) {
            self.reject(&err);
            return Err(err);
        }

        let started_at = Instant::now();
        let started = RunStarted {
            tool_id: &self.tool_id,
            parameter_count: params.len(),
        };
        started.log();
        let span = started.span("submit");

        self.drive_progress(&mut observer).instrument(span).await;

        match self.tool.transform(&params) {
            Ok(result) => {
                RunCompleted {
                    tool_id: &self.tool_id,
                    result_kind: result.kind(),
                    duration: started_at.elapsed(),
                }
                .log();
                self.state = SessionState::Complete {
                    result: result.clone(),
                };
                Ok(result)
            }
            Err(err) => {
                self.reject(&err);
                Err(err)
            }
        }
    }

    /// Drop the held result and any running timer.
    pub fn clear(&mut self) {
        self.cancel_active_run();
        self.state = SessionState::Idle;
    }

    async fn drive_progress<F>(&mut self, observer: &mut F)
    where
        F: FnMut(ProgressState),
    {
        let run = self.simulator.start();
        let mut receiver = run.subscribe();
        self.active_run = Some(run);

        // the timer task may already have moved on; the session still starts at 0%
        let mut last = ProgressState::START;
        self.report_progress(last, observer);

        while !last.is_complete() {
            let progress = *receiver.borrow_and_update();
            if progress > last {
                last = progress;
                self.report_progress(progress, observer);
            }
            if last.is_complete() || receiver.changed().await.is_err() {
                break;
            }
        }

        if let Some(run) = self.active_run.take() {
            if let RunEnd::Cancelled { reached } = run.finished().await {
                RunCancelled {
                    tool_id: &self.tool_id,
                    reached_percent: reached.percent(),
                }
                .log();
            }
        }
    }

    fn report_progress<F>(&mut self, progress: ProgressState, observer: &mut F)
    where
        F: FnMut(ProgressState),
    {
        self.state = SessionState::Running { progress };
        ProgressAdvanced {
            tool_id: &self.tool_id,
            percent: progress.percent(),
        }
        .log();
        observer(progress);
    }

    fn cancel_active_run(&mut self) {
        if let Some(run) = self.active_run.take() {
            let reached = run.current();
            run.cancel();
            RunCancelled {
                tool_id: &self.tool_id,
                reached_percent: reached.percent(),
            }
            .log();
        }
    }

    fn reject(&mut self, err: &ToolError) {
        RunRejected {
            tool_id: &self.tool_id,
            kind: err.kind(),
            reason: err.user_message(),
        }
        .log();
        self.state = SessionState::Rejected {
            reason: err.user_message().to_string(),
        };
        self.notifier.notify(Notice::error(err.user_message()));
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::tools::{AgeCalculator, BmiCalculator};
    use crate::presenter::RecordingNotifier;
    use crate::traits::NoticeLevel;
    use std::time::Duration;

    fn session(tool: Arc<dyn Tool>, notifier: Arc<RecordingNotifier>) -> ToolSession {
        ToolSession::new(
            "test",
            tool,
            ProgressSimulator::new(Duration::from_millis(1), 25),
            notifier,
        )
    }

    #[tokio::test]
    async fn rejected_submit_returns_to_idle_without_result() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(Arc::new(AgeCalculator::new()), notifier.clone());

        let params = ToolParameters::new().with_text("birth_date", "none");
        let err = session.submit(params).await.unwrap_err();

        assert_eq!(err.user_message(), "Please enter a birth date");
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.result().is_none());

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Please enter a birth date");
    }

    #[tokio::test]
    async fn successful_submit_reports_progress_and_holds_result() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(Arc::new(BmiCalculator::new()), notifier.clone());

        let params = ToolParameters::new()
            .with_number("weight", 70.0)
            .with_number("height", 175.0)
            .with_choice("unit", "metric");

        let mut progress = Vec::new();
        let result = session
            .submit_with_observer(params, |p| progress.push(p.percent()))
            .await
            .unwrap();

        assert_eq!(progress.first(), Some(&0));
        assert_eq!(progress.last(), Some(&100));
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(result.value("bmi"), Some(22.86));
        assert_eq!(session.state().name(), "complete");
        assert_eq!(session.result(), Some(&result));
        assert!(notifier.notices().is_empty());

        session.clear();
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.result().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn instant_progress_still_starts_at_zero() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = ToolSession::new(
            "bmi",
            Arc::new(BmiCalculator::new()),
            ProgressSimulator::instant(),
            notifier,
        );
        let params = ToolParameters::new()
            .with_number("weight", 70.0)
            .with_number("height", 175.0);

        for _ in 0..50 {
            let mut seen = Vec::new();
            session
                .submit_with_observer(params.clone(), |p| seen.push(p.percent()))
                .await
                .unwrap();
            assert_eq!(seen, vec![0, 100]);
        }
    }

    #[tokio::test]
    async fn new_submit_replaces_previous_result() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(Arc::new(BmiCalculator::new()), notifier);

        let first = ToolParameters::new()
            .with_number("weight", 70.0)
            .with_number("height", 175.0);
        session.submit(first).await.unwrap();

        let invalid = ToolParameters::new().with_number("weight", 70.0);
        assert!(session.submit(invalid).await.is_err());
        assert!(session.result().is_none());
    }
}
