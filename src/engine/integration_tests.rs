// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Duration;

use crate::config::{PresenterConfig, ToolRegistry};
use crate::engine::{ProgressSimulator, SessionState, ToolSession};
use crate::model::{ToolParameters, TransformResult};
use crate::presenter::{filename_basis, MemoryClipboard, RecordingNotifier, ResultPresenter};
use crate::traits::NoticeLevel;

/// End-to-end flows: registry → session → presenter, using real built-in tools
#[cfg(test)]
mod tests {
    use super::*;

    fn fast_simulator() -> ProgressSimulator {
        ProgressSimulator::new(Duration::from_millis(1), 20)
    }

    fn session_for(registry: &ToolRegistry, id: &str, notifier: Arc<RecordingNotifier>) -> ToolSession {
        let tool = registry.get(id).cloned().expect("tool registered");
        ToolSession::new(id, tool, fast_simulator(), notifier)
    }

    #[tokio::test]
    async fn test_checker_submit_then_fix_one_issue_at_a_time() {
        let registry = ToolRegistry::builtin().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session_for(&registry, "grammar_checker", notifier.clone());

        let params = ToolParameters::new().with_text("text", "They was late. It was a honest mistake.");
        let result = session.submit(params).await.unwrap();
        let report = result.as_check().cloned().unwrap();
        assert_eq!(report.issues().len(), 2);

        // each correction removes exactly one issue and leaves the others pointing at their text
        let fixed = report.apply(0).unwrap();
        assert_eq!(fixed.issues().len(), 1);
        let remaining = &fixed.issues()[0];
        assert_eq!(&fixed.text()[remaining.start..remaining.end], remaining.text);

        let done = fixed.apply(0).unwrap();
        assert!(done.is_clean());
        assert_eq!(done.text(), "They were late. It was an honest mistake.");
        assert_eq!(report.apply_all(), done.text());
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_generator_result_downloads_under_topic_slug() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ToolRegistry::builtin().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session_for(&registry, "essay_writer", notifier.clone());

        let params = ToolParameters::new()
            .with_text("topic", "Renewable Energy")
            .with_choice("essay_type", "expository")
            .with_number("paragraphs", 3.0);
        let result = session.submit(params.clone()).await.unwrap();

        let tool = session.tool().clone();
        let hints = tool.render_hints();
        let presenter = ResultPresenter::new(
            PresenterConfig {
                download_dir: dir.path().to_path_buf(),
                ..PresenterConfig::default()
            },
            Arc::new(MemoryClipboard::default()),
            notifier.clone(),
        );

        let path = presenter
            .download(&result, &hints, filename_basis(&hints, &params))
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("renewable-energy.txt"));
        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, result.as_text().unwrap());
        assert_eq!(saved.split("\n\n").count(), 4); // title, intro, body, conclusion
        assert_eq!(notifier.notices()[0].level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_keyword_table_copy_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ToolRegistry::builtin().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session_for(&registry, "keyword_research", notifier.clone());

        let params = ToolParameters::new()
            .with_text("keyword", "standing desk")
            .with_number("count", 5.0);
        let result = session.submit(params.clone()).await.unwrap();
        assert!(matches!(&result, TransformResult::Table { rows, .. } if rows.len() == 5));

        let clipboard = Arc::new(MemoryClipboard::default());
        let presenter = ResultPresenter::new(
            PresenterConfig {
                download_dir: dir.path().to_path_buf(),
                ..PresenterConfig::default()
            },
            clipboard.clone(),
            notifier.clone(),
        );
        let hints = session.tool().render_hints();

        presenter.copy(&result, &hints).await.unwrap();
        let copied = clipboard.contents().unwrap();
        assert!(copied.starts_with("Keyword"));
        assert_eq!(copied.lines().count(), 7); // header, rule, five rows

        let path = presenter
            .download(&result, &hints, filename_basis(&hints, &params))
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("standing-desk.csv"));
        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.starts_with("Keyword,Monthly Volume,Difficulty,CPC\n"));
        assert_eq!(csv.lines().count(), 6);
    }

    #[tokio::test]
    async fn test_sessions_run_independently() {
        let registry = ToolRegistry::builtin().unwrap();

        let mut handles = Vec::new();
        for (id, params) in [
            (
                "percentage_calculator",
                ToolParameters::new()
                    .with_choice("mode", "percent_of")
                    .with_number("a", 20.0)
                    .with_number("b", 50.0),
            ),
            (
                "age_calculator",
                ToolParameters::new().with_text("birth_date", "none"),
            ),
        ] {
            let notifier = Arc::new(RecordingNotifier::default());
            let mut session = session_for(&registry, id, notifier.clone());
            handles.push(tokio::spawn(async move {
                let outcome = session.submit(params).await;
                (outcome.is_ok(), session.state().clone(), notifier.notices())
            }));
        }

        let (pct_ok, pct_state, pct_notices) = handles.remove(0).await.unwrap();
        assert!(pct_ok);
        assert_eq!(pct_state.name(), "complete");
        assert!(pct_notices.is_empty());

        let (age_ok, age_state, age_notices) = handles.remove(0).await.unwrap();
        assert!(!age_ok);
        assert_eq!(age_state, SessionState::Idle);
        assert_eq!(age_notices.len(), 1);
        assert_eq!(age_notices[0].message, "Please enter a birth date");
    }
}
