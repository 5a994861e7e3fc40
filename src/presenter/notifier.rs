// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use crate::observability::messages::presenter::NoticeRaised;
use crate::observability::messages::StructuredLog;
use crate::traits::{Notice, NoticeLevel, Notifier};

/// Emits notices as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        NoticeRaised {
            level: level_name(notice.level),
            message: &notice.message,
        }
        .log();
    }
}

fn level_name(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "success",
        NoticeLevel::Error => "error",
    }
}

/// Keeps every notice it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::default();
        notifier.notify(Notice::info("one"));
        notifier.notify(Notice::error("two"));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message, "one");
        assert_eq!(notices[1].level, NoticeLevel::Error);
    }

    #[test]
    fn level_names_match_serialized_form() {
        for level in [NoticeLevel::Info, NoticeLevel::Success, NoticeLevel::Error] {
            let serialized = serde_json::to_value(level).unwrap();
            assert_eq!(serialized.as_str(), Some(level_name(level)));
        }
    }
}
