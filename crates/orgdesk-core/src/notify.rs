//! Notifier collaborator.
//!
//! Mutations report their outcome as fire-and-forget notices. How a notice
//! is displayed (toast, log line, nothing) is up to the implementation.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }
}

/// Emits every notice as a log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => info!(notice = %message, "success notice"),
            NoticeKind::Error => warn!(notice = %message, "error notice"),
        }
    }
}

/// Fan-out: every notice goes to both notifiers, left first.
impl<A: Notifier, B: Notifier> Notifier for (A, B) {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.0.notify(kind, message);
        self.1.notify(kind, message);
    }
}

/// Keeps notices in a shared log.
///
/// Clones share the same log, so the registry and the console can hold one
/// each while the caller drains them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.log.borrow().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.log.borrow().last().cloned()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.log.borrow_mut().push(Notice {
            kind,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_log() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();

        notifier.success("saved");
        handle.error("failed");

        let notices = notifier.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[1].message, "failed");
        assert!(handle.notices().is_empty());
    }

    #[test]
    fn pair_notifies_both() {
        let left = RecordingNotifier::new();
        let right = RecordingNotifier::new();
        let pair = (left.clone(), right.clone());

        pair.success("created");

        assert_eq!(left.last(), right.last());
        assert_eq!(left.notices().len(), 1);
    }
}
