//! Toast notification queue.
//!
//! Pages push messages here; `components::toast_stack` renders and expires
//! them. Ids are monotonically increasing so the stack can key its rows.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use std::time::Duration;

/// How long a toast stays on screen before it dismisses itself.
pub const NOTICE_TTL: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, kind, message: message.into() });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message)
    }

    /// Remove a notice. Unknown ids are ignored (the toast may already be gone).
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
