//! Non-blocking user notifications.
//!
//! Every failure path of the widget ends in exactly one [`Notice`]. Notices
//! stay visible until the user dismisses them.

/// Identifier of a notice, unique within one [`Notifications`] queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A backend call failed (non-2xx, transport, or parse).
    Error,
    /// The user typed something the widget refuses to send.
    Validation,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "notice-error",
            NoticeKind::Validation => "notice-validation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
}

/// Ordered queue of visible notices (oldest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notice>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.items.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
