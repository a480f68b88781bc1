//! Notification queue state
//!
//! Ephemeral messages rendered above all content. Screens push, users
//! dismiss, and a per-kind timer expires whatever is left. Insertion order
//! is the only ordering guarantee and duplicates are allowed.

use chrono::Utc;
use leptos::prelude::*;
use uuid::Uuid;

use crate::utils::constants::{
    TOAST_ERROR_MS, TOAST_INFO_MS, TOAST_SUCCESS_MS, TOAST_WARNING_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn auto_expiry_ms(self) -> u32 {
        match self {
            NotificationKind::Success => TOAST_SUCCESS_MS,
            NotificationKind::Error => TOAST_ERROR_MS,
            NotificationKind::Warning => TOAST_WARNING_MS,
            NotificationKind::Info => TOAST_INFO_MS,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Info => "ℹ️",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
            NotificationKind::Warning => "toast-warning",
            NotificationKind::Info => "toast-info",
        }
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub created_at: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Plain queue behind the context. Kept separate from the reactive layer
/// so ordering and dismissal stay unit-testable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Global notification context
#[derive(Clone, Copy)]
pub struct NotificationContext {
    pub queue: RwSignal<NotificationQueue>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn push(&self, kind: NotificationKind, title: impl Into<String>, message: Option<String>) {
        let notification = Notification::new(kind, title, message);
        let id = notification.id;
        self.queue.update(|q| q.push(notification));

        // Auto-expiry. try_update because the app may have been torn down
        // by the time the timer fires.
        let queue = self.queue;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(kind.auto_expiry_ms()).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn success(&self, title: impl Into<String>, message: Option<String>) {
        self.push(NotificationKind::Success, title, message);
    }

    pub fn error(&self, title: impl Into<String>, message: Option<String>) {
        self.push(NotificationKind::Error, title, message);
    }

    pub fn info(&self, title: impl Into<String>, message: Option<String>) {
        self.push(NotificationKind::Info, title, message);
    }
}

pub fn provide_notification_context() -> NotificationContext {
    let context = NotificationContext::new();
    provide_context(context);
    context
}

pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::new(NotificationKind::Info, "first", None));
        queue.push(Notification::new(NotificationKind::Error, "second", None));
        queue.push(Notification::new(NotificationKind::Info, "third", None));

        let titles: Vec<&str> = queue.items().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = NotificationQueue::default();
        let keep = Notification::new(NotificationKind::Success, "keep", None);
        let drop = Notification::new(NotificationKind::Success, "drop", None);
        let drop_id = drop.id;
        queue.push(keep.clone());
        queue.push(drop);

        queue.dismiss(drop_id);
        assert_eq!(queue.items(), &[keep]);

        // dismissing an unknown id is a no-op
        queue.dismiss(Uuid::new_v4());
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn duplicate_titles_are_not_deduplicated() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::new(NotificationKind::Info, "same", None));
        queue.push(Notification::new(NotificationKind::Info, "same", None));
        assert_eq!(queue.items().len(), 2);
    }
}
