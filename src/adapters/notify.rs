use crate::core::NotificationSink;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Prints notifications to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn error(&self, message: &str) {
        tracing::debug!("Notifying user: {}", message);
        eprintln!("❌ {}", message);
    }
}

/// Collects notifications for a UI to display and drain. Clones share the queue.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for ToastQueue {
    fn error(&self, message: &str) {
        self.lock().push(Notification::error(message));
    }
}
