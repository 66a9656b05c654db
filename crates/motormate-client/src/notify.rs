//! User-facing notification and navigation seams
//!
//! The HTTP client never renders anything itself. It reports through a
//! [`Notifier`] (toast messages) and a [`Navigator`] (route changes) that the
//! embedding application injects.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tracing::{error, info};

/// Severity of a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Error,
}

/// A single user-visible message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Sink for user-visible notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Level, message: &str);

    fn error(&self, message: &str) {
        self.notify(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.notify(Level::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(Level::Info, message);
    }
}

/// Route changes requested by the client layer
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// In-memory notification queue, drained by whatever renders the messages
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Mutex<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.lock().drain(..).collect()
    }

    /// Copy of the pending notifications without consuming them
    pub fn snapshot(&self) -> Vec<Notification> {
        self.pending.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, level: Level, message: &str) {
        self.pending
            .lock()
            .push_back(Notification::new(level, message));
    }
}

/// Notifier that only writes to the log
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Error => error!(target: "motormate::notify", "{}", message),
            Level::Success | Level::Info => info!(target: "motormate::notify", "{}", message),
        }
    }
}

/// Navigator that records every requested route
#[derive(Debug, Default)]
pub struct RouteRecorder {
    routes: Mutex<Vec<String>>,
}

impl RouteRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.routes.lock().last().cloned()
    }
}

impl Navigator for RouteRecorder {
    fn navigate(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}

/// Navigator that ignores route changes (headless use)
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _route: &str) {}
}
