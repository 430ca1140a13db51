//! # User Notifications
//!
//! The confirmation toasts the stores emit after successful mutations
//! ("Basmati Rice added to cart", "Wishlist cleared").
//!
//! These are informational only: failures never flow through this port. The
//! stores take the notifier by injection so headless sessions and tests can
//! observe or discard the messages.

use std::sync::Mutex;

use tracing::info;

/// Sink for user-visible confirmation messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Shared sinks: a store and the test observing it can hold the same notifier.
impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

/// Routes confirmations to the log. The default sink for sessions without a
/// toast surface (demo binary, scripts).
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!(target: "agrilift::notify", "{}", message);
    }
}

/// Captures confirmations in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages emitted so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier mutex poisoned")
            .push(message.to_string());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
