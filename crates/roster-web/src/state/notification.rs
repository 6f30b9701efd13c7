/// Notification banner state
///
/// A single transient banner. Showing a new message replaces the current one;
/// each show bumps a generation so the auto-dismiss timer of a replaced
/// message cannot close its successor.

use crate::types::Severity;

/// Auto-dismiss delay in milliseconds.
pub const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    generation: u64,
}

impl NotificationState {
    /// Show a message and return the generation to pass to `expire`.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.generation += 1;
        self.open = true;
        self.message = message.into();
        self.severity = severity;
        self.generation
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Timer callback. Closes the banner only if it still shows `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.open && self.generation == generation {
            self.open = false;
            true
        } else {
            false
        }
    }
}
