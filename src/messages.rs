//! Transient user-facing messages.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a short toast stays on screen
pub const TOAST_SHORT: Duration = Duration::from_millis(2000);

/// Fire-and-forget sink for transient messages.
pub trait MessageSink {
    fn notify(&mut self, text: String);
}

/// A queued message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
}

/// FIFO of toasts, shown one at a time.
///
/// The head toast is displayed for `duration` counted from the moment it
/// reaches the head, not from when it was posted.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    queue: VecDeque<Toast>,
    duration: Duration,
    /// When the current head started showing
    head_shown_at: Option<Instant>,
    posted: u64,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            duration,
            head_shown_at: None,
            posted: 0,
        }
    }

    /// Adds a message with an explicit timestamp.
    pub fn push_at(&mut self, text: String, now: Instant) {
        if self.queue.is_empty() {
            self.head_shown_at = Some(now);
        }
        self.queue.push_back(Toast { text });
        self.posted += 1;
    }

    /// Returns the toast to show at `now`, dropping expired ones first.
    pub fn current(&mut self, now: Instant) -> Option<&Toast> {
        while let Some(shown_at) = self.head_shown_at {
            if now.saturating_duration_since(shown_at) < self.duration {
                break;
            }
            self.queue.pop_front();
            self.head_shown_at = if self.queue.is_empty() {
                None
            } else {
                Some(shown_at + self.duration)
            };
        }
        self.queue.front()
    }

    /// Time left before the head toast expires, if one is showing.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.head_shown_at
            .map(|shown_at| self.duration.saturating_sub(now.saturating_duration_since(shown_at)))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of messages ever posted.
    pub fn posted(&self) -> u64 {
        self.posted
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_SHORT)
    }
}

impl MessageSink for ToastQueue {
    fn notify(&mut self, text: String) {
        self.push_at(text, Instant::now());
    }
}
