use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A transient message shown to the user, e.g. a failed render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Expiring queue of user-visible notifications, newest last.
#[derive(Debug)]
pub struct Notifications {
    items: VecDeque<Notification>,
    lifetime: Duration,
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, now: Instant, message: impl Into<String>) {
        self.items.push_back(Notification {
            message: message.into(),
            expires_at: now + self.lifetime,
        });
    }

    /// Drop expired entries.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| n.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Earliest expiry, so the host knows when to repaint next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.items.iter().map(|n| n.expires_at).min()
    }
}
