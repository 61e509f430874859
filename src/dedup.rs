use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Tracks recently processed envelope `event_id`s.
///
/// Slack redelivers an event when the endpoint does not acknowledge it within
/// a few seconds, reusing the same `event_id`. Ids are kept for a bounded
/// window and evicted on insert so the map cannot grow without limit.
pub struct EventTracker {
    seen: HashMap<String, Instant>,
    ttl: Duration,
}

impl EventTracker {
    /// Creates a tracker with the default 5-minute expiry window.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        EventTracker {
            seen: HashMap::new(),
            ttl,
        }
    }

    /// Returns true iff `event_id` was already seen within the expiry window.
    ///
    /// A first sighting records the id and drops expired entries.
    pub fn check_and_insert(&mut self, event_id: &str) -> bool {
        if self.seen.contains_key(event_id) {
            debug!("duplicate event: {}", event_id);
            return true;
        }
        self.seen.insert(event_id.to_owned(), Instant::now());
        self.evict_expired();
        debug!("processing new event: {}", event_id);
        false
    }

    fn evict_expired(&mut self) {
        let now = Instant::now();
        self.seen
            .retain(|_, inserted| now.duration_since(*inserted) < self.ttl);
    }
}

impl Default for EventTracker {
    fn default() -> Self {
        Self::new()
    }
}
