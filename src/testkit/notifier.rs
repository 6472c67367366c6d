//! Recording notifier for startup event assertions.

use std::sync::{Arc, Mutex};

use crate::port::outbound::notifier::{StartupEvent, StartupNotifier};

/// Thread-safe event collector.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<StartupEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StartupEvent> {
        self.events.lock().expect("lock notifier events").clone()
    }

    pub fn contains(&self, event: &StartupEvent) -> bool {
        self.events
            .lock()
            .expect("lock notifier events")
            .contains(event)
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("lock notifier events").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StartupNotifier for RecordingNotifier {
    fn notify(&self, event: StartupEvent) {
        self.events
            .lock()
            .expect("lock notifier events")
            .push(event);
    }
}
