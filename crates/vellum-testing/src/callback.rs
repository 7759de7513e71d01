use std::sync::{Condvar, Mutex};
use std::time::Duration;

use vellum_runtime::UiCallback;
use vellum_types::ComponentNode;

/// One terminal delivery observed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Components(ComponentNode),
    Error(String),
}

/// A `UiCallback` that captures every delivery and lets tests block until
/// the expected number has arrived.
#[derive(Default)]
pub struct RecordingCallback {
    deliveries: Mutex<Vec<Delivery>>,
    arrived: Condvar,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    /// Block until at least `count` deliveries arrived; panics on timeout so
    /// a dropped callback shows up as a test failure, not a hang.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> Vec<Delivery> {
        let guard = self.deliveries.lock().unwrap();
        let (guard, result) = self
            .arrived
            .wait_timeout_while(guard, timeout, |deliveries| deliveries.len() < count)
            .unwrap();
        assert!(
            !result.timed_out(),
            "expected {} deliveries, got {} before timeout",
            count,
            guard.len()
        );
        guard.clone()
    }

    fn push(&self, delivery: Delivery) {
        self.deliveries.lock().unwrap().push(delivery);
        self.arrived.notify_all();
    }
}

impl UiCallback for RecordingCallback {
    fn on_components(&self, tree: ComponentNode) {
        self.push(Delivery::Components(tree));
    }

    fn on_error(&self, message: String) {
        self.push(Delivery::Error(message));
    }
}
