use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Opened,
    Closed,
}

/// Open/closed flag of the middleware, optionally observed through a channel.
/// Dispatch does not consult it.
#[derive(Debug, Default)]
pub struct Lifecycle {
    opened: AtomicBool,
    observer: Option<mpsc::UnboundedSender<LifecycleEvent>>,
}

impl Lifecycle {
    /// Lifecycle that reports every transition on `observer`. A dropped
    /// receiver silently stops the reports.
    pub fn observed(observer: mpsc::UnboundedSender<LifecycleEvent>) -> Self {
        Self {
            opened: AtomicBool::new(false),
            observer: Some(observer),
        }
    }

    pub fn open(&self) {
        self.transition(true, LifecycleEvent::Opened);
    }

    pub fn close(&self) {
        self.transition(false, LifecycleEvent::Closed);
    }

    pub fn is_open(&self) -> bool {
        self.opened.load(Ordering::Acquire)
    }

    fn transition(&self, opened: bool, event: LifecycleEvent) {
        self.opened.store(opened, Ordering::Release);
        if let Some(observer) = &self.observer {
            let _ = observer.send(event);
        }
    }
}
