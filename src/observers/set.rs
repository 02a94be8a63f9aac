//! # ObserverSet: non-blocking fan-out over multiple observers
//!
//! [`ObserverSet`] distributes each published [`ViewModel`] to multiple
//! observers **without awaiting** their processing.
//!
//! ## What it guarantees
//! - `emit(&ViewModel)` returns immediately.
//! - Per-observer FIFO (queue order).
//! - Panics inside observers are caught and logged (isolation).
//!
//! ## What it does **not** guarantee
//! - No global ordering across different observers.
//! - No retries on per-observer queue overflow (updates are dropped for that
//!   observer; the next snapshot supersedes them anyway).

use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::core::ViewModel;

use super::Observe;

/// Per-observer channel with metadata
struct ObserverChannel {
    name: &'static str,
    sender: mpsc::Sender<Arc<ViewModel>>,
}

/// Composite fan-out with per-observer bounded queues and worker tasks.
pub struct ObserverSet {
    channels: Vec<ObserverChannel>,
    workers: Vec<JoinHandle<()>>,
}

impl ObserverSet {
    /// Creates a new set and spawns one worker per observer.
    ///
    /// Must be called within a Tokio runtime when `observers` is non-empty.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observe>>) -> Self {
        let mut channels = Vec::with_capacity(observers.len());
        let mut workers = Vec::with_capacity(observers.len());

        for observer in observers {
            let cap = observer.queue_capacity().max(1);
            let name = observer.name();
            let (tx, mut rx) = mpsc::channel::<Arc<ViewModel>>(cap);
            let o = Arc::clone(&observer);

            let handle = tokio::spawn(async move {
                while let Some(view) = rx.recv().await {
                    let fut = o.on_view(view.as_ref());
                    if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                        tracing::warn!(
                            observer = o.name(),
                            ?panic_err,
                            "observer panicked while handling a view update"
                        );
                    }
                }
            });

            channels.push(ObserverChannel { name, sender: tx });
            workers.push(handle);
        }

        Self { channels, workers }
    }

    /// Fan-out one view snapshot to all observers (non-blocking).
    ///
    /// If an observer's queue is **full** or **closed**, the update is dropped
    /// for it and a warning is logged with the observer's name.
    pub fn emit(&self, view: &ViewModel) {
        let view = Arc::new(view.clone());
        for channel in &self.channels {
            match channel.sender.try_send(Arc::clone(&view)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(observer = channel.name, "dropped view update: queue full");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    tracing::warn!(observer = channel.name, "dropped view update: worker closed");
                }
            }
        }
    }

    /// Graceful shutdown: close all queues and await worker completion.
    pub async fn shutdown(self) {
        drop(self.channels);
        for h in self.workers {
            let _ = h.await;
        }
    }

    /// True if there are no observers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    struct Recorder {
        seen: Mutex<Vec<ViewModel>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }

        fn count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Observe for Recorder {
        async fn on_view(&self, view: &ViewModel) {
            self.seen.lock().unwrap().push(view.clone());
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct Panicker;

    #[async_trait]
    impl Observe for Panicker {
        async fn on_view(&self, _view: &ViewModel) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "panicker"
        }
    }

    async fn wait_for(recorder: &Recorder, n: usize) {
        tokio::time::timeout(Duration::from_secs(1), async {
            while recorder.count() < n {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("observer never caught up");
    }

    #[tokio::test]
    async fn emit_delivers_complete_snapshots_in_order() {
        let recorder = Recorder::new();
        let set = ObserverSet::new(vec![recorder.clone() as Arc<dyn Observe>]);

        set.emit(&ViewModel::loading(false));
        set.emit(&ViewModel::loading(true));

        wait_for(&recorder, 2).await;

        let seen = recorder.seen.lock().unwrap();
        assert!(!seen[0].can_create);
        assert!(seen[1].can_create);

        drop(seen);
        set.shutdown().await;
    }

    #[tokio::test]
    async fn panicking_observer_does_not_poison_the_set() {
        let recorder = Recorder::new();
        let set = ObserverSet::new(vec![
            Arc::new(Panicker) as Arc<dyn Observe>,
            recorder.clone() as Arc<dyn Observe>,
        ]);

        set.emit(&ViewModel::loading(false));
        wait_for(&recorder, 1).await;

        // The panicking observer's worker is still alive for the next update.
        set.emit(&ViewModel::loading(true));
        wait_for(&recorder, 2).await;

        set.shutdown().await;
    }

    #[tokio::test]
    async fn empty_set_is_a_no_op() {
        let set = ObserverSet::new(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        set.emit(&ViewModel::loading(false));
        set.shutdown().await;
    }
}
