/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Progress reporting for transfer operations.
//!
//! Every operation holds a set of listeners and a cheap, lock-free counter;
//! listener hooks are invoked synchronously from whichever worker task made
//! progress, so implementations MUST be fast and non-blocking.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// A point-in-time snapshot of a single object transfer's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectProgress {
    pub transferred_bytes: u64,
    /// Total object size, if known (a download may not know this until triage).
    pub total_bytes: Option<u64>,
}

/// A point-in-time snapshot of a directory operation's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryProgress {
    pub succeeded: usize,
    pub failed: usize,
    /// `succeeded + failed`; may still grow while discovery is in progress.
    pub total: usize,
}

/// User-supplied hooks invoked as a transfer makes progress.
///
/// Every method has a no-op default; implement only the hooks you care
/// about. Hooks are invoked synchronously on the worker task that produced
/// the event — a blocking implementation blocks that worker. Panics and
/// errors raised from a hook are caught and logged, never propagated.
pub trait TransferListener: std::fmt::Debug + Send + Sync {
    /// Fired once when the operation starts.
    fn initiated(&self) {}

    /// Fired every time more bytes have been transferred. Monotonically
    /// non-decreasing in `progress.transferred_bytes`.
    fn bytes_transferred(&self, _progress: ObjectProgress) {}

    /// Fired exactly once, on success.
    fn complete(&self, _progress: ObjectProgress) {}

    /// Fired exactly once, on failure.
    fn failed(&self, _error: &crate::error::TransferError) {}
}

/// Invoke a listener hook, catching and logging any panic so a misbehaving
/// listener can never take down the worker task that called it.
pub(crate) fn invoke_listener<F>(f: F)
where
    F: FnOnce(),
{
    if let Err(panic) = panic::catch_unwind(AssertUnwindSafe(f)) {
        let message = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::warn!(message, "transfer listener panicked");
    }
}

/// Tracks transferred bytes for a single object transfer and fans out to
/// any registered [`TransferListener`]s.
#[derive(Debug, Clone)]
pub(crate) struct ProgressTracker {
    transferred: Arc<AtomicU64>,
    total: Option<u64>,
    listeners: Arc<Vec<Arc<dyn TransferListener>>>,
}

impl ProgressTracker {
    pub(crate) fn new(total: Option<u64>, listeners: Vec<Arc<dyn TransferListener>>) -> Self {
        let tracker = Self {
            transferred: Arc::new(AtomicU64::new(0)),
            total,
            listeners: Arc::new(listeners),
        };
        for listener in tracker.listeners.iter() {
            let listener = Arc::clone(listener);
            invoke_listener(|| listener.initiated());
        }
        tracker
    }

    /// Record `bytes` more as transferred and notify listeners.
    pub(crate) fn record(&self, bytes: u64) {
        let transferred = self.transferred.fetch_add(bytes, Ordering::SeqCst) + bytes;
        let snapshot = ObjectProgress {
            transferred_bytes: transferred,
            total_bytes: self.total,
        };
        for listener in self.listeners.iter() {
            invoke_listener(|| listener.bytes_transferred(snapshot));
        }
    }

    pub(crate) fn complete(&self) {
        let snapshot = ObjectProgress {
            transferred_bytes: self.transferred.load(Ordering::SeqCst),
            total_bytes: self.total,
        };
        for listener in self.listeners.iter() {
            invoke_listener(|| listener.complete(snapshot));
        }
    }

    pub(crate) fn failed(&self, error: &crate::error::TransferError) {
        for listener in self.listeners.iter() {
            invoke_listener(|| listener.failed(error));
        }
    }
}

/// Tracks succeeded/failed file counts for a directory operation.
#[derive(Debug, Clone)]
pub(crate) struct DirectoryProgressTracker {
    succeeded: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
}

impl DirectoryProgressTracker {
    pub(crate) fn new() -> Self {
        Self {
            succeeded: Arc::new(AtomicUsize::new(0)),
            failed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn snapshot(&self) -> DirectoryProgress {
        let succeeded = self.succeeded.load(Ordering::SeqCst);
        let failed = self.failed.load(Ordering::SeqCst);
        DirectoryProgress {
            succeeded,
            failed,
            total: succeeded + failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingListener {
        events: Mutex<Vec<u64>>,
    }

    impl TransferListener for RecordingListener {
        fn bytes_transferred(&self, progress: ObjectProgress) {
            self.events.lock().unwrap().push(progress.transferred_bytes);
        }
    }

    #[derive(Debug)]
    struct PanickingListener;

    impl TransferListener for PanickingListener {
        fn bytes_transferred(&self, _progress: ObjectProgress) {
            panic!("boom");
        }
    }

    #[test]
    fn test_progress_tracker_accumulates_and_notifies() {
        let listener = Arc::new(RecordingListener::default());
        let tracker = ProgressTracker::new(Some(100), vec![listener.clone()]);

        tracker.record(10);
        tracker.record(25);

        assert_eq!(*listener.events.lock().unwrap(), vec![10, 35]);
    }

    #[test]
    fn test_panicking_listener_does_not_propagate() {
        let listener: Arc<dyn TransferListener> = Arc::new(PanickingListener);
        let tracker = ProgressTracker::new(None, vec![listener]);
        // must not panic the test
        tracker.record(5);
    }

    #[test]
    fn test_directory_progress_tracker() {
        let tracker = DirectoryProgressTracker::new();
        tracker.record_success();
        tracker.record_success();
        tracker.record_failure();

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.succeeded, 2);
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.total, 3);
    }
}
