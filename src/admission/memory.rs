/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tokio::sync::{Semaphore, TryAcquireError};

/// Bounds the total number of bytes buffered in memory across every
/// in-flight upload and download owned by a single [`crate::TransferManager`].
///
/// Modeled as a [`tokio::sync::Semaphore`] where each permit represents one
/// byte of budget; a request for `n` bytes acquires `n` permits and releases
/// them (via the returned [`MemoryPermit`]'s `Drop`) once that chunk of data
/// has been consumed.
///
/// Requests larger than the total budget are clamped down to the full budget
/// rather than rejected, mirroring `Semaphore::acquire_many`'s own
/// requirement that a request never exceed `Semaphore::MAX_PERMITS`; the
/// transfer manager is expected to pick part/segment sizes well under the
/// configured budget in the first place.
#[derive(Debug, Clone)]
pub struct MemoryAdmission {
    sem: Arc<Semaphore>,
    total_permits: u64,
}

impl MemoryAdmission {
    /// Create a new admission controller with a total budget of `max_bytes`.
    pub fn new(max_bytes: u64) -> Self {
        let permits = max_bytes.min(Semaphore::MAX_PERMITS as u64) as usize;
        Self {
            sem: Arc::new(Semaphore::new(permits)),
            total_permits: permits as u64,
        }
    }

    /// Acquire a permit for `bytes` bytes of buffer space, suspending until
    /// `bytes` (clamped to the total budget) is actually available.
    pub async fn acquire(&self, bytes: u64) -> MemoryPermit {
        let n = bytes.min(self.total_permits).max(1) as u32;
        let permit = self
            .sem
            .clone()
            .acquire_many_owned(n)
            .await
            .expect("memory semaphore is never closed");
        MemoryPermit { _permit: permit }
    }

    /// Attempt to acquire a permit without waiting, returning `None` if the
    /// budget is currently exhausted.
    pub fn try_acquire(&self, bytes: u64) -> Option<MemoryPermit> {
        let n = bytes.min(Semaphore::MAX_PERMITS as u64).max(1) as u32;
        match self.sem.clone().try_acquire_many_owned(n) {
            Ok(permit) => Some(MemoryPermit { _permit: permit }),
            Err(TryAcquireError::NoPermits) => None,
            Err(TryAcquireError::Closed) => unreachable!("memory semaphore is never closed"),
        }
    }
}

/// RAII guard for a chunk of the global in-memory byte budget. Releases the
/// bytes back to the controlling [`MemoryAdmission`] on drop.
#[derive(Debug)]
pub struct MemoryPermit {
    _permit: tokio::sync::OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acquire_and_release_round_trips_budget() {
        let admission = MemoryAdmission::new(1024);
        {
            let _permit = admission.acquire(512).await;
            assert!(admission.try_acquire(1024).is_none());
        }
        // permit dropped, full budget should be available again
        let _permit = admission
            .try_acquire(1024)
            .expect("budget released after drop");
    }

    #[tokio::test]
    async fn try_acquire_fails_when_exhausted() {
        let admission = MemoryAdmission::new(10);
        let _held = admission.acquire(10).await;
        assert!(admission.try_acquire(1).is_none());
    }
}
