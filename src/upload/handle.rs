/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::UploadError;
use crate::upload::context::UploadContext;
use crate::upload::UploadResponse;
use tokio::task::JoinHandle;

/// Response type for a single upload object request.
///
/// Work starts as soon as the handle is created; await [`UploadHandle::join`] to
/// wait for it to finish, or call [`UploadHandle::abort`] to cancel it (which,
/// for a multipart upload, also aborts the upload server-side).
#[derive(Debug)]
#[non_exhaustive]
pub struct UploadHandle {
    /// The context used to drive an upload to completion
    pub(crate) ctx: UploadContext,
    /// The background task driving the upload's state machine to completion
    pub(crate) driver: JoinHandle<Result<UploadResponse, UploadError>>,
}

impl UploadHandle {
    /// Create a new upload handle for a driver task already running in the background.
    pub(crate) fn new(
        ctx: UploadContext,
        driver: JoinHandle<Result<UploadResponse, UploadError>>,
    ) -> Self {
        Self { ctx, driver }
    }

    /// Consume the handle and wait for the upload to complete.
    pub async fn join(self) -> Result<UploadResponse, UploadError> {
        match self.driver.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_cancelled() => Err(UploadError::Cancelled),
            Err(join_err) => Err(UploadError::JoinError(join_err)),
        }
    }

    /// Abort the upload and cancel any in-progress part uploads.
    ///
    /// Dropping the driver task cancels every part task spawned from it; the
    /// driver's own cleanup path is responsible for issuing
    /// `AbortMultipartUpload` before it is torn down, so ordinary cancellation
    /// (not this forced abort) is preferred when a clean server-side abort
    /// matters. `abort()` is for callers that need to stop immediately
    /// regardless.
    pub fn abort(&self) {
        self.driver.abort();
    }

    /// The bucket this upload targets.
    pub fn bucket(&self) -> &str {
        self.ctx.bucket()
    }

    /// The key this upload targets.
    pub fn key(&self) -> Option<&str> {
        self.ctx.request().key()
    }
}
