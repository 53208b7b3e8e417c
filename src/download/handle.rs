/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::download::body::Body;
use crate::download::context::DownloadContext;
use crate::download::object_meta::ObjectMetadata;
use crate::error::{DownloadError, TransferError};
use tokio::task::JoinHandle;

/// Response type for a single download object request.
///
/// Work starts as soon as the handle is created: [`object_meta`] is
/// already populated from the triage request, and [`body`] streams the
/// remaining chunks of data in order as they arrive. Await
/// [`DownloadHandle::join`] once the body has been fully read to confirm the
/// background driver finished without error, or call
/// [`DownloadHandle::abort`] to cancel the transfer early.
///
/// [`object_meta`]: DownloadHandle::object_meta
/// [`body`]: DownloadHandle::body
#[derive(Debug)]
#[non_exhaustive]
pub struct DownloadHandle {
    /// The context used to drive this download to completion
    pub(crate) ctx: DownloadContext,
    /// The background task distributing and collecting the remaining chunks
    pub(crate) driver: JoinHandle<Result<(), TransferError>>,
    /// Ordered stream of the object's data, already primed with any chunk
    /// fetched during triage.
    pub body: Body,
    /// Metadata discovered about the object before streaming began.
    pub object_meta: ObjectMetadata,
}

impl DownloadHandle {
    /// Create a new download handle for a driver task already running in the background.
    pub(crate) fn new(
        ctx: DownloadContext,
        driver: JoinHandle<Result<(), TransferError>>,
        body: Body,
        object_meta: ObjectMetadata,
    ) -> Self {
        Self {
            ctx,
            driver,
            body,
            object_meta,
        }
    }

    /// Object metadata discovered before streaming began.
    pub fn object_meta(&self) -> &ObjectMetadata {
        &self.object_meta
    }

    /// Consume the handle and wait for the background driver to finish
    /// distributing and collecting every remaining chunk.
    ///
    /// Callers that want the object's bytes should drain [`Self::body`]
    /// before (or concurrently with) calling this, since the driver will
    /// block on a full channel if nothing is reading from it.
    pub async fn join(self) -> Result<(), TransferError> {
        match self.driver.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_cancelled() => Err(DownloadError::Cancelled.into()),
            Err(join_err) => Err(DownloadError::JoinError(join_err).into()),
        }
    }

    /// Abort the download, dropping any in-progress chunk requests.
    pub fn abort(&self) {
        self.driver.abort();
    }

    /// The bucket this download is reading from.
    pub fn bucket(&self) -> &str {
        &self.ctx.bucket
    }
}
