/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::sync::Arc;

use aws_sdk_s3::operation::get_object::builders::{GetObjectFluentBuilder, GetObjectInputBuilder};
use bytes::Buf;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::admission::{ConcurrencyAdmission, MemoryAdmission};
use crate::error::{self, DownloadError, TransferError};
use crate::progress::{ProgressTracker, TransferListener};
use crate::types::MultipartDownloadType;

pub use self::body::Body;
pub use self::handle::DownloadHandle;
pub use self::object_meta::ObjectMetadata;

pub(crate) mod context;
mod discovery;
pub(crate) mod handle;
mod header;
mod worker;

/// Streaming body returned by a download
pub mod body;

/// Object metadata discovered by a download
pub mod object_meta;

use self::context::DownloadContext;
use self::worker::ChunkResponse;

/// How many in-flight chunks the body channel will buffer before a worker
/// blocks waiting for the caller to read.
const DOWNLOAD_CHANNEL_BUFFER: usize = 8;

/// Request type for downloading a single object
#[derive(Debug)]
#[non_exhaustive]
pub struct DownloadRequest {
    pub(crate) input: GetObjectInputBuilder,
    pub(crate) listeners: Vec<Arc<dyn TransferListener>>,
}

impl DownloadRequest {
    /// Register a listener to be notified of this download's progress.
    pub fn listener(mut self, listener: Arc<dyn TransferListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub(crate) fn listeners(&self) -> &[Arc<dyn TransferListener>] {
        &self.listeners
    }
}

// FIXME - should probably be TryFrom since checksums may conflict?
impl From<GetObjectFluentBuilder> for DownloadRequest {
    fn from(value: GetObjectFluentBuilder) -> Self {
        Self {
            input: value.as_input().clone(),
            listeners: Vec::new(),
        }
    }
}

impl From<GetObjectInputBuilder> for DownloadRequest {
    fn from(value: GetObjectInputBuilder) -> Self {
        Self {
            input: value,
            listeners: Vec::new(),
        }
    }
}

/// Response type for a single download object request.
#[derive(Debug)]
#[non_exhaustive]
pub struct DownloadResponse {
    /// Object metadata
    pub object_meta: ObjectMetadata,
}

impl DownloadResponse {
    /// Object metadata
    pub fn object_meta(&self) -> &ObjectMetadata {
        &self.object_meta
    }
}

/// Begin downloading a single object, returning a handle as soon as the
/// object's metadata has been discovered (`HeadObject`/`GetObject` triage).
///
/// The remainder of the object is fetched by a pool of background workers
/// bounded by `concurrent_task_limit_per_bucket` and pinned to the ETag
/// observed during triage via `If-Match`, so a concurrent overwrite of the
/// object mid-download surfaces as a chunk failure rather than silently
/// stitching together bytes from two different object versions.
pub(crate) async fn download(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    request: DownloadRequest,
    target_part_size: u64,
    multipart_download_type: MultipartDownloadType,
    concurrent_task_limit_per_bucket: usize,
) -> Result<DownloadHandle, TransferError> {
    let bucket = request
        .input
        .get_bucket()
        .clone()
        .ok_or_else(|| error::invalid_meta_request("download request missing bucket".into()))?;

    let mut ctx = DownloadContext {
        client,
        concurrency,
        memory,
        target_part_size,
        multipart_download_type,
        bucket,
        progress: ProgressTracker::new(None, Vec::new()),
    };

    let discovery = discovery::discover_obj(&ctx, &request).await?;
    let validator_tag = discovery.meta.e_tag.clone();
    let object_meta = discovery.meta.clone();
    ctx.set_progress(ProgressTracker::new(
        Some(object_meta.total_size()),
        request.listeners().to_vec(),
    ));

    let (tx, rx) = mpsc::channel(DOWNLOAD_CHANNEL_BUFFER);
    let body = Body::new(rx);

    let start_seq = if let Some(data) = discovery.initial_chunk {
        ctx.progress().record(data.remaining() as u64);
        if tx
            .send(Ok(ChunkResponse {
                seq: 0,
                data: Some(data),
            }))
            .await
            .is_err()
        {
            tracing::debug!("download body dropped before first chunk was delivered");
        }
        1
    } else {
        0
    };

    let driver_ctx = ctx.clone();
    let input = request.input.clone();
    let remaining = discovery.remaining;
    let part_size_hint = match &remaining {
        discovery::Remaining::Parts(parts) if !parts.is_empty() => {
            let known_parts = (*parts.end()).max(1) as u64;
            (object_meta.total_size() / known_parts).max(1)
        }
        _ => target_part_size,
    };
    let driver = tokio::spawn(
        drive_download(
            driver_ctx,
            input,
            remaining,
            part_size_hint,
            start_seq,
            validator_tag,
            concurrent_task_limit_per_bucket,
            tx,
        )
        .instrument(tracing::debug_span!("download-driver")),
    );

    Ok(DownloadHandle::new(ctx, driver, body, object_meta))
}

/// Distribute and collect the chunks remaining after triage.
async fn drive_download(
    ctx: DownloadContext,
    input: GetObjectInputBuilder,
    remaining: discovery::Remaining,
    part_size_hint: u64,
    start_seq: u64,
    validator_tag: Option<String>,
    concurrent_task_limit_per_bucket: usize,
    completed: mpsc::Sender<Result<ChunkResponse, TransferError>>,
) -> Result<(), TransferError> {
    if remaining.is_empty() {
        return Ok(());
    }

    let (req_tx, req_rx) = async_channel::unbounded();
    let worker_count = cmp::max(1, concurrent_task_limit_per_bucket);

    let mut workers = JoinSet::new();
    for _ in 0..worker_count {
        let worker_ctx = ctx.clone();
        let req_rx = req_rx.clone();
        let worker_completed = completed.clone();
        workers.spawn(worker::download_chunks(worker_ctx, req_rx, worker_completed));
    }
    // drop our own clone so the channel closes once every worker has returned
    drop(completed);

    match remaining {
        discovery::Remaining::Range(range) => {
            worker::distribute_by_range(
                range,
                input,
                part_size_hint,
                start_seq,
                validator_tag,
                req_tx,
            )
            .await;
        }
        discovery::Remaining::Parts(parts) => {
            worker::distribute_by_part(
                parts,
                input,
                part_size_hint,
                start_seq,
                validator_tag,
                req_tx,
            )
            .await;
        }
    }

    while let Some(res) = workers.join_next().await {
        res.map_err(DownloadError::JoinError)?;
    }

    Ok(())
}
