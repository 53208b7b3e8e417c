/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Bounded-fan-out download of every object under a bucket/prefix.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::task::JoinSet;
use tracing::Instrument;

use aws_sdk_s3::operation::get_object::builders::GetObjectInputBuilder;

use crate::admission::{ConcurrencyAdmission, MemoryAdmission};
use crate::download::DownloadRequest;
use crate::error::{DownloadError, TransferError};
use crate::fs_layout::{self, TempFile};
use crate::progress::{DirectoryProgress, DirectoryProgressTracker};
use crate::types::{FailurePolicy, MultipartDownloadType};

/// A predicate deciding whether a listed object should be downloaded.
pub(crate) type ObjectFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Request to download every object under `bucket`/`prefix` to `destination`.
#[derive(Clone)]
pub(crate) struct DownloadObjectsRequest {
    pub(crate) bucket: String,
    pub(crate) prefix: Option<String>,
    pub(crate) delimiter: char,
    pub(crate) destination: PathBuf,
    pub(crate) failure_policy: FailurePolicy,
    pub(crate) max_concurrency: usize,
    pub(crate) filter: Option<ObjectFilter>,
}

/// Terminal tally for a [`download_objects`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DownloadObjectsResponse {
    pub(crate) objects_downloaded: usize,
    pub(crate) objects_failed: usize,
}

impl From<DirectoryProgress> for DownloadObjectsResponse {
    fn from(progress: DirectoryProgress) -> Self {
        Self {
            objects_downloaded: progress.succeeded,
            objects_failed: progress.failed,
        }
    }
}

/// Handle for an in-progress bucket download.
#[non_exhaustive]
pub(crate) struct DownloadObjectsHandle {
    driver: tokio::task::JoinHandle<Result<DownloadObjectsResponse, TransferError>>,
}

impl DownloadObjectsHandle {
    pub(crate) async fn join(self) -> Result<DownloadObjectsResponse, TransferError> {
        match self.driver.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_cancelled() => Err(DownloadError::Cancelled.into()),
            Err(join_err) => Err(DownloadError::JoinError(join_err).into()),
        }
    }

    pub(crate) fn abort(&self) {
        self.driver.abort();
    }
}

/// Kick off a bucket download. Work begins immediately on a background task.
pub(crate) fn download_objects(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    request: DownloadObjectsRequest,
    target_part_size: u64,
    multipart_download_type: MultipartDownloadType,
    concurrent_task_limit_per_bucket: usize,
) -> DownloadObjectsHandle {
    let span = tracing::debug_span!(
        "download-objects",
        bucket = %request.bucket,
        destination = %request.destination.display(),
    );
    let driver = tokio::spawn(
        drive_download_objects(
            client,
            concurrency,
            memory,
            request,
            target_part_size,
            multipart_download_type,
            concurrent_task_limit_per_bucket,
        )
        .instrument(span),
    );
    DownloadObjectsHandle { driver }
}

async fn drive_download_objects(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    request: DownloadObjectsRequest,
    target_part_size: u64,
    multipart_download_type: MultipartDownloadType,
    concurrent_task_limit_per_bucket: usize,
) -> Result<DownloadObjectsResponse, TransferError> {
    fs_layout::ensure_destination_root(&request.destination).await?;

    let rx = list_objects(client.clone(), request.bucket.clone(), request.prefix.clone());
    let tally = DirectoryProgressTracker::new();
    // temp files for objects still in flight or not yet renamed, swept on a fail-fast abort
    let mut known_temp_files: Vec<PathBuf> = Vec::new();
    let mut in_flight: JoinSet<Result<(), TransferError>> = JoinSet::new();
    let mut discovery_done = false;

    let result = 'outer: loop {
        while !discovery_done && in_flight.len() < request.max_concurrency.max(1) {
            match rx.recv().await {
                Ok(Ok(key)) => {
                    if let Some(filter) = &request.filter {
                        if !filter(&key) {
                            continue;
                        }
                    }
                    let Some(final_path) = fs_layout::key_to_path(
                        &key,
                        &request.destination,
                        request.prefix.as_deref(),
                        request.delimiter,
                    ) else {
                        continue;
                    };

                    let temp_file = match TempFile::for_destination(final_path).await {
                        Ok(tf) => tf,
                        Err(err) => {
                            tally.record_failure();
                            if matches!(request.failure_policy, FailurePolicy::Rethrow) {
                                in_flight.abort_all();
                                break 'outer Err(err.into());
                            }
                            continue;
                        }
                    };
                    known_temp_files.push(temp_file.temp_path.clone());

                    in_flight.spawn(download_one(
                        client.clone(),
                        concurrency.clone(),
                        memory.clone(),
                        request.bucket.clone(),
                        key,
                        temp_file,
                        target_part_size,
                        multipart_download_type,
                        concurrent_task_limit_per_bucket,
                    ));
                }
                Ok(Err(err)) => {
                    tally.record_failure();
                    if matches!(request.failure_policy, FailurePolicy::Rethrow) {
                        in_flight.abort_all();
                        break 'outer Err(err);
                    }
                }
                Err(_) => discovery_done = true,
            }
        }

        if in_flight.is_empty() {
            if discovery_done {
                break Ok(tally.snapshot().into());
            }
            continue;
        }

        let Some(joined) = in_flight.join_next().await else {
            continue;
        };

        match joined {
            Ok(Ok(())) => tally.record_success(),
            Ok(Err(err)) => {
                tally.record_failure();
                if matches!(request.failure_policy, FailurePolicy::Rethrow) {
                    in_flight.abort_all();
                    break Err(err);
                }
            }
            Err(join_err) => {
                tally.record_failure();
                if matches!(request.failure_policy, FailurePolicy::Rethrow) {
                    in_flight.abort_all();
                    break Err(DownloadError::JoinError(join_err).into());
                }
            }
        }
    };

    if result.is_err() {
        sweep_temp_files(&known_temp_files).await;
    }

    result
}

/// Best-effort removal of every temp file created so far, used when a
/// `Rethrow` failure policy aborts the whole operation.
async fn sweep_temp_files(paths: &[PathBuf]) {
    for path in paths {
        if let Err(err) = tokio::fs::remove_file(path).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %err, ?path, "failed to sweep temp file");
            }
        }
    }
}

/// Paginate `ListObjectsV2`, forwarding each non-"folder" key discovered.
fn list_objects(
    client: aws_sdk_s3::Client,
    bucket: String,
    prefix: Option<String>,
) -> async_channel::Receiver<Result<String, TransferError>> {
    let (tx, rx) = async_channel::unbounded();
    tokio::spawn(async move {
        let mut continuation_token: Option<String> = None;
        loop {
            let mut req = client.list_objects_v2().bucket(bucket.clone());
            if let Some(prefix) = &prefix {
                req = req.prefix(prefix.clone());
            }
            if let Some(token) = &continuation_token {
                req = req.continuation_token(token.clone());
            }

            let output = match req.send().await {
                Ok(output) => output,
                Err(err) => {
                    let _ = tx
                        .send(Err(DownloadError::ListObjectsFailed(err.into()).into()))
                        .await;
                    return;
                }
            };

            for object in output.contents() {
                let Some(key) = object.key() else { continue };
                if tx.send(Ok(key.to_string())).await.is_err() {
                    return;
                }
            }

            match output.next_continuation_token() {
                Some(token) if output.is_truncated().unwrap_or(false) => {
                    continuation_token = Some(token.to_string());
                }
                _ => return,
            }
        }
    });
    rx
}

async fn download_one(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    bucket: String,
    key: String,
    temp_file: TempFile,
    target_part_size: u64,
    multipart_download_type: MultipartDownloadType,
    concurrent_task_limit_per_bucket: usize,
) -> Result<(), TransferError> {
    let request: DownloadRequest = GetObjectInputBuilder::default()
        .bucket(bucket)
        .key(key.clone())
        .into();

    let result = fetch_to_temp_file(
        client,
        concurrency,
        memory,
        request,
        &temp_file.temp_path,
        target_part_size,
        multipart_download_type,
        concurrent_task_limit_per_bucket,
    )
    .await;

    match result {
        Ok(()) => {
            temp_file.commit().await?;
            Ok(())
        }
        Err(err) => {
            temp_file.discard().await;
            Err(TransferError::from(DownloadError::FailedToDownloadAnObject {
                key,
                source: Box::new(err),
            }))
        }
    }
}

async fn fetch_to_temp_file(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    request: DownloadRequest,
    temp_path: &Path,
    target_part_size: u64,
    multipart_download_type: MultipartDownloadType,
    concurrent_task_limit_per_bucket: usize,
) -> Result<(), TransferError> {
    let mut handle = crate::download::download(
        client,
        concurrency,
        memory,
        request,
        target_part_size,
        multipart_download_type,
        concurrent_task_limit_per_bucket,
    )
    .await?;

    let mut file = tokio::fs::File::create(temp_path)
        .await
        .map_err(DownloadError::FailedToWriteSink)?;

    while let Some(chunk) = handle.body.next().await {
        let chunk = chunk?;
        file.write_all(&chunk.into_bytes())
            .await
            .map_err(DownloadError::FailedToWriteSink)?;
    }
    file.flush().await.map_err(DownloadError::FailedToWriteSink)?;

    handle.join().await
}
