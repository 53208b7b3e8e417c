/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Bounded-fan-out upload of every file under a local directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::Instrument;

use crate::admission::{ConcurrencyAdmission, MemoryAdmission};
use crate::error::{TransferError, UploadError};
use crate::fs_layout;
use crate::io::InputStream;
use crate::progress::{DirectoryProgress, DirectoryProgressTracker};
use crate::traverse::{self, TraversedFile};
use crate::types::FailurePolicy;
use crate::upload::request::UploadRequest;
use crate::upload::UploadHandle;

/// A predicate deciding whether a discovered file should be uploaded.
pub(crate) type PathFilter = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// Request to upload every file under `source` to `bucket`.
#[derive(Clone)]
pub(crate) struct UploadObjectsRequest {
    pub(crate) source: PathBuf,
    pub(crate) bucket: String,
    pub(crate) key_prefix: Option<String>,
    pub(crate) delimiter: char,
    pub(crate) recursive: bool,
    pub(crate) follow_symlinks: bool,
    pub(crate) failure_policy: FailurePolicy,
    pub(crate) max_concurrency: usize,
    pub(crate) filter: Option<PathFilter>,
}

/// Terminal tally for an [`upload_objects`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UploadObjectsResponse {
    pub(crate) objects_uploaded: usize,
    pub(crate) objects_failed: usize,
}

impl From<DirectoryProgress> for UploadObjectsResponse {
    fn from(progress: DirectoryProgress) -> Self {
        Self {
            objects_uploaded: progress.succeeded,
            objects_failed: progress.failed,
        }
    }
}

/// Handle for an in-progress directory upload.
#[non_exhaustive]
pub(crate) struct UploadObjectsHandle {
    driver: tokio::task::JoinHandle<Result<UploadObjectsResponse, TransferError>>,
}

impl UploadObjectsHandle {
    pub(crate) async fn join(self) -> Result<UploadObjectsResponse, TransferError> {
        match self.driver.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_cancelled() => Err(UploadError::Cancelled.into()),
            Err(join_err) => Err(UploadError::JoinError(join_err).into()),
        }
    }

    pub(crate) fn abort(&self) {
        self.driver.abort();
    }
}

/// Kick off a directory upload. Work begins immediately on a background task.
pub(crate) fn upload_objects(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    request: UploadObjectsRequest,
    target_part_size: u64,
    multipart_upload_threshold: u64,
    concurrent_task_limit_per_bucket: usize,
) -> UploadObjectsHandle {
    let span = tracing::debug_span!(
        "upload-objects",
        bucket = %request.bucket,
        source = %request.source.display(),
    );
    let driver = tokio::spawn(
        drive_upload_objects(
            client,
            concurrency,
            memory,
            request,
            target_part_size,
            multipart_upload_threshold,
            concurrent_task_limit_per_bucket,
        )
        .instrument(span),
    );
    UploadObjectsHandle { driver }
}

async fn drive_upload_objects(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    request: UploadObjectsRequest,
    target_part_size: u64,
    multipart_upload_threshold: u64,
    concurrent_task_limit_per_bucket: usize,
) -> Result<UploadObjectsResponse, TransferError> {
    let rx = traverse::spawn(
        request.source.clone(),
        request.recursive,
        request.follow_symlinks,
    );
    let tally = DirectoryProgressTracker::new();
    let mut in_flight: JoinSet<Result<(), TransferError>> = JoinSet::new();
    let mut discovery_done = false;

    loop {
        while !discovery_done && in_flight.len() < request.max_concurrency.max(1) {
            match rx.recv().await {
                Ok(Ok(file)) => {
                    if let Some(filter) = &request.filter {
                        if !filter(&file.path) {
                            continue;
                        }
                    }
                    in_flight.spawn(upload_one(
                        client.clone(),
                        concurrency.clone(),
                        memory.clone(),
                        file,
                        request.clone(),
                        target_part_size,
                        multipart_upload_threshold,
                        concurrent_task_limit_per_bucket,
                    ));
                }
                Ok(Err(fs_err)) => {
                    tally.record_failure();
                    if matches!(request.failure_policy, FailurePolicy::Rethrow) {
                        in_flight.abort_all();
                        return Err(fs_err.into());
                    }
                }
                Err(_) => discovery_done = true,
            }
        }

        if in_flight.is_empty() {
            if discovery_done {
                break;
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
                    return Err(err);
                }
            }
            Err(join_err) => {
                tally.record_failure();
                if matches!(request.failure_policy, FailurePolicy::Rethrow) {
                    in_flight.abort_all();
                    return Err(UploadError::JoinError(join_err).into());
                }
            }
        }
    }

    Ok(tally.snapshot().into())
}

async fn upload_one(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    file: TraversedFile,
    request: UploadObjectsRequest,
    target_part_size: u64,
    multipart_upload_threshold: u64,
    concurrent_task_limit_per_bucket: usize,
) -> Result<(), TransferError> {
    let key = fs_layout::path_to_key(
        &file.path,
        &request.source,
        request.key_prefix.as_deref(),
        request.delimiter,
    )?;

    let body = InputStream::from_path(&file.path).map_err(UploadError::FailedToReadBody)?;

    let upload_request = UploadRequest::builder()
        .bucket(request.bucket.clone())
        .key(key.clone())
        .body(body)
        .build()
        .expect("bucket, key and body are always set");

    let handle: UploadHandle = crate::upload::upload(
        client,
        concurrency,
        memory,
        upload_request,
        target_part_size,
        multipart_upload_threshold,
        concurrent_task_limit_per_bucket,
    );

    handle.join().await.map(|_| ()).map_err(|err| {
        TransferError::from(UploadError::FailedToUploadAnObject {
            key,
            source: Box::new(err),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_from_directory_progress() {
        let progress = DirectoryProgress {
            succeeded: 3,
            failed: 1,
            total: 4,
        };
        let response: UploadObjectsResponse = progress.into();
        assert_eq!(response.objects_uploaded, 3);
        assert_eq!(response.objects_failed, 1);
    }
}
