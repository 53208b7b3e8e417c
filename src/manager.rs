/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Top-level entry point: a single [`TransferManager`] owns the S3 client,
//! the shared admission budgets, and the configured defaults every
//! operation it starts is built from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::admission::{ConcurrencyAdmission, MemoryAdmission};
use crate::config::Config;
use crate::dir_download::{self, DownloadObjectsRequest, ObjectFilter};
use crate::dir_upload::{self, PathFilter, UploadObjectsRequest};
use crate::download::{self, DownloadHandle, DownloadRequest};
use crate::error::TransferError;
use crate::fs_layout::DEFAULT_DELIMITER;
use crate::types::{ConcurrencySetting, FailurePolicy};
use crate::upload::{self, UploadHandle, UploadRequest};

/// Entry point for every upload/download operation.
///
/// A single [`TransferManager`] shares one [`ConcurrencyAdmission`] budget
/// (per bucket) and one [`MemoryAdmission`] budget (global) across every
/// transfer it starts, so concurrent calls to [`upload`](Self::upload),
/// [`download`](Self::download), [`upload_objects`](Self::upload_objects)
/// and [`download_objects`](Self::download_objects) cooperate rather than
/// each independently saturating the client or the process's memory.
#[derive(Debug, Clone)]
pub struct TransferManager {
    config: Config,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
}

impl TransferManager {
    /// Construct a new transfer manager from `config`.
    pub fn new(config: Config) -> Self {
        let concurrency = ConcurrencyAdmission::new(config.concurrent_task_limit_per_bucket());
        let memory = MemoryAdmission::new(config.max_in_memory_bytes());
        Self {
            config,
            concurrency,
            memory,
        }
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Upload a single object. Work begins immediately; await the returned
    /// handle to wait for completion.
    pub fn upload(&self, request: UploadRequest) -> UploadHandle {
        upload::upload(
            self.config.client().clone(),
            self.concurrency.clone(),
            self.memory.clone(),
            request,
            self.config.target_part_size(),
            self.config.multipart_upload_threshold(),
            self.config.concurrent_task_limit_per_bucket(),
        )
    }

    /// Download a single object. Returns once the object's metadata has
    /// been discovered; the returned handle streams the remaining data.
    pub async fn download(
        &self,
        request: impl Into<DownloadRequest>,
    ) -> Result<DownloadHandle, TransferError> {
        download::download(
            self.config.client().clone(),
            self.concurrency.clone(),
            self.memory.clone(),
            request.into(),
            self.config.target_part_size(),
            self.config.multipart_download_type(),
            self.config.concurrent_task_limit_per_bucket(),
        )
        .await
    }

    /// Upload every file under a local directory to a bucket/prefix.
    pub fn upload_objects(&self, request: UploadDirectoryRequest) -> UploadDirectoryHandle {
        let internal = UploadObjectsRequest {
            source: request.source,
            bucket: request.bucket,
            key_prefix: request.key_prefix,
            delimiter: request.delimiter,
            recursive: request.recursive,
            follow_symlinks: request.follow_symlinks,
            failure_policy: request.failure_policy,
            max_concurrency: request.max_concurrency,
            filter: request.filter,
        };
        let inner = dir_upload::upload_objects(
            self.config.client().clone(),
            self.concurrency.clone(),
            self.memory.clone(),
            internal,
            self.config.target_part_size(),
            self.config.multipart_upload_threshold(),
            self.config.concurrent_task_limit_per_bucket(),
        );
        UploadDirectoryHandle { inner }
    }

    /// Download every object under a bucket/prefix to a local directory.
    pub fn download_objects(&self, request: DownloadDirectoryRequest) -> DownloadDirectoryHandle {
        let internal = DownloadObjectsRequest {
            bucket: request.bucket,
            prefix: request.prefix,
            delimiter: request.delimiter,
            destination: request.destination,
            failure_policy: request.failure_policy,
            max_concurrency: request.max_concurrency,
            filter: request.filter,
        };
        let inner = dir_download::download_objects(
            self.config.client().clone(),
            self.concurrency.clone(),
            self.memory.clone(),
            internal,
            self.config.target_part_size(),
            self.config.multipart_download_type(),
            self.config.concurrent_task_limit_per_bucket(),
        );
        DownloadDirectoryHandle { inner }
    }
}

/// Request to upload every file under a local directory to a bucket/prefix.
///
/// Construct with [`UploadDirectoryRequest::builder`].
#[derive(Clone)]
#[non_exhaustive]
pub struct UploadDirectoryRequest {
    source: PathBuf,
    bucket: String,
    key_prefix: Option<String>,
    delimiter: char,
    recursive: bool,
    follow_symlinks: bool,
    failure_policy: FailurePolicy,
    max_concurrency: usize,
    filter: Option<PathFilter>,
}

impl UploadDirectoryRequest {
    /// Create a new [`UploadDirectoryRequestBuilder`].
    pub fn builder() -> UploadDirectoryRequestBuilder {
        UploadDirectoryRequestBuilder::default()
    }
}

/// Builder for [`UploadDirectoryRequest`].
#[derive(Default)]
pub struct UploadDirectoryRequestBuilder {
    source: Option<PathBuf>,
    bucket: Option<String>,
    key_prefix: Option<String>,
    delimiter: Option<char>,
    recursive: bool,
    follow_symlinks: bool,
    failure_policy: FailurePolicy,
    max_concurrency: Option<usize>,
    filter: Option<PathFilter>,
}

impl UploadDirectoryRequestBuilder {
    /// The local directory to walk for files to upload. Required.
    pub fn source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The destination bucket. Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Prefix prepended to every derived object key.
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Delimiter used to translate OS path separators into object key
    /// segments. Defaults to `/`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Recurse into subdirectories. Defaults to `false`.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Follow symlinks encountered while walking. Defaults to `false`.
    pub fn follow_symlinks(mut self, follow_symlinks: bool) -> Self {
        self.follow_symlinks = follow_symlinks;
        self
    }

    /// How to react to a single file's upload failure. Defaults to
    /// [`FailurePolicy::Rethrow`].
    pub fn failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Maximum number of in-flight per-file uploads.
    pub fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }

    /// Only upload files for which `filter` returns `true`.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Finalize the request.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `bucket` was never set.
    pub fn build(self) -> UploadDirectoryRequest {
        UploadDirectoryRequest {
            source: self.source.expect("source directory is required"),
            bucket: self.bucket.expect("bucket is required"),
            key_prefix: self.key_prefix,
            delimiter: self.delimiter.unwrap_or(DEFAULT_DELIMITER),
            recursive: self.recursive,
            follow_symlinks: self.follow_symlinks,
            failure_policy: self.failure_policy,
            max_concurrency: self
                .max_concurrency
                .unwrap_or_else(|| ConcurrencySetting::Auto.resolve()),
            filter: self.filter,
        }
    }
}

/// Handle for an in-progress directory upload.
#[non_exhaustive]
pub struct UploadDirectoryHandle {
    inner: dir_upload::UploadObjectsHandle,
}

impl UploadDirectoryHandle {
    /// Wait for every file to finish uploading (or for the operation to be
    /// aborted by a `Rethrow` failure policy).
    pub async fn join(self) -> Result<UploadDirectoryResponse, TransferError> {
        self.inner.join().await.map(Into::into)
    }

    /// Cancel every in-flight per-file upload.
    pub fn abort(&self) {
        self.inner.abort();
    }
}

/// Terminal tally for a directory upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct UploadDirectoryResponse {
    /// Number of files that uploaded successfully.
    pub objects_uploaded: usize,
    /// Number of files that failed (always `0` under `FailurePolicy::Rethrow`,
    /// since the first failure aborts the operation before this is returned).
    pub objects_failed: usize,
}

impl From<dir_upload::UploadObjectsResponse> for UploadDirectoryResponse {
    fn from(response: dir_upload::UploadObjectsResponse) -> Self {
        Self {
            objects_uploaded: response.objects_uploaded,
            objects_failed: response.objects_failed,
        }
    }
}

/// Request to download every object under a bucket/prefix to a local
/// directory.
///
/// Construct with [`DownloadDirectoryRequest::builder`].
#[derive(Clone)]
#[non_exhaustive]
pub struct DownloadDirectoryRequest {
    bucket: String,
    prefix: Option<String>,
    delimiter: char,
    destination: PathBuf,
    failure_policy: FailurePolicy,
    max_concurrency: usize,
    filter: Option<ObjectFilter>,
}

impl DownloadDirectoryRequest {
    /// Create a new [`DownloadDirectoryRequestBuilder`].
    pub fn builder() -> DownloadDirectoryRequestBuilder {
        DownloadDirectoryRequestBuilder::default()
    }
}

/// Builder for [`DownloadDirectoryRequest`].
#[derive(Default)]
pub struct DownloadDirectoryRequestBuilder {
    bucket: Option<String>,
    prefix: Option<String>,
    delimiter: Option<char>,
    destination: Option<PathBuf>,
    failure_policy: FailurePolicy,
    max_concurrency: Option<usize>,
    filter: Option<ObjectFilter>,
}

impl DownloadDirectoryRequestBuilder {
    /// The source bucket. Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Only objects under this key prefix are listed.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Delimiter used to translate object key segments into local path
    /// components. Defaults to `/`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// The local directory objects are downloaded into. Required; created
    /// if it doesn't already exist.
    pub fn destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// How to react to a single object's download failure. Defaults to
    /// [`FailurePolicy::Rethrow`], which sweeps every temp file written so
    /// far before surfacing the error.
    pub fn failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Maximum number of in-flight per-object downloads.
    pub fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }

    /// Only download objects for which `filter` returns `true`.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Finalize the request.
    ///
    /// # Panics
    ///
    /// Panics if `bucket` or `destination` was never set.
    pub fn build(self) -> DownloadDirectoryRequest {
        DownloadDirectoryRequest {
            bucket: self.bucket.expect("bucket is required"),
            prefix: self.prefix,
            delimiter: self.delimiter.unwrap_or(DEFAULT_DELIMITER),
            destination: self.destination.expect("destination directory is required"),
            failure_policy: self.failure_policy,
            max_concurrency: self
                .max_concurrency
                .unwrap_or_else(|| ConcurrencySetting::Auto.resolve()),
            filter: self.filter,
        }
    }
}

/// Handle for an in-progress bucket download.
#[non_exhaustive]
pub struct DownloadDirectoryHandle {
    inner: dir_download::DownloadObjectsHandle,
}

impl DownloadDirectoryHandle {
    /// Wait for every object to finish downloading (or for the operation to
    /// be aborted by a `Rethrow` failure policy).
    pub async fn join(self) -> Result<DownloadDirectoryResponse, TransferError> {
        self.inner.join().await.map(Into::into)
    }

    /// Cancel every in-flight per-object download.
    pub fn abort(&self) {
        self.inner.abort();
    }
}

/// Terminal tally for a bucket download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct DownloadDirectoryResponse {
    /// Number of objects that downloaded successfully.
    pub objects_downloaded: usize,
    /// Number of objects that failed (always `0` under `FailurePolicy::Rethrow`).
    pub objects_failed: usize,
}

impl From<dir_download::DownloadObjectsResponse> for DownloadDirectoryResponse {
    fn from(response: dir_download::DownloadObjectsResponse) -> Self {
        Self {
            objects_downloaded: response.objects_downloaded,
            objects_failed: response.objects_failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::Client;
    use aws_smithy_mocks_experimental::{mock, mock_client};

    fn test_manager(client: Client) -> TransferManager {
        TransferManager::new(Config::builder().client(client).build())
    }

    #[test]
    fn test_new_resolves_admission_budgets_from_config() {
        let client = mock_client!(aws_sdk_s3, &[]);
        let tm = test_manager(client);
        assert_eq!(
            tm.config().max_in_memory_bytes(),
            crate::DEFAULT_MAX_IN_MEMORY_BYTES_DESKTOP
        );
    }

    #[test]
    fn test_upload_directory_request_builder_defaults() {
        let request = UploadDirectoryRequest::builder()
            .source("/tmp/src")
            .bucket("my-bucket")
            .build();
        assert_eq!(request.delimiter, '/');
        assert!(!request.recursive);
        assert!(!request.follow_symlinks);
        assert!(matches!(request.failure_policy, FailurePolicy::Rethrow));
    }

    #[test]
    fn test_download_directory_request_builder_defaults() {
        let request = DownloadDirectoryRequest::builder()
            .bucket("my-bucket")
            .destination("/tmp/dst")
            .build();
        assert_eq!(request.delimiter, '/');
        assert!(matches!(request.failure_policy, FailurePolicy::Rethrow));
    }

    #[tokio::test]
    async fn test_upload_objects_uploads_every_file() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("a.txt"), b"hello").await.unwrap();
        tokio::fs::write(dir.path().join("b.txt"), b"world").await.unwrap();

        let put_rule = mock!(Client::put_object)
            .then_output(|| aws_sdk_s3::operation::put_object::PutObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, &[&put_rule]);
        let tm = test_manager(client);

        let request = UploadDirectoryRequest::builder()
            .source(dir.path())
            .bucket("my-bucket")
            .max_concurrency(2)
            .build();

        let response = tm.upload_objects(request).join().await.unwrap();
        assert_eq!(response.objects_uploaded, 2);
        assert_eq!(response.objects_failed, 0);
    }
}
