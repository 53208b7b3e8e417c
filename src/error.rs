/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::byte_stream;
use std::io;
use std::path::PathBuf;

/// Failed transfer result
#[derive(thiserror::Error, Debug)]
pub enum TransferError {
    /// The request was invalid
    #[error("invalid meta request: {0}")]
    InvalidMetaRequest(String),

    #[error("download failed")]
    DownloadFailed(#[from] DownloadError),

    #[error("upload failed")]
    UploadFailed(#[from] UploadError),

    #[error("filesystem error")]
    FsFailed(#[from] FsError),
}

pub(crate) type GetObjectSdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::get_object::GetObjectError,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;
pub(crate) type HeadObjectSdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::head_object::HeadObjectError,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;
pub(crate) type PutObjectSdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::put_object::PutObjectError,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;
pub(crate) type CreateMpuSdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::create_multipart_upload::CreateMultipartUploadError,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;
pub(crate) type UploadPartSdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::upload_part::UploadPartError,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;
pub(crate) type CompleteMpuSdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::complete_multipart_upload::CompleteMultipartUploadError,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;
pub(crate) type AbortMpuSdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::abort_multipart_upload::AbortMultipartUploadError,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;
pub(crate) type ListObjectsV2SdkError = ::aws_smithy_runtime_api::client::result::SdkError<
    aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error,
    ::aws_smithy_runtime_api::client::orchestrator::HttpResponse,
>;

#[derive(thiserror::Error, Debug)]
pub enum DownloadError {
    #[error(transparent)]
    DiscoverFailed(SdkOperationError),

    #[error("download chunk failed")]
    ChunkFailed { source: SdkOperationError },

    /// Neither `Content-Length` nor `Content-Range` were present on a triage response.
    #[error("failed to determine object size: no content-length or content-range header")]
    FailedToDetermineObjectSize,

    /// A `Range` request header did not parse as a supported single byte range.
    #[error("invalid range format: {0}")]
    InvalidRangeFormat(String),

    /// The number of segments actually downloaded didn't match the plan.
    #[error("expected {expected} segments but received {actual}")]
    UnexpectedNumberOfSegmentsDownloaded { expected: u64, actual: u64 },

    #[error("failed to write to sink")]
    FailedToWriteSink(#[source] io::Error),

    /// Wraps a per-object failure surfaced to a directory/bucket `FailurePolicy`.
    #[error("failed to download object {key}")]
    FailedToDownloadAnObject {
        key: String,
        #[source]
        source: Box<TransferError>,
    },

    #[error("failed to rename temporary file after download: {0}")]
    FailedToRenameTemporaryFileAfterDownload(PathBuf),

    #[error("task join failed")]
    JoinError(#[from] tokio::task::JoinError),

    /// The download was cancelled before it completed.
    #[error("download cancelled")]
    Cancelled,

    /// A page of `ListObjectsV2` failed while discovering objects for a bucket download.
    #[error("failed to list objects")]
    ListObjectsFailed(#[source] SdkOperationError),
}

#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    /// Uploads of a body whose length is not known ahead of time are unsupported.
    #[error("streaming uploads of unknown length are not supported")]
    StreamPayloadOfUnknownLength,

    #[error("failed to create multipart upload")]
    FailedToCreateMpu(#[source] CreateMpuSdkError),

    /// An error occurred after CreateMultipartUpload succeeded and the abort itself also failed.
    #[error("failed to abort multipart upload (upload_id={upload_id})")]
    FailedToAbortMpu {
        upload_id: String,
        original: Box<UploadError>,
        abort_error: Box<UploadError>,
    },

    #[error("upload part {part_number} failed")]
    UploadPartFailed {
        part_number: i32,
        #[source]
        source: UploadPartSdkError,
    },

    #[error("failed to complete multipart upload")]
    FailedToCompleteMpu(#[source] CompleteMpuSdkError),

    #[error("failed to abort multipart upload")]
    FailedToAbortMpuCall(#[source] AbortMpuSdkError),

    #[error("failed to put object")]
    FailedToPutObject(#[source] PutObjectSdkError),

    #[error("part short read: expected {expected} bytes but read {actual}")]
    PartShortRead { expected: u64, actual: u64 },

    #[error("expected {expected} completed parts but had {actual}")]
    IncorrectNumberOfUploadedParts { expected: u64, actual: u64 },

    #[error("failed to read part data")]
    FailedToReadBody(#[from] crate::io::error::Error),

    /// Wraps a per-object failure surfaced to a directory `FailurePolicy`.
    #[error("failed to upload object {key}")]
    FailedToUploadAnObject {
        key: String,
        #[source]
        source: Box<UploadError>,
    },

    #[error("task join failed")]
    JoinError(#[from] tokio::task::JoinError),

    /// The upload was cancelled before it completed.
    #[error("upload cancelled")]
    Cancelled,
}

#[derive(thiserror::Error, Debug)]
pub enum FsError {
    #[error("destination {0} exists and is not a directory")]
    ProvidedDestinationIsNotADirectory(PathBuf),

    #[error("failed to create destination directory {0}")]
    FailedToCreateDestinationDirectory(PathBuf, #[source] io::Error),

    #[error("failed to create nested destination directory at {0}")]
    FailedToCreateNestedDestinationDirectory(PathBuf, #[source] io::Error),

    #[error("invalid source url: {0}")]
    InvalidSourceUrl(String),

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("failed to traverse directory {0}")]
    FailedToTraverseDirectory(PathBuf, #[source] io::Error),

    #[error("failed to resolve symlink {0}")]
    FailedToResolveSymlink(PathBuf, #[source] io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum SdkOperationError {
    #[error(transparent)]
    HeadObject(#[from] HeadObjectSdkError),

    #[error(transparent)]
    GetObject(#[from] GetObjectSdkError),

    #[error(transparent)]
    ListObjectsV2(#[from] ListObjectsV2SdkError),

    #[error(transparent)]
    ReadError(#[from] byte_stream::error::Error),

    #[error(transparent)]
    IoError(#[from] io::Error),
}

// convenience to construct a TransferError from a chunk failure
pub(crate) fn chunk_failed<E: Into<SdkOperationError>>(e: E) -> TransferError {
    DownloadError::ChunkFailed { source: e.into() }.into()
}

pub(crate) fn invalid_meta_request(message: String) -> TransferError {
    TransferError::InvalidMetaRequest(message)
}
