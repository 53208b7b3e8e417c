/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::upload::handle::UploadHandle;
pub use crate::upload::request::UploadRequest;
pub use crate::upload::response::UploadResponse;

pub(crate) mod context;
pub(crate) mod handle;

/// Request types for uploads to Amazon S3
pub mod request;

/// Response types for uploads to Amazon S3
pub mod response;

use crate::admission::{ConcurrencyAdmission, MemoryAdmission};
use crate::error::{TransferError, UploadError};
use crate::io::part_reader::{Builder as PartReaderBuilder, PartData, ReadPart};
use crate::io::InputStream;
use crate::progress::ProgressTracker;
use crate::upload::context::UploadContext;
use crate::upload::response::UploadResponseBuilder;
use aws_sdk_s3::types::{ChecksumAlgorithm, ChecksumType, CompletedMultipartUpload, CompletedPart};
use aws_smithy_types::byte_stream::ByteStream;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::Instrument;

/// Resolve the checksum algorithm to use when the caller didn't set one explicitly:
/// prefer whichever per-value checksum the caller supplied (CRC32C > CRC32 > SHA1 >
/// SHA256), falling back to CRC32.
fn resolve_checksum_algorithm(req: &UploadRequest) -> ChecksumAlgorithm {
    if let Some(algorithm) = req.checksum_algorithm() {
        return algorithm.clone();
    }
    if req.checksum_crc32_c().is_some() {
        ChecksumAlgorithm::Crc32C
    } else if req.checksum_crc32().is_some() {
        ChecksumAlgorithm::Crc32
    } else if req.checksum_sha1().is_some() {
        ChecksumAlgorithm::Sha1
    } else if req.checksum_sha256().is_some() {
        ChecksumAlgorithm::Sha256
    } else {
        ChecksumAlgorithm::Crc32
    }
}

/// Whether the caller supplied a whole-object checksum value directly on the request.
fn has_whole_object_checksum(req: &UploadRequest) -> bool {
    req.checksum_crc32().is_some()
        || req.checksum_crc32_c().is_some()
        || req.checksum_sha1().is_some()
        || req.checksum_sha256().is_some()
}

/// Record the terminal outcome of an upload on its progress tracker and unwrap the
/// result back out of `TransferError`.
fn finish_upload(
    ctx: &UploadContext,
    result: Result<UploadResponse, UploadError>,
) -> Result<UploadResponse, UploadError> {
    match result {
        Ok(resp) => {
            ctx.progress().complete();
            Ok(resp)
        }
        Err(err) => {
            let wrapped = TransferError::from(err);
            ctx.progress().failed(&wrapped);
            match wrapped {
                TransferError::UploadFailed(err) => Err(err),
                _ => unreachable!("UploadError always converts to TransferError::UploadFailed"),
            }
        }
    }
}

/// Kick off an upload. Work begins immediately in a background task; the returned
/// [`UploadHandle`] is joined to wait for the result or aborted to cancel it.
///
/// `target_part_size` and `multipart_upload_threshold` are the transfer manager's configured
/// defaults; a per-request override on `request` takes precedence over either.
pub(crate) fn upload(
    client: aws_sdk_s3::Client,
    concurrency: ConcurrencyAdmission,
    memory: MemoryAdmission,
    mut request: UploadRequest,
    target_part_size: u64,
    multipart_upload_threshold: u64,
    concurrent_task_limit_per_bucket: usize,
) -> UploadHandle {
    let body = request.take_body();
    let target_part_size = request
        .target_part_size()
        .map(crate::types::TargetPartSize::resolve)
        .unwrap_or(target_part_size);
    let multipart_upload_threshold = request
        .multipart_upload_threshold()
        .unwrap_or(multipart_upload_threshold);
    let progress = ProgressTracker::new(body.size_hint().upper(), request.listeners().to_vec());

    let ctx = UploadContext {
        client,
        concurrency,
        memory,
        upload_id: None,
        request: Arc::new(request),
        progress,
    };

    let driver_ctx = ctx.clone();
    let span = tracing::debug_span!("upload", bucket = %ctx.bucket(), key = ?ctx.request().key());
    let driver = tokio::spawn(
        drive_upload(
            driver_ctx,
            body,
            target_part_size,
            multipart_upload_threshold,
            concurrent_task_limit_per_bucket,
        )
        .instrument(span),
    );

    UploadHandle::new(ctx, driver)
}

async fn drive_upload(
    mut ctx: UploadContext,
    body: InputStream,
    target_part_size: u64,
    multipart_upload_threshold: u64,
    concurrent_task_limit_per_bucket: usize,
) -> Result<UploadResponse, UploadError> {
    let payload_size = body
        .size_hint()
        .upper()
        .ok_or(UploadError::StreamPayloadOfUnknownLength)?;

    if payload_size < multipart_upload_threshold {
        let result = single_put(&ctx, body, payload_size).await;
        return finish_upload(&ctx, result);
    }

    let part_size = compute_part_size(payload_size, target_part_size);
    let num_parts = div_ceil(payload_size, part_size);

    let checksum_algorithm = resolve_checksum_algorithm(ctx.request());

    let req = ctx.request();
    let create_resp = ctx
        .client()
        .create_multipart_upload()
        .bucket(ctx.bucket())
        .set_key(req.key().map(String::from))
        .set_acl(req.acl().cloned())
        .set_cache_control(req.cache_control().map(String::from))
        .set_content_disposition(req.content_disposition().map(String::from))
        .set_content_encoding(req.content_encoding().map(String::from))
        .set_content_language(req.content_language().map(String::from))
        .set_content_type(req.content_type().map(String::from))
        .checksum_algorithm(checksum_algorithm.clone())
        .set_expires(req.expires().cloned())
        .set_grant_full_control(req.grant_full_control().map(String::from))
        .set_grant_read(req.grant_read().map(String::from))
        .set_grant_read_acp(req.grant_read_acp().map(String::from))
        .set_grant_write_acp(req.grant_write_acp().map(String::from))
        .set_metadata(req.metadata().cloned())
        .set_server_side_encryption(req.server_side_encryption().cloned())
        .set_storage_class(req.storage_class().cloned())
        .set_website_redirect_location(req.website_redirect_location().map(String::from))
        .set_sse_customer_algorithm(req.sse_customer_algorithm().map(String::from))
        .set_sse_customer_key(req.sse_customer_key().map(String::from))
        .set_sse_customer_key_md5(req.sse_customer_key_md5().map(String::from))
        .set_ssekms_key_id(req.sse_kms_key_id().map(String::from))
        .set_ssekms_encryption_context(req.sse_kms_encryption_context().map(String::from))
        .set_bucket_key_enabled(req.bucket_key_enabled())
        .set_request_payer(req.request_payer().cloned())
        .set_tagging(req.tagging().map(String::from))
        .set_object_lock_mode(req.object_lock_mode().cloned())
        .set_object_lock_retain_until_date(req.object_lock_retain_until_date().cloned())
        .set_object_lock_legal_hold_status(req.object_lock_legal_hold_status().cloned())
        .set_expected_bucket_owner(req.expected_bucket_owner().map(String::from))
        .send()
        .await
        .map_err(UploadError::FailedToCreateMpu)?;

    let upload_id = create_resp
        .upload_id
        .clone()
        .expect("S3 always returns an upload ID from CreateMultipartUpload");
    ctx.set_upload_id(upload_id.clone());

    let reader = Arc::new(
        PartReaderBuilder::new()
            .part_size(part_size as usize)
            .stream(body)
            .build(),
    );

    let result = match upload_parts(
        &ctx,
        reader,
        checksum_algorithm,
        concurrent_task_limit_per_bucket,
    )
    .await
    {
        Ok(mut parts) if parts.len() as u64 == num_parts => {
            parts.sort_by_key(|p| p.part_number());
            complete_upload(&ctx, upload_id, parts).await
        }
        Ok(parts) => {
            let original = UploadError::IncorrectNumberOfUploadedParts {
                expected: num_parts,
                actual: parts.len() as u64,
            };
            abort_and_return(&ctx, upload_id, original).await
        }
        Err(original) => abort_and_return(&ctx, upload_id, original).await,
    };

    finish_upload(&ctx, result)
}

/// Compute the part size to use for a given payload, respecting the S3 maximum part
/// count (10,000) and minimum part size (5 MiB) in addition to the configured target.
fn compute_part_size(payload_size: u64, target_part_size: u64) -> u64 {
    let min_to_stay_under_max_parts = div_ceil(payload_size, crate::MAX_PARTS);
    target_part_size
        .max(min_to_stay_under_max_parts)
        .max(crate::MIN_PART_SIZE)
}

fn div_ceil(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return numerator;
    }
    (numerator + denominator - 1) / denominator
}

async fn upload_parts<R: ReadPart + Send + Sync + 'static>(
    ctx: &UploadContext,
    reader: Arc<R>,
    checksum_algorithm: ChecksumAlgorithm,
    concurrent_task_limit_per_bucket: usize,
) -> Result<Vec<CompletedPart>, UploadError> {
    let worker_count = concurrent_task_limit_per_bucket.max(1);
    let mut tasks = JoinSet::new();
    for _ in 0..worker_count {
        let ctx = ctx.clone();
        let reader = Arc::clone(&reader);
        let checksum_algorithm = checksum_algorithm.clone();
        tasks.spawn(async move { upload_part_worker(ctx, reader, checksum_algorithm).await });
    }

    let mut parts = Vec::new();
    while let Some(result) = tasks.join_next().await {
        let worker_parts = result.map_err(UploadError::JoinError)??;
        parts.extend(worker_parts);
    }
    Ok(parts)
}

async fn upload_part_worker<R: ReadPart>(
    ctx: UploadContext,
    reader: Arc<R>,
    checksum_algorithm: ChecksumAlgorithm,
) -> Result<Vec<CompletedPart>, UploadError> {
    let mut completed = Vec::new();
    let upload_id = ctx
        .upload_id
        .clone()
        .expect("multipart upload already initiated");
    loop {
        let Some(part) = reader.next_part().await? else {
            break;
        };

        let _concurrency_permit = ctx.concurrency.acquire(ctx.bucket()).await;
        let _memory_permit = ctx.memory.acquire(part.data.len() as u64).await;

        let part_number = part.part_number as i32;
        let part_len = part.data.len() as u64;
        let req = ctx.request();
        let resp = ctx
            .client()
            .upload_part()
            .bucket(ctx.bucket())
            .set_key(req.key().map(String::from))
            .upload_id(upload_id.clone())
            .part_number(part_number)
            .checksum_algorithm(checksum_algorithm.clone())
            .set_sse_customer_algorithm(req.sse_customer_algorithm().map(String::from))
            .set_sse_customer_key(req.sse_customer_key().map(String::from))
            .set_sse_customer_key_md5(req.sse_customer_key_md5().map(String::from))
            .set_request_payer(req.request_payer().cloned())
            .set_expected_bucket_owner(req.expected_bucket_owner().map(String::from))
            .body(ByteStream::from(part.data))
            .send()
            .await
            .map_err(|source| UploadError::UploadPartFailed {
                part_number,
                source,
            })?;

        ctx.progress().record(part_len);
        completed.push(completed_part_from(part_number, resp));
    }
    Ok(completed)
}

fn completed_part_from(
    part_number: i32,
    resp: aws_sdk_s3::operation::upload_part::UploadPartOutput,
) -> CompletedPart {
    CompletedPart::builder()
        .part_number(part_number)
        .set_e_tag(resp.e_tag)
        .set_checksum_crc32(resp.checksum_crc32)
        .set_checksum_crc32_c(resp.checksum_crc32_c)
        .set_checksum_sha1(resp.checksum_sha1)
        .set_checksum_sha256(resp.checksum_sha256)
        .build()
}

async fn complete_upload(
    ctx: &UploadContext,
    upload_id: String,
    parts: Vec<CompletedPart>,
) -> Result<UploadResponse, UploadError> {
    let req = ctx.request();
    let completed_upload = CompletedMultipartUpload::builder()
        .set_parts(Some(parts))
        .build();
    let checksum_type = if has_whole_object_checksum(req) {
        ChecksumType::FullObject
    } else {
        ChecksumType::Composite
    };

    let resp = ctx
        .client()
        .complete_multipart_upload()
        .bucket(ctx.bucket())
        .set_key(req.key().map(String::from))
        .upload_id(upload_id.clone())
        .multipart_upload(completed_upload)
        .checksum_type(checksum_type)
        .set_checksum_crc32(req.checksum_crc32().map(String::from))
        .set_checksum_crc32_c(req.checksum_crc32_c().map(String::from))
        .set_checksum_sha1(req.checksum_sha1().map(String::from))
        .set_checksum_sha256(req.checksum_sha256().map(String::from))
        .set_sse_customer_algorithm(req.sse_customer_algorithm().map(String::from))
        .set_sse_customer_key(req.sse_customer_key().map(String::from))
        .set_sse_customer_key_md5(req.sse_customer_key_md5().map(String::from))
        .set_request_payer(req.request_payer().cloned())
        .set_expected_bucket_owner(req.expected_bucket_owner().map(String::from))
        .send()
        .await
        .map_err(UploadError::FailedToCompleteMpu)?;

    UploadResponseBuilder::from(resp)
        .upload_id(upload_id)
        .build()
        .map_err(|err| unreachable!("UploadResponseBuilder::build should be infallible: {err}"))
}

/// Abort a multipart upload after a failure and surface a composite error if the abort
/// itself also fails, per the "clean up after yourself" contract of `CreateMultipartUpload`.
async fn abort_and_return(
    ctx: &UploadContext,
    upload_id: String,
    original: UploadError,
) -> Result<UploadResponse, UploadError> {
    let req = ctx.request();
    let abort_result = ctx
        .client()
        .abort_multipart_upload()
        .bucket(ctx.bucket())
        .set_key(req.key().map(String::from))
        .upload_id(upload_id.clone())
        .set_request_payer(req.request_payer().cloned())
        .set_expected_bucket_owner(req.expected_bucket_owner().map(String::from))
        .send()
        .await;

    match abort_result {
        Ok(_) => Err(original),
        Err(source) => Err(UploadError::FailedToAbortMpu {
            upload_id,
            original: Box::new(original),
            abort_error: Box::new(UploadError::FailedToAbortMpuCall(source)),
        }),
    }
}

async fn single_put(
    ctx: &UploadContext,
    body: InputStream,
    payload_size: u64,
) -> Result<UploadResponse, UploadError> {
    let reader = PartReaderBuilder::new()
        .part_size(payload_size.max(1) as usize)
        .stream(body)
        .build();

    let part: PartData = reader
        .next_part()
        .await?
        .unwrap_or(PartData {
            part_number: 1,
            data: bytes::Bytes::new(),
        });

    let part_len = part.data.len() as u64;
    let _concurrency_permit = ctx.concurrency.acquire(ctx.bucket()).await;
    let _memory_permit = ctx.memory.acquire(part_len).await;

    let checksum_algorithm = resolve_checksum_algorithm(ctx.request());

    let req = ctx.request();
    let resp = ctx
        .client()
        .put_object()
        .bucket(ctx.bucket())
        .set_key(req.key().map(String::from))
        .set_acl(req.acl().cloned())
        .set_cache_control(req.cache_control().map(String::from))
        .set_content_disposition(req.content_disposition().map(String::from))
        .set_content_encoding(req.content_encoding().map(String::from))
        .set_content_language(req.content_language().map(String::from))
        .set_content_md5(req.content_md5().map(String::from))
        .set_content_type(req.content_type().map(String::from))
        .checksum_algorithm(checksum_algorithm)
        .set_checksum_crc32(req.checksum_crc32().map(String::from))
        .set_checksum_crc32_c(req.checksum_crc32_c().map(String::from))
        .set_checksum_sha1(req.checksum_sha1().map(String::from))
        .set_checksum_sha256(req.checksum_sha256().map(String::from))
        .set_expires(req.expires().cloned())
        .set_grant_full_control(req.grant_full_control().map(String::from))
        .set_grant_read(req.grant_read().map(String::from))
        .set_grant_read_acp(req.grant_read_acp().map(String::from))
        .set_grant_write_acp(req.grant_write_acp().map(String::from))
        .set_metadata(req.metadata().cloned())
        .set_server_side_encryption(req.server_side_encryption().cloned())
        .set_storage_class(req.storage_class().cloned())
        .set_website_redirect_location(req.website_redirect_location().map(String::from))
        .set_sse_customer_algorithm(req.sse_customer_algorithm().map(String::from))
        .set_sse_customer_key(req.sse_customer_key().map(String::from))
        .set_sse_customer_key_md5(req.sse_customer_key_md5().map(String::from))
        .set_ssekms_key_id(req.sse_kms_key_id().map(String::from))
        .set_ssekms_encryption_context(req.sse_kms_encryption_context().map(String::from))
        .set_bucket_key_enabled(req.bucket_key_enabled())
        .set_request_payer(req.request_payer().cloned())
        .set_tagging(req.tagging().map(String::from))
        .set_object_lock_mode(req.object_lock_mode().cloned())
        .set_object_lock_retain_until_date(req.object_lock_retain_until_date().cloned())
        .set_object_lock_legal_hold_status(req.object_lock_legal_hold_status().cloned())
        .set_expected_bucket_owner(req.expected_bucket_owner().map(String::from))
        .body(ByteStream::from(part.data))
        .send()
        .await
        .map_err(UploadError::FailedToPutObject)?;

    ctx.progress().record(part_len);

    UploadResponseBuilder::from(resp)
        .build()
        .map_err(|err| unreachable!("UploadResponseBuilder::build should be infallible: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::operation::create_multipart_upload::CreateMultipartUploadOutput;
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_sdk_s3::operation::upload_part::UploadPartOutput;
    use aws_sdk_s3::Client;
    use aws_smithy_mocks_experimental::{mock, mock_client};

    fn test_request(body: InputStream) -> UploadRequest {
        UploadRequest::builder()
            .bucket("test-bucket")
            .key("test-key")
            .body(body)
            .build()
            .expect("valid request")
    }

    #[tokio::test]
    async fn small_upload_uses_single_put() {
        let put_rule = mock!(Client::put_object)
            .match_requests(|r| r.bucket() == Some("test-bucket") && r.key() == Some("test-key"))
            .then_output(|| PutObjectOutput::builder().e_tag("\"abc\"").build());
        let client = mock_client!(aws_sdk_s3, &[&put_rule]);

        let handle = upload(
            client,
            ConcurrencyAdmission::new(8),
            MemoryAdmission::new(crate::DEFAULT_MAX_IN_MEMORY_BYTES_DESKTOP),
            test_request(InputStream::from_static(b"hello world")),
            crate::DEFAULT_TARGET_PART_SIZE,
            crate::DEFAULT_MULTIPART_UPLOAD_THRESHOLD,
            8,
        );

        let resp = handle.join().await.expect("upload succeeds");
        assert_eq!(Some("\"abc\""), resp.e_tag());
        assert_eq!(None, resp.upload_id().map(String::as_str));
    }

    #[tokio::test]
    async fn large_upload_drives_multipart_upload() {
        let create_rule = mock!(Client::create_multipart_upload)
            .then_output(|| CreateMultipartUploadOutput::builder().upload_id("upload-1").build());
        let upload_part_rule = mock!(Client::upload_part)
            .then_output(|| UploadPartOutput::builder().e_tag("\"part\"").build());
        let complete_rule = mock!(Client::complete_multipart_upload).then_output(|| {
            aws_sdk_s3::operation::complete_multipart_upload::CompleteMultipartUploadOutput::builder()
                .e_tag("\"whole\"")
                .build()
        });
        let client = mock_client!(
            aws_sdk_s3,
            &[&create_rule, &upload_part_rule, &complete_rule]
        );

        let payload = bytes::Bytes::from(vec![0u8; 20 * crate::MEBIBYTE as usize]);
        let handle = upload(
            client,
            ConcurrencyAdmission::new(8),
            MemoryAdmission::new(crate::DEFAULT_MAX_IN_MEMORY_BYTES_DESKTOP),
            test_request(InputStream::from(payload)),
            crate::DEFAULT_TARGET_PART_SIZE,
            crate::DEFAULT_MULTIPART_UPLOAD_THRESHOLD,
            4,
        );

        let resp = handle.join().await.expect("upload succeeds");
        assert_eq!(Some("\"whole\""), resp.e_tag());
        assert_eq!(Some("upload-1"), resp.upload_id().map(String::as_str));
    }

    #[test]
    fn part_size_respects_max_parts_cap() {
        // a 1 TiB payload at an 8 MiB target would need > 10,000 parts, so the
        // computed part size must grow to keep the part count under the cap.
        let payload_size = crate::GIBIBYTE * 1024;
        let part_size = compute_part_size(payload_size, crate::DEFAULT_TARGET_PART_SIZE);
        assert!(div_ceil(payload_size, part_size) <= crate::MAX_PARTS);
    }
}
