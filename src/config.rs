/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Transfer manager configuration.

use crate::types::{
    ConcurrencySetting, MultipartDownloadType, RequestChecksumCalculation,
    ResponseChecksumValidation, TargetPartSize,
};

/// Configuration shared by every operation started from a single
/// [`crate::TransferManager`].
///
/// Construct with [`Config::builder`]; any field left unset falls back to a
/// default appropriate for a desktop/server workload.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) client: aws_sdk_s3::Client,
    pub(crate) target_part_size: TargetPartSize,
    pub(crate) multipart_upload_threshold: u64,
    pub(crate) multipart_download_type: MultipartDownloadType,
    pub(crate) request_checksum_calculation: RequestChecksumCalculation,
    pub(crate) response_checksum_validation: ResponseChecksumValidation,
    pub(crate) max_in_memory_bytes: u64,
    pub(crate) concurrency: ConcurrencySetting,
}

impl Config {
    /// Create a new [`ConfigBuilder`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The underlying S3 client used to issue requests.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    /// Resolved target part size in bytes.
    pub fn target_part_size(&self) -> u64 {
        self.target_part_size.resolve()
    }

    /// Threshold below which an upload uses a single `PutObject` call.
    pub fn multipart_upload_threshold(&self) -> u64 {
        self.multipart_upload_threshold
    }

    /// Strategy used to fan out single-object downloads.
    pub fn multipart_download_type(&self) -> MultipartDownloadType {
        self.multipart_download_type
    }

    pub fn request_checksum_calculation(&self) -> RequestChecksumCalculation {
        self.request_checksum_calculation
    }

    pub fn response_checksum_validation(&self) -> ResponseChecksumValidation {
        self.response_checksum_validation
    }

    /// Global in-memory byte budget shared by all transfers.
    pub fn max_in_memory_bytes(&self) -> u64 {
        self.max_in_memory_bytes
    }

    /// Resolved per-bucket concurrent request limit.
    pub fn concurrent_task_limit_per_bucket(&self) -> usize {
        self.concurrency.resolve()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    client: Option<aws_sdk_s3::Client>,
    target_part_size: Option<TargetPartSize>,
    multipart_upload_threshold: Option<u64>,
    multipart_download_type: Option<MultipartDownloadType>,
    request_checksum_calculation: Option<RequestChecksumCalculation>,
    response_checksum_validation: Option<ResponseChecksumValidation>,
    max_in_memory_bytes: Option<u64>,
    concurrency: Option<ConcurrencySetting>,
}

impl ConfigBuilder {
    /// Set the S3 client used to issue requests. Required.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the target part size for MPU parts and download segments.
    pub fn target_part_size(mut self, target_part_size: TargetPartSize) -> Self {
        self.target_part_size = Some(target_part_size);
        self
    }

    /// Set the single-PUT/MPU threshold, in bytes.
    pub fn multipart_upload_threshold(mut self, bytes: u64) -> Self {
        self.multipart_upload_threshold = Some(bytes);
        self
    }

    /// Set the download fan-out strategy.
    pub fn multipart_download_type(mut self, strategy: MultipartDownloadType) -> Self {
        self.multipart_download_type = Some(strategy);
        self
    }

    pub fn request_checksum_calculation(mut self, value: RequestChecksumCalculation) -> Self {
        self.request_checksum_calculation = Some(value);
        self
    }

    pub fn response_checksum_validation(mut self, value: ResponseChecksumValidation) -> Self {
        self.response_checksum_validation = Some(value);
        self
    }

    /// Set the global in-memory byte budget.
    pub fn max_in_memory_bytes(mut self, bytes: u64) -> Self {
        self.max_in_memory_bytes = Some(bytes);
        self
    }

    /// Set the per-bucket concurrent request limit.
    pub fn concurrency(mut self, concurrency: ConcurrencySetting) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Finalize the configuration.
    ///
    /// # Panics
    ///
    /// Panics if no client was provided; an S3 client is mandatory.
    pub fn build(self) -> Config {
        Config {
            client: self.client.expect("an S3 client is required"),
            target_part_size: self.target_part_size.unwrap_or(TargetPartSize::Auto),
            multipart_upload_threshold: self
                .multipart_upload_threshold
                .unwrap_or(crate::DEFAULT_MULTIPART_UPLOAD_THRESHOLD),
            multipart_download_type: self.multipart_download_type.unwrap_or_default(),
            request_checksum_calculation: self.request_checksum_calculation.unwrap_or_default(),
            response_checksum_validation: self.response_checksum_validation.unwrap_or_default(),
            max_in_memory_bytes: self
                .max_in_memory_bytes
                .unwrap_or(crate::DEFAULT_MAX_IN_MEMORY_BYTES_DESKTOP),
            concurrency: self.concurrency.unwrap_or(ConcurrencySetting::Auto),
        }
    }
}
