/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::admission::{ConcurrencyAdmission, MemoryAdmission};
use crate::progress::ProgressTracker;
use crate::types::MultipartDownloadType;

/// Shared context used across a single download request
#[derive(Debug, Clone)]
pub(crate) struct DownloadContext {
    pub(crate) client: aws_sdk_s3::Client,
    pub(crate) concurrency: ConcurrencyAdmission,
    pub(crate) memory: MemoryAdmission,
    pub(crate) target_part_size: u64,
    pub(crate) multipart_download_type: MultipartDownloadType,
    pub(crate) bucket: String,
    pub(crate) progress: ProgressTracker,
}

impl DownloadContext {
    /// Replace the progress tracker, e.g. once the object's total size is known.
    pub(crate) fn set_progress(&mut self, progress: ProgressTracker) {
        self.progress = progress;
    }

    pub(crate) fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}
