/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// The target part size for an upload or download request.
#[derive(Debug, Clone)]
pub enum TargetPartSize {
    /// Automatically configure an optimal target part size based on the execution environment.
    Auto,

    /// Explicitly configured part size.
    Explicit(u64),
}

impl TargetPartSize {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            TargetPartSize::Auto => crate::DEFAULT_TARGET_PART_SIZE,
            TargetPartSize::Explicit(size) => *size,
        }
    }
}

/// The concurrency settings to use for a single upload or download request.
#[derive(Debug, Clone)]
pub enum ConcurrencySetting {
    /// Automatically configure an optimal concurrency setting based on the execution environment.
    Auto,

    /// Explicitly configured concurrency setting.
    Explicit(usize),
}

impl ConcurrencySetting {
    pub(crate) fn resolve(&self) -> usize {
        match self {
            // mirrors the connection pool sizing a typical hyper client would use: a small
            // multiple of available cores, never fewer than 8.
            ConcurrencySetting::Auto => (num_cpus::get() * 4).max(8),
            ConcurrencySetting::Explicit(n) => *n,
        }
    }
}

/// Strategy used to fan out a single-object download into concurrent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultipartDownloadType {
    /// Use `GetObject` with `partNumber` to fetch successive parts of a multipart upload.
    #[default]
    ByPart,

    /// Use `GetObject` with `Range` to fetch successive byte ranges.
    ByRange,
}

/// Controls whether a checksum is calculated for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestChecksumCalculation {
    /// Only calculate a checksum when the caller explicitly asked for one.
    WhenSupported,
    /// Always calculate a checksum.
    #[default]
    Required,
}

/// Controls whether a response checksum is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseChecksumValidation {
    WhenSupported,
    #[default]
    Required,
}

/// Decision for how a directory operation should react to a single file/object failure.
#[derive(Debug, Clone, Default)]
pub enum FailurePolicy {
    /// Abort the whole operation (cancelling sibling work) on the first failure.
    #[default]
    Rethrow,
    /// Tally the failure and continue with the remaining files/objects.
    Ignore,
}
