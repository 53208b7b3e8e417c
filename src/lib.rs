/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! AWS S3 Transfer Manager
//!
//! A high-level, high-throughput object-transfer engine layered on top of
//! [`aws-sdk-s3`](aws_sdk_s3). Moves bytes between the local filesystem and
//! an S3-compatible object store using concurrent multipart uploads,
//! concurrent ranged/part downloads, and bounded-fan-out directory
//! transfers, while keeping both in-flight request counts and buffered
//! memory under configured limits.
//!
//! # Crate Features
//!
//! - `test-util`: Enables utilities for unit tests. DO NOT ENABLE IN PRODUCTION.

#![warn(
    // TODO - re-enable missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub(crate) const MEBIBYTE: u64 = 1024 * 1024;
pub(crate) const GIBIBYTE: u64 = MEBIBYTE * 1024;
pub(crate) const MIN_PART_SIZE: u64 = 5 * MEBIBYTE;
pub(crate) const MAX_PARTS: u64 = 10_000;

/// Default target part size used for both MPU parts and download segments.
pub(crate) const DEFAULT_TARGET_PART_SIZE: u64 = 8 * MEBIBYTE;
/// Default threshold under which an upload uses a single `PutObject` call.
pub(crate) const DEFAULT_MULTIPART_UPLOAD_THRESHOLD: u64 = 16 * MEBIBYTE;
/// Default global in-memory byte budget for a desktop/server workload.
pub(crate) const DEFAULT_MAX_IN_MEMORY_BYTES_DESKTOP: u64 = 6 * GIBIBYTE;
/// Default global in-memory byte budget for a mobile workload.
pub(crate) const DEFAULT_MAX_IN_MEMORY_BYTES_MOBILE: u64 = GIBIBYTE;
/// Default global in-memory byte budget for a constrained-watch workload.
pub(crate) const DEFAULT_MAX_IN_MEMORY_BYTES_CONSTRAINED: u64 = 100 * MEBIBYTE;

pub mod admission;
pub mod config;
pub mod download;
pub mod error;
pub mod fs_layout;
pub mod io;
pub mod manager;
pub mod progress;
pub mod traverse;
pub mod types;
pub mod upload;

mod dir_download;
mod dir_upload;

pub use config::{Config, ConfigBuilder};
pub use manager::TransferManager;
