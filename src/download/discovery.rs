/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::{cmp, mem};

use aws_sdk_s3::operation::get_object::builders::GetObjectInputBuilder;
use aws_smithy_types::body::SdkBody;
use aws_smithy_types::byte_stream::{AggregatedBytes, ByteStream};
use bytes::Buf;

use crate::error;
use crate::types::MultipartDownloadType;

use super::context::DownloadContext;
use super::header::{self, ByteRange};
use super::object_meta::ObjectMetadata;
use super::DownloadRequest;

#[derive(Debug, Clone, PartialEq)]
enum ObjectDiscoveryStrategy {
    // The caller asked for a specific part number; a single `GetObject` with
    // that `part_number` satisfies the whole request regardless of config.
    ExplicitPart(i32),
    // The caller asked for a byte range but the configured strategy is
    // `ByPart`; serve it with a single ranged `GetObject`, no further
    // splitting (parts and ranges don't mix).
    SingleRangeGet(ByteRange),
    // Send a `HeadObject` request.
    // The overall transfer is optionally constrained to the given range.
    HeadObject(Option<ByteRange>),
    // Send `GetObject` with `part_number` = 1
    FirstPart,
    // Send `GetObject` request using a ranged get.
    // The overall transfer is optionally constrained to the given range.
    RangedGet(Option<RangeInclusive<u64>>),
}

/// What's left to fetch after triage: either a byte range (`ByRange`
/// strategy) or a span of part numbers (`ByPart` strategy).
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Remaining {
    Range(RangeInclusive<u64>),
    Parts(RangeInclusive<i32>),
}

impl Remaining {
    pub(super) fn is_empty(&self) -> bool {
        match self {
            Remaining::Range(r) => r.is_empty(),
            Remaining::Parts(r) => r.is_empty(),
        }
    }
}

/// Discovered object metadata (optionally with first chunk of data)
#[derive(Debug)]
pub(super) struct ObjectDiscovery {
    /// data remaining to be fetched
    pub(super) remaining: Remaining,

    /// the discovered metadata
    pub(super) meta: ObjectMetadata,

    /// the first chunk of data if fetched during discovery
    pub(super) initial_chunk: Option<AggregatedBytes>,
}

impl ObjectDiscoveryStrategy {
    fn from_request(
        request: &DownloadRequest,
        multipart_download_type: MultipartDownloadType,
    ) -> Result<ObjectDiscoveryStrategy, error::TransferError> {
        if let Some(part_number) = request.input.get_part_number() {
            return Ok(ObjectDiscoveryStrategy::ExplicitPart(*part_number));
        }

        let strategy = match request.input.get_range() {
            Some(h) => {
                let byte_range = header::Range::from_str(h)?.0;
                match (multipart_download_type, &byte_range) {
                    (MultipartDownloadType::ByPart, _) => {
                        ObjectDiscoveryStrategy::SingleRangeGet(byte_range)
                    }
                    (MultipartDownloadType::ByRange, ByteRange::Inclusive(start, end)) => {
                        ObjectDiscoveryStrategy::RangedGet(Some(*start..=*end))
                    }
                    // TODO(aws-sdk-rust#1159): explore when given a start range what it would like to just start
                    // sending requests from [start, start+part_size]
                    (MultipartDownloadType::ByRange, _) => {
                        ObjectDiscoveryStrategy::HeadObject(Some(byte_range))
                    }
                }
            }
            None => match multipart_download_type {
                MultipartDownloadType::ByPart => ObjectDiscoveryStrategy::FirstPart,
                MultipartDownloadType::ByRange => ObjectDiscoveryStrategy::RangedGet(None),
            },
        };

        Ok(strategy)
    }
}

/// Discover metadata about an object.
///
///Returns object metadata, the remaining range of data
/// to be fetched, and _(if available)_ the first chunk of data.
pub(super) async fn discover_obj(
    ctx: &DownloadContext,
    request: &DownloadRequest,
) -> Result<ObjectDiscovery, error::TransferError> {
    let strategy = ObjectDiscoveryStrategy::from_request(request, ctx.multipart_download_type)?;
    match strategy {
        ObjectDiscoveryStrategy::ExplicitPart(part_number) => {
            let r = request.input.clone().set_part_number(Some(part_number));
            discover_single_shot(ctx, r).await
        }
        ObjectDiscoveryStrategy::SingleRangeGet(byte_range) => {
            let r = request
                .input
                .clone()
                .set_part_number(None)
                .range(header::Range::bytes(byte_range));
            discover_single_shot(ctx, r).await
        }
        ObjectDiscoveryStrategy::HeadObject(byte_range) => {
            discover_obj_with_head(ctx, request, byte_range).await
        }
        ObjectDiscoveryStrategy::FirstPart => discover_obj_with_first_part(ctx, request).await,
        ObjectDiscoveryStrategy::RangedGet(range) => {
            let byte_range = match range.as_ref() {
                Some(r) => ByteRange::Inclusive(
                    *r.start(),
                    cmp::min(*r.start() + ctx.target_part_size - 1, *r.end()),
                ),
                None => ByteRange::Inclusive(0, ctx.target_part_size - 1),
            };
            let r = request
                .input
                .clone()
                .set_part_number(None)
                .range(header::Range::bytes(byte_range));

            discover_obj_with_get(ctx, r, range).await
        }
    }
}

/// Fetch the object in a single request (either an explicit part number or
/// an explicit range under a `ByPart` config) with nothing left over.
async fn discover_single_shot(
    ctx: &DownloadContext,
    request: GetObjectInputBuilder,
) -> Result<ObjectDiscovery, error::TransferError> {
    let resp = request
        .send_with(&ctx.client)
        .await
        .map_err(|e| error::DownloadError::DiscoverFailed(e.into()))?;

    let mut resp = resp;
    let empty_stream = ByteStream::new(SdkBody::empty());
    let body = mem::replace(&mut resp.body, empty_stream);

    let data = body
        .collect()
        .await
        .map_err(|e| error::DownloadError::DiscoverFailed(e.into()))?;

    let meta: ObjectMetadata = resp.into();

    Ok(ObjectDiscovery {
        remaining: Remaining::Range(1..=0),
        meta,
        initial_chunk: Some(data),
    })
}

/// Triage a `ByPart` download by fetching part 1 and reading `partsCount`
/// from the response to learn how many parts remain.
async fn discover_obj_with_first_part(
    ctx: &DownloadContext,
    request: &DownloadRequest,
) -> Result<ObjectDiscovery, error::TransferError> {
    let r = request.input.clone().part_number(1);
    let resp = r
        .send_with(&ctx.client)
        .await
        .map_err(|e| error::DownloadError::DiscoverFailed(e.into()))?;

    let mut resp = resp;
    let empty_stream = ByteStream::new(SdkBody::empty());
    let body = mem::replace(&mut resp.body, empty_stream);

    let data = body
        .collect()
        .await
        .map_err(|e| error::DownloadError::DiscoverFailed(e.into()))?;

    let meta: ObjectMetadata = resp.into();
    let parts_count = meta.parts_count.unwrap_or(1);
    let remaining = if parts_count <= 1 {
        Remaining::Parts(1..=0)
    } else {
        Remaining::Parts(2..=parts_count)
    };

    Ok(ObjectDiscovery {
        remaining,
        meta,
        initial_chunk: Some(data),
    })
}

async fn discover_obj_with_head(
    ctx: &DownloadContext,
    request: &DownloadRequest,
    byte_range: Option<ByteRange>,
) -> Result<ObjectDiscovery, error::TransferError> {
    let meta: ObjectMetadata = ctx
        .client
        .head_object()
        .set_bucket(request.input.get_bucket().clone())
        .set_key(request.input.get_key().clone())
        .send()
        .await
        .map_err(|e| error::DownloadError::DiscoverFailed(e.into()))?
        .into();

    let remaining = match byte_range {
        Some(range) => match range {
            ByteRange::Inclusive(start, end) => start..=end,
            ByteRange::AllFrom(start) => start..=meta.total_size(),
            ByteRange::Last(n) => (meta.total_size() - n + 1)..=meta.total_size(),
        },
        None => 0..=meta.total_size(),
    };

    Ok(ObjectDiscovery {
        remaining: Remaining::Range(remaining),
        meta,
        initial_chunk: None,
    })
}

async fn discover_obj_with_get(
    ctx: &DownloadContext,
    request: GetObjectInputBuilder,
    range: Option<RangeInclusive<u64>>,
) -> Result<ObjectDiscovery, error::TransferError> {
    let resp = request.send_with(&ctx.client).await;

    if resp.is_err() {
        // TODO(aws-sdk-rust#1159) - deal with empty file errors, see https://github.com/awslabs/aws-c-s3/blob/v0.5.7/source/s3_auto_ranged_get.c#L147-L153
    }

    let mut resp = resp.map_err(|e| error::DownloadError::DiscoverFailed(e.into()))?;

    // take the body so we can convert the metadata
    let empty_stream = ByteStream::new(SdkBody::empty());
    let body = mem::replace(&mut resp.body, empty_stream);

    let data = body
        .collect()
        .await
        .map_err(|e| error::DownloadError::DiscoverFailed(e.into()))?;

    let meta: ObjectMetadata = resp.into();

    let remaining = match range {
        Some(range) => (*range.start() + data.remaining() as u64)..=*range.end(),
        None => (data.remaining() as u64)..=meta.total_size() - 1,
    };

    Ok(ObjectDiscovery {
        remaining: Remaining::Range(remaining),
        meta,
        initial_chunk: Some(data),
    })
}

#[cfg(test)]
mod tests {
    use crate::download::discovery::{
        discover_obj, discover_obj_with_get, discover_obj_with_head, ObjectDiscoveryStrategy,
        Remaining,
    };
    use crate::admission::{ConcurrencyAdmission, MemoryAdmission};
    use crate::download::context::DownloadContext;
    use crate::download::header::ByteRange;
    use crate::types::MultipartDownloadType;
    use crate::MIN_PART_SIZE;
    use aws_sdk_s3::operation::get_object::{GetObjectInput, GetObjectOutput};
    use aws_sdk_s3::operation::head_object::HeadObjectOutput;
    use aws_sdk_s3::Client;
    use aws_smithy_mocks_experimental::{mock, mock_client};
    use aws_smithy_types::byte_stream::ByteStream;
    use bytes::Buf;

    use super::ObjectDiscovery;

    fn test_ctx(
        client: Client,
        target_part_size: u64,
        multipart_download_type: MultipartDownloadType,
    ) -> DownloadContext {
        DownloadContext {
            client,
            concurrency: ConcurrencyAdmission::new(8),
            memory: MemoryAdmission::new(64 * 1024 * 1024),
            target_part_size,
            multipart_download_type,
            bucket: "test-bucket".to_string(),
            progress: crate::progress::ProgressTracker::new(None, Vec::new()),
        }
    }

    fn strategy_from_range(
        range: Option<&str>,
        multipart_download_type: MultipartDownloadType,
    ) -> ObjectDiscoveryStrategy {
        let req = GetObjectInput::builder()
            .set_range(range.map(|r| r.to_string()))
            .into();
        ObjectDiscoveryStrategy::from_request(&req, multipart_download_type).unwrap()
    }

    #[test]
    fn test_strategy_from_req_by_range() {
        assert_eq!(
            ObjectDiscoveryStrategy::RangedGet(None),
            strategy_from_range(None, MultipartDownloadType::ByRange)
        );

        assert_eq!(
            ObjectDiscoveryStrategy::RangedGet(Some(100..=200)),
            strategy_from_range(Some("bytes=100-200"), MultipartDownloadType::ByRange)
        );
        assert_eq!(
            ObjectDiscoveryStrategy::HeadObject(Some(ByteRange::AllFrom(100))),
            strategy_from_range(Some("bytes=100-"), MultipartDownloadType::ByRange)
        );
        assert_eq!(
            ObjectDiscoveryStrategy::HeadObject(Some(ByteRange::Last(500))),
            strategy_from_range(Some("bytes=-500"), MultipartDownloadType::ByRange)
        );
    }

    #[test]
    fn test_strategy_from_req_by_part() {
        assert_eq!(
            ObjectDiscoveryStrategy::FirstPart,
            strategy_from_range(None, MultipartDownloadType::ByPart)
        );

        assert_eq!(
            ObjectDiscoveryStrategy::SingleRangeGet(ByteRange::Inclusive(100, 200)),
            strategy_from_range(Some("bytes=100-200"), MultipartDownloadType::ByPart)
        );
        assert_eq!(
            ObjectDiscoveryStrategy::SingleRangeGet(ByteRange::AllFrom(100)),
            strategy_from_range(Some("bytes=100-"), MultipartDownloadType::ByPart)
        );
    }

    #[test]
    fn test_strategy_from_req_explicit_part_number_wins() {
        let req = GetObjectInput::builder().part_number(3).into();
        assert_eq!(
            ObjectDiscoveryStrategy::ExplicitPart(3),
            ObjectDiscoveryStrategy::from_request(&req, MultipartDownloadType::ByRange).unwrap()
        );
        assert_eq!(
            ObjectDiscoveryStrategy::ExplicitPart(3),
            ObjectDiscoveryStrategy::from_request(&req, MultipartDownloadType::ByPart).unwrap()
        );
    }

    async fn get_discovery_from_head(range: Option<ByteRange>) -> ObjectDiscovery {
        let head_obj_rule = mock!(Client::head_object)
            .then_output(|| HeadObjectOutput::builder().content_length(500).build());
        let client = mock_client!(aws_sdk_s3, &[&head_obj_rule]);

        let ctx = test_ctx(client, MIN_PART_SIZE, MultipartDownloadType::ByRange);
        let request = GetObjectInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .into();

        discover_obj_with_head(&ctx, &request, range)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_discover_obj_with_head() {
        assert_eq!(
            Remaining::Range(0..=500),
            get_discovery_from_head(None).await.remaining
        );
        assert_eq!(
            Remaining::Range(10..=100),
            get_discovery_from_head(Some(ByteRange::Inclusive(10, 100)))
                .await
                .remaining
        );
        assert_eq!(
            Remaining::Range(100..=500),
            get_discovery_from_head(Some(ByteRange::AllFrom(100)))
                .await
                .remaining
        );
        assert_eq!(
            Remaining::Range(401..=500),
            get_discovery_from_head(Some(ByteRange::Last(100)))
                .await
                .remaining
        );
    }

    #[tokio::test]
    async fn test_discover_obj_with_get_full_range() {
        let target_part_size = 500;
        let bytes = &[0u8; 500];
        let get_obj_rule = mock!(Client::get_object)
            .match_requests(|r| r.range() == Some("bytes=0-499"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .content_length(500)
                    .content_range("0-499/700")
                    .body(ByteStream::from_static(bytes))
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, &[&get_obj_rule]);

        let ctx = test_ctx(client, target_part_size, MultipartDownloadType::ByRange);

        let request = GetObjectInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .into();

        let discovery = discover_obj(&ctx, &request).await.unwrap();
        let Remaining::Range(remaining) = discovery.remaining else {
            panic!("expected a byte range")
        };
        assert_eq!(200, remaining.clone().count());
        assert_eq!(500..=699, remaining);
        assert_eq!(
            500,
            discovery.initial_chunk.expect("initial chunk").remaining()
        );
    }

    #[tokio::test]
    async fn test_discover_obj_with_get_partial_range() {
        let target_part_size = 100;
        let bytes = &[0u8; 100];
        let get_obj_rule = mock!(Client::get_object)
            .match_requests(|r| r.range() == Some("bytes=200-299"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .content_length(100)
                    .content_range("200-299/700")
                    .body(ByteStream::from_static(bytes))
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, &[&get_obj_rule]);

        let ctx = test_ctx(client, target_part_size, MultipartDownloadType::ByRange);

        let request = GetObjectInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .range("bytes=200-499")
            .into();

        let discovery = discover_obj(&ctx, &request).await.unwrap();
        let Remaining::Range(remaining) = discovery.remaining else {
            panic!("expected a byte range")
        };
        assert_eq!(200, remaining.clone().count());
        assert_eq!(300..=499, remaining);
        assert_eq!(
            100,
            discovery.initial_chunk.expect("initial chunk").remaining()
        );
    }
}
