/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use crate::download::context::DownloadContext;
use crate::download::header;
use crate::error;
use crate::error::TransferError;
use aws_sdk_s3::operation::get_object::builders::GetObjectInputBuilder;
use aws_smithy_types::body::SdkBody;
use aws_smithy_types::byte_stream::{AggregatedBytes, ByteStream};
use bytes::Buf;
use std::ops::RangeInclusive;
use std::{cmp, mem};
use tokio::sync::mpsc;
use tracing::Instrument;

#[derive(Debug, Clone)]
pub(super) enum ChunkSpec {
    Range(RangeInclusive<u64>),
    Part(i32),
}

#[derive(Debug, Clone)]
pub(super) struct ChunkRequest {
    pub(super) spec: ChunkSpec,
    pub(super) input: GetObjectInputBuilder,
    // sequence number
    pub(super) seq: u64,
    // size used for memory admission and tracing; exact for `Range`, an
    // estimate (the discovered average part size) for `Part`.
    size_hint: u64,
}

impl ChunkRequest {
    /// Size of this chunk request in bytes
    pub(super) fn size(&self) -> u64 {
        self.size_hint
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ChunkResponse {
    // TODO(aws-sdk-rust#1159, design) - consider PartialOrd for ChunkResponse and hiding `seq` as internal only detail
    // the seq number
    pub(crate) seq: u64,
    // chunk data
    pub(crate) data: Option<AggregatedBytes>,
}

/// Worker function that processes requests from the `requests` channel and
/// sends the result back on the `completed` channel.
pub(super) async fn download_chunks(
    ctx: DownloadContext,
    requests: async_channel::Receiver<ChunkRequest>,
    completed: mpsc::Sender<Result<ChunkResponse, TransferError>>,
) {
    while let Ok(request) = requests.recv().await {
        let seq = request.seq;
        tracing::trace!("worker recv'd request for chunk seq {seq}");

        let result = download_chunk(&ctx, request)
            .instrument(tracing::debug_span!("download-chunk", seq = seq))
            .await;

        if let Err(err) = completed.send(result).await {
            tracing::debug!(error = ?err, "chunk worker send failed");
            return;
        }
    }

    tracing::trace!("req channel closed, worker finished");
}

/// Download an individual chunk of data (range / part)
async fn download_chunk(
    ctx: &DownloadContext,
    request: ChunkRequest,
) -> Result<ChunkResponse, TransferError> {
    let _concurrency_permit = ctx.concurrency.acquire(&ctx.bucket).await;
    let _memory_permit = ctx.memory.acquire(request.size()).await;

    let mut resp = match request.input.send_with(&ctx.client).await {
        Ok(resp) => resp,
        Err(err) => {
            let err = error::chunk_failed(err);
            ctx.progress().failed(&err);
            return Err(err);
        }
    };

    let body = mem::replace(&mut resp.body, ByteStream::new(SdkBody::taken()));

    let bytes = match body
        .collect()
        .instrument(tracing::debug_span!("collect-body", seq = request.seq))
        .await
    {
        Ok(bytes) => bytes,
        Err(err) => {
            let err = error::chunk_failed(err);
            ctx.progress().failed(&err);
            return Err(err);
        }
    };

    ctx.progress().record(bytes.remaining() as u64);

    Ok(ChunkResponse {
        seq: request.seq,
        data: Some(bytes),
    })
}

pub(super) async fn distribute_by_range(
    remaining: RangeInclusive<u64>,
    input: GetObjectInputBuilder,
    part_size: u64,
    start_seq: u64,
    validator_tag: Option<String>,
    tx: async_channel::Sender<ChunkRequest>,
) {
    let end = *remaining.end();
    let mut pos = *remaining.start();
    let mut remaining = end - pos + 1;
    let mut seq = start_seq;
    let input = match &validator_tag {
        Some(tag) => input.if_match(tag.clone()),
        None => input,
    };

    while remaining > 0 {
        let start = pos;
        let end_inclusive = cmp::min(pos + part_size - 1, end);

        let chunk_req = next_chunk(start, end_inclusive, seq, input.clone());
        tracing::trace!(
            "distributing chunk(size={}): {:?}",
            chunk_req.size(),
            chunk_req
        );
        let chunk_size = chunk_req.size();
        tx.send(chunk_req).await.expect("channel open");

        seq += 1;
        remaining -= chunk_size;
        tracing::trace!("remaining = {}", remaining);
        pos += chunk_size;
    }

    tracing::trace!("work fully distributed");
    tx.close();
}

fn next_chunk(
    start: u64,
    end_inclusive: u64,
    seq: u64,
    input: GetObjectInputBuilder,
) -> ChunkRequest {
    let size_hint = end_inclusive - start + 1;
    let input = input.range(header::Range::bytes_inclusive(start, end_inclusive));
    ChunkRequest {
        spec: ChunkSpec::Range(start..=end_inclusive),
        seq,
        input,
        size_hint,
    }
}

/// Distribute the remaining parts (`2..=partsCount`) of a `ByPart` download.
/// `part_size_hint` is the average part size (`totalSize / partsCount`),
/// used only to size the memory reservation ahead of the actual fetch.
pub(super) async fn distribute_by_part(
    parts: RangeInclusive<i32>,
    input: GetObjectInputBuilder,
    part_size_hint: u64,
    start_seq: u64,
    validator_tag: Option<String>,
    tx: async_channel::Sender<ChunkRequest>,
) {
    let input = match &validator_tag {
        Some(tag) => input.if_match(tag.clone()),
        None => input,
    };

    let mut seq = start_seq;
    for part_number in parts {
        let part_input = input.clone().set_range(None).part_number(part_number);
        let chunk_req = ChunkRequest {
            spec: ChunkSpec::Part(part_number),
            input: part_input,
            seq,
            size_hint: part_size_hint,
        };
        tracing::trace!("distributing part {part_number} (seq {seq})");
        tx.send(chunk_req).await.expect("channel open");
        seq += 1;
    }

    tracing::trace!("work fully distributed");
    tx.close();
}

#[cfg(test)]
mod tests {
    use crate::download::header;
    use crate::download::worker::{distribute_by_part, distribute_by_range, ChunkSpec};
    use aws_sdk_s3::operation::get_object::builders::GetObjectInputBuilder;
    use std::ops::RangeInclusive;

    #[tokio::test]
    async fn test_distribute_by_range() {
        let rem = 0..=90u64;
        let part_size = 20;
        let input = GetObjectInputBuilder::default();
        let (tx, rx) = async_channel::unbounded();

        tokio::spawn(distribute_by_range(rem, input, part_size, 0, None, tx));

        let mut chunks = Vec::new();
        while let Ok(chunk) = rx.recv().await {
            chunks.push(chunk);
        }

        let expected_ranges = vec![0..=19u64, 20..=39u64, 40..=59u64, 60..=79u64, 80..=90u64];

        let actual_ranges: Vec<RangeInclusive<u64>> = chunks
            .iter()
            .map(|c| match &c.spec {
                ChunkSpec::Range(r) => r.clone(),
                ChunkSpec::Part(_) => panic!("expected a range chunk"),
            })
            .collect();

        assert_eq!(expected_ranges, actual_ranges);
        assert!(rx.is_closed());

        for (i, (chunk, range)) in chunks.iter().zip(expected_ranges.iter()).enumerate() {
            assert_eq!(i as u64, chunk.seq);
            let expected_range_header =
                header::Range::bytes_inclusive(*range.start(), *range.end()).to_string();

            assert_eq!(
                expected_range_header,
                chunk.input.get_range().clone().expect("range header set")
            );
        }
    }

    #[tokio::test]
    async fn test_distribute_by_part() {
        let parts = 2..=4i32;
        let input = GetObjectInputBuilder::default();
        let (tx, rx) = async_channel::unbounded();

        tokio::spawn(distribute_by_part(parts, input, 100, 1, None, tx));

        let mut chunks = Vec::new();
        while let Ok(chunk) = rx.recv().await {
            chunks.push(chunk);
        }

        assert_eq!(3, chunks.len());
        assert!(rx.is_closed());

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(i as u64 + 1, chunk.seq);
            match chunk.spec {
                ChunkSpec::Part(n) => assert_eq!(i as i32 + 2, n),
                ChunkSpec::Range(_) => panic!("expected a part chunk"),
            }
            assert_eq!(
                Some(&(i as i32 + 2)),
                chunk.input.get_part_number().as_ref()
            );
            assert_eq!(100, chunk.size());
        }
    }
}
