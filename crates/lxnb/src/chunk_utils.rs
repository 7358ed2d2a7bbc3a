//! Helpers for splitting payloads into chunks, used by tests, benches and the
//! fuzz target to drive the streaming adapters.

use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks without
/// breaking UTF-8 code points.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let len = payload.len();
    let chunk_size = len.div_ceil(parts);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < len {
        let mut end = core::cmp::min(start + chunk_size, len);
        while end < len && !payload.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&payload[start..end]);
        start = end;
    }
    chunks
}

/// Split `payload` into approximately equal-sized chunks at arbitrary byte
/// offsets.
///
/// Unlike [`produce_chunks`], boundaries may fall inside a UTF-8 sequence,
/// which is exactly what [`StreamDecoder`](crate::StreamDecoder) has to cope
/// with when reading from a pipe.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn split_bytes(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` at the given offsets, each taken modulo what remains.
///
/// Every chunk is non-empty; whatever the offsets do not cover forms the last
/// chunk.
#[must_use]
pub fn split_at_offsets<'a>(payload: &'a [u8], offsets: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::with_capacity(offsets.len() + 1);
    let mut rest = payload;
    for &offset in offsets {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(1 + offset % rest.len());
        chunks.push(chunk);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
