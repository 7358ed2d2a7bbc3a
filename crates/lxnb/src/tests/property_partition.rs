use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use crate::{
    DecodeError, StreamDecoder, StreamEncoder, chunk_utils::split_at_offsets, decode, encode,
};

#[cfg(not(miri))]
fn tests() -> u64 {
    if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

#[cfg(miri)]
fn tests() -> u64 {
    10
}

fn stream_decode(text: &[u8], splits: &[usize]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = StreamDecoder::new();
    let mut out = Vec::new();
    for chunk in split_at_offsets(text, splits) {
        decoder.feed_into(chunk, &mut out)?;
    }
    decoder.finish()?;
    Ok(out)
}

/// Property: decoding the encoding of any payload returns the payload, and
/// the encoding has exactly two symbols per byte.
#[test]
fn roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let text = encode(&bytes);
        text.chars().count() == bytes.len() * 2 && decode(&text).as_deref() == Ok(&bytes[..])
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: feeding a payload to the encoder in arbitrarily sized chunks
/// yields the same text as encoding it in one go.
#[test]
fn encoder_partition_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, splits: Vec<usize>) -> bool {
        let mut encoder = StreamEncoder::new();
        let mut text = String::new();
        for chunk in split_at_offsets(&bytes, &splits) {
            encoder.feed_into(chunk, &mut text);
        }
        encoder.bytes_encoded() == bytes.len() && text == encode(&bytes)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>) -> bool);
}

/// Property: feeding encoded text to the decoder split at arbitrary byte
/// offsets, including inside multi-byte symbols, recovers the payload.
#[test]
fn decoder_partition_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, splits: Vec<usize>) -> bool {
        let text = encode(&bytes);
        stream_decode(text.as_bytes(), &splits) == Ok(bytes)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>) -> bool);
}

/// Property: on arbitrary text the decoder never panics, and the streaming
/// decoder agrees with the one-shot decoder. An odd symbol count is reported
/// up front by `decode`; the stream can only notice it at some later unit or
/// at the end, so there it only has to fail.
#[test]
fn arbitrary_text_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, splits: Vec<usize>) -> bool {
        let streamed = stream_decode(text.as_bytes(), &splits);
        if text.chars().count() % 2 == 1 {
            decode(&text).is_err() && streamed.is_err()
        } else {
            streamed == decode(&text)
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, Vec<usize>) -> bool);
}
