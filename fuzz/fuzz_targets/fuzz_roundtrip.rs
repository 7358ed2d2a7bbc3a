#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lxnb::{DecodeError, DecoderOptions, StreamDecoder, StreamEncoder, decode_with, encode};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    split_seed: u64,
    payload: Vec<u8>,
    text: String,
}

/// Split `bytes` at random offsets drawn from `seed`. Chunks may end inside a
/// UTF-8 sequence; each is at least one byte.
fn split_random(bytes: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        let (chunk, tail) = rest.split_at(rng.random_range(1..=rest.len()));
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

fn stream_decode(
    text: &[u8],
    seed: u64,
    options: DecoderOptions,
) -> (Vec<u8>, Result<(), DecodeError>) {
    let mut decoder = StreamDecoder::with_options(options);
    let mut out = Vec::new();
    for chunk in split_random(text, seed) {
        if let Err(err) = decoder.feed_into(chunk, &mut out) {
            return (out, Err(err));
        }
    }
    (out, decoder.finish())
}

fn roundtrip(input: &Input) {
    let options = DecoderOptions {
        allow_whitespace: input.flags & 1 != 0,
        panic_on_error: false,
    };

    // Encoding is chunk invariant and always decodes back.
    let text = encode(&input.payload);
    let mut encoder = StreamEncoder::new();
    let streamed: String = split_random(&input.payload, input.split_seed)
        .into_iter()
        .map(|chunk| encoder.feed(chunk))
        .collect();
    assert_eq!(streamed, text);
    assert_eq!(decode_with(&text, options).unwrap(), input.payload);

    let (bytes, result) = stream_decode(text.as_bytes(), input.split_seed.rotate_left(17), options);
    result.unwrap();
    assert_eq!(bytes, input.payload);

    // Arbitrary text: the stream must agree with the one-shot decoder on
    // success, and must emit a prefix of it on failure.
    let (bytes, result) = stream_decode(input.text.as_bytes(), input.split_seed, options);
    match decode_with(&input.text, options) {
        Ok(expected) => {
            result.unwrap();
            assert_eq!(bytes, expected);
        }
        Err(_) => {
            let err = result.unwrap_err();
            assert_eq!(err.unit, bytes.len());
        }
    }
}

fuzz_target!(|input: Input| roundtrip(&input));
