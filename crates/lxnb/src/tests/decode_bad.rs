use alloc::{string::ToString, vec, vec::Vec};

use crate::{
    DecodeErrorKind, DecoderOptions, Position, StreamDecoder, Unit, decode, decode_with,
};

#[test]
fn error_trailing_lead_symbol() {
    let mut decoder = StreamDecoder::new();
    assert_eq!(decoder.feed_str("ȵßŁ").unwrap(), vec![222]);
    let err = decoder.finish().unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::Truncated);
    assert_eq!(err.unit, 1);
    assert_eq!(err.to_string(), "input ended inside an encoded unit at unit 1");
}

#[test]
fn error_stream_ends_inside_a_symbol() {
    let text = "ȵßẋ".as_bytes();
    let mut decoder = StreamDecoder::new();
    assert_eq!(decoder.feed(&text[..text.len() - 1]).unwrap(), vec![222]);
    assert!(decoder.has_pending());
    assert_eq!(decoder.finish().unwrap_err().kind(), &DecodeErrorKind::Truncated);
}

#[test]
fn error_broken_sequence_across_chunks() {
    let mut decoder = StreamDecoder::new();
    decoder.feed_str("ȵß").unwrap();
    decoder.feed(b"\xE1").unwrap();
    let err = decoder.feed("ß".as_bytes()).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::InvalidUtf8 { bytes: vec![0xE1] });
    assert_eq!(err.unit, 1);
}

#[test]
fn error_stray_continuation_byte() {
    let mut decoder = StreamDecoder::new();
    let err = decoder.feed(b"\x9F").unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::InvalidUtf8 { bytes: vec![0x9F] });
}

#[test]
fn error_trail_symbol_in_lead_position() {
    let mut decoder = StreamDecoder::new();
    let err = decoder.feed_str("xȵ").unwrap_err();
    assert_eq!(
        err.kind(),
        &DecodeErrorKind::InvalidSymbol {
            symbol: 'x',
            position: Position::Lead
        }
    );
}

#[test]
fn error_is_reported_once_then_halted() {
    let mut decoder = StreamDecoder::new();
    let mut out = Vec::new();
    let err = decoder.feed_into("ȵßŁẋꞭƅ".as_bytes(), &mut out).unwrap_err();
    assert_eq!(out, vec![222, 233]);
    assert_eq!(err.kind(), &DecodeErrorKind::DigitOverflow { high: 16, low: 16 });
    assert_eq!(err.unit, 2);
    assert_eq!(decoder.bytes_decoded(), 2);

    let err = decoder.feed_into("ɫx".as_bytes(), &mut out).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::Halted);
    assert_eq!(out, vec![222, 233]);
}

#[test]
fn whitespace_between_streamed_symbols() {
    let mut decoder = StreamDecoder::with_options(DecoderOptions {
        allow_whitespace: true,
        ..Default::default()
    });
    let mut out = Vec::new();
    for chunk in ["ȵ", " ", "ß\tŁ", "\n", "ẋ\r\n"] {
        decoder.feed_into(chunk.as_bytes(), &mut out).unwrap();
    }
    decoder.finish().unwrap();
    assert_eq!(out, vec![222, 233]);
}

#[test]
fn whitespace_is_foreign_by_default() {
    let err = decode("ȵ ").unwrap_err();
    assert_eq!(
        err.kind(),
        &DecodeErrorKind::InvalidSymbol {
            symbol: ' ',
            position: Position::Trail
        }
    );
    assert!(decode_with(
        "ȵ ",
        DecoderOptions {
            allow_whitespace: true,
            ..Default::default()
        }
    )
    .is_err());
}

#[test]
fn serde_representation() {
    let unit = Unit::new('ȵ', 'ß');
    let json = serde_json::to_string(&unit).unwrap();
    assert_eq!(json, r#"{"lead":"ȵ","trail":"ß"}"#);
    assert_eq!(serde_json::from_str::<Unit>(&json).unwrap(), unit);

    let kind = decode("ȵþ").unwrap_err().kind().clone();
    assert_eq!(
        serde_json::to_string(&kind).unwrap(),
        r#"{"DigitOverflow":{"high":13,"low":16}}"#
    );
}
