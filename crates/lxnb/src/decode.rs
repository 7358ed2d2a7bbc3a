use alloc::vec::Vec;

use crate::{
    DecoderOptions,
    buffer::{self, PartialSymbol, Scan},
    codec::{Unit, decode_byte},
    error::{DecodeError, DecodeErrorKind},
    log::{debug, trace},
    state::RollingState,
};

/// Decode LXNB text back into bytes.
///
/// Decoding is all-or-nothing: on error no partial output is returned.
///
/// # Errors
///
/// - [`DecodeErrorKind::OddLength`] if the text holds an odd number of
///   symbols. This is checked before any unit is decoded.
/// - [`DecodeErrorKind::InvalidSymbol`] or [`DecodeErrorKind::DigitOverflow`]
///   for the first unit that does not decode.
///
/// ```rust
/// assert_eq!(lxnb::decode("ɫ̂ńƁꞭҳņÞ").unwrap(), [114, 99, 110, 98]);
/// assert!(lxnb::decode("ȵþ").is_err());
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(text, DecoderOptions::default())
}

/// Decode LXNB text with explicit [`DecoderOptions`].
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_with(text: &str, options: DecoderOptions) -> Result<Vec<u8>, DecodeError> {
    let symbols = || text.chars().filter(move |&symbol| !options.skips(symbol));

    let count = symbols().count();
    if count % 2 == 1 {
        let err = DecodeError::new(DecodeErrorKind::OddLength { symbols: count }, count / 2);
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!options.panic_on_error, "{err}");
        return Err(err);
    }

    let mut out = Vec::with_capacity(count / 2);
    let mut state = RollingState::INITIAL;
    let mut symbols = symbols();
    while let (Some(lead), Some(trail)) = (symbols.next(), symbols.next()) {
        let (byte, next) = decode_byte(state, Unit::new(lead, trail)).map_err(|kind| {
            let err = DecodeError::new(kind, out.len());
            #[cfg(any(test, feature = "fuzzing"))]
            assert!(!options.panic_on_error, "{err}");
            err
        })?;
        out.push(byte);
        state = next;
    }
    Ok(out)
}

/// Incremental decoder.
///
/// Input chunks are raw UTF-8 and may end anywhere: inside the bytes of a
/// symbol, or between the two symbols of a unit. Both are held until the
/// next chunk completes them. Bytes are emitted as soon as their unit is
/// complete, so the output over any chunking equals [`decode`] of the whole
/// text.
///
/// After an error the decoder is halted: bytes emitted before the error stay
/// valid, but every later call fails with [`DecodeErrorKind::Halted`].
///
/// ```rust
/// use lxnb::StreamDecoder;
///
/// let text = "ȵßŁẋɫxńÞƞƃ".as_bytes();
/// let mut decoder = StreamDecoder::new();
/// let mut bytes = decoder.feed(&text[..9]).unwrap();
/// bytes.extend(decoder.feed(&text[9..]).unwrap());
/// decoder.finish().unwrap();
/// assert_eq!(bytes, [222, 233, 111, 122, 222]);
/// ```
#[derive(Debug, Default)]
pub struct StreamDecoder {
    options: DecoderOptions,
    state: RollingState,
    /// Lead symbol waiting for its trail.
    pending: Option<char>,
    /// Head of a symbol whose UTF-8 bytes are split across chunks.
    partial: PartialSymbol,
    /// Units decoded so far.
    position: usize,
    halted: bool,
}

impl StreamDecoder {
    /// Create a decoder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DecoderOptions::default())
    }

    /// Create a decoder with the given options.
    #[must_use]
    pub fn with_options(options: DecoderOptions) -> Self {
        Self {
            options,
            state: RollingState::INITIAL,
            pending: None,
            partial: PartialSymbol::default(),
            position: 0,
            halted: false,
        }
    }

    /// Decode a chunk of UTF-8 input and return the completed bytes.
    ///
    /// # Errors
    ///
    /// See [`StreamDecoder::feed_into`]. Bytes completed in this chunk before
    /// the error are dropped; use `feed_into` to keep them.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::with_capacity(chunk.len() / 4);
        self.feed_into(chunk, &mut out)?;
        Ok(out)
    }

    /// Decode a chunk of text and return the completed bytes.
    ///
    /// # Errors
    ///
    /// See [`StreamDecoder::feed_into`].
    pub fn feed_str(&mut self, chunk: &str) -> Result<Vec<u8>, DecodeError> {
        self.feed(chunk.as_bytes())
    }

    /// Decode a chunk of UTF-8 input, appending completed bytes to `out`.
    ///
    /// On error, `out` keeps every byte decoded before the failing unit.
    ///
    /// # Errors
    ///
    /// - [`DecodeErrorKind::InvalidSymbol`] or
    ///   [`DecodeErrorKind::DigitOverflow`] for a unit that does not decode.
    /// - [`DecodeErrorKind::InvalidUtf8`] for input that is not UTF-8.
    /// - [`DecodeErrorKind::Halted`] if an earlier call failed.
    pub fn feed_into(&mut self, chunk: &[u8], out: &mut Vec<u8>) -> Result<(), DecodeError> {
        if self.halted {
            return Err(self.halt(DecodeErrorKind::Halted));
        }
        let result = self.feed_symbols(chunk, out);
        trace!(
            bytes = chunk.len(),
            decoded = self.position,
            pending = self.pending.is_some(),
            partial = !self.partial.is_empty(),
            "decoded chunk"
        );
        result.map_err(|kind| self.halt(kind))
    }

    /// Signal the end of input.
    ///
    /// # Errors
    ///
    /// - [`DecodeErrorKind::Truncated`] if a lead symbol is still waiting for
    ///   its trail, or the input ended inside the bytes of a symbol.
    /// - [`DecodeErrorKind::Halted`] if an earlier call failed.
    pub fn finish(mut self) -> Result<(), DecodeError> {
        if self.halted {
            return Err(self.halt(DecodeErrorKind::Halted));
        }
        if self.pending.is_some() || !self.partial.is_empty() {
            return Err(self.halt(DecodeErrorKind::Truncated));
        }
        Ok(())
    }

    /// Number of bytes decoded so far.
    #[must_use]
    pub fn bytes_decoded(&self) -> usize {
        self.position
    }

    /// Whether a lead symbol or part of a symbol is buffered.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some() || !self.partial.is_empty()
    }

    fn feed_symbols(&mut self, chunk: &[u8], out: &mut Vec<u8>) -> Result<(), DecodeErrorKind> {
        let mut input = chunk;

        if !self.partial.is_empty() {
            match self.partial.complete(&mut input) {
                Scan::Symbol(symbol, _) => self.accept(symbol, out)?,
                Scan::Incomplete => return Ok(()),
                Scan::Invalid(bytes) => return Err(DecodeErrorKind::InvalidUtf8 { bytes }),
            }
        }

        while !input.is_empty() {
            match buffer::scan(input) {
                Scan::Symbol(symbol, len) => {
                    self.accept(symbol, out)?;
                    input = &input[len..];
                }
                Scan::Incomplete => {
                    self.partial.stash(input);
                    break;
                }
                Scan::Invalid(bytes) => return Err(DecodeErrorKind::InvalidUtf8 { bytes }),
            }
        }
        Ok(())
    }

    #[inline]
    fn accept(&mut self, symbol: char, out: &mut Vec<u8>) -> Result<(), DecodeErrorKind> {
        if self.options.skips(symbol) {
            return Ok(());
        }
        match self.pending.take() {
            None => self.pending = Some(symbol),
            Some(lead) => {
                let (byte, next) = decode_byte(self.state, Unit::new(lead, symbol))?;
                out.push(byte);
                self.state = next;
                self.position += 1;
            }
        }
        Ok(())
    }

    fn halt(&mut self, kind: DecodeErrorKind) -> DecodeError {
        self.halted = true;
        let err = DecodeError::new(kind, self.position);
        debug!(error = %err, "decoder halted");
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::alphabet::Position;

    #[test]
    fn lone_lead_is_held_until_its_trail_arrives() {
        let mut decoder = StreamDecoder::new();
        assert!(decoder.feed_str("ȵ").unwrap().is_empty());
        assert!(decoder.has_pending());
        assert_eq!(decoder.feed_str("ß").unwrap(), vec![222]);
        assert!(!decoder.has_pending());
        decoder.finish().unwrap();
    }

    #[test]
    fn feed_into_keeps_bytes_before_the_error() {
        let mut decoder = StreamDecoder::new();
        let mut out = Vec::new();
        let err = decoder.feed_into("ȵßlx".as_bytes(), &mut out).unwrap_err();
        assert_eq!(out, vec![222]);
        assert_eq!(err.unit, 1);
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::InvalidSymbol {
                symbol: 'l',
                position: Position::Lead
            }
        );
    }

    #[test]
    fn halted_decoder_rejects_more_input() {
        let mut decoder = StreamDecoder::new();
        assert!(decoder.feed_str("ĺӿ").is_err());
        let err = decoder.feed_str("ȵß").unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::Halted);
        assert_eq!(decoder.finish().unwrap_err().kind(), &DecodeErrorKind::Halted);
    }

    #[test]
    fn truncated_inside_a_symbol() {
        let mut decoder = StreamDecoder::new();
        let text = "ȵß".as_bytes();
        decoder.feed(&text[..3]).unwrap();
        let err = decoder.finish().unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::Truncated);
        assert_eq!(err.unit, 0);
    }

    #[test]
    fn invalid_utf8_is_reported_with_its_bytes() {
        let mut decoder = StreamDecoder::new();
        let err = decoder.feed(b"\xFF").unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::InvalidUtf8 { bytes: vec![0xFF] });
        assert_eq!(err.to_string(), "invalid UTF-8 sequence \"\\xff\" at unit 0");
    }

    #[test]
    fn whitespace_is_skipped_only_when_allowed() {
        let options = DecoderOptions {
            allow_whitespace: true,
            ..Default::default()
        };
        assert_eq!(decode_with("ȵ ß\nŁẋ\r\n", options).unwrap(), vec![222, 233]);
        assert_eq!(
            decode("ȵß\n").unwrap_err().kind(),
            &DecodeErrorKind::OddLength { symbols: 3 }
        );
    }

    #[test]
    #[should_panic(expected = "odd number of symbols")]
    fn panic_on_error_panics() {
        let options = DecoderOptions {
            panic_on_error: true,
            ..Default::default()
        };
        let _ = decode_with("ȵ", options);
    }
}
