use alloc::string::String;

use crate::{codec::encode_byte, log::trace, state::RollingState};

/// Number of symbols in the encoding of `bytes` bytes.
#[inline]
#[must_use]
pub const fn encoded_len(bytes: usize) -> usize {
    bytes * 2
}

/// Encode `bytes` as LXNB text.
///
/// Never fails: every byte value has an encoding, and empty input produces
/// empty text.
///
/// ```rust
/// assert_eq!(lxnb::encode(&[114, 99, 110, 98]), "ɫ̂ńƁꞭҳņÞ");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::new();
    encode_into(bytes, &mut out);
    out
}

/// Encode `bytes`, appending the text to `out`.
pub fn encode_into(bytes: &[u8], out: &mut String) {
    StreamEncoder::new().feed_into(bytes, out);
}

/// Incremental encoder.
///
/// Each byte yields its unit as soon as it is fed, so nothing is ever held
/// back and no finishing step is required. Feeding a payload in any number of
/// chunks produces the same text as [`encode`] on the whole payload.
///
/// ```rust
/// use lxnb::StreamEncoder;
///
/// let mut encoder = StreamEncoder::new();
/// let mut text = encoder.feed(&[222, 233]);
/// assert_eq!(text, "ȵßŁẋ");
/// text += &encoder.feed(&[111, 122, 222]);
/// assert_eq!(text, lxnb::encode(&[222, 233, 111, 122, 222]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamEncoder {
    state: RollingState,
    position: usize,
}

impl StreamEncoder {
    /// Create an encoder at the start of a stream.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RollingState::INITIAL,
            position: 0,
        }
    }

    /// Encode a chunk and return its text.
    #[must_use]
    pub fn feed(&mut self, chunk: &[u8]) -> String {
        let mut out = String::new();
        self.feed_into(chunk, &mut out);
        out
    }

    /// Encode a chunk, appending its text to `out`.
    pub fn feed_into(&mut self, chunk: &[u8], out: &mut String) {
        // Most symbols are two bytes of UTF-8.
        out.reserve(chunk.len() * 4);
        for &byte in chunk {
            let (unit, next) = encode_byte(self.state, byte);
            out.push(unit.lead);
            out.push(unit.trail);
            self.state = next;
        }
        self.position += chunk.len();
        trace!(
            bytes = chunk.len(),
            position = self.position,
            "encoded chunk"
        );
    }

    /// Number of bytes encoded so far.
    #[must_use]
    pub fn bytes_encoded(&self) -> usize {
        self.position
    }

    /// Current rolling state.
    #[must_use]
    pub fn state(&self) -> RollingState {
        self.state
    }
}
