//! Carry-over for a UTF-8 symbol split across input chunks.
//!
//! Every LXNB symbol is two to three bytes of UTF-8 (some ASCII look-alikes
//! are one), and a chunk may end anywhere inside one. The decoder parks the
//! head of such a sequence here and completes it from the next chunk. At most
//! three bytes are ever held: a fourth would complete the longest sequence.

use alloc::vec::Vec;

/// Outcome of scanning for the next symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scan {
    /// A complete symbol and the number of input bytes it used.
    Symbol(char, usize),
    /// The input ends inside a valid, not yet complete, sequence.
    Incomplete,
    /// The input starts with bytes that can never form a symbol.
    Invalid(Vec<u8>),
}

/// Expected length of the sequence introduced by `lead`, if `lead` can start
/// a multi-byte sequence.
#[inline]
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decode the first symbol of `bytes`, which must be non-empty.
#[inline]
pub(crate) fn scan(bytes: &[u8]) -> Scan {
    let (ch, len) = bstr::decode_utf8(bytes);
    match ch {
        Some(ch) => Scan::Symbol(ch, len),
        None if len == bytes.len()
            && sequence_len(bytes[0]).is_some_and(|expected| bytes.len() < expected) =>
        {
            Scan::Incomplete
        }
        None => Scan::Invalid(bytes[..len.max(1)].to_vec()),
    }
}

#[derive(Debug, Default)]
pub(crate) struct PartialSymbol {
    bytes: [u8; 4],
    len: usize,
}

impl PartialSymbol {
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Park an incomplete tail. Only called with input that scanned as
    /// [`Scan::Incomplete`], so it is at most three bytes.
    pub(crate) fn stash(&mut self, tail: &[u8]) {
        debug_assert!(self.is_empty() && tail.len() < self.bytes.len());
        self.bytes[..tail.len()].copy_from_slice(tail);
        self.len = tail.len();
    }

    /// Complete the parked sequence with bytes from the front of `input`,
    /// advancing `input` past whatever was taken.
    ///
    /// Returns `Scan::Incomplete` if `input` ran out first; the taken bytes
    /// stay parked.
    pub(crate) fn complete(&mut self, input: &mut &[u8]) -> Scan {
        debug_assert!(!self.is_empty());
        let expected = sequence_len(self.bytes[0]).unwrap_or(1);
        let take = (expected - self.len).min(input.len());
        self.bytes[self.len..self.len + take].copy_from_slice(&input[..take]);
        self.len += take;
        *input = &input[take..];

        let scanned = scan(&self.bytes[..self.len]);
        match scanned {
            Scan::Incomplete => {}
            Scan::Symbol(..) | Scan::Invalid(_) => self.len = 0,
        }
        scanned
    }
}
