//! LXNB: a reversible binary-to-text encoding.
//!
//! Every byte becomes a *unit* of two Unicode symbols that look like the
//! letters L, N, X and B. Which symbols are chosen depends on the byte and on
//! a rolling state derived from all earlier bytes, so the same byte encodes
//! differently depending on where it appears. Decoding inverts the transform
//! exactly.
//!
//! ```rust
//! let text = lxnb::encode(b"LXNB!");
//! assert_eq!(text, "ḼχŅƃḽxƝƃLᚸ");
//! assert_eq!(lxnb::decode(&text).unwrap(), b"LXNB!");
//! ```
//!
//! [`StreamEncoder`] and [`StreamDecoder`] do the same over input split into
//! arbitrary chunks, producing output identical to the one-shot functions.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod alphabet;
pub mod chunk_utils;

mod buffer;
mod codec;
mod decode;
mod encode;
mod error;
mod log;
mod options;
mod state;

#[cfg(test)]
mod tests;

pub use alphabet::Position;
pub use codec::{Unit, decode_byte, encode_byte};
pub use decode::{StreamDecoder, decode, decode_with};
pub use encode::{StreamEncoder, encode, encode_into, encoded_len};
pub use error::{DecodeError, DecodeErrorKind};
pub use options::DecoderOptions;
pub use state::RollingState;
