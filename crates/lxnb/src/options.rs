/// Configuration for decoding LXNB text.
///
/// # Examples
///
/// ```rust
/// use lxnb::{DecoderOptions, StreamDecoder};
///
/// let mut decoder = StreamDecoder::with_options(DecoderOptions {
///     allow_whitespace: true,
///     ..Default::default()
/// });
/// assert_eq!(decoder.feed("ȵßŁẋ\n".as_bytes()).unwrap(), [222, 233]);
/// decoder.finish().unwrap();
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOptions {
    /// Whether to skip ASCII whitespace between symbols.
    ///
    /// Piped text often ends with a newline, and long encodings are sometimes
    /// wrapped. When `true`, space, tab, line feed, form feed and carriage
    /// return are ignored wherever they appear and do not count as symbols.
    /// When `false`, they are rejected like any other foreign symbol.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_whitespace: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on decode errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces.
    pub panic_on_error: bool,
}

impl DecoderOptions {
    #[inline]
    pub(crate) fn skips(&self, symbol: char) -> bool {
        self.allow_whitespace && symbol.is_ascii_whitespace()
    }
}
