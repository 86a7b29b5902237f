/// Configuration options for the JSON5 decoder.
///
/// The grammar itself is fixed; these options only bound the resources a
/// single decode call may use.
///
/// # Default
///
/// `max_depth` defaults to [`DecoderOptions::DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum nesting depth of arrays and objects.
    ///
    /// Each `[` or `{` opens one level. Input nested deeper than this fails
    /// with [`ErrorKind::DepthLimitExceeded`] at the bracket that crosses the
    /// limit instead of exhausting the call stack. A limit of `0` accepts only
    /// scalar documents.
    ///
    /// Containers are decoded recursively, so very large limits trade that
    /// protection back for stack usage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json5_decode::{Decoder, DecoderOptions, ErrorKind};
    ///
    /// let decoder = Decoder::new(DecoderOptions { max_depth: 2 });
    /// assert!(decoder.decode_str("[[1]]").is_ok());
    /// let err = decoder.decode_str("[[[1]]]").unwrap_err();
    /// assert_eq!(err.kind(), &ErrorKind::DepthLimitExceeded(2));
    /// ```
    ///
    /// # Default
    ///
    /// `128`
    ///
    /// [`ErrorKind::DepthLimitExceeded`]: crate::ErrorKind::DepthLimitExceeded
    pub max_depth: usize,
}

impl DecoderOptions {
    /// The default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
