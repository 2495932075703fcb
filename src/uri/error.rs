/// A possible error value when parsing SIP URI.
///
/// Carries the reason and the byte offset of the first offending character.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
}

/// The reason of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input does not begin with `sip:` or `sips:`.
    InvalidScheme,
    /// Illegal byte in userinfo, or empty userinfo.
    InvalidUserinfo,
    /// Illegal byte or malformed label in host, or empty host.
    InvalidHost,
    /// Malformed IPv6 reference.
    InvalidIPv6,
    /// Missing, non-decimal, or out of range port.
    InvalidPort,
    /// Illegal byte in params.
    InvalidParams,
    /// Illegal byte in headers.
    InvalidHeader,
    /// `%` not followed by two hex digits.
    InvalidEscape,
    /// Input ends where a component is still expected.
    Truncated,
    /// Input length is too large.
    TooLong,
}

impl ParseError {
    #[inline]
    pub(crate) const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Returns the error reason.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the byte offset of the first offending character.
    ///
    /// For [`ErrorKind::Truncated`] this is the input length.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

// ===== Error =====

macro_rules! gen_error {
    ($($variant:ident => $msg:literal),* $(,)?) => {
        impl ErrorKind {
            /// Returns the error description.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(ErrorKind::$variant => $msg,)*
                }
            }
        }
    };
}

gen_error! {
    InvalidScheme => "invalid scheme",
    InvalidUserinfo => "invalid userinfo",
    InvalidHost => "invalid host",
    InvalidIPv6 => "invalid IPv6 reference",
    InvalidPort => "invalid port",
    InvalidParams => "invalid params",
    InvalidHeader => "invalid headers",
    InvalidEscape => "invalid escape",
    Truncated => "uri truncated",
    TooLong => "uri too long",
}

impl std::error::Error for ParseError { }

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "invalid sip uri: {} at offset {}", self.kind, self.offset)
    }
}

impl std::fmt::Debug for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
