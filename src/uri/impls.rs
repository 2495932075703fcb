use bytes::Bytes;

use super::{ParseError, Scheme, SipUri, Span, parser};

impl Scheme {
    /// Returns `"sip"` or `"sips"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
        }
    }

    /// Returns `true` for `sips`.
    #[inline]
    pub const fn is_secure(&self) -> bool {
        matches!(self, Scheme::Sips)
    }
}

impl SipUri {
    /// Parse SIP URI by copying from slice reference.
    ///
    /// If the input is owned [`Bytes`], consider using [`SipUri::parse_from`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid SIP URI.
    #[inline]
    pub fn parse<A: AsRef<[u8]>>(bytes: A) -> Result<Self, ParseError> {
        parser::parse(Bytes::copy_from_slice(bytes.as_ref()))
    }

    /// Parse SIP URI from [`Bytes`] without copying.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid SIP URI.
    #[inline]
    pub fn parse_from<B: Into<Bytes>>(bytes: B) -> Result<Self, ParseError> {
        parser::parse(bytes.into())
    }

    /// Parse SIP URI from static string.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid SIP URI.
    #[inline]
    pub fn from_static(string: &'static str) -> Self {
        match parser::parse(Bytes::from_static(string.as_bytes())) {
            Ok(ok) => ok,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    fn slice(&self, span: Span) -> &str {
        // SAFETY: precondition `value` is valid ASCII
        unsafe {
            std::str::from_utf8_unchecked(&self.value[span.start as usize..span.end as usize])
        }
    }

    /// Returns the URI scheme.
    #[inline]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the userinfo, without the trailing `@`, e.g: `alice:secretword`.
    #[inline]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.map(|span| self.slice(span))
    }

    /// Returns the host and optional port, e.g: `atlanta.com:5060`.
    #[inline]
    pub fn hostport(&self) -> &str {
        self.slice(self.hostport)
    }

    /// Returns the parameters, without the leading `;`, e.g: `transport=tcp;lr`.
    ///
    /// Returns `Some("")` when `;` is present but nothing follows.
    #[inline]
    pub fn params(&self) -> Option<&str> {
        self.params.map(|span| self.slice(span))
    }

    /// Returns the headers, without the leading `?`, e.g: `subject=project%20x&priority=urgent`.
    ///
    /// Returns `Some("")` when `?` is present but nothing follows.
    #[inline]
    pub fn headers(&self) -> Option<&str> {
        self.headers.map(|span| self.slice(span))
    }

    /// Returns the whole URI as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: precondition `value` is valid ASCII
        unsafe { std::str::from_utf8_unchecked(&self.value) }
    }

    /// Returns the whole URI as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }
}

// ===== Conversion =====

impl std::str::FromStr for SipUri {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SipUri::parse(s)
    }
}

impl TryFrom<&str> for SipUri {
    type Error = ParseError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SipUri::parse(value)
    }
}

impl TryFrom<String> for SipUri {
    type Error = ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        SipUri::parse_from(value)
    }
}

impl TryFrom<Bytes> for SipUri {
    type Error = ParseError;

    #[inline]
    fn try_from(value: Bytes) -> Result<Self, Self::Error> {
        SipUri::parse_from(value)
    }
}

impl AsRef<str> for SipUri {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ===== Comparison =====

impl PartialEq for SipUri {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SipUri { }

impl PartialEq<str> for SipUri {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SipUri {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::hash::Hash for SipUri {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ===== Formatting =====

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for SipUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for SipUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SipUri")
            .field("scheme", &self.scheme)
            .field("userinfo", &self.userinfo())
            .field("hostport", &self.hostport())
            .field("params", &self.params())
            .field("headers", &self.headers())
            .finish()
    }
}
