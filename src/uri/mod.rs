//! SIP Uniform Resource Identifier ([RFC3261 Section 19.1])
//!
//! [RFC3261 Section 19.1]: <https://datatracker.ietf.org/doc/html/rfc3261#section-19.1>
//!
//! # Percent Encoding
//!
//! All API here does not decode percent encoding. Every component is returned as a raw view of
//! the input text, escapes are only checked to be well formed.
use bytes::Bytes;

mod matches;
mod parser;
mod impls;
mod error;

pub use error::{ErrorKind, ParseError};

/// SIP URI scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `sip`
    Sip,
    /// `sips`
    Sips,
}

/// SIP URI ([RFC3261 Section 19.1]).
///
/// [RFC3261 Section 19.1]: <https://datatracker.ietf.org/doc/html/rfc3261#section-19.1>
///
/// # Syntax Component
///
/// ```not_rust
///   sips:alice:secret@atlanta.com:5061;transport=tcp?subject=project
///   \__/ \__________/ \______________/ \___________/ \_____________/
///    |        |              |               |               |
/// scheme  userinfo       hostport         params          headers
/// ```
///
/// Components are stored as offsets into the source text, which is kept as is.
//
// Internally:
//
// ```
//   sip:alice@atlanta.com;transport=tcp?subject=project
//       \___/ \_________/ \___________/ \_____________/
//         |       |             |              |
//     userinfo hostport       params        headers
// ```
//
// every span excludes its delimiter, so `userinfo.end` is the '@', `params.start - 1` is the
// ';' and `headers.start - 1` is the '?'
#[derive(Clone)]
pub struct SipUri {
    /// is valid ASCII
    value: Bytes,
    scheme: Scheme,
    userinfo: Option<Span>,
    hostport: Span,
    params: Option<Span>,
    headers: Option<Span>,
}

/// Byte range of a component in [`SipUri`] source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: u16,
    end: u16,
}

/// Parse SIP URI.
///
/// This is a shorthand for [`SipUri::parse`].
///
/// # Examples
///
/// ```
/// let uri = sipuri::parse("sip:alice@atlanta.com;transport=tcp").unwrap();
/// assert_eq!(uri.userinfo(), Some("alice"));
/// assert_eq!(uri.hostport(), "atlanta.com");
/// assert_eq!(uri.params(), Some("transport=tcp"));
/// assert_eq!(uri.headers(), None);
/// ```
///
/// # Errors
///
/// Returns [`Err`] if the input is not a valid SIP URI.
#[inline]
pub fn parse(input: &str) -> Result<SipUri, ParseError> {
    SipUri::parse(input)
}
