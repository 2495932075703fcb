//! SIP and SIPS URI Scanner ([RFC3261 Section 25.1])
//!
//! Decompose a SIP URI into scheme, userinfo, hostport, params and headers in a single forward
//! pass, rejecting any input that does not conform to the grammar.
//!
//! ```
//! use sipuri::{Scheme, SipUri};
//!
//! let uri: SipUri = "sips:alice@atlanta.com?subject=project%20x&priority=urgent".parse()?;
//! assert_eq!(uri.scheme(), Scheme::Sips);
//! assert_eq!(uri.userinfo(), Some("alice"));
//! assert_eq!(uri.hostport(), "atlanta.com");
//! assert_eq!(uri.params(), None);
//! assert_eq!(uri.headers(), Some("subject=project%20x&priority=urgent"));
//! # Ok::<_, sipuri::ParseError>(())
//! ```
//!
//! [RFC3261 Section 25.1]: <https://datatracker.ietf.org/doc/html/rfc3261#section-25.1>
#![warn(missing_debug_implementations)]

mod log;
pub mod matches;
pub mod uri;

pub use uri::{ErrorKind, ParseError, Scheme, SipUri, parse};
