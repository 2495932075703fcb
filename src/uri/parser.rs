use bytes::Bytes;

use super::{ErrorKind, ParseError, Scheme, SipUri, Span, matches};
use crate::{
    log,
    matches::{is_hdrchar, is_hex, is_hostname, is_paramchar, is_user},
};

const SIP: &[u8] = b"sip:";
const SIPS: &[u8] = b"sips:";

// ===== Parsing SIP URI =====
//
// sip:userinfo@hostport;params?headers
//
// Scheme -> Userinfo -> Host -> Port -> Params -> Headers -> Done
//                         \______\________/__________/
//
// Every stage either advances the cursor and returns the next stage, or returns an error which
// ends the scan. Only the host stage looks back, when an IPv4 literal turns out to be the prefix
// of a hostname.

/// Scanner stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Userinfo,
    Host,
    Port,
    Params,
    Headers,
    Done,
}

struct Scanner<'a> {
    bytes: &'a [u8],
    cursor: usize,
    userinfo: Option<Span>,
    hostport: Span,
    params: Option<Span>,
    headers: Option<Span>,
}

/// Parse SIP URI from shared bytes.
///
/// Returned [`SipUri`] holds `value` as is.
pub(crate) fn parse(value: Bytes) -> Result<SipUri, ParseError> {
    if value.len() > u16::MAX as usize {
        log::debug!("sip uri rejected, {} bytes long", value.len());
        return Err(ParseError::new(ErrorKind::TooLong, u16::MAX as usize));
    }

    let mut scanner = Scanner::new(&value);

    let result = scanner.run();

    let scheme = match result {
        Ok(ok) => ok,
        Err(err) => {
            log::debug!("{err}: {:?}", String::from_utf8_lossy(&value));
            return Err(err);
        }
    };

    let Scanner { userinfo, hostport, params, headers, .. } = scanner;

    let uri = SipUri { value, scheme, userinfo, hostport, params, headers };
    log::trace!("sip uri parsed: {uri:?}");
    Ok(uri)
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: 0,
            userinfo: None,
            hostport: Span::new(0, 0),
            params: None,
            headers: None,
        }
    }

    fn run(&mut self) -> Result<Scheme, ParseError> {
        let scheme = self.scheme()?;
        let mut state = State::Userinfo;

        loop {
            state = match state {
                State::Userinfo => self.userinfo()?,
                State::Host => self.host()?,
                State::Port => self.port()?,
                State::Params => self.params()?,
                State::Headers => self.headers()?,
                State::Done => return Ok(scheme),
            };
        }
    }

    // ===== Cursor =====

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.cursor..]
    }

    #[inline]
    fn error(&self, kind: ErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, offset)
    }

    /// Advance while bytes are in `class`, checking escapes on the way.
    fn take_while(&mut self, class: fn(u8) -> bool) -> Result<(), ParseError> {
        while let Some(byte) = self.peek() {
            if !class(byte) {
                break;
            }
            if byte == b'%' {
                self.escape()?;
            } else {
                self.cursor += 1;
            }
        }
        Ok(())
    }

    /// escaped = "%" HEXDIG HEXDIG
    fn escape(&mut self) -> Result<(), ParseError> {
        match self.bytes.get(self.cursor + 1..self.cursor + 3) {
            Some(&[hi, lo]) if is_hex(hi) && is_hex(lo) => {
                self.cursor += 3;
                Ok(())
            }
            _ => Err(self.error(ErrorKind::InvalidEscape, self.cursor)),
        }
    }

    // ===== Stages =====

    /// SIP-URI  = "sip:" [ userinfo ] hostport uri-parameters [ headers ]
    /// SIPS-URI = "sips:" [ userinfo ] hostport uri-parameters [ headers ]
    fn scheme(&mut self) -> Result<Scheme, ParseError> {
        if self.bytes.starts_with(SIP) {
            self.cursor = SIP.len();
            Ok(Scheme::Sip)
        } else if self.bytes.starts_with(SIPS) {
            self.cursor = SIPS.len();
            Ok(Scheme::Sips)
        } else {
            let offset = common_prefix(self.bytes, SIP).max(common_prefix(self.bytes, SIPS));
            Err(self.error(ErrorKind::InvalidScheme, offset))
        }
    }

    /// userinfo = ( user / telephone-subscriber ) [ ":" password ] "@"
    fn userinfo(&mut self) -> Result<State, ParseError> {
        let start = self.cursor;

        let Some(at) = matches::find_at_sign(self.rest()) else {
            return Ok(State::Host);
        };

        if at == 0 {
            return Err(self.error(ErrorKind::InvalidUserinfo, start));
        }

        // '@' is not in the class, so a valid userinfo stops right on it
        self.take_while(is_user)?;

        let end = start + at;
        if self.cursor != end {
            return Err(self.error(ErrorKind::InvalidUserinfo, self.cursor));
        }

        self.userinfo = Some(Span::new(start, end));
        self.cursor += 1;

        Ok(State::Host)
    }

    /// host = hostname / IPv4address / IPv6reference
    fn host(&mut self) -> Result<State, ParseError> {
        let start = self.cursor;
        let rest = self.rest();

        match rest.first() {
            None => return Err(self.error(ErrorKind::Truncated, self.bytes.len())),
            Some(b'[') => self.ipv6()?,
            Some(_) => match matches::parse_ipv4(rest) {
                Some(len) if is_host_end(rest.get(len).copied()) => self.cursor += len,
                // hostname is a superset of digits and dots
                _ => self.hostname()?,
            },
        }

        self.hostport = Span::new(start, self.cursor);

        match self.peek() {
            Some(b':') => Ok(State::Port),
            Some(b';') => Ok(State::Params),
            Some(b'?') => Ok(State::Headers),
            None => Ok(State::Done),
            Some(_) => Err(self.error(ErrorKind::InvalidHost, self.cursor)),
        }
    }

    /// hostname    = *( domainlabel "." ) toplabel [ "." ]
    /// domainlabel = alphanum / alphanum *( alphanum / "-" ) alphanum
    /// toplabel    = ALPHA / ALPHA *( alphanum / "-" ) alphanum
    fn hostname(&mut self) -> Result<(), ParseError> {
        let start = self.cursor;
        let mut label = start;
        let mut prev = start;

        while let Some(byte) = self.peek() {
            if !is_hostname(byte) {
                break;
            }
            match byte {
                b'.' => {
                    if self.cursor == label {
                        return Err(self.error(ErrorKind::InvalidHost, self.cursor));
                    }
                    if self.bytes[self.cursor - 1] == b'-' {
                        return Err(self.error(ErrorKind::InvalidHost, self.cursor - 1));
                    }
                    prev = label;
                    label = self.cursor + 1;
                }
                b'-' if self.cursor == label => {
                    return Err(self.error(ErrorKind::InvalidHost, self.cursor));
                }
                _ => {}
            }
            self.cursor += 1;
        }

        if self.cursor == start {
            return Err(self.error(ErrorKind::InvalidHost, self.cursor));
        }

        let toplabel = if label == self.cursor {
            // trailing '.'
            prev
        } else {
            if self.bytes[self.cursor - 1] == b'-' {
                return Err(self.error(ErrorKind::InvalidHost, self.cursor - 1));
            }
            label
        };

        if !self.bytes[toplabel].is_ascii_alphabetic() {
            return Err(self.error(ErrorKind::InvalidHost, toplabel));
        }

        Ok(())
    }

    /// IPv6reference = "[" IPv6address "]"
    /// IPv6address   = hexpart [ ":" IPv4address ]
    /// hexpart       = hexseq / hexseq "::" [ hexseq ] / "::" [ hexseq ]
    /// hexseq        = hex4 *( ":" hex4)
    /// hex4          = 1*4HEXDIG
    fn ipv6(&mut self) -> Result<(), ParseError> {
        // '['
        self.cursor += 1;

        let mut groups = 0;
        let mut compressed = false;

        if self.peek() == Some(b':') {
            if self.bytes.get(self.cursor + 1) != Some(&b':') {
                return Err(self.ipv6_error(self.cursor + 1));
            }
            compressed = true;
            self.cursor += 2;
        }

        if !(compressed && self.peek() == Some(b']')) {
            loop {
                let rest = self.rest();

                // IPv4 literal can only be the last piece
                if let Some(len) = matches::parse_ipv4(rest) {
                    match rest.get(len) {
                        Some(b']') => {
                            groups += 2;
                            self.cursor += len;
                            break;
                        }
                        None => return Err(self.ipv6_error(self.cursor + len)),
                        Some(_) => {}
                    }
                }

                let digits = rest.iter().take_while(|b| is_hex(**b)).count();
                if digits == 0 || digits > 4 {
                    return Err(self.ipv6_error(self.cursor + digits.min(4)));
                }

                groups += 1;
                self.cursor += digits;

                match self.peek() {
                    Some(b']') => break,
                    Some(b':') if self.bytes.get(self.cursor + 1) == Some(&b':') => {
                        if compressed {
                            return Err(self.error(ErrorKind::InvalidIPv6, self.cursor));
                        }
                        compressed = true;
                        self.cursor += 2;
                        if self.peek() == Some(b']') {
                            break;
                        }
                    }
                    Some(b':') => self.cursor += 1,
                    _ => return Err(self.ipv6_error(self.cursor)),
                }
            }
        }

        // "::" stands for at least one group
        let valid = if compressed { groups <= 7 } else { groups == 8 };
        if !valid {
            return Err(self.error(ErrorKind::InvalidIPv6, self.cursor));
        }

        // ']'
        self.cursor += 1;
        Ok(())
    }

    fn ipv6_error(&self, offset: usize) -> ParseError {
        if offset >= self.bytes.len() {
            self.error(ErrorKind::Truncated, self.bytes.len())
        } else {
            self.error(ErrorKind::InvalidIPv6, offset)
        }
    }

    /// port = 1*DIGIT
    fn port(&mut self) -> Result<State, ParseError> {
        // ':'
        self.cursor += 1;

        match matches::dtoi(self.rest()) {
            Some((port, len)) if port <= u16::MAX as u32 => self.cursor += len,
            _ => return Err(self.error(ErrorKind::InvalidPort, self.cursor)),
        }

        self.hostport.end = self.cursor as u16;

        match self.peek() {
            Some(b';') => Ok(State::Params),
            Some(b'?') => Ok(State::Headers),
            None => Ok(State::Done),
            Some(_) => Err(self.error(ErrorKind::InvalidPort, self.cursor)),
        }
    }

    /// uri-parameters = *( ";" uri-parameter)
    fn params(&mut self) -> Result<State, ParseError> {
        // ';'
        self.cursor += 1;
        let start = self.cursor;

        self.take_while(is_paramchar)?;
        self.params = Some(Span::new(start, self.cursor));

        match self.peek() {
            Some(b'?') => Ok(State::Headers),
            None => Ok(State::Done),
            Some(_) => Err(self.error(ErrorKind::InvalidParams, self.cursor)),
        }
    }

    /// headers = "?" header *( "&" header )
    fn headers(&mut self) -> Result<State, ParseError> {
        // '?'
        self.cursor += 1;
        let start = self.cursor;

        self.take_while(is_hdrchar)?;
        self.headers = Some(Span::new(start, self.cursor));

        match self.peek() {
            None => Ok(State::Done),
            Some(_) => Err(self.error(ErrorKind::InvalidHeader, self.cursor)),
        }
    }
}

#[inline]
fn is_host_end(byte: Option<u8>) -> bool {
    matches!(byte, None | Some(b':' | b';' | b'?'))
}

fn common_prefix(bytes: &[u8], literal: &[u8]) -> usize {
    bytes.iter().zip(literal).take_while(|(a, b)| a == b).count()
}

impl Span {
    /// Caller must ensure both offsets fit in `u16`.
    #[inline]
    const fn new(start: usize, end: usize) -> Self {
        Self { start: start as u16, end: end as u16 }
    }
}
