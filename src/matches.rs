//! Character classes of the SIP URI grammar ([RFC3261 Section 25.1]).
//!
//! Every predicate is a `const fn` backed by a 256 entry lookup table, so any
//! byte, including non-ASCII ones, can be classified without a branch.
//!
//! Classes that admit `escaped` only admit the `%` itself, the two hex digits
//! that must follow it are checked by the scanner.
//!
//! [RFC3261 Section 25.1]: <https://datatracker.ietf.org/doc/html/rfc3261#section-25.1>

macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

/// DIGIT
#[inline(always)]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// HEXDIG
#[inline(always)]
pub const fn is_hex(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

byte_map! {
    /// alphanum = ALPHA / DIGIT
    #[inline(always)]
    pub const fn is_alphanum(byte: u8) {
        byte.is_ascii_alphanumeric()
    }
}

// ===== Blocks =====

byte_map! {
    /// mark = "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"
    #[inline(always)]
    const fn mark(byte: u8) {
        matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
    }
}

byte_map! {
    /// unreserved = alphanum / mark
    #[inline(always)]
    pub const fn is_unreserved(byte: u8) {
        byte.is_ascii_alphanumeric() || mark(byte)
    }
}

// ===== Components =====

byte_map! {
    /// user            = 1*( unreserved / escaped / user-unreserved )
    /// user-unreserved = "&" / "=" / "+" / "$" / "," / ";" / "?" / "/"
    /// password        = *( unreserved / escaped / "&" / "=" / "+" / "$" / "," )
    ///
    /// `:` separates user from password.
    #[inline(always)]
    pub const fn is_user(byte: u8) {
        is_unreserved(byte)
        || matches!(byte, b'&' | b'=' | b'+' | b'$' | b',' | b';' | b'?' | b'/')
        || matches!(byte, b'%' | b':')
    }
}

byte_map! {
    /// hostname    = *( domainlabel "." ) toplabel [ "." ]
    /// domainlabel = alphanum / alphanum *( alphanum / "-" ) alphanum
    /// toplabel    = ALPHA / ALPHA *( alphanum / "-" ) alphanum
    ///
    /// Byte class only, label shape is checked by the scanner.
    #[inline(always)]
    pub const fn is_hostname(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.')
    }
}

byte_map! {
    /// paramchar         = param-unreserved / unreserved / escaped
    /// param-unreserved  = "[" / "]" / "/" / ":" / "&" / "+" / "$"
    ///
    /// `=` and `;` are included since the params span is captured whole.
    #[inline(always)]
    pub const fn is_paramchar(byte: u8) {
        is_unreserved(byte)
        || matches!(byte, b'[' | b']' | b'/' | b':' | b'&' | b'+' | b'$')
        || matches!(byte, b'=' | b';' | b'%')
    }
}

byte_map! {
    /// hnv-unreserved  = "[" / "]" / "/" / "?" / ":" / "+" / "$"
    /// hname / hvalue  = *( hnv-unreserved / unreserved / escaped )
    ///
    /// `=` and `&` are included since the headers span is captured whole.
    #[inline(always)]
    pub const fn is_hdrchar(byte: u8) {
        is_unreserved(byte)
        || matches!(byte, b'[' | b']' | b'/' | b'?' | b':' | b'+' | b'$')
        || matches!(byte, b'=' | b'&' | b'%')
    }
}

#[test]
fn test_classes() {
    for byte in b"azAZ09-_.!~*'()" {
        assert!(is_unreserved(*byte), "{}", *byte as char);
    }
    for byte in b"@[]:;?/&=+$,% \"#<>" {
        assert!(!is_unreserved(*byte), "{}", *byte as char);
    }

    assert!(b"alice:secret&=+$,;?/%".iter().all(|b| is_user(*b)));
    assert!(!is_user(b'@'));
    assert!(!is_user(b'['));
    assert!(!is_user(b' '));

    assert!(b"transport=tcp;lr[]/:&+$%".iter().all(|b| is_paramchar(*b)));
    assert!(!is_paramchar(b'?'));
    assert!(!is_paramchar(b'"'));
    assert!(!is_paramchar(b','));

    assert!(b"subject=project%20x&priority=urgent[]/?:+$".iter().all(|b| is_hdrchar(*b)));
    assert!(!is_hdrchar(b';'));
    assert!(!is_hdrchar(b'@'));

    assert!(b"gateway-1.example.com".iter().all(|b| is_hostname(*b)));
    assert!(!is_hostname(b'_'));
    assert!(!is_hostname(b':'));

    assert!(is_hex(b'f') && is_hex(b'F') && is_hex(b'9'));
    assert!(!is_hex(b'g'));
    assert!(is_digit(b'0') && !is_digit(b'a'));
    assert!(is_alphanum(b'Z') && !is_alphanum(b'-'));
}

#[test]
fn test_non_ascii() {
    for byte in 128..=255u8 {
        assert!(!is_unreserved(byte));
        assert!(!is_user(byte));
        assert!(!is_hostname(byte));
        assert!(!is_paramchar(byte));
        assert!(!is_hdrchar(byte));
    }
}
