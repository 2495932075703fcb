/// Find the userinfo delimiter `@`.
///
/// Returns `None` if `[` comes first, it can only open an IPv6 reference at this position and
/// `@` is never part of one.
pub const fn find_at_sign(bytes: &[u8]) -> Option<usize> {
    const BLOCK: usize = size_of::<usize>();
    const MSB: usize = usize::from_ne_bytes([0b1000_0000; BLOCK]);
    const LSB: usize = usize::from_ne_bytes([0b0000_0001; BLOCK]);
    const AT: usize = usize::from_ne_bytes([b'@'; BLOCK]);
    const BRACKET: usize = usize::from_ne_bytes([b'['; BLOCK]);

    let mut state: &[u8] = bytes;
    let mut offset = 0;

    while let Some((chunk, rest)) = state.split_first_chunk::<BLOCK>() {
        let block = usize::from_ne_bytes(*chunk);

        // '@'
        let is_at = (block ^ AT).wrapping_sub(LSB);
        // '['
        let is_br = (block ^ BRACKET).wrapping_sub(LSB);

        // this also hits on non-ASCII byte, the exact position is resolved below
        if (is_at | is_br) & MSB != 0 {
            break;
        }

        offset += BLOCK;
        state = rest;
    }

    while let [byte, rest @ ..] = state {
        match *byte {
            b'@' => return Some(offset),
            b'[' => return None,
            _ => {}
        }
        offset += 1;
        state = rest;
    }

    None
}

#[test]
fn test_find_at_sign() {
    assert_eq!(find_at_sign(b"atlanta.com"), None);
    assert_eq!(find_at_sign(b""), None);
    assert_eq!(find_at_sign(b"a@b"), Some(1));
    assert_eq!(find_at_sign(b"alice:secretword@atlanta.com"), Some(16));
    assert_eq!(find_at_sign(b"+1-212-555-1212:1234@gateway.com"), Some(20));
    assert_eq!(find_at_sign(b"[2001:db8::1]"), None);
    assert_eq!(find_at_sign(b"alice@[2001:db8::1]"), Some(5));
    assert_eq!(find_at_sign("ålice@atlanta.com".as_bytes()), Some(6));
    assert_eq!(find_at_sign(b"a.very.long.hostname.example.com;x=@"), Some(35));
}

/// Upper bound of [`dtoi`] accumulator.
const BIG: u32 = 0xFFFFF;

/// Decimal to integer.
///
/// Returns the number and the count of digits consumed, or `None` if there is no leading digit
/// or the number reaches `0xFFFFF`.
pub const fn dtoi(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut n = 0u32;
    let mut i = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        n = n * 10 + (bytes[i] - b'0') as u32;
        if n >= BIG {
            return None;
        }
        i += 1;
    }

    if i == 0 { None } else { Some((n, i)) }
}

#[test]
fn test_dtoi() {
    assert_eq!(dtoi(b"0"), Some((0, 1)));
    assert_eq!(dtoi(b"5060;transport=tcp"), Some((5060, 4)));
    assert_eq!(dtoi(b"65536"), Some((65536, 5)));
    assert_eq!(dtoi(b"00080"), Some((80, 5)));
    assert_eq!(dtoi(b"99999999999999999999"), None);
    assert_eq!(dtoi(b"a22"), None);
    assert_eq!(dtoi(b""), None);
}

/// IPv4address = 1*3DIGIT "." 1*3DIGIT "." 1*3DIGIT "." 1*3DIGIT
///
/// Match dotted-decimal IPv4 literal at the start of `bytes`, each octet at most 255.
///
/// Returns the matched length, trailing bytes are not inspected.
pub const fn parse_ipv4(bytes: &[u8]) -> Option<usize> {
    let mut len = 0;
    let mut i = 0;

    while i < 4 {
        if i > 0 {
            if len >= bytes.len() || bytes[len] != b'.' {
                return None;
            }
            len += 1;
        }

        let (_, rest) = bytes.split_at(len);
        match dtoi(rest) {
            Some((n, c)) if n <= 0xFF && c <= 3 => len += c,
            _ => return None,
        }

        i += 1;
    }

    Some(len)
}

#[test]
fn test_parse_ipv4() {
    macro_rules! test {
        ($input:literal, $len:expr) => {
            assert_eq!(parse_ipv4($input), $len, "{:?}", std::str::from_utf8($input));
        };
    }

    test!(b"8.8.8.8", Some(7));
    test!(b"18.8.88.8", Some(9));
    test!(b"199.0.17.255", Some(12));
    test!(b"199.199.177.255", Some(15));
    test!(b"255.255.255.255", Some(15));
    test!(b"0.0.0.0", Some(7));
    test!(b"8.8.8.8:999", Some(7));
    test!(b"10.0.0.121?header=foo", Some(10));
    test!(b"77.123.0.11;header=foo", Some(11));
    test!(b"1.2.3.4.example.com", Some(7));

    test!(b"8.8d.8.8", None);
    test!(b"8.8.8.256", None);
    test!(b"256.0.0.1", None);
    test!(b"8000.8.8.56", None);
    test!(b"0001.1.1.1", None);
    test!(b"1.2.3", None);
    test!(b"1.2.3.", None);
    test!(b"", None);
    test!(b"foo", None);
}
