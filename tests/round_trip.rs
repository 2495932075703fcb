use std::net::{Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;
use sipuri::{ErrorKind, Scheme, SipUri};

/// Re-join captured components with their delimiters.
fn join(uri: &SipUri) -> String {
    let mut out = format!("{}:", uri.scheme());
    if let Some(userinfo) = uri.userinfo() {
        out.push_str(userinfo);
        out.push('@');
    }
    out.push_str(uri.hostport());
    if let Some(params) = uri.params() {
        out.push(';');
        out.push_str(params);
    }
    if let Some(headers) = uri.headers() {
        out.push('?');
        out.push_str(headers);
    }
    out
}

fn host() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,6}[a-z0-9](\\.[a-zA-Z][a-z0-9]{0,6}){0,3}\\.?",
        any::<[u8; 4]>().prop_map(|octets| Ipv4Addr::from(octets).to_string()),
        any::<[u16; 8]>().prop_map(|groups| format!("[{}]", Ipv6Addr::from(groups))),
    ]
}

proptest! {
    /// Valid URIs parse and re-join to the exact input.
    #[test]
    fn uri_roundtrip(
        sips in any::<bool>(),
        user in proptest::option::of("[a-zA-Z0-9&=+$,;?/_.!~*'()-]{1,8}(%[0-9a-fA-F]{2})?"),
        password in proptest::option::of("[a-z0-9&=+$,]{0,8}"),
        host in host(),
        port in proptest::option::of(any::<u16>()),
        params in proptest::option::of("[a-z0-9=;/:&+$\\[\\]-]{0,12}"),
        headers in proptest::option::of("[a-z0-9=&/?:+$-]{0,12}(%[0-9A-F]{2})?"),
    ) {
        let scheme = if sips { "sips" } else { "sip" };
        let userinfo = user.map(|user| match &password {
            Some(password) => format!("{user}:{password}"),
            None => user,
        });

        let mut input = format!("{scheme}:");
        if let Some(userinfo) = &userinfo {
            input.push_str(userinfo);
            input.push('@');
        }
        let mut hostport = host.clone();
        if let Some(port) = port {
            hostport.push_str(&format!(":{port}"));
        }
        input.push_str(&hostport);
        if let Some(params) = &params {
            input.push(';');
            input.push_str(params);
        }
        if let Some(headers) = &headers {
            input.push('?');
            input.push_str(headers);
        }

        let uri = match SipUri::parse(&input) {
            Ok(ok) => ok,
            Err(err) => return Err(TestCaseError::fail(format!("{input:?}: {err}"))),
        };

        prop_assert_eq!(uri.scheme(), if sips { Scheme::Sips } else { Scheme::Sip });
        prop_assert_eq!(uri.userinfo(), userinfo.as_deref());
        prop_assert_eq!(uri.hostport(), hostport.as_str());
        prop_assert_eq!(uri.params(), params.as_deref());
        prop_assert_eq!(uri.headers(), headers.as_deref());
        prop_assert_eq!(join(&uri), input);
    }

    /// Any port in 16 bits is accepted, anything above is not.
    #[test]
    fn port_range(port in 0u32..1_000_000) {
        let input = format!("sip:alice@atlanta.com:{port}");
        match SipUri::parse(&input) {
            Ok(uri) => {
                prop_assert!(port <= u16::MAX as u32);
                let expected = format!("atlanta.com:{port}");
                prop_assert_eq!(uri.hostport(), expected.as_str());
            }
            Err(err) => {
                prop_assert!(port > u16::MAX as u32);
                prop_assert_eq!(err.kind(), ErrorKind::InvalidPort);
                prop_assert_eq!(err.offset(), "sip:alice@atlanta.com:".len());
            }
        }
    }

    /// Dotted-decimal host is accepted only when every octet is at most 255.
    #[test]
    fn ipv4_octets(octets in proptest::array::uniform4(0u32..1000)) {
        let host = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        let result = SipUri::parse(format!("sip:{host}"));

        if octets.iter().all(|octet| *octet <= 255) {
            let uri = result.map_err(|err| TestCaseError::fail(format!("{host}: {err}")))?;
            prop_assert_eq!(uri.hostport(), host.as_str());
        } else {
            let err = match result {
                Ok(uri) => return Err(TestCaseError::fail(format!("{host} accepted: {uri:?}"))),
                Err(err) => err,
            };
            prop_assert_eq!(err.kind(), ErrorKind::InvalidHost);
        }
    }

    /// Arbitrary input never panics, and whatever is accepted re-joins to itself.
    #[test]
    fn arbitrary_input(input in "(sips?:)?[ -~]{0,40}") {
        if let Ok(uri) = SipUri::parse(&input) {
            prop_assert_eq!(uri.as_str(), input.as_str());
            prop_assert_eq!(join(&uri), input);
            prop_assert!(!uri.hostport().is_empty());
        }
    }
}
