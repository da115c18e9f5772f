#![cfg(test)]
use ipconv_core::codec::{binary, decimal, hex};
use ipconv_core::{
    OctetList, binary_to_ip, decimal_to_ip, hex_to_ip, ip_to_binary, ip_to_decimal, ip_to_hex,
    normalize,
};

/// A spread of octet lists touching every value of every position.
fn sample_octets() -> Vec<OctetList> {
    let mut samples: Vec<OctetList> = Vec::new();
    for v in 0..=255u8 {
        samples.push(OctetList::new(v, 0, 0, 0));
        samples.push(OctetList::new(0, v, 0, 0));
        samples.push(OctetList::new(0, 0, v, 0));
        samples.push(OctetList::new(0, 0, 0, v));
        samples.push(OctetList::new(v, v.wrapping_mul(7), v ^ 0xA5, 255 - v));
    }
    samples
}

#[test]
fn hex_round_trip_preserves_octets() {
    for octets in sample_octets() {
        let dotted = octets.to_string();
        let hex_text = ip_to_hex(&dotted).unwrap();
        assert_eq!(hex_to_ip(&hex_text), Ok(dotted.clone()), "via {hex_text}");
        assert_eq!(hex::parse(&hex::format(&octets)), Ok(octets));
    }
}

#[test]
fn binary_round_trip_preserves_octets() {
    for octets in sample_octets() {
        let dotted = octets.to_string();
        let bits = ip_to_binary(&dotted).unwrap();
        assert_eq!(binary_to_ip(&bits), Ok(dotted.clone()), "via {bits}");
        assert_eq!(binary::parse(&binary::format(&octets)), Ok(octets));
    }
}

#[test]
fn decimal_round_trip_preserves_octets() {
    for octets in sample_octets() {
        let dotted = octets.to_string();
        let number = ip_to_decimal(&dotted).unwrap();
        assert_eq!(decimal_to_ip(&number), Ok(dotted.clone()), "via {number}");
        assert_eq!(decimal::parse(&decimal::format(&octets)), Ok(octets));
    }
}

#[test]
fn decimal_matches_std_ipv4_ordering() {
    for octets in sample_octets() {
        let std_addr = std::net::Ipv4Addr::from(octets);
        assert_eq!(u32::from(octets), u32::from(std_addr));
    }
}

#[test]
fn normalizer_is_idempotent() {
    let inputs = [
        "", ".", "..", "...", "....", "1", "1.2", "1.2.3", "1.2.3.4", "1.2.3.4.5",
        "a.b.c", "192.168.1", " 10.0 ", "1..2", "-1.300.x",
    ];
    for s in inputs {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "input {s:?}");
        assert_eq!(once.split('.').count(), 4, "input {s:?}");
    }
}
