#![cfg(test)]
use std::collections::HashSet;
use std::thread;

use ipconv_core::{Format, OPERATIONS, Operation};

const EXPECTED_IDS: [&str; 12] = [
    "ip_to_binary",
    "ip_to_hex",
    "ip_to_decimal",
    "binary_to_ip",
    "binary_to_hex",
    "binary_to_decimal",
    "hex_to_binary",
    "hex_to_ip",
    "hex_to_decimal",
    "decimal_to_ip",
    "decimal_to_hex",
    "decimal_to_binary",
];

#[test]
fn command_table_has_every_operation_once() {
    let ids: HashSet<&str> = OPERATIONS.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.len(), 12);
    for id in EXPECTED_IDS {
        assert!(ids.contains(id), "missing {id}");
        let op: Operation = id.parse().unwrap();
        assert_eq!(op.id(), id);
    }
}

#[test]
fn table_lookup_matches_operation_apply() {
    let input_for = |format: Format| match format {
        Format::Ip => "172.16.254.3",
        Format::Binary => "10101100.00010000.11111110.00000011",
        Format::Hex => "0xAC10FE03",
        Format::Decimal => "2886794755",
    };

    for (id, convert) in OPERATIONS.iter() {
        let op: Operation = id.parse().unwrap();
        let input = input_for(op.source());
        assert_eq!(convert(input), op.apply(input), "{id}");
        assert_eq!(op.apply(input).as_deref(), Ok(input_for(op.target())), "{id}");
    }
}

#[test]
fn operations_are_safe_to_call_concurrently() {
    let handles: Vec<_> = (0..8u32)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..1000u32 {
                    let value = (t << 24) | i;
                    let dotted = Operation::DecimalToIp.apply(&value.to_string()).unwrap();
                    let back = Operation::IpToDecimal.apply(&dotted).unwrap();
                    assert_eq!(back, value.to_string());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
