#![cfg(test)]
use ipconv_core::{
    ConversionError, binary_to_decimal, binary_to_hex, binary_to_ip, decimal_to_binary,
    decimal_to_hex, decimal_to_ip, hex_to_binary, hex_to_decimal, hex_to_ip, ip_to_binary,
    ip_to_decimal, ip_to_hex, normalize,
};

/*************************************************************
                       Literal vectors
**************************************************************/

#[test]
fn literal_vectors() {
    assert_eq!(
        ip_to_binary("192.168.1.1").as_deref(),
        Ok("11000000.10101000.00000001.00000001")
    );
    assert_eq!(ip_to_hex("192.168.1.1").as_deref(), Ok("0xC0A80101"));
    assert_eq!(ip_to_decimal("192.168.1.1").as_deref(), Ok("3232235777"));
    assert_eq!(normalize("192.168.1"), "192.168.1.0");
}

#[test]
fn every_operation_on_one_address() {
    let bits = "11000000.10101000.00000001.00000001";
    assert_eq!(binary_to_ip(bits).as_deref(), Ok("192.168.1.1"));
    assert_eq!(binary_to_hex(bits).as_deref(), Ok("0xC0A80101"));
    assert_eq!(binary_to_decimal(bits).as_deref(), Ok("3232235777"));
    assert_eq!(hex_to_binary("0xC0A80101").as_deref(), Ok(bits));
    assert_eq!(hex_to_ip("0xC0A80101").as_deref(), Ok("192.168.1.1"));
    assert_eq!(hex_to_decimal("0xC0A80101").as_deref(), Ok("3232235777"));
    assert_eq!(decimal_to_ip("3232235777").as_deref(), Ok("192.168.1.1"));
    assert_eq!(decimal_to_hex("3232235777").as_deref(), Ok("0xC0A80101"));
    assert_eq!(decimal_to_binary("3232235777").as_deref(), Ok(bits));
}

#[test]
fn lenient_dotted_input() {
    assert_eq!(ip_to_hex("10").as_deref(), Ok("0x0A000000"));
    assert_eq!(ip_to_decimal("1.2.3.4.5").as_deref(), Ok("16909060"));
    assert_eq!(ip_to_binary(" 255.255 ").as_deref(), Ok("11111111.11111111.00000000.00000000"));
}

#[test]
fn digit_separators_in_decimal_literals() {
    assert_eq!(decimal_to_ip("1_000").as_deref(), Ok("0.0.3.232"));
    assert_eq!(ip_to_hex("1_0.0.0.1").as_deref(), Ok("0x0A000001"));
    assert!(matches!(
        decimal_to_ip("1__000"),
        Err(ConversionError::DecimalOutOfRange { .. })
    ));
    assert!(matches!(
        ip_to_decimal("_10.0.0.1"),
        Err(ConversionError::NonNumericToken { .. })
    ));
}

/*************************************************************
                         Boundaries
**************************************************************/

#[test]
fn decimal_boundaries() {
    assert_eq!(decimal_to_ip("0").as_deref(), Ok("0.0.0.0"));
    assert_eq!(decimal_to_ip("4294967295").as_deref(), Ok("255.255.255.255"));
    assert!(matches!(
        decimal_to_ip("4294967296"),
        Err(ConversionError::DecimalOutOfRange { .. })
    ));
    assert!(matches!(
        decimal_to_ip("-1"),
        Err(ConversionError::DecimalOutOfRange { .. })
    ));
    assert!(matches!(
        decimal_to_ip("not a number"),
        Err(ConversionError::DecimalOutOfRange { .. })
    ));
}

/*************************************************************
                        Error vectors
**************************************************************/

#[test]
fn error_vectors() {
    assert!(matches!(
        ip_to_binary("192.168.1.256"),
        Err(ConversionError::OctetOutOfRange { .. })
    ));
    assert!(matches!(
        binary_to_ip("11000000.10101000.1.00000001"),
        Err(ConversionError::WrongGroupLength { .. })
    ));
    assert!(matches!(
        hex_to_ip("0xZZZZZZZZ"),
        Err(ConversionError::InvalidHexDigit { .. })
    ));
}

#[test]
fn ip_errors_are_the_same_for_every_target() {
    for convert in [ip_to_binary, ip_to_hex, ip_to_decimal] {
        assert_eq!(
            convert("192.x.1.1"),
            Err(ConversionError::NonNumericToken {
                token: "x".to_string()
            })
        );
        assert_eq!(
            convert("192.168.1.-5"),
            Err(ConversionError::OctetOutOfRange {
                token: "-5".to_string()
            })
        );
    }
}

#[test]
fn error_messages_name_the_offender() {
    let err = binary_to_ip("11000000.10101000.00000001").unwrap_err();
    assert_eq!(err.to_string(), "a binary address must contain 4 groups, found 3");

    let err = hex_to_ip("0x1234567Q").unwrap_err();
    assert!(err.to_string().contains("'Q'"));

    let err = decimal_to_ip("4294967296").unwrap_err();
    assert!(err.to_string().contains("4294967296"));
}

/*************************************************************
                  Direct binary/decimal path
**************************************************************/

#[test]
fn direct_path_ignores_grouping_that_canonical_path_enforces() {
    // The canonical path insists on 4 groups of 8 bits...
    assert!(matches!(
        binary_to_ip("1.1"),
        Err(ConversionError::WrongGroupCount { found: 2 })
    ));
    assert!(matches!(
        binary_to_ip("1.1.1.1"),
        Err(ConversionError::WrongGroupLength { .. })
    ));
    assert!(binary_to_hex("1.1").is_err());

    // ...the direct path just concatenates the bits.
    assert_eq!(binary_to_decimal("1.1").as_deref(), Ok("3"));
    assert_eq!(binary_to_decimal("1.1.1.1").as_deref(), Ok("15"));
}

#[test]
fn direct_path_is_not_limited_to_32_bits() {
    let bits = "1".repeat(33);
    assert_eq!(binary_to_decimal(&bits).as_deref(), Ok("8589934591"));

    let bits = format!("1{}", "0".repeat(64));
    assert_eq!(
        binary_to_decimal(&bits).as_deref(),
        Ok("18446744073709551616")
    );
}

#[test]
fn direct_path_errors() {
    assert_eq!(
        binary_to_decimal("10.2"),
        Err(ConversionError::InvalidBinaryDigit { character: '2' })
    );
    assert_eq!(binary_to_decimal(""), Err(ConversionError::EmptyBinary));
    assert_eq!(binary_to_decimal("."), Err(ConversionError::EmptyBinary));
}
