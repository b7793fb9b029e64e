//! Address string checks

use alloy::primitives::Address;

/// `0x` followed by exactly 40 ASCII hex digits, in any case.
pub fn is_address_shaped(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// True when `value` carries a valid EIP-55 mixed-case checksum.
pub fn has_valid_checksum(value: &str) -> bool {
    Address::parse_checksummed(value, None).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_case_addresses() {
        assert!(is_address_shaped("0x04068DA6C83AFCFA0e13ba15A6696662335D5B75"));
        assert!(is_address_shaped("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_address_shaped("04068DA6C83AFCFA0e13ba15A6696662335D5B75"));
        assert!(!is_address_shaped("0X04068DA6C83AFCFA0e13ba15A6696662335D5B75"));
        assert!(!is_address_shaped("0x04068DA6C83AFCFA0e13ba15A6696662335D5B7"));
        assert!(!is_address_shaped("0x04068DA6C83AFCFA0e13ba15A6696662335D5B750"));
        assert!(!is_address_shaped("0x04068DA6C83AFCFA0e13ba15A6696662335D5BZ5"));
        assert!(!is_address_shaped(" 0x04068DA6C83AFCFA0e13ba15A6696662335D5B75"));
    }

    #[test]
    fn checksum_detects_flipped_case() {
        assert!(has_valid_checksum("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!has_valid_checksum("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
    }
}
