//! Ethereum-compatible address type (20 bytes)

use std::fmt;
use thiserror::Error;

use crate::hash::keccak256;

/// Address parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
    /// Mixed-case input that does not match its EIP-55 checksum
    #[error("invalid checksum for address {0}")]
    InvalidChecksum(String),
}

/// Ethereum-compatible 20-byte address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Zero address (0x0000...0000)
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create address from bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create address from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != Self::LEN {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Ok(Address(bytes))
    }

    /// Parse address from hex string (with or without 0x prefix), ignoring case
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = strip_prefix(s);
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Parse address from hex string, enforcing EIP-55 when the input is mixed case.
    ///
    /// All-lowercase and all-uppercase inputs carry no checksum and are
    /// accepted as long as they are 40 hex digits.
    pub fn from_checksummed(s: &str) -> Result<Self, AddressError> {
        let addr = Self::from_hex(s)?;
        let digits = strip_prefix(s);

        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper && addr.checksum_digits() != digits {
            return Err(AddressError::InvalidChecksum(s.to_string()));
        }

        Ok(addr)
    }

    /// Get as byte slice
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Convert to lowercase hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Convert to EIP-55 mixed-case hex string with 0x prefix
    pub fn to_checksum(&self) -> String {
        format!("0x{}", self.checksum_digits())
    }

    fn checksum_digits(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        lower
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let nibble = if i % 2 == 0 {
                    hash[i / 2] >> 4
                } else {
                    hash[i / 2] & 0x0f
                };
                if nibble >= 8 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }
}

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_checksummed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vectors from EIP-55
    const CHECKSUMMED: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    // ==================== Basic functionality tests ====================

    #[test]
    fn test_address_from_hex() {
        let addr = Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        assert!(!addr.is_zero());

        let addr2 = Address::from_hex("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(addr, addr2);
    }

    #[test]
    fn test_zero_address() {
        let zero = Address::ZERO;
        assert!(zero.is_zero());
        assert_eq!(zero.to_hex(), "0x0000000000000000000000000000000000000000");
    }

    #[test]
    fn test_address_display_is_lowercase() {
        let addr = Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        assert_eq!(
            format!("{}", addr),
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );
    }

    // ==================== Checksum tests ====================

    #[test]
    fn test_to_checksum_vectors() {
        for expected in CHECKSUMMED {
            let addr = Address::from_hex(&expected.to_lowercase()).unwrap();
            assert_eq!(addr.to_checksum(), expected);
        }
    }

    #[test]
    fn test_from_checksummed_accepts_valid() {
        for s in CHECKSUMMED {
            assert!(Address::from_checksummed(s).is_ok(), "{s} should be valid");
        }
    }

    #[test]
    fn test_from_checksummed_accepts_single_case() {
        assert!(Address::from_checksummed("0x52908400098527886e0f7030069857d2e4169ee7").is_ok());
        assert!(Address::from_checksummed("0x52908400098527886E0F7030069857D2E4169EE7").is_ok());
        assert!(Address::from_checksummed("0x0000000000000000000000000000000000000001").is_ok());
    }

    #[test]
    fn test_from_checksummed_rejects_bad_checksum() {
        // second character flipped to lowercase
        let result = Address::from_checksummed("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert!(matches!(result, Err(AddressError::InvalidChecksum(_))));
    }

    #[test]
    fn test_from_str_uses_checksum() {
        let addr: Address = CHECKSUMMED[0].parse().unwrap();
        assert_eq!(addr.to_checksum(), CHECKSUMMED[0]);
        assert!("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse::<Address>().is_err());
    }

    // ==================== Hex parsing edge cases ====================

    #[test]
    fn test_address_from_hex_invalid_chars() {
        let result = Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeGGG");
        assert!(matches!(result, Err(AddressError::InvalidHex(_))));
    }

    #[test]
    fn test_address_from_hex_empty() {
        assert_eq!(Address::from_hex(""), Err(AddressError::InvalidLength(0)));
        assert_eq!(Address::from_hex("0x"), Err(AddressError::InvalidLength(0)));
    }

    #[test]
    fn test_address_from_hex_wrong_length() {
        assert_eq!(
            Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeA"),
            Err(AddressError::InvalidLength(19))
        );
        assert_eq!(
            Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed00"),
            Err(AddressError::InvalidLength(21))
        );
    }

    #[test]
    fn test_address_from_hex_odd_length() {
        assert!(Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe").is_err());
    }

    #[test]
    fn test_address_from_slice() {
        let bytes = [0xab; 20];
        let addr = Address::from_slice(&bytes).unwrap();
        assert_eq!(addr.as_bytes(), &bytes);
        assert_eq!(Address::from_slice(&[0u8; 19]), Err(AddressError::InvalidLength(19)));
    }

    #[test]
    fn test_address_debug() {
        let addr = Address::from_bytes([0x11; 20]);
        assert_eq!(
            format!("{:?}", addr),
            "Address(0x1111111111111111111111111111111111111111)"
        );
    }
}
