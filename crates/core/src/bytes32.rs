//! `bytes32` hex identifiers shared with the token contract.
//!
//! The contract stores `assetId` and `metadataHash` as `bytes32`. Off-chain
//! they travel as `0x`-prefixed, 64-digit lowercase hex strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of hex digits in a `bytes32` value.
const HEX_DIGITS: usize = 64;

/// A normalised `bytes32` value: `0x` followed by exactly 64 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bytes32Hex(String);

impl Bytes32Hex {
    /// The all-zero hash.
    pub fn zero() -> Self {
        Self(format!("0x{}", "0".repeat(HEX_DIGITS)))
    }

    /// Normalise user or script input into a `bytes32` value.
    ///
    /// A full `0x` + 64 digit string is kept as-is (lowercased). Anything
    /// shorter has its `0x` prefix removed and is left-padded with zeros.
    pub fn parse_lenient(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() > HEX_DIGITS {
            return Err(CoreError::Validation(format!(
                "bytes32 value has {} hex digits, at most {HEX_DIGITS} allowed",
                digits.len()
            )));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::Validation(format!(
                "bytes32 value '{trimmed}' is not hexadecimal"
            )));
        }

        Ok(Self(format!(
            "0x{:0>width$}",
            digits.to_ascii_lowercase(),
            width = HEX_DIGITS
        )))
    }

    /// Build from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self(format!("0x{hex}"))
    }

    /// Decode into raw bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let digits = &self.0[2..];
        for (i, byte) in out.iter_mut().enumerate() {
            // Construction guarantees 64 valid hex digits.
            *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).unwrap_or_default();
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Generate a fresh asset identifier: a random UUID left-padded to 32 bytes.
pub fn new_asset_id() -> Bytes32Hex {
    let mut bytes = [0u8; 32];
    bytes[16..].copy_from_slice(uuid::Uuid::new_v4().as_bytes());
    Bytes32Hex::from_bytes(bytes)
}

impl TryFrom<String> for Bytes32Hex {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_lenient(&value)
    }
}

impl From<Bytes32Hex> for String {
    fn from(value: Bytes32Hex) -> Self {
        value.0
    }
}

impl fmt::Display for Bytes32Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn full_length_value_is_kept() {
        let input = format!("0x{}", "ab".repeat(32));
        assert_eq!(Bytes32Hex::parse_lenient(&input).unwrap().as_str(), input);
    }

    #[test]
    fn short_value_is_left_padded() {
        let parsed = Bytes32Hex::parse_lenient("0xABCD").unwrap();
        assert_eq!(parsed.as_str().len(), 66);
        assert!(parsed.as_str().starts_with("0x0000"));
        assert!(parsed.as_str().ends_with("abcd"));
    }

    #[test]
    fn unprefixed_value_is_accepted() {
        let parsed = Bytes32Hex::parse_lenient("1").unwrap();
        assert_eq!(parsed.to_bytes()[31], 1);
    }

    #[test]
    fn non_hex_and_oversized_values_are_rejected() {
        assert_matches!(
            Bytes32Hex::parse_lenient("0xnothex"),
            Err(CoreError::Validation(_))
        );
        let too_long = format!("0x{}", "1".repeat(65));
        assert_matches!(
            Bytes32Hex::parse_lenient(&too_long),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn zero_is_all_zero_bytes() {
        assert_eq!(Bytes32Hex::zero().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn bytes_round_trip() {
        let mut raw = [0u8; 32];
        raw[0] = 0xde;
        raw[31] = 0x01;
        assert_eq!(Bytes32Hex::from_bytes(raw).to_bytes(), raw);
    }

    #[test]
    fn new_asset_ids_are_unique_and_padded() {
        let a = new_asset_id();
        let b = new_asset_id();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with(&format!("0x{}", "0".repeat(32))));
    }
}
