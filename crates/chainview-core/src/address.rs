//! Bech32 address prefix conversion.
//!
//! Validator operator addresses and account addresses share the same payload
//! bytes and differ only in their human-readable prefix, so deriving the
//! owning account address is a decode + re-encode with the account prefix.

use bech32::{Bech32, Hrp};

use crate::error::AddressError;

/// Derive the account address that owns `validator_address` by re-encoding
/// its payload under `account_prefix`.
///
/// A malformed source address is a hard error: it signals corrupted input or
/// a decoder defect, never a condition to recover from.
pub fn account_address_from_validator_address(
    account_prefix: &str,
    validator_address: &str,
) -> Result<String, AddressError> {
    let (_, payload) = bech32::decode(validator_address).map_err(|e| AddressError::Malformed {
        address: validator_address.to_string(),
        reason: e.to_string(),
    })?;

    let hrp = Hrp::parse(account_prefix).map_err(|e| AddressError::InvalidPrefix {
        prefix: account_prefix.to_string(),
        reason: e.to_string(),
    })?;

    bech32::encode::<Bech32>(hrp, &payload).map_err(|e| AddressError::Malformed {
        address: validator_address.to_string(),
        reason: e.to_string(),
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(prefix: &str, payload: &[u8]) -> String {
        bech32::encode::<Bech32>(Hrp::parse(prefix).unwrap(), payload).unwrap()
    }

    #[test]
    fn converts_prefix_and_keeps_payload() {
        let payload: Vec<u8> = (0u8..20).collect();
        let validator = encode("crocncl", &payload);

        let account = account_address_from_validator_address("cro", &validator).unwrap();

        assert!(account.starts_with("cro1"));
        let (hrp, decoded) = bech32::decode(&account).unwrap();
        assert_eq!(hrp.as_str(), "cro");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn conversion_is_deterministic() {
        let validator = encode("crocncl", &[7u8; 20]);
        let a = account_address_from_validator_address("cro", &validator).unwrap();
        let b = account_address_from_validator_address("cro", &validator).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_address() {
        let err = account_address_from_validator_address("cro", "not-a-bech32-address");
        assert!(matches!(err, Err(AddressError::Malformed { .. })));
    }

    #[test]
    fn rejects_corrupted_checksum() {
        let mut validator = encode("crocncl", &[1u8; 20]);
        // Flip the last character to break the checksum.
        let last = if validator.ends_with('q') { 'p' } else { 'q' };
        validator.pop();
        validator.push(last);
        let err = account_address_from_validator_address("cro", &validator);
        assert!(matches!(err, Err(AddressError::Malformed { .. })));
    }

    #[test]
    fn rejects_bad_target_prefix() {
        let validator = encode("crocncl", &[1u8; 20]);
        let err = account_address_from_validator_address("", &validator);
        assert!(matches!(err, Err(AddressError::InvalidPrefix { .. })));
    }
}
