//! # Error Types for Powpeg Redeem Scripts
//!
//! Every error describes the caller input that was rejected, not the place in
//! the call chain where the problem was noticed. Nothing in this crate performs
//! I/O, so none of these errors is transient.

use crate::config::{csv, script};
use thiserror::Error;

/// Main error type for script construction and address derivation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedeemScriptError {
    /// Federation public keys could not be turned into a key set
    #[error("Invalid public key set: {reason}")]
    InvalidPublicKeySet { reason: String },

    /// Emergency federation public keys could not be turned into a key set
    #[error("Invalid emergency public key set: {reason}")]
    InvalidEmergencyPublicKeySet { reason: String },

    /// CSV value is not an integer in the supported range
    #[error(
        "Invalid CSV value {value}: must be an integer between {min} and {max}",
        min = csv::MIN_VALUE,
        max = csv::MAX_VALUE
    )]
    InvalidCsvValue { value: String },

    /// Flyover derivation hash is not exactly 32 bytes
    #[error("Invalid derivation hash: {reason}")]
    InvalidDerivationHash { reason: String },

    /// Input expected to be a finished redeem script is absent or malformed
    #[error("Invalid redeem script: {reason}")]
    InvalidRedeemScript { reason: String },

    /// Network selector is not one of the supported networks
    #[error("Network {network} is not a valid value (valid values are: MAINNET, TESTNET, REGTEST)")]
    InvalidNetwork { network: String },

    /// Key set too large for the small-integer opcode table
    #[error(
        "Unsupported key count {count}: standard multisig supports at most {max} keys",
        max = script::MAX_MULTISIG_KEYS
    )]
    UnsupportedKeyCount { count: usize },
}

/// Result type alias for redeem script operations
pub type RedeemScriptResult<T> = Result<T, RedeemScriptError>;

impl RedeemScriptError {
    /// Create a public key set error with a reason
    pub fn public_keys(reason: impl Into<String>) -> Self {
        Self::InvalidPublicKeySet {
            reason: reason.into(),
        }
    }

    /// Create an emergency public key set error with a reason
    pub fn emergency_public_keys(reason: impl Into<String>) -> Self {
        Self::InvalidEmergencyPublicKeySet {
            reason: reason.into(),
        }
    }

    /// Create a CSV error for the offending value
    pub fn csv(value: impl ToString) -> Self {
        Self::InvalidCsvValue {
            value: value.to_string(),
        }
    }

    /// Create a derivation hash error with a reason
    pub fn derivation_hash(reason: impl Into<String>) -> Self {
        Self::InvalidDerivationHash {
            reason: reason.into(),
        }
    }

    /// Create a redeem script error with a reason
    pub fn redeem_script(reason: impl Into<String>) -> Self {
        Self::InvalidRedeemScript {
            reason: reason.into(),
        }
    }

    /// Create a network error for the rejected selector
    pub fn network(network: impl Into<String>) -> Self {
        Self::InvalidNetwork {
            network: network.into(),
        }
    }

    /// Name of the caller input this error rejects
    pub fn input(&self) -> &'static str {
        match self {
            Self::InvalidPublicKeySet { .. } | Self::UnsupportedKeyCount { .. } => "public_keys",
            Self::InvalidEmergencyPublicKeySet { .. } => "emergency_public_keys",
            Self::InvalidCsvValue { .. } => "csv_value",
            Self::InvalidDerivationHash { .. } => "derivation_hash",
            Self::InvalidRedeemScript { .. } => "redeem_script",
            Self::InvalidNetwork { .. } => "network",
        }
    }

    /// Check if this error is retryable.
    ///
    /// Always `false`: every failure is an input error that has to be fixed by
    /// the caller before trying again.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let keys_err = RedeemScriptError::public_keys("odd-length hex");
        assert!(matches!(keys_err, RedeemScriptError::InvalidPublicKeySet { .. }));
        assert_eq!(keys_err.input(), "public_keys");

        let erp_err = RedeemScriptError::emergency_public_keys("odd-length hex");
        assert!(matches!(
            erp_err,
            RedeemScriptError::InvalidEmergencyPublicKeySet { .. }
        ));
        assert_eq!(erp_err.input(), "emergency_public_keys");
    }

    #[test]
    fn test_error_messages() {
        let csv_err = RedeemScriptError::csv(0);
        assert_eq!(
            csv_err.to_string(),
            "Invalid CSV value 0: must be an integer between 1 and 65535"
        );

        let net_err = RedeemScriptError::network("SIGNET");
        assert!(net_err.to_string().starts_with("Network SIGNET is not a valid value"));

        let count_err = RedeemScriptError::UnsupportedKeyCount { count: 17 };
        assert!(count_err.to_string().contains("at most 16 keys"));
    }

    #[test]
    fn test_error_classification() {
        let errors = [
            RedeemScriptError::public_keys("x"),
            RedeemScriptError::csv("abc"),
            RedeemScriptError::derivation_hash("x"),
            RedeemScriptError::redeem_script("x"),
            RedeemScriptError::network("x"),
        ];
        assert!(errors.iter().all(|err| !err.is_retryable()));
    }
}
