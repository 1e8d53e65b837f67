//! # Federation Public Keys
//!
//! Normalizes caller-supplied keys (hex text or raw bytes) into the canonical,
//! byte-sorted key set used as multisig input.
//!
//! Keys are not checked against the secp256k1 curve; the supplier is trusted
//! to hand over valid compressed points. The only check is the one the byte
//! conversion itself enforces: exactly 33 bytes. Duplicates are kept.

use crate::config::script::PUBLIC_KEY_LEN;
use crate::error::{RedeemScriptError, RedeemScriptResult};
use std::fmt;
use std::str::FromStr;

/// A 33-byte compressed public key, ordered by raw byte value
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_LEN] {
        self.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = RedeemScriptError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| {
            RedeemScriptError::public_keys(format!(
                "public key must be {} bytes, got {}",
                PUBLIC_KEY_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }
}

impl FromStr for PublicKey {
    type Err = RedeemScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|e| {
            RedeemScriptError::public_keys(format!("public key {} is not valid hex: {}", s, e))
        })?;
        Self::try_from(bytes.as_slice())
    }
}

impl From<bitcoin::PublicKey> for PublicKey {
    fn from(key: bitcoin::PublicKey) -> Self {
        Self(key.inner.serialize())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// A public key as handed over by a key source
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKeyInput {
    /// Hex-encoded key
    Hex(String),
    /// Raw key bytes
    Raw(Vec<u8>),
}

impl PublicKeyInput {
    /// Convert to a [`PublicKey`], decoding hex if needed
    pub fn to_public_key(&self) -> RedeemScriptResult<PublicKey> {
        match self {
            PublicKeyInput::Hex(hex_key) => hex_key.parse(),
            PublicKeyInput::Raw(bytes) => PublicKey::try_from(bytes.as_slice()),
        }
    }
}

impl From<&str> for PublicKeyInput {
    fn from(value: &str) -> Self {
        PublicKeyInput::Hex(value.to_string())
    }
}

impl From<&&str> for PublicKeyInput {
    fn from(value: &&str) -> Self {
        PublicKeyInput::Hex(value.to_string())
    }
}

impl From<String> for PublicKeyInput {
    fn from(value: String) -> Self {
        PublicKeyInput::Hex(value)
    }
}

impl From<&String> for PublicKeyInput {
    fn from(value: &String) -> Self {
        PublicKeyInput::Hex(value.clone())
    }
}

impl From<Vec<u8>> for PublicKeyInput {
    fn from(value: Vec<u8>) -> Self {
        PublicKeyInput::Raw(value)
    }
}

impl From<&[u8]> for PublicKeyInput {
    fn from(value: &[u8]) -> Self {
        PublicKeyInput::Raw(value.to_vec())
    }
}

impl From<PublicKey> for PublicKeyInput {
    fn from(value: PublicKey) -> Self {
        PublicKeyInput::Raw(value.as_bytes().to_vec())
    }
}

impl From<&PublicKey> for PublicKeyInput {
    fn from(value: &PublicKey) -> Self {
        PublicKeyInput::Raw(value.as_bytes().to_vec())
    }
}

/// Which federation a key set belongs to; picks the error reported on failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FederationRole {
    Main,
    Emergency,
}

impl FederationRole {
    fn reject(self, err: RedeemScriptError) -> RedeemScriptError {
        let reason = match err {
            RedeemScriptError::InvalidPublicKeySet { reason }
            | RedeemScriptError::InvalidEmergencyPublicKeySet { reason } => reason,
            other => other.to_string(),
        };
        match self {
            FederationRole::Main => RedeemScriptError::public_keys(reason),
            FederationRole::Emergency => RedeemScriptError::emergency_public_keys(reason),
        }
    }
}

/// Canonically ordered federation keys
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PublicKeySet {
    keys: Vec<PublicKey>,
}

impl PublicKeySet {
    /// Convert every key to raw bytes and sort ascending by byte value.
    ///
    /// The order of `keys` does not matter; two permutations of the same keys
    /// normalize to the same set.
    pub fn normalize<I>(keys: I) -> RedeemScriptResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<PublicKeyInput>,
    {
        Self::normalize_as(keys, FederationRole::Main)
    }

    pub(crate) fn normalize_as<I>(keys: I, role: FederationRole) -> RedeemScriptResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<PublicKeyInput>,
    {
        let mut keys = keys
            .into_iter()
            .map(|key| key.into().to_public_key())
            .collect::<RedeemScriptResult<Vec<_>>>()
            .map_err(|e| role.reject(e))?;
        keys.sort_unstable();
        Ok(Self { keys })
    }

    /// Keys in ascending byte order
    pub fn keys(&self) -> &[PublicKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Signatures needed for a simple majority: `floor(N/2) + 1`
    pub fn threshold(&self) -> usize {
        self.keys.len() / 2 + 1
    }
}
