//! Immutable redeem script value.

use crate::error::{RedeemScriptError, RedeemScriptResult};
use bitcoin::{Script, ScriptBuf};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A finished Bitcoin Script program.
///
/// There is no way to mutate a `RedeemScript` once built. Composers that
/// extend a script (Flyover tagging, ERP nesting) copy the bytes into a new
/// value. Any byte sequence is accepted, the empty one included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RedeemScript(ScriptBuf);

impl RedeemScript {
    /// Parse a script from its hex encoding
    pub fn from_hex(hex_script: &str) -> RedeemScriptResult<Self> {
        let bytes = hex::decode(hex_script.trim())
            .map_err(|e| RedeemScriptError::redeem_script(format!("not valid hex: {}", e)))?;
        Ok(Self::from(bytes))
    }

    /// Accept a script that may not have been supplied at all
    pub fn from_optional(bytes: Option<Vec<u8>>) -> RedeemScriptResult<Self> {
        bytes
            .map(Self::from)
            .ok_or_else(|| RedeemScriptError::redeem_script("no script supplied"))
    }

    /// Raw script bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Borrow as a rust-bitcoin script
    pub fn as_script(&self) -> &Script {
        self.0.as_script()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Check whether `needle` occurs anywhere in the script bytes
    pub fn contains(&self, needle: &[u8]) -> bool {
        !needle.is_empty()
            && self
                .as_bytes()
                .windows(needle.len())
                .any(|window| window == needle)
    }
}

impl From<Vec<u8>> for RedeemScript {
    fn from(bytes: Vec<u8>) -> Self {
        Self(ScriptBuf::from_bytes(bytes))
    }
}

impl From<&[u8]> for RedeemScript {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl From<ScriptBuf> for RedeemScript {
    fn from(script: ScriptBuf) -> Self {
        Self(script)
    }
}

impl From<RedeemScript> for ScriptBuf {
    fn from(script: RedeemScript) -> Self {
        script.0
    }
}

impl AsRef<[u8]> for RedeemScript {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl FromStr for RedeemScript {
    type Err = RedeemScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for RedeemScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for RedeemScript {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RedeemScript {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_script = String::deserialize(deserializer)?;
        Self::from_hex(&hex_script).map_err(serde::de::Error::custom)
    }
}
