//! # Flyover Tagging
//!
//! Binds an opaque 32-byte derivation hash to a redeem script by prefixing
//!
//! ```text
//! OP_PUSHBYTES_32 <derivation hash> OP_DROP
//! ```
//!
//! The hash is dropped before the original script runs, so spending logic is
//! untouched while the script hash (and therefore the address) becomes unique
//! per derivation hash.

use crate::config::script::{DERIVATION_HASH_LEN, FLYOVER_PREFIX_LEN};
use crate::erp::build_p2sh_erp;
use crate::error::{RedeemScriptError, RedeemScriptResult};
use crate::multisig::build_standard_from_keys;
use crate::pubkey::PublicKeyInput;
use crate::script::RedeemScript;
use bitcoin::opcodes::all::OP_DROP;
use bitcoin::script::Builder;
use bitcoin::ScriptBuf;
use std::fmt;
use std::str::FromStr;

/// Opaque 32-byte Flyover derivation hash. Never interpreted, only embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DerivationHash([u8; DERIVATION_HASH_LEN]);

impl DerivationHash {
    pub fn from_bytes(bytes: [u8; DERIVATION_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Fresh random hash
    pub fn random() -> Self {
        Self(rand::random())
    }

    pub fn as_bytes(&self) -> &[u8; DERIVATION_HASH_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for DerivationHash {
    type Error = RedeemScriptError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let hash: [u8; DERIVATION_HASH_LEN] = bytes.try_into().map_err(|_| {
            RedeemScriptError::derivation_hash(format!(
                "must be {} bytes, got {}",
                DERIVATION_HASH_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(hash))
    }
}

impl FromStr for DerivationHash {
    type Err = RedeemScriptError;

    /// Parse the 64-character hex form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DERIVATION_HASH_LEN * 2 {
            return Err(RedeemScriptError::derivation_hash(format!(
                "must be a {} character hex string, got {} characters",
                DERIVATION_HASH_LEN * 2,
                s.len()
            )));
        }
        let bytes = hex::decode(s)
            .map_err(|e| RedeemScriptError::derivation_hash(format!("not valid hex: {}", e)))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for DerivationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// The 34-byte prefix for `hash`
fn flyover_prefix(hash: &DerivationHash) -> ScriptBuf {
    Builder::new()
        .push_slice(hash.as_bytes())
        .push_opcode(OP_DROP)
        .into_script()
}

/// Prefix `script` with the derivation hash push and drop. Returns a new
/// script; `script` itself is left as is.
pub fn tag(script: &RedeemScript, hash: &DerivationHash) -> RedeemScript {
    let mut bytes = flyover_prefix(hash).into_bytes();
    debug_assert_eq!(bytes.len(), FLYOVER_PREFIX_LEN);
    bytes.extend_from_slice(script.as_bytes());

    log::debug!(
        "Tagged {}-byte script with derivation hash {}",
        script.len(),
        hash
    );
    RedeemScript::from(bytes)
}

/// Tag a hex-encoded script with a hex-encoded derivation hash.
///
/// The script is checked before the hash.
pub fn tag_hex(script_hex: &str, hash_hex: &str) -> RedeemScriptResult<RedeemScript> {
    let script = RedeemScript::from_hex(script_hex)?;
    let hash: DerivationHash = hash_hex.parse()?;
    Ok(tag(&script, &hash))
}

/// Standard multisig script for `keys`, Flyover-tagged
pub fn flyover_standard<I>(keys: I, hash: &DerivationHash) -> RedeemScriptResult<RedeemScript>
where
    I: IntoIterator,
    I::Item: Into<PublicKeyInput>,
{
    Ok(tag(&build_standard_from_keys(keys)?, hash))
}

/// P2SH ERP script, Flyover-tagged
pub fn flyover_erp<M, E>(
    main_keys: M,
    emergency_keys: E,
    csv: i64,
    hash: &DerivationHash,
) -> RedeemScriptResult<RedeemScript>
where
    M: IntoIterator,
    M::Item: Into<PublicKeyInput>,
    E: IntoIterator,
    E::Item: Into<PublicKeyInput>,
{
    Ok(tag(&build_p2sh_erp(main_keys, emergency_keys, csv)?, hash))
}
