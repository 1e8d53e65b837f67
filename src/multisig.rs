//! # Standard Multisig Scripts
//!
//! Builds the federation's majority `M-of-N OP_CHECKMULTISIG` script:
//!
//! ```text
//! OP_M <pubkey_1> ... <pubkey_N> OP_N OP_CHECKMULTISIG
//! ```
//!
//! with `M = floor(N/2) + 1` and keys in ascending byte order.

use crate::config::script::MAX_MULTISIG_KEYS;
use crate::error::{RedeemScriptError, RedeemScriptResult};
use crate::pubkey::{PublicKeyInput, PublicKeySet};
use crate::script::RedeemScript;
use bitcoin::opcodes::all::*;
use bitcoin::opcodes::Opcode;
use bitcoin::script::Builder;

/// Small-integer opcodes indexed by the number they push
static SMALL_INT_OPCODES: [Opcode; MAX_MULTISIG_KEYS + 1] = [
    OP_PUSHBYTES_0,
    OP_PUSHNUM_1,
    OP_PUSHNUM_2,
    OP_PUSHNUM_3,
    OP_PUSHNUM_4,
    OP_PUSHNUM_5,
    OP_PUSHNUM_6,
    OP_PUSHNUM_7,
    OP_PUSHNUM_8,
    OP_PUSHNUM_9,
    OP_PUSHNUM_10,
    OP_PUSHNUM_11,
    OP_PUSHNUM_12,
    OP_PUSHNUM_13,
    OP_PUSHNUM_14,
    OP_PUSHNUM_15,
    OP_PUSHNUM_16,
];

/// Opcode pushing `n` for `0..=16`
pub fn small_int_opcode(n: usize) -> Option<Opcode> {
    SMALL_INT_OPCODES.get(n).copied()
}

/// Append `OP_M <keys> OP_N OP_CHECKMULTISIG` for `set` to `builder`
pub(crate) fn push_multisig(builder: Builder, set: &PublicKeySet) -> RedeemScriptResult<Builder> {
    let count = set.len();
    let (m, n) = match (small_int_opcode(set.threshold()), small_int_opcode(count)) {
        (Some(m), Some(n)) => (m, n),
        _ => return Err(RedeemScriptError::UnsupportedKeyCount { count }),
    };

    Ok(set
        .keys()
        .iter()
        .fold(builder.push_opcode(m), |builder, key| {
            builder.push_slice(key.as_bytes())
        })
        .push_opcode(n)
        .push_opcode(OP_CHECKMULTISIG))
}

/// Build the standard majority multisig script for an already normalized set.
///
/// An empty set is accepted and yields `OP_1 OP_0 OP_CHECKMULTISIG`, which is
/// well-formed but unspendable.
pub fn build_standard(set: &PublicKeySet) -> RedeemScriptResult<RedeemScript> {
    let script = push_multisig(Builder::new(), set)?.into_script();

    log::debug!(
        "Built {}-of-{} multisig script ({} bytes)",
        set.threshold(),
        set.len(),
        script.len()
    );
    Ok(RedeemScript::from(script))
}

/// Normalize `keys` and build the standard multisig script in one step
pub fn build_standard_from_keys<I>(keys: I) -> RedeemScriptResult<RedeemScript>
where
    I: IntoIterator,
    I::Item: Into<PublicKeyInput>,
{
    build_standard(&PublicKeySet::normalize(keys)?)
}
