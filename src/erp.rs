//! # Emergency Recovery (ERP) Redeem Scripts
//!
//! The ERP script lets the main federation spend at any time, or lets an
//! emergency federation spend once the output has aged past a CSV relative
//! timelock:
//!
//! ```text
//! OP_NOTIF
//!     <main M-of-N multisig, including its OP_CHECKMULTISIG>
//! OP_ELSE
//!     <csv> OP_CHECKSEQUENCEVERIFY OP_DROP
//!     <emergency M-of-N multisig, including its OP_CHECKMULTISIG>
//! OP_ENDIF
//! ```
//!
//! Each branch carries its own complete multisig script. This is not wire
//! compatible with the older layout that shared a single trailing
//! `OP_CHECKMULTISIG` between both branches.

use crate::csv::CsvValue;
use crate::error::{RedeemScriptError, RedeemScriptResult};
use crate::multisig::push_multisig;
use crate::network::Network;
use crate::pubkey::{FederationRole, PublicKeyInput, PublicKeySet};
use crate::script::RedeemScript;
use bitcoin::opcodes::all::*;
use bitcoin::script::{Builder, PushBytesBuf};

/// Build the P2SH ERP redeem script.
///
/// Inputs are validated in a fixed order (main keys, emergency keys, CSV) so
/// the reported error is deterministic when several are invalid.
pub fn build_p2sh_erp<M, E>(
    main_keys: M,
    emergency_keys: E,
    csv: i64,
) -> RedeemScriptResult<RedeemScript>
where
    M: IntoIterator,
    M::Item: Into<PublicKeyInput>,
    E: IntoIterator,
    E::Item: Into<PublicKeyInput>,
{
    let main = PublicKeySet::normalize_as(main_keys, FederationRole::Main)?;
    let emergency = PublicKeySet::normalize_as(emergency_keys, FederationRole::Emergency)?;
    let csv = CsvValue::try_from(csv)?;

    compose(&main, &emergency, csv)
}

/// Build the ERP script using the network's default emergency federation and delay
pub fn build_p2sh_erp_for_network<M>(
    network: Network,
    main_keys: M,
) -> RedeemScriptResult<RedeemScript>
where
    M: IntoIterator,
    M::Item: Into<PublicKeyInput>,
{
    log::debug!(
        "Using {} default emergency federation ({} keys, csv {})",
        network,
        network.emergency_keys().len(),
        network.emergency_csv()
    );
    build_p2sh_erp(
        main_keys,
        network.emergency_keys().iter().copied(),
        network.emergency_csv(),
    )
}

/// Assemble the two branches from already validated parts
pub fn compose(
    main: &PublicKeySet,
    emergency: &PublicKeySet,
    csv: CsvValue,
) -> RedeemScriptResult<RedeemScript> {
    let csv_push =
        PushBytesBuf::try_from(csv.encode()).map_err(|_| RedeemScriptError::csv(csv))?;

    let builder = push_multisig(Builder::new().push_opcode(OP_NOTIF), main)?
        .push_opcode(OP_ELSE)
        .push_slice(csv_push)
        .push_opcode(OP_CSV)
        .push_opcode(OP_DROP);
    let script = push_multisig(builder, emergency)
        .map_err(|e| match e {
            RedeemScriptError::UnsupportedKeyCount { count } => {
                RedeemScriptError::emergency_public_keys(format!(
                    "{} keys exceed the multisig limit",
                    count
                ))
            }
            other => other,
        })?
        .push_opcode(OP_ENDIF)
        .into_script();

    log::debug!(
        "Built P2SH ERP script: main {}-of-{}, emergency {}-of-{}, csv {} ({} bytes)",
        main.threshold(),
        main.len(),
        emergency.threshold(),
        emergency.len(),
        csv,
        script.len()
    );
    Ok(RedeemScript::from(script))
}
