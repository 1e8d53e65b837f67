//! # Address Derivation
//!
//! Turns a finished redeem script into a Base58Check script-hash address.
//!
//! - **P2SH**: `HASH160(script)` under the network's script-hash version byte
//! - **P2SH-P2WSH**: the script is committed to by a segwit v0 witness program
//!   `OP_0 <SHA256(script)>`, and that 34-byte program is what the P2SH layer
//!   hashes

use crate::network::Network;
use crate::script::RedeemScript;
use bitcoin::base58;
use bitcoin::hashes::{hash160, sha256, Hash};
use bitcoin::opcodes::all::OP_PUSHBYTES_0;
use bitcoin::script::Builder;
use bitcoin::ScriptBuf;

/// Segwit v0 witness program committing to `script`
pub fn witness_program(script: &RedeemScript) -> ScriptBuf {
    let script_hash = sha256::Hash::hash(script.as_bytes());
    log::trace!("Witness script sha256: {}", script_hash);
    Builder::new()
        .push_opcode(OP_PUSHBYTES_0)
        .push_slice(script_hash.to_byte_array())
        .into_script()
}

/// Base58Check encode a HASH160 under the network's script-hash version
fn encode_script_hash(network: Network, digest: hash160::Hash) -> String {
    let mut payload = Vec::with_capacity(1 + hash160::Hash::LEN);
    payload.push(network.script_hash_version());
    payload.extend_from_slice(digest.as_byte_array());
    base58::encode_check(&payload)
}

/// P2SH address for `script` on `network`
pub fn to_p2sh_address(network: Network, script: &RedeemScript) -> String {
    let digest = hash160::Hash::hash(script.as_bytes());
    let address = encode_script_hash(network, digest);
    log::debug!("Derived {} P2SH address {}", network, address);
    address
}

/// P2SH-wrapped P2WSH address for `script` on `network`
pub fn to_p2sh_p2wsh_address(network: Network, script: &RedeemScript) -> String {
    let program = witness_program(script);
    let digest = hash160::Hash::hash(program.as_bytes());
    let address = encode_script_hash(network, digest);
    log::debug!("Derived {} P2SH-P2WSH address {}", network, address);
    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::erp::REGTEST_EMERGENCY_KEYS;
    use crate::erp::build_p2sh_erp;
    use crate::multisig::build_standard_from_keys;
    use bitcoin::Address;

    // Regtest genesis powpeg
    const GENESIS_KEYS: [&str; 3] = [
        "02cd53fc53a07f211641a677d250f6de99caf620e8e77071e811a28b3bcddf0be1",
        "0362634ab57dae9cb373a5d536e66a8c4f67468bbcfb063809bab643072d78a124",
        "03c5946b3fbae03a654237da863c9ed534e0878657175b132b8ca630f245df04db",
    ];

    #[test]
    fn test_regtest_genesis_address() {
        let script = build_standard_from_keys(GENESIS_KEYS).unwrap();
        assert_eq!(
            to_p2sh_address(Network::Regtest, &script),
            "2N5muMepJizJE1gR7FbHJU6CD18V3BpNF9p"
        );
        assert_eq!(
            to_p2sh_address(Network::Mainnet, &script),
            "3EDhHutH7XnsotnZaTfRr9CwnnGsNNrhCL"
        );
        assert_eq!(
            to_p2sh_p2wsh_address(Network::Regtest, &script),
            "2NDX645q5ArRrjue7CLhnnwcLBudrCG3XGE"
        );
    }

    #[test]
    fn test_erp_addresses() {
        let script = build_p2sh_erp(GENESIS_KEYS, REGTEST_EMERGENCY_KEYS, 500).unwrap();
        assert_eq!(
            to_p2sh_address(Network::Regtest, &script),
            "2NDGz3JLvhzjfisXGhSXHBuXmQWYpRgUDhZ"
        );
        assert_eq!(
            to_p2sh_p2wsh_address(Network::Regtest, &script),
            "2MvAE8vvfM5YMNWyG3zCDvvCanPSEcr6PGv"
        );
    }

    #[test]
    fn test_empty_script_addresses() {
        let script = RedeemScript::from(Vec::new());
        assert!(script.is_empty());
        assert_eq!(
            to_p2sh_address(Network::Mainnet, &script),
            "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"
        );
        assert_eq!(
            to_p2sh_address(Network::Regtest, &script),
            "2N9hLwkSqr1cPQAPxbrGVUjxyjD11G2e1he"
        );
        assert_eq!(
            to_p2sh_p2wsh_address(Network::Mainnet, &script),
            "3AeZjDo9yvwweoK8atdsqxC5Pxg59j17JM"
        );
        assert_eq!(
            to_p2sh_p2wsh_address(Network::Testnet, &script),
            "2N2CmnxjBbPTHrawgG2FkTuBLcJtEzA86sF"
        );
    }

    #[test]
    fn test_witness_program_shape() {
        let script = build_standard_from_keys(GENESIS_KEYS).unwrap();
        let program = witness_program(&script);
        let bytes = program.as_bytes();
        assert_eq!(bytes.len(), 34);
        assert_eq!(&bytes[..2], &[0x00, 0x20]);
        assert!(program.is_p2wsh());
    }

    #[test]
    fn test_matches_rust_bitcoin_addresses() {
        let script = build_standard_from_keys(GENESIS_KEYS).unwrap();
        for network in Network::ALL {
            let kind = bitcoin::Network::from(network);
            let p2sh = Address::p2sh(script.as_script(), kind).unwrap();
            assert_eq!(to_p2sh_address(network, &script), p2sh.to_string());

            let p2shwsh = Address::p2shwsh(script.as_script(), kind);
            assert_eq!(to_p2sh_p2wsh_address(network, &script), p2shwsh.to_string());
        }
    }

    #[test]
    fn test_network_prefixes() {
        let script = build_standard_from_keys(GENESIS_KEYS).unwrap();
        assert!(to_p2sh_address(Network::Mainnet, &script).starts_with('3'));
        assert!(to_p2sh_address(Network::Testnet, &script).starts_with('2'));
        assert!(to_p2sh_p2wsh_address(Network::Mainnet, &script).starts_with('3'));
        assert_eq!(
            to_p2sh_address(Network::Testnet, &script),
            to_p2sh_address(Network::Regtest, &script)
        );
    }
}
