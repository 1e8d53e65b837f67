//! End-to-end scenarios across the script builders and address derivation.

use crate::address::{to_p2sh_address, to_p2sh_p2wsh_address};
use crate::config::script::FLYOVER_PREFIX_LEN;
use crate::erp::build_p2sh_erp;
use crate::flyover::{tag, DerivationHash};
use crate::multisig::build_standard_from_keys;
use crate::{Network, RedeemScript};
use bitcoin::base58;

fn random_key() -> Vec<u8> {
    let mut key = vec![if rand::random::<bool>() { 0x02 } else { 0x03 }];
    key.extend_from_slice(&rand::random::<[u8; 32]>());
    key
}

fn random_keys(count: usize) -> Vec<Vec<u8>> {
    (0..count).map(|_| random_key()).collect()
}

#[test]
fn test_flyover_erp_address_flow() {
    let main = random_keys(3);
    let emergency = random_keys(2);
    let hash = DerivationHash::random();

    let erp = build_p2sh_erp(main.clone(), emergency.clone(), 52_560).unwrap();
    let tagged = tag(&erp, &hash);
    assert_eq!(&tagged.as_bytes()[FLYOVER_PREFIX_LEN..], erp.as_bytes());
    for key in main.iter().chain(emergency.iter()) {
        assert!(tagged.contains(key));
    }

    for network in Network::ALL {
        let address = to_p2sh_address(network, &tagged);
        let payload = base58::decode_check(&address).unwrap();
        assert_eq!(payload.len(), 21);
        assert_eq!(payload[0], network.script_hash_version());
        let expected_prefix = match network {
            Network::Mainnet => '3',
            Network::Testnet | Network::Regtest => '2',
        };
        assert!(address.starts_with(expected_prefix));

        // Same bytes, same address
        let copy = RedeemScript::from(tagged.as_bytes());
        assert_eq!(to_p2sh_address(network, &copy), address);
        assert_eq!(
            to_p2sh_p2wsh_address(network, &copy),
            to_p2sh_p2wsh_address(network, &tagged)
        );
    }
}

#[test]
fn test_derivation_hash_changes_address() {
    let script = build_standard_from_keys(random_keys(5)).unwrap();
    let first = tag(&script, &DerivationHash::random());
    let second = tag(&script, &DerivationHash::random());
    assert_ne!(
        to_p2sh_address(Network::Mainnet, &first),
        to_p2sh_address(Network::Mainnet, &second)
    );
    assert_ne!(
        to_p2sh_address(Network::Mainnet, &first),
        to_p2sh_address(Network::Mainnet, &script)
    );
}

#[test]
fn test_flyover_regtest_vector() {
    let keys = [
        "02cd53fc53a07f211641a677d250f6de99caf620e8e77071e811a28b3bcddf0be1",
        "0362634ab57dae9cb373a5d536e66a8c4f67468bbcfb063809bab643072d78a124",
        "03c5946b3fbae03a654237da863c9ed534e0878657175b132b8ca630f245df04db",
    ];
    let hash: DerivationHash = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
        .parse()
        .unwrap();
    let tagged = tag(&build_standard_from_keys(keys).unwrap(), &hash);
    assert_eq!(
        to_p2sh_address(Network::Regtest, &tagged),
        "2MwPxsG93uYSvNgMR6bXfCXz41qDCfeznLU"
    );
}

#[test]
fn test_erp_regtest_address_vector() {
    let main = [
        "02cd53fc53a07f211641a677d250f6de99caf620e8e77071e811a28b3bcddf0be1",
        "0362634ab57dae9cb373a5d536e66a8c4f67468bbcfb063809bab643072d78a124",
        "03c5946b3fbae03a654237da863c9ed534e0878657175b132b8ca630f245df04db",
    ];
    let emergency = [
        "03b9fc46657cf72a1afa007ecf431de1cd27ff5cc8829fa625b66ca47b967e6b24",
        "029cecea902067992d52c38b28bf0bb2345bda9b21eca76b16a17c477a64e43301",
    ];
    let script = build_p2sh_erp(main, emergency, 52_560).unwrap();
    assert_eq!(
        to_p2sh_address(Network::Regtest, &script),
        "2MwF492T7Cdheak8UHi5dDCHCeDSw3Z7PGf"
    );
}
