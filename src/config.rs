//! # Configuration Constants
//!
//! Read-only tables used by the script builders and address derivation.
//! Nothing in here is mutable at runtime.

/// Script layout constants
pub mod script {
    /// Length of a compressed secp256k1 public key
    pub const PUBLIC_KEY_LEN: usize = 33;

    /// Length of a Flyover derivation hash
    pub const DERIVATION_HASH_LEN: usize = 32;

    /// Largest key set the small-integer opcodes can describe
    pub const MAX_MULTISIG_KEYS: usize = 16;

    /// Flyover prefix: push length byte, 32 hash bytes, OP_DROP
    pub const FLYOVER_PREFIX_LEN: usize = 1 + DERIVATION_HASH_LEN + 1;
}

/// CheckSequenceVerify bounds
pub mod csv {
    /// Smallest accepted relative timelock
    pub const MIN_VALUE: i64 = 1;

    /// Largest accepted relative timelock (16-bit range)
    pub const MAX_VALUE: i64 = 65_535;
}

/// Base58Check script-hash version bytes
pub mod network {
    /// Mainnet P2SH version byte, addresses start with `3`
    pub const MAINNET_SCRIPT_HASH_VERSION: u8 = 0x05;

    /// Testnet P2SH version byte, addresses start with `2`
    pub const TESTNET_SCRIPT_HASH_VERSION: u8 = 0xc4;

    /// Regtest shares the testnet version byte
    pub const REGTEST_SCRIPT_HASH_VERSION: u8 = 0xc4;
}

/// Default emergency recovery federation per network
///
/// Used by [`crate::erp::build_p2sh_erp_for_network`] when the caller does not
/// supply its own emergency keys.
pub mod erp {
    /// Mainnet emergency federation
    pub const MAINNET_EMERGENCY_KEYS: [&str; 4] = [
        "0257c293086c4d4fe8943deda5f890a37d11bebd140e220faa76258a41d077b4d4",
        "03c2660a46aa73078ee6016dee953488566426cf55fc8011edd0085634d75395f9",
        "03cd3e383ec6e12719a6c69515e5559bcbe037d0aa24c187e1e26ce932e22ad7b3",
        "02370a9838e4d15708ad14a104ee5606b36caaaaf739d833e67770ce9fd9b3ec80",
    ];

    /// Testnet emergency federation
    pub const TESTNET_EMERGENCY_KEYS: [&str; 3] = [
        "0216c23b2ea8e4f11c3f9e22711addb1d16a93964796913830856b568cc3ea21d3",
        "034db69f2112f4fb1bb6141bf6e2bd6631f0484d0bd95b16767902c9fe219d4a6f",
        "0275562901dd8faae20de0a4166362a4f82188db77dbed4ca887422ea1ec185f14",
    ];

    /// Regtest emergency federation
    pub const REGTEST_EMERGENCY_KEYS: [&str; 5] = [
        "03b9fc46657cf72a1afa007ecf431de1cd27ff5cc8829fa625b66ca47b967e6b24",
        "029cecea902067992d52c38b28bf0bb2345bda9b21eca76b16a17c477a64e43301",
        "03284178e5fbcc63c54c3b38e3ef88adf2da6c526313650041b0ef955763634ebd",
        "03776b1fd8f86da3c1db3d69699e8250a15877d286734ea9a6da8e9d8ad25d16c1",
        "03ab0e2cd7ed158687fc13b88019990860cdb72b1f5777b58513312550ea1584bc",
    ];

    /// Mainnet emergency delay in blocks (roughly one year)
    pub const MAINNET_CSV: i64 = 52_560;

    /// Testnet emergency delay in blocks
    pub const TESTNET_CSV: i64 = 52_560;

    /// Regtest emergency delay in blocks
    pub const REGTEST_CSV: i64 = 500;
}

/// Environment variable names
pub mod env {
    /// Default network for the CLI
    pub const NETWORK: &str = "POWPEG_NETWORK";

    /// Default CSV value for the CLI `erp` command
    pub const CSV: &str = "POWPEG_CSV";
}
