//! # Network Selection
//!
//! The three networks an address can be derived for. The set is closed: the
//! version byte table lives in [`crate::config::network`] and is not
//! user-extensible.

use crate::config::{erp, network as version};
use crate::error::{RedeemScriptError, RedeemScriptResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target chain for address derivation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    /// Every supported network, in declaration order
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Base58Check version byte for P2SH addresses on this network
    pub fn script_hash_version(self) -> u8 {
        match self {
            Network::Mainnet => version::MAINNET_SCRIPT_HASH_VERSION,
            Network::Testnet => version::TESTNET_SCRIPT_HASH_VERSION,
            Network::Regtest => version::REGTEST_SCRIPT_HASH_VERSION,
        }
    }

    /// Default emergency federation keys for this network
    pub fn emergency_keys(self) -> &'static [&'static str] {
        match self {
            Network::Mainnet => &erp::MAINNET_EMERGENCY_KEYS,
            Network::Testnet => &erp::TESTNET_EMERGENCY_KEYS,
            Network::Regtest => &erp::REGTEST_EMERGENCY_KEYS,
        }
    }

    /// Default emergency CSV delay for this network
    pub fn emergency_csv(self) -> i64 {
        match self {
            Network::Mainnet => erp::MAINNET_CSV,
            Network::Testnet => erp::TESTNET_CSV,
            Network::Regtest => erp::REGTEST_CSV,
        }
    }

    /// Parse an optional selector, treating an absent one as invalid
    pub fn from_selector(selector: Option<&str>) -> RedeemScriptResult<Self> {
        match selector {
            Some(value) => value.parse(),
            None => Err(RedeemScriptError::network("<none>")),
        }
    }
}

impl FromStr for Network {
    type Err = RedeemScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MAINNET" => Ok(Network::Mainnet),
            "TESTNET" => Ok(Network::Testnet),
            "REGTEST" => Ok(Network::Regtest),
            _ => Err(RedeemScriptError::network(s)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "MAINNET"),
            Network::Testnet => write!(f, "TESTNET"),
            Network::Regtest => write!(f, "REGTEST"),
        }
    }
}

impl From<Network> for bitcoin::Network {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => bitcoin::Network::Bitcoin,
            Network::Testnet => bitcoin::Network::Testnet,
            Network::Regtest => bitcoin::Network::Regtest,
        }
    }
}
