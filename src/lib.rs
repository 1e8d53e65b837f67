//! # Powpeg Redeem Script Library
//!
//! Deterministic construction of the redeem scripts that lock pegged funds to a
//! rotating signer federation, and derivation of their P2SH / P2SH-P2WSH
//! addresses.
//!
//! ## Script Kinds
//!
//! - **Standard**: majority `M-of-N OP_CHECKMULTISIG` over byte-sorted keys
//! - **P2SH ERP**: main federation, or an emergency federation after a CSV delay
//! - **Flyover**: any script prefixed with a dropped 32-byte derivation hash
//!
//! ```no_run
//! use powpeg_redeemscript::{address, erp, Network};
//!
//! # fn main() -> Result<(), powpeg_redeemscript::RedeemScriptError> {
//! let main_keys = [
//!     "02cd53fc53a07f211641a677d250f6de99caf620e8e77071e811a28b3bcddf0be1",
//!     "0362634ab57dae9cb373a5d536e66a8c4f67468bbcfb063809bab643072d78a124",
//!     "03c5946b3fbae03a654237da863c9ed534e0878657175b132b8ca630f245df04db",
//! ];
//! let script = erp::build_p2sh_erp_for_network(Network::Regtest, main_keys)?;
//! println!("{}", address::to_p2sh_address(Network::Regtest, &script));
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is a pure function of its inputs: no I/O, no shared state.

pub mod address;
pub mod config;
pub mod csv;
pub mod erp;
pub mod error;
pub mod flyover;
pub mod multisig;
pub mod network;
pub mod pubkey;
pub mod script;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use csv::{encode_csv, CsvValue};
pub use error::{RedeemScriptError, RedeemScriptResult};
pub use flyover::DerivationHash;
pub use network::Network;
pub use pubkey::{PublicKey, PublicKeyInput, PublicKeySet};
pub use script::RedeemScript;
