//! # powpeg: Redeem Script Command Line
//!
//! Builds powpeg federation redeem scripts and prints the script together with
//! its P2SH and P2SH-P2WSH addresses.
//!
//! ```bash
//! # Standard majority multisig
//! powpeg --network regtest standard <KEY> <KEY> <KEY>
//!
//! # ERP script with the network's default emergency federation
//! powpeg erp --main <KEY> <KEY> <KEY> --csv 52560
//!
//! # Flyover-tag an existing script with a random derivation hash
//! powpeg flyover --script <HEX> --random-hash
//!
//! # Addresses for an existing script, as JSON
//! powpeg --json address --script <HEX>
//! ```
//!
//! The default network comes from `POWPEG_NETWORK` (a `.env` file is honoured)
//! and falls back to mainnet. Set `RUST_LOG=debug` to trace script assembly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use powpeg_redeemscript::{
    address, config, erp, flyover, multisig, DerivationHash, Network, RedeemScript,
};
use serde::Serialize;
use std::env;

#[derive(Parser)]
#[command(name = "powpeg")]
#[command(about = "Build powpeg redeem scripts and derive their addresses")]
struct Cli {
    /// Target network (mainnet, testnet, regtest)
    #[arg(short, long, global = true)]
    network: Option<String>,

    /// Print a JSON object instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Standard majority multisig script from federation keys
    Standard {
        /// Federation public keys (hex, any order)
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Emergency recovery (ERP) script
    Erp {
        /// Main federation public keys (hex)
        #[arg(long, num_args = 1.., required = true)]
        main: Vec<String>,
        /// Emergency federation public keys; defaults to the network's federation
        #[arg(long, num_args = 1..)]
        emergency: Vec<String>,
        /// CSV delay in blocks; defaults to POWPEG_CSV or the network default
        #[arg(long, allow_negative_numbers = true)]
        csv: Option<i64>,
    },
    /// Prefix an existing script with a Flyover derivation hash
    Flyover {
        /// Redeem script (hex)
        #[arg(long)]
        script: String,
        /// Derivation hash (64 hex characters)
        #[arg(long, conflicts_with = "random_hash", required_unless_present = "random_hash")]
        hash: Option<String>,
        /// Use a freshly generated random derivation hash
        #[arg(long)]
        random_hash: bool,
    },
    /// Derive addresses for an existing script
    Address {
        /// Redeem script (hex)
        #[arg(long)]
        script: String,
    },
}

/// Everything printed for one script
#[derive(Serialize)]
struct ScriptReport {
    network: Network,
    script: RedeemScript,
    p2sh_address: String,
    p2sh_p2wsh_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    derivation_hash: Option<String>,
}

impl ScriptReport {
    fn new(network: Network, script: RedeemScript, derivation_hash: Option<DerivationHash>) -> Self {
        Self {
            network,
            p2sh_address: address::to_p2sh_address(network, &script),
            p2sh_p2wsh_address: address::to_p2sh_p2wsh_address(network, &script),
            derivation_hash: derivation_hash.map(|hash| hash.to_string()),
            script,
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }
        println!("Network:            {}", self.network);
        if let Some(hash) = &self.derivation_hash {
            println!("Derivation hash:    {}", hash);
        }
        println!("Redeem script:      {}", self.script);
        println!("P2SH address:       {}", self.p2sh_address);
        println!("P2SH-P2WSH address: {}", self.p2sh_p2wsh_address);
        Ok(())
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let network = resolve_network(cli.network.as_deref())?;

    let report = match cli.command {
        Commands::Standard { keys } => {
            let script = multisig::build_standard_from_keys(&keys)?;
            ScriptReport::new(network, script, None)
        }
        Commands::Erp {
            main,
            emergency,
            csv,
        } => {
            let script = build_erp(network, &main, &emergency, csv)?;
            ScriptReport::new(network, script, None)
        }
        Commands::Flyover {
            script,
            hash,
            random_hash: _,
        } => {
            let script = RedeemScript::from_hex(&script)?;
            let hash = match hash {
                Some(hash) => hash.parse::<DerivationHash>()?,
                None => DerivationHash::random(),
            };
            ScriptReport::new(network, flyover::tag(&script, &hash), Some(hash))
        }
        Commands::Address { script } => {
            ScriptReport::new(network, RedeemScript::from_hex(&script)?, None)
        }
    };

    report.print(cli.json)
}

/// Command line flag, then `POWPEG_NETWORK`, then mainnet
fn resolve_network(flag: Option<&str>) -> Result<Network> {
    match flag {
        Some(value) => Ok(value.parse()?),
        None => match env::var(config::env::NETWORK) {
            Ok(value) => value
                .parse()
                .with_context(|| format!("reading {}", config::env::NETWORK)),
            Err(_) => Ok(Network::Mainnet),
        },
    }
}

fn build_erp(
    network: Network,
    main: &[String],
    emergency: &[String],
    csv: Option<i64>,
) -> Result<RedeemScript> {
    let csv = match csv {
        Some(value) => Some(value),
        None => match env::var(config::env::CSV) {
            Ok(value) => Some(
                value
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("{} must be an integer", config::env::CSV))?,
            ),
            Err(_) => None,
        },
    };

    let script = match (emergency.is_empty(), csv) {
        (true, None) => erp::build_p2sh_erp_for_network(network, main)?,
        (true, Some(csv)) => {
            log::info!("No emergency keys given, using the {} default federation", network);
            erp::build_p2sh_erp(main, network.emergency_keys().iter().copied(), csv)?
        }
        (false, csv) => {
            erp::build_p2sh_erp(main, emergency, csv.unwrap_or_else(|| network.emergency_csv()))?
        }
    };
    Ok(script)
}
