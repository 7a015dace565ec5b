//! CLI command definitions and handlers.

mod generate;
mod restore;
mod validate;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
pub use generate::GenerateCommand;
pub use restore::RestoreCommand;
use scrip_wallet::{AccountClass, Network, WalletRecord};
pub use validate::ValidateCommand;

/// Scrip - deterministic wallet identity derivation.
#[derive(Parser)]
#[command(name = "scrip")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available wallet commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new wallet identity with a fresh recovery phrase.
    #[command(name = "generate", alias = "new")]
    Generate(GenerateCommand),

    /// Restore a wallet identity from an existing recovery phrase.
    #[command(name = "restore", alias = "import")]
    Restore(RestoreCommand),

    /// Check whether a recovery phrase is valid.
    #[command(name = "validate")]
    Validate(ValidateCommand),
}

/// Account class choice on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum CliAccountClass {
    /// Customer account.
    #[value(alias = "user")]
    Primary,
    /// Merchant account.
    #[value(alias = "merchant")]
    Secondary,
}

impl From<CliAccountClass> for AccountClass {
    fn from(val: CliAccountClass) -> Self {
        match val {
            CliAccountClass::Primary => Self::Primary,
            CliAccountClass::Secondary => Self::Secondary,
        }
    }
}

pub fn network_for(testnet: bool) -> Network {
    if testnet {
        Network::Testnet
    } else {
        Network::Mainnet
    }
}

/// Display a derived record.
#[rustfmt::skip]
pub fn print_record(record: &WalletRecord, network: Network) {
    println!();
    println!("      {}      {}", "Network".cyan().bold(), network);
    println!("      {}        {}", "Class".cyan().bold(), record.account_class());
    println!("      {}     {}", "Mnemonic".cyan().bold(), record.mnemonic());
    println!("      {}  {}", "Private Key".cyan().bold(), record.private_key_wif());
    println!("      {}   {}", "Public Key".cyan().bold(), record.public_key_hex());
    println!("      {}      {}", "Address".cyan().bold(), record.address().green());
    println!();
}

/// Display a derived record as JSON for downstream persistence.
pub fn print_record_json(record: &WalletRecord) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&record.to_export())?);
    Ok(())
}
