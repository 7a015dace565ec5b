//! `scrip restore` - rebuild an identity from a recovery phrase.

use clap::Args;
use colored::Colorize;
use scrip_wallet::{mnemonic, FactoryConfig, UnknownClass, WalletFactory};

use super::{network_for, print_record, print_record_json, CliAccountClass};

/// Restore a wallet identity from an existing recovery phrase.
#[derive(Args)]
pub struct RestoreCommand {
    /// 12-word recovery phrase; words may be abbreviated to unique
    /// 4-character prefixes.
    #[arg(short, long)]
    mnemonic: String,

    /// Passphrase used when the wallet was created.
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Account class; omitted classes default to primary.
    #[arg(short, long, value_enum)]
    class: Option<CliAccountClass>,

    /// Use testnet instead of mainnet.
    #[arg(short, long)]
    testnet: bool,

    /// Print the record as JSON instead of formatted output.
    #[arg(long)]
    json: bool,
}

impl RestoreCommand {
    /// Execute the restore command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let network = network_for(self.testnet);
        let factory = WalletFactory::new(FactoryConfig {
            network,
            ..FactoryConfig::default()
        });

        let phrase = mnemonic::expand(&self.mnemonic)?;

        if self.passphrase.is_none() {
            eprintln!(
                "{}",
                "Note: restoring without a passphrase; if one was used at creation, \
                 the derived address will not match."
                    .yellow()
            );
        }

        let record = factory.restore(
            &phrase,
            self.passphrase.as_deref(),
            self.class.map(Into::into),
            &UnknownClass,
        )?;

        if self.json {
            print_record_json(&record)?;
        } else {
            print_record(&record, network);
        }
        Ok(())
    }
}
