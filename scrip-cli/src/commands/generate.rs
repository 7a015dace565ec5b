//! `scrip generate` - create a fresh wallet identity.

use clap::Args;
use rand::rngs::OsRng;
use scrip_wallet::{FactoryConfig, WalletFactory};

use super::{network_for, print_record, print_record_json, CliAccountClass};

/// Generate a new wallet identity.
#[derive(Args)]
pub struct GenerateCommand {
    /// Account class for the new identity.
    #[arg(short, long, value_enum, default_value = "primary")]
    class: CliAccountClass,

    /// Optional passphrase (checked against the strength policy).
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Use testnet instead of mainnet.
    #[arg(short, long)]
    testnet: bool,

    /// Print the record as JSON instead of formatted output.
    #[arg(long)]
    json: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let network = network_for(self.testnet);
        let factory = WalletFactory::new(FactoryConfig {
            network,
            ..FactoryConfig::default()
        });

        let record = factory.generate(
            &mut OsRng,
            self.passphrase.as_deref(),
            self.class.into(),
        )?;

        if self.json {
            print_record_json(&record)?;
        } else {
            print_record(&record, network);
        }
        Ok(())
    }
}
