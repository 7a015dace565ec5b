//! `scrip validate` - check a recovery phrase.

use clap::Args;
use colored::Colorize;
use scrip_wallet::mnemonic;

/// Check whether a recovery phrase is valid.
#[derive(Args)]
pub struct ValidateCommand {
    /// 12-word recovery phrase to check.
    #[arg(short, long)]
    mnemonic: String,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let words = self.mnemonic.split_whitespace().count();

        println!();
        println!("      {}   {words} words", "Phrase".cyan().bold());
        if mnemonic::validate(&self.mnemonic) {
            println!("      {}   {}", "Result".cyan().bold(), "valid".green().bold());
        } else {
            println!("      {}   {}", "Result".cyan().bold(), "invalid".red().bold());
        }
        println!();
        Ok(())
    }
}
