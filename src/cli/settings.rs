//! Settings CLI commands

use clap::Subcommand;

use crate::config::{SamityPaths, Settings};
use crate::error::{SamityError, SamityResult};
use crate::models::Money;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Change settings
    Set {
        /// Monthly interest rate as a percentage (e.g. 5.0)
        #[arg(long)]
        interest_rate: Option<f64>,
        /// Default monthly deposit amount in rupees
        #[arg(long)]
        monthly_amount: Option<String>,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    paths: &SamityPaths,
    settings: &Settings,
    cmd: SettingsCommands,
) -> SamityResult<()> {
    match cmd {
        SettingsCommands::Show => {
            println!("Interest rate:          {}%", settings.interest_rate);
            println!(
                "Monthly savings amount: {}",
                settings.monthly_savings_amount
            );
        }

        SettingsCommands::Set {
            interest_rate,
            monthly_amount,
        } => {
            if interest_rate.is_none() && monthly_amount.is_none() {
                println!("No changes specified. Use --interest-rate or --monthly-amount.");
                return Ok(());
            }

            let mut updated = settings.clone();
            if let Some(rate) = interest_rate {
                updated.interest_rate = rate;
            }
            if let Some(amount) = monthly_amount {
                updated.monthly_savings_amount = Money::parse(&amount)
                    .map_err(|e| SamityError::Validation(e.to_string()))?;
            }

            updated.validate()?;
            updated.save(paths)?;

            println!("Settings saved.");
            println!("  Interest rate:          {}%", updated.interest_rate);
            println!(
                "  Monthly savings amount: {}",
                updated.monthly_savings_amount
            );
        }
    }

    Ok(())
}
