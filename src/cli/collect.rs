//! Monthly collection CLI command
//!
//! Records the bulk monthly deposit for a set of members in one batch.

use clap::Args;

use crate::config::Settings;
use crate::error::{SamityError, SamityResult};
use crate::models::Money;
use crate::services::{MemberService, TransactionService};
use crate::storage::Storage;

/// Arguments for the monthly collection
#[derive(Args)]
pub struct CollectArgs {
    /// Member names or IDs who paid this month
    pub members: Vec<String>,

    /// Collect from all active members
    #[arg(long)]
    pub all: bool,

    /// Deposit amount per member (defaults to the monthly savings amount)
    #[arg(short, long)]
    pub amount: Option<String>,
}

/// Handle the collect command
pub fn handle_collect_command(
    storage: &Storage,
    settings: &Settings,
    args: CollectArgs,
) -> SamityResult<()> {
    let members = MemberService::new(storage);

    let ids = if args.all {
        members.list(false)?.into_iter().map(|m| m.id).collect()
    } else {
        if args.members.is_empty() {
            println!("No members specified. Name members to collect from, or use --all.");
            return Ok(());
        }
        let mut ids = Vec::with_capacity(args.members.len());
        for identifier in &args.members {
            let found = members
                .find(identifier)?
                .ok_or_else(|| SamityError::member_not_found(identifier))?;
            ids.push(found.id);
        }
        ids
    };

    if ids.is_empty() {
        println!("No active members to collect from.");
        return Ok(());
    }

    let amount = match args.amount {
        Some(s) => Money::parse(&s).map_err(|e| SamityError::Validation(e.to_string()))?,
        None => settings.monthly_savings_amount,
    };

    let recorded =
        TransactionService::new(storage).record_monthly_collection(&ids, amount)?;

    println!(
        "Recorded {} deposit(s) of {} each.",
        recorded.len(),
        amount
    );

    Ok(())
}
