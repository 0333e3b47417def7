//! Member CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_member_details, format_member_list};
use crate::error::{SamityError, SamityResult};
use crate::services::{MemberService, SummaryService};
use crate::storage::Storage;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a new member
    Add {
        /// Member name
        name: String,
        /// Phone number
        phone: String,
    },
    /// List members
    List {
        /// Include inactive (removed) members
        #[arg(short, long)]
        all: bool,
    },
    /// Show member details with loan-cycle stats
    Show {
        /// Member name or ID
        member: String,
    },
    /// Edit a member's name or phone number
    Edit {
        /// Member name or ID
        member: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New phone number
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// Remove (deactivate) one or more members
    Remove {
        /// Member names or IDs
        members: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a member command
pub fn handle_member_command(
    storage: &Storage,
    settings: &Settings,
    cmd: MemberCommands,
) -> SamityResult<()> {
    let service = MemberService::new(storage);

    match cmd {
        MemberCommands::Add { name, phone } => {
            let member = service.create(&name, &phone)?;
            println!("Added member: {}", member.name);
            println!("  Phone: {}", member.phone_number);
            println!("  ID:    {}", member.id);
        }

        MemberCommands::List { all } => {
            let members = service.list(all)?;
            print!("{}", format_member_list(&members));
        }

        MemberCommands::Show { member } => {
            let found = service
                .find(&member)?
                .ok_or_else(|| SamityError::member_not_found(&member))?;

            let summaries = SummaryService::new(storage);
            let cycle = summaries.loan_cycle(found.id)?;
            let interest_due = summaries.estimated_interest(found.id, settings)?;
            print!(
                "{}",
                format_member_details(&found, cycle.as_ref(), interest_due)
            );
        }

        MemberCommands::Edit { member, name, phone } => {
            let found = service
                .find(&member)?
                .ok_or_else(|| SamityError::member_not_found(&member))?;

            if name.is_none() && phone.is_none() {
                println!("No changes specified. Use --name or --phone.");
                return Ok(());
            }

            let updated = service.update(found.id, name.as_deref(), phone.as_deref())?;
            println!("Updated member: {}", updated.name);
        }

        MemberCommands::Remove { members, yes } => {
            if members.is_empty() {
                println!("No members specified.");
                return Ok(());
            }

            let mut ids = Vec::with_capacity(members.len());
            let mut names = Vec::with_capacity(members.len());
            for identifier in &members {
                let found = service
                    .find(identifier)?
                    .ok_or_else(|| SamityError::member_not_found(identifier))?;
                ids.push(found.id);
                names.push(found.name);
            }

            if !yes {
                println!(
                    "This will deactivate {} member(s): {}",
                    names.len(),
                    names.join(", ")
                );
                println!("Their transaction history is retained. Re-run with --yes to confirm.");
                return Ok(());
            }

            service.soft_delete_many(&ids)?;
            println!("Removed {} member(s).", ids.len());
        }
    }

    Ok(())
}
