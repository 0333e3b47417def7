//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::{SamityError, SamityResult};
use crate::models::{Member, Money, TransactionKind};
use crate::services::{MemberService, SummaryService, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a savings deposit
    Deposit {
        /// Member name or ID
        member: String,
        /// Amount in rupees (defaults to the monthly savings amount)
        amount: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Disburse a loan
    Loan {
        /// Member name or ID
        member: String,
        /// Amount in rupees
        amount: String,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Record a loan principal repayment
    Repay {
        /// Member name or ID
        member: String,
        /// Amount in rupees
        amount: String,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Collect interest on an outstanding loan
    Interest {
        /// Member name or ID
        member: String,
        /// Amount in rupees (defaults to the estimated interest due)
        amount: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by member name or ID
        #[arg(short, long)]
        member: Option<String>,
        /// Filter by kind (deposit, loan, repayment, interest)
        #[arg(short, long)]
        kind: Option<String>,
        /// Show loan history only (loans, repayments, interest)
        #[arg(long)]
        loans: bool,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn parse_amount(s: &str) -> SamityResult<Money> {
    Money::parse(s).map_err(|e| SamityError::Validation(e.to_string()))
}

fn find_member(storage: &Storage, identifier: &str) -> SamityResult<Member> {
    MemberService::new(storage)
        .find(identifier)?
        .ok_or_else(|| SamityError::member_not_found(identifier))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> SamityResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Deposit { member, amount, note } => {
            let found = find_member(storage, &member)?;
            let amount = match amount {
                Some(s) => parse_amount(&s)?,
                None => settings.monthly_savings_amount,
            };
            let (_, updated) = service.record(found.id, TransactionKind::Deposit, amount, note)?;
            println!("Recorded deposit of {} for {}.", amount, updated.name);
            println!("  Total savings: {}", updated.total_savings);
        }

        TransactionCommands::Loan { member, amount, note } => {
            let found = find_member(storage, &member)?;
            let amount = parse_amount(&amount)?;
            let (_, updated) = service.record(found.id, TransactionKind::LoanTaken, amount, note)?;
            println!("Disbursed loan of {} to {}.", amount, updated.name);
            println!("  Outstanding principal: {}", updated.current_loan_principal);
        }

        TransactionCommands::Repay { member, amount, note } => {
            let found = find_member(storage, &member)?;
            let amount = parse_amount(&amount)?;
            let (_, updated) =
                service.record(found.id, TransactionKind::LoanRepayment, amount, note)?;
            println!("Recorded repayment of {} from {}.", amount, updated.name);
            println!("  Outstanding principal: {}", updated.current_loan_principal);
        }

        TransactionCommands::Interest { member, amount, note } => {
            let found = find_member(storage, &member)?;
            let amount = match amount {
                Some(s) => parse_amount(&s)?,
                None => {
                    let due = SummaryService::new(storage)
                        .estimated_interest(found.id, settings)?;
                    println!(
                        "Calculated interest ({}%): {}",
                        settings.interest_rate, due
                    );
                    due
                }
            };
            let (_, updated) =
                service.record(found.id, TransactionKind::InterestPaid, amount, note)?;
            println!("Collected interest of {} from {}.", amount, updated.name);
        }

        TransactionCommands::List { member, kind, loans, limit } => {
            let mut filter = TransactionFilter::new().limit(limit);

            if let Some(identifier) = member {
                let found = find_member(storage, &identifier)?;
                filter = filter.member(found.id);
            }
            if let Some(kind) = kind {
                let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                    SamityError::Validation(format!(
                        "Invalid transaction kind: '{}'. Valid kinds: deposit, loan, repayment, interest",
                        kind
                    ))
                })?;
                filter = filter.kind(kind);
            }
            if loans {
                filter = filter.loan_history();
            }

            let transactions = service.list(filter)?;
            let members = storage.members.get_all()?;
            print!("{}", format_transaction_list(&transactions, &members));
        }
    }

    Ok(())
}
