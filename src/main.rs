use anyhow::Result;
use clap::{Parser, Subcommand};

use samity::cli::{
    handle_collect_command, handle_export_command, handle_member_command,
    handle_settings_command, handle_transaction_command, CollectArgs, ExportArgs,
    MemberCommands, SettingsCommands, TransactionCommands,
};
use samity::config::{SamityPaths, Settings};
use samity::display::format_dashboard;
use samity::services::SummaryService;
use samity::storage::Storage;

#[derive(Parser)]
#[command(
    name = "samity",
    version,
    about = "Record keeping for community savings-and-loan groups",
    long_about = "samity-cli tracks a savings group's members, deposits, loans, \
                  repayments, and interest collections from the command line, \
                  deriving all balances from an append-only transaction log."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the organization dashboard
    Dashboard,

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Transaction recording commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Record the bulk monthly collection
    Collect(CollectArgs),

    /// Settings commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export data as CSV or JSON
    Export(ExportArgs),

    /// Check that stored balances agree with the transaction log
    Verify,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Delete all data and restore default settings
    Reset {
        /// Confirm the reset
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SamityPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Dashboard) => {
            let summary = SummaryService::new(&storage).organization()?;
            print!("{}", format_dashboard(&summary));
        }
        Some(Commands::Member(cmd)) => {
            handle_member_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Collect(args)) => {
            handle_collect_command(&storage, &settings, args)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Verify) => {
            let mismatched = SummaryService::new(&storage).check_integrity()?;
            if mismatched.is_empty() {
                println!("All member balances agree with the transaction log.");
            } else {
                println!(
                    "{} member(s) have balances that disagree with the transaction log:",
                    mismatched.len()
                );
                for member in mismatched {
                    println!(
                        "  {} ({}): savings {}, principal {}",
                        member.name,
                        member.id,
                        member.total_savings,
                        member.current_loan_principal
                    );
                }
            }
        }
        Some(Commands::Init) => {
            println!("Initializing samity-cli at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'samity member add <name> <phone>' to add your first member.");
        }
        Some(Commands::Config) => {
            println!("samity-cli Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Interest rate:          {}%", settings.interest_rate);
            println!(
                "  Monthly savings amount: {}",
                settings.monthly_savings_amount
            );
        }
        Some(Commands::Reset { force }) => {
            if !force {
                println!("This will delete all members, transactions, and settings.");
                println!("Re-run with --force to confirm.");
            } else {
                storage.reset_all()?;
                println!("All data cleared. Default settings restored.");
            }
        }
        None => {
            println!("samity-cli - record keeping for savings groups");
            println!();
            println!("Run 'samity --help' for usage information.");
            println!("Run 'samity dashboard' to see the organization summary.");
        }
    }

    Ok(())
}
