//! CLI command handlers
//!
//! One module per command domain, each exposing a clap `Subcommand` (or
//! `Args`) type and a handler function over the storage layer.

pub mod collect;
pub mod export;
pub mod member;
pub mod settings;
pub mod transaction;

pub use collect::{handle_collect_command, CollectArgs};
pub use export::{handle_export_command, ExportArgs};
pub use member::{handle_member_command, MemberCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
