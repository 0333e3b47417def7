//! samity-cli - record keeping for community savings-and-loan groups
//!
//! This library provides the core functionality for samity-cli, a terminal
//! tool that tracks a samity's members, savings deposits, loans, repayments,
//! and interest collections, deriving balances from an append-only
//! transaction log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, transactions, money)
//! - `ledger`: Pure derivation engine for balances and summaries
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal output formatting
//! - `export`: CSV and JSON data export
//! - `cli`: Command handlers
//!
//! Member balances are a materialized view of the transaction log: the only
//! mutation path is `storage::Storage::record_transaction`, which couples
//! the log append with the balance update as one unit of work.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SamityError, SamityResult};
