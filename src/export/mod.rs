//! Export module for samity-cli
//!
//! Provides data export in two formats:
//! - CSV: members and transactions (spreadsheet-compatible)
//! - JSON: machine-readable full export of all collections

use std::collections::HashMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{SamityError, SamityResult};
use crate::models::{Member, Transaction};
use crate::storage::Storage;

/// Schema version for the JSON export format
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Quote a CSV field if it contains separators or quotes
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Export all members to CSV
pub fn export_members_csv<W: Write>(storage: &Storage, writer: &mut W) -> SamityResult<()> {
    writeln!(writer, "ID,Name,Phone,Active,Total Savings,Loan Principal,Joined")
        .map_err(|e| SamityError::Export(e.to_string()))?;

    for member in storage.members.get_all()? {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            member.id.as_uuid(),
            csv_field(&member.name),
            csv_field(&member.phone_number),
            member.is_active,
            member.total_savings.rupees(),
            member.current_loan_principal.rupees(),
            member.joined_date.to_rfc3339(),
        )
        .map_err(|e| SamityError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all transactions to CSV, resolving member names
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> SamityResult<()> {
    let members = storage.members.get_all()?;
    let member_names: HashMap<_, _> = members
        .iter()
        .map(|m| (m.id, m.name.clone()))
        .collect();

    writeln!(writer, "ID,Date,Member,Type,Amount,Note")
        .map_err(|e| SamityError::Export(e.to_string()))?;

    for txn in storage.transactions.get_all()? {
        let member_name = member_names
            .get(&txn.member_id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        writeln!(
            writer,
            "{},{},{},{},{},{}",
            txn.id.as_uuid(),
            txn.date.to_rfc3339(),
            csv_field(&member_name),
            txn.kind,
            txn.amount.rupees(),
            csv_field(txn.note.as_deref().unwrap_or("")),
        )
        .map_err(|e| SamityError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Complete export of all persisted collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub settings: Settings,
    pub members: Vec<Member>,
    pub transactions: Vec<Transaction>,
}

/// Export all data as a single JSON document
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> SamityResult<()> {
    let export = FullExport {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_at: Utc::now(),
        settings: settings.clone(),
        members: storage.members.get_all()?,
        transactions: storage.transactions.get_all()?,
    };

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| SamityError::Export(e.to_string()))?;

    Ok(())
}
