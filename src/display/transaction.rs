//! Transaction display formatting

use std::collections::HashMap;

use crate::models::{Member, MemberId, Transaction};

/// Format a list of transactions as a table, resolving member names
pub fn format_transaction_list(transactions: &[Transaction], members: &[Member]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let names: HashMap<MemberId, &str> =
        members.iter().map(|m| (m.id, m.name.as_str())).collect();

    let name_width = transactions
        .iter()
        .map(|t| names.get(&t.member_id).map_or(7, |n| n.len()))
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<11}  {:<name_width$}  {:<14}  {:>12}  {}\n",
        "Date",
        "Member",
        "Type",
        "Amount",
        "Note",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<11}  {:-<name_width$}  {:-<14}  {:->12}  {:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for txn in transactions {
        let name = names.get(&txn.member_id).copied().unwrap_or("Unknown");
        output.push_str(&format!(
            "{:<11}  {:<name_width$}  {:<14}  {:>12}  {}\n",
            txn.date.format("%d %b %Y").to_string(),
            name,
            txn.kind.to_string(),
            txn.amount.to_string(),
            txn.note.as_deref().unwrap_or(""),
            name_width = name_width,
        ));
    }

    output
}
