//! Member display formatting
//!
//! Formats members for terminal output in list and detail views.

use crate::ledger::LoanCycleSummary;
use crate::models::{Member, Money};

/// Format a list of members as a table
pub fn format_member_list(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members found.\n".to_string();
    }

    let name_width = members
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let phone_width = members
        .iter()
        .map(|m| m.phone_number.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<phone_width$}  {:>12}  {:>12}  {}\n",
        "Name",
        "Phone",
        "Savings",
        "Loan",
        "Status",
        name_width = name_width,
        phone_width = phone_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<phone_width$}  {:->12}  {:->12}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        phone_width = phone_width,
    ));

    for member in members {
        let status = if member.is_active { "Active" } else { "Inactive" };
        output.push_str(&format!(
            "{:<name_width$}  {:<phone_width$}  {:>12}  {:>12}  {}\n",
            member.name,
            member.phone_number,
            member.total_savings.to_string(),
            member.current_loan_principal.to_string(),
            status,
            name_width = name_width,
            phone_width = phone_width,
        ));
    }

    output
}

/// Format a member detail view with loan-cycle stats
pub fn format_member_details(
    member: &Member,
    cycle: Option<&LoanCycleSummary>,
    interest_due: Money,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", member.name));
    output.push_str(&format!("  Phone:          {}\n", member.phone_number));
    output.push_str(&format!(
        "  Joined:         {}\n",
        member.joined_date.format("%d %b %Y")
    ));
    output.push_str(&format!(
        "  Status:         {}\n",
        if member.is_active { "Active" } else { "Inactive" }
    ));
    output.push_str(&format!("  Total savings:  {}\n", member.total_savings));

    match cycle {
        Some(cycle) => {
            output.push_str(&format!(
                "  Outstanding:    {}\n",
                member.current_loan_principal
            ));
            output.push_str(&format!(
                "  Loan started:   {}\n",
                cycle.start_date.format("%d %b %Y")
            ));
            output.push_str(&format!(
                "  Installments:   {} paid\n",
                cycle.repayment_count
            ));
            output.push_str(&format!(
                "  Repaid:         {}\n",
                cycle.total_principal_repaid
            ));
            output.push_str(&format!(
                "  Interest paid:  {}\n",
                cycle.total_interest_paid
            ));
            output.push_str(&format!("  Interest due:   {}\n", interest_due));
        }
        None => {
            output.push_str("  Loan status:    No active loan\n");
        }
    }

    output.push_str(&format!("  ID:             {}\n", member.id));
    output
}
