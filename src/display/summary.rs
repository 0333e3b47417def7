//! Dashboard display formatting

use crate::services::OrganizationSummary;

/// Format the organization dashboard
pub fn format_dashboard(summary: &OrganizationSummary) -> String {
    let mut output = String::new();

    output.push_str("Samity Dashboard\n");
    output.push_str("================\n");
    output.push_str(&format!(
        "Organization balance:  {}\n",
        summary.org_balance
    ));
    output.push_str(&format!(
        "Member savings:        {}\n",
        summary.total_savings
    ));
    output.push_str(&format!(
        "Loans outstanding:     {}\n",
        summary.total_loans_outstanding
    ));
    output.push_str(&format!(
        "Interest earned:       {}\n",
        summary.total_interest_earned
    ));
    output.push_str(&format!(
        "Active members:        {}\n",
        summary.active_members
    ));

    output
}
