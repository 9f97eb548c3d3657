//! Borrower and loan display formatting

use crate::catalog::LoanView;
use crate::models::Borrower;

use super::book::truncate;

/// Format a list of borrowers as a table, with the number of loans each holds
pub fn format_borrower_list<'a>(rows: impl IntoIterator<Item = (&'a Borrower, usize)>) -> String {
    let rows: Vec<_> = rows.into_iter().collect();
    if rows.is_empty() {
        return "No borrowers found.".to_string();
    }

    let email_width = rows
        .iter()
        .map(|(b, _)| b.email.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(5, 40);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<email_width$}  {:<25}  {:<15}  {:>5}\n",
        "Email", "Name", "Phone", "Loans",
    ));
    output.push_str(&format!(
        "{:-<email_width$}  {:-<25}  {:-<15}  {:->5}\n",
        "", "", "", "",
    ));

    for (borrower, loans) in &rows {
        output.push_str(&format!(
            "{:<email_width$}  {:<25}  {:<15}  {:>5}\n",
            truncate(&borrower.email, email_width),
            truncate(&borrower.full_name(), 25),
            truncate(&borrower.phone, 15),
            loans,
        ));
    }

    output.push_str(&format!("\nTotal: {} borrowers", rows.len()));
    output
}

/// Format loans as a table
pub fn format_loan_list(loans: &[LoanView<'_>], date_format: &str) -> String {
    if loans.is_empty() {
        return "No loans found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:>4}  {:<30}  {:<25}  {:<10}  {}\n",
        "Call Number", "Copy", "Title", "Borrower", "Due", "Renewed",
    ));
    output.push_str(&format!("{}\n", "-".repeat(100)));

    for view in loans {
        output.push_str(&format!(
            "{:<16} {:>4}  {:<30}  {:<25}  {:<10}  {}\n",
            truncate(&view.book.call_number, 16),
            view.copy_number,
            truncate(&view.book.title, 30),
            truncate(&view.loan.borrower_email, 25),
            view.loan.due_date.format(date_format).to_string(),
            if view.loan.renewed { "yes" } else { "no" },
        ));
    }

    output
}
