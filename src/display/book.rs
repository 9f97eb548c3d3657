//! Book display formatting
//!
//! Formats books for terminal output in table and detail views.

use crate::models::Book;

/// Format a list of books as a table
pub fn format_book_list<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    let books: Vec<&Book> = books.into_iter().collect();
    if books.is_empty() {
        return "No books found.".to_string();
    }

    let call_width = books
        .iter()
        .map(|b| b.call_number.chars().count())
        .max()
        .unwrap_or(0)
        .max(11);
    let title_width = books
        .iter()
        .map(|b| b.title.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(5, 40);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<call_width$}  {:<title_width$}  {:<20}  {:>6}  {:>9}\n",
        "Call Number", "Title", "Author", "Copies", "Available",
    ));
    output.push_str(&format!(
        "{:-<call_width$}  {:-<title_width$}  {:-<20}  {:->6}  {:->9}\n",
        "", "", "", "", "",
    ));

    for book in &books {
        let available = book.copy_count() - book.checked_out_count();
        output.push_str(&format!(
            "{:<call_width$}  {:<title_width$}  {:<20}  {:>6}  {:>9}\n",
            book.call_number,
            truncate(&book.title, title_width),
            truncate(&book.author, 20),
            book.copy_count(),
            available,
        ));
    }

    output.push_str(&format!("\nTotal: {} books", books.len()));
    output
}

/// Format one book with the state of every copy
pub fn format_book_details(book: &Book, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Title:       {}\n", book.title));
    output.push_str(&format!("Author:      {}\n", book.author));
    output.push_str(&format!("Call Number: {}\n", book.call_number));
    output.push_str(&format!("Copies:      {}\n", book.copy_count()));

    if book.copies.is_empty() {
        output.push_str("\nNo copies yet. Add one with 'library book copy'.\n");
        return output;
    }

    output.push('\n');
    for copy in &book.copies {
        match &copy.loan {
            None => output.push_str(&format!("  #{:<3} Available\n", copy.number)),
            Some(loan) => output.push_str(&format!(
                "  #{:<3} On loan to {} until {}{}\n",
                copy.number,
                loan.borrower_email,
                loan.due_date.format(date_format),
                if loan.renewed { " (renewed)" } else { "" }
            )),
        }
    }
    output
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Loan;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_book_list(Vec::<&Book>::new()), "No books found.");
    }

    #[test]
    fn test_list_counts_available_copies() {
        let mut book = Book::new("Dune", "Frank Herbert", "PS3558.E63");
        book.add_copy();
        book.add_copy();
        book.copy_mut(1).unwrap().loan = Some(Loan::new(
            "ada@example.com",
            NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
        ));

        let output = format_book_list([&book]);
        assert!(output.contains("PS3558.E63"));
        let row = output.lines().nth(2).unwrap();
        let counts: Vec<_> = row.split_whitespace().rev().take(2).collect();
        assert_eq!(counts, vec!["1", "2"]);
        assert!(output.ends_with("Total: 1 books"));
    }

    #[test]
    fn test_details() {
        let mut book = Book::new("Dune", "Frank Herbert", "PS3558.E63");
        book.add_copy();
        book.add_copy();
        let mut loan = Loan::new("ada@example.com", NaiveDate::from_ymd_opt(2025, 1, 29).unwrap());
        loan.renewed = true;
        book.copy_mut(2).unwrap().loan = Some(loan);

        let output = format_book_details(&book, "%d/%m/%Y");
        assert!(output.contains("#1   Available"));
        assert!(output.contains("#2   On loan to ada@example.com until 29/01/2025 (renewed)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title indeed", 10), "a very ...");
    }
}
