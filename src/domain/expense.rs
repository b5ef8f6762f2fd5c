use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Date format used for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Amount,
    /// Title-cased label (e.g. "Groceries")
    pub category: String,
    /// `YYYY-MM-DD` by convention; whatever the user typed is kept verbatim
    pub date: String,
}

impl Expense {
    /// Create an expense, normalizing the category to title case.
    pub fn new(amount: Amount, category: &str, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: title_case(category),
            date: date.into(),
        }
    }

    /// Format a calendar date the way expense dates are stored.
    pub fn format_date(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A cased letter starts a new word unless the character before it is also
/// cased, so "e-books" becomes "E-Books", "1st" becomes "1St" and "中a"
/// becomes "中A".
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_cased = false;
    for c in input.chars() {
        let is_cased = c.is_lowercase() || c.is_uppercase();
        if !is_cased {
            out.push(c);
        } else if prev_is_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_cased = is_cased;
    }
    out
}
