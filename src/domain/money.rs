use std::fmt;

/// A monetary value in the ledger's single implicit currency.
///
/// Kept exactly as entered or loaded; rounding to two fraction digits happens
/// only when an amount is displayed.
pub type Amount = f64;

/// Format an amount with exactly two fraction digits.
/// Example: 50.0 -> "50.00", 0.012 -> "0.01"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse user input into an amount.
///
/// Accepts anything that reads as a finite number once surrounding whitespace
/// is removed: "50", "12.5", ".50", "-3.25", "1e3".
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Amount = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;
    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
    NotFinite,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
            ParseAmountError::NotFinite => write!(f, "amount is not a finite number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
