use chrono::{Local, NaiveDate};

use crate::domain::{Expense, Ledger, parse_amount};
use crate::storage::LedgerStore;

use super::AppError;

/// Raw user input for a new expense, as typed at the prompts.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub amount: String,
    pub category: String,
    /// Empty means "today"
    pub date: String,
}

/// Application service that records expenses against a ledger and keeps the
/// store in sync after every change.
pub struct LedgerService<S> {
    store: S,
}

impl<S: LedgerStore> LedgerService<S> {
    /// Create a new ledger service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the ledger from the store.
    pub async fn load(&self) -> Result<Ledger, AppError> {
        Ok(self.store.load().await?)
    }

    /// Validate and append a new expense dated today when no date is given.
    pub async fn add_expense(
        &self,
        ledger: &mut Ledger,
        input: NewExpense,
    ) -> Result<Expense, AppError> {
        self.add_expense_on(ledger, input, Local::now().date_naive())
            .await
    }

    /// Validate and append a new expense, using `today` when no date is given.
    ///
    /// The ledger is left untouched and nothing is saved if the amount is invalid.
    pub async fn add_expense_on(
        &self,
        ledger: &mut Ledger,
        input: NewExpense,
        today: NaiveDate,
    ) -> Result<Expense, AppError> {
        let amount = parse_amount(&input.amount)
            .map_err(|e| AppError::InvalidAmount(format!("{:?}: {}", input.amount, e)))?;

        let date = if input.date.is_empty() {
            Expense::format_date(today)
        } else {
            input.date
        };

        let expense = Expense::new(amount, &input.category, date);
        ledger.push(expense.clone());
        self.store.save(ledger).await?;

        tracing::debug!(
            amount = expense.amount,
            category = %expense.category,
            date = %expense.date,
            "expense recorded"
        );
        Ok(expense)
    }
}
