// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::cell::Cell;

use anyhow::Result;
use chrono::NaiveDate;
use spendbook::application::LedgerService;
use spendbook::{Expense, JsonFileStore, Ledger, LedgerStore};
use tempfile::TempDir;

/// JSON store that counts how many times it has been saved.
pub struct CountingStore {
    pub inner: JsonFileStore,
    saves: Cell<usize>,
}

impl CountingStore {
    pub fn new(inner: JsonFileStore) -> Self {
        Self {
            inner,
            saves: Cell::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl LedgerStore for CountingStore {
    async fn load(&self) -> Result<Ledger> {
        self.inner.load().await
    }

    async fn save(&self, ledger: &Ledger) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(ledger).await
    }
}

/// Helper to create a JSON store inside a temporary directory
pub fn test_store() -> Result<(JsonFileStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let store = JsonFileStore::new(temp_dir.path().join("expenses.json"));
    Ok((store, temp_dir))
}

/// Helper to create a test service over a counting JSON store
pub fn test_service() -> Result<(LedgerService<CountingStore>, TempDir)> {
    let (store, temp_dir) = test_store()?;
    Ok((LedgerService::new(CountingStore::new(store)), temp_dir))
}

/// Helper to parse a `YYYY-MM-DD` date
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: two food entries and one transport entry
pub fn sample_ledger() -> Ledger {
    Ledger::from(vec![
        Expense::new(10.0, "Food", "2024-01-01"),
        Expense::new(5.5, "Food", "2024-01-02"),
        Expense::new(20.0, "Transport", "2024-01-01"),
    ])
}
