mod json;
mod sqlite;

pub use json::*;
pub use sqlite::*;

use anyhow::Result;

use crate::domain::Ledger;

/// SQL migration for the expenses table
pub const MIGRATION_001_EXPENSES: &str = include_str!("migrations/001_expenses.sql");

/// Default ledger file, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "expenses.json";

/// Durable home of the whole ledger.
///
/// `load` never fails on missing or undecodable data; it hands back an empty
/// ledger instead. `save` replaces everything previously stored.
#[allow(async_fn_in_trait)]
pub trait LedgerStore {
    async fn load(&self) -> Result<Ledger>;

    async fn save(&self, ledger: &Ledger) -> Result<()>;
}
