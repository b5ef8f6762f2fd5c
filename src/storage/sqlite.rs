use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use crate::domain::{Expense, Ledger};

use super::{LedgerStore, MIGRATION_001_EXPENSES};

/// Stores the ledger in a SQLite database, one row per expense.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new store with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_EXPENSES)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Open (creating if needed) the database file at `path` and migrate it.
    pub async fn open(path: &str) -> Result<Self> {
        let store = Self::connect(&format!("sqlite:{}?mode=rwc", path)).await?;
        store.migrate().await?;
        Ok(store)
    }
}

impl LedgerStore for SqliteStore {
    async fn load(&self) -> Result<Ledger> {
        let rows = sqlx::query(
            "SELECT amount, category, date FROM expenses ORDER BY position ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load expenses")?;

        let ledger: Ledger = rows
            .into_iter()
            .map(|row| Expense {
                amount: row.get("amount"),
                category: row.get("category"),
                date: row.get("date"),
            })
            .collect();

        tracing::debug!(count = ledger.len(), "ledger loaded from database");
        Ok(ledger)
    }

    async fn save(&self, ledger: &Ledger) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        sqlx::query("DELETE FROM expenses")
            .execute(&mut *tx)
            .await
            .context("Failed to clear expenses")?;

        for (position, expense) in ledger.iter().enumerate() {
            sqlx::query(
                "INSERT INTO expenses (position, amount, category, date) VALUES (?, ?, ?, ?)",
            )
            .bind(position as i64)
            .bind(expense.amount)
            .bind(expense.category.as_str())
            .bind(expense.date.as_str())
            .execute(&mut *tx)
            .await
            .context("Failed to insert expense")?;
        }

        tx.commit().await.context("Failed to commit transaction")?;

        tracing::debug!(count = ledger.len(), "ledger saved to database");
        Ok(())
    }
}
