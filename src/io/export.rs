use anyhow::Result;
use std::io::Write;

use crate::domain::Ledger;
use crate::storage::to_pretty_json;

/// Exporter for converting a ledger to CSV or JSON.
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Export expenses to CSV, one row per expense in ledger order.
    /// Amounts are written at full precision.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["amount", "category", "date"])?;

        let mut count = 0;
        for expense in self.ledger {
            csv_writer.write_record([
                expense.amount.to_string(),
                expense.category.clone(),
                expense.date.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export expenses in the same JSON layout as the ledger file.
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let payload = to_pretty_json(self.ledger)?;
        writer.write_all(&payload)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(self.ledger.len())
    }
}
