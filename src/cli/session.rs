use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::{
    AppError, LedgerService, NewExpense, spending_by_category, spending_by_date, summarize,
};
use crate::domain::{Ledger, format_amount, parse_amount, title_case};
use crate::storage::LedgerStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
}

/// Interactive menu loop over one in-memory ledger.
///
/// The ledger is loaded once when the session starts; only "add expense"
/// writes it back.
pub struct Session<'a, S, R, W> {
    service: &'a LedgerService<S>,
    ledger: Ledger,
    input: R,
    output: W,
    state: SessionState,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: LedgerStore,
    R: BufRead,
    W: Write,
{
    /// Load the ledger and get ready to read commands.
    pub async fn start(service: &'a LedgerService<S>, input: R, output: W) -> Result<Self> {
        let ledger = service.load().await?;
        tracing::debug!(count = ledger.len(), "session started");
        Ok(Self {
            service,
            ledger,
            input,
            output,
            state: SessionState::Running,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run until the user exits or input ends. Returns the final ledger.
    pub async fn run(mut self) -> Result<Ledger> {
        while self.state == SessionState::Running {
            self.step().await?;
        }
        Ok(self.ledger)
    }

    /// Show the menu and handle one selection.
    pub async fn step(&mut self) -> Result<()> {
        self.print_menu()?;
        let Some(choice) = self.prompt("Enter choice: ")? else {
            return self.exit();
        };

        match choice.trim() {
            "1" => self.add_expense().await,
            "2" => self.view_summary(),
            "3" => self.view_by_category(),
            "4" => self.view_by_date(),
            "5" => {
                writeln!(self.output, "Exiting... Data saved. Goodbye!")?;
                self.exit()
            }
            other => {
                tracing::debug!(choice = other, "unrecognized menu choice");
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(())
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "==== Personal Expense Tracker ====")?;
        writeln!(self.output, "1. Add Expense")?;
        writeln!(self.output, "2. View Summary")?;
        writeln!(self.output, "3. View Spending by Category")?;
        writeln!(self.output, "4. View Spending by Date")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    async fn add_expense(&mut self) -> Result<()> {
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return self.exit();
        };
        // Bail out before asking for the rest
        if parse_amount(&amount).is_err() {
            return self.report_invalid_amount();
        }

        let Some(category) =
            self.prompt("Enter category (Food/Transport/Entertainment/etc.): ")?
        else {
            return self.exit();
        };
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) or press Enter for today: ")?
        else {
            return self.exit();
        };

        let input = NewExpense {
            amount,
            category,
            date,
        };
        match self.service.add_expense(&mut self.ledger, input).await {
            Ok(_) => {
                writeln!(self.output, "Expense added successfully!")?;
                writeln!(self.output)?;
                Ok(())
            }
            Err(AppError::InvalidAmount(_)) => self.report_invalid_amount(),
            Err(err) => Err(err.into()),
        }
    }

    fn report_invalid_amount(&mut self) -> Result<()> {
        writeln!(self.output, "Invalid amount. Please enter a number.")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn view_summary(&mut self) -> Result<()> {
        let Some(summary) = summarize(&self.ledger) else {
            writeln!(self.output)?;
            writeln!(self.output, "No expenses recorded yet.")?;
            writeln!(self.output)?;
            return Ok(());
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Total Overall Spending: {}",
            format_amount(summary.total)
        )?;

        writeln!(self.output)?;
        writeln!(self.output, "Spending by Category:")?;
        for group in &summary.by_category {
            writeln!(self.output, "- {}: {}", group.key, format_amount(group.total))?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "Spending by Date:")?;
        for group in &summary.by_date {
            writeln!(self.output, "- {}: {}", group.key, format_amount(group.total))?;
        }
        Ok(())
    }

    fn view_by_category(&mut self) -> Result<()> {
        let Some(category) = self.prompt("Enter category to check: ")? else {
            return self.exit();
        };
        let total = spending_by_category(&self.ledger, &category);
        writeln!(
            self.output,
            "Total spending on {}: {}",
            title_case(&category),
            format_amount(total)
        )?;
        Ok(())
    }

    fn view_by_date(&mut self) -> Result<()> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return self.exit();
        };
        let total = spending_by_date(&self.ledger, &date);
        writeln!(self.output, "Total spending on {}: {}", date, format_amount(total))?;
        Ok(())
    }

    /// Print `label` and read one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn exit(&mut self) -> Result<()> {
        self.state = SessionState::Exited;
        Ok(())
    }
}
