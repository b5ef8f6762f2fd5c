mod session;

pub use session::*;

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::application::LedgerService;
use crate::io::Exporter;
use crate::storage::{DEFAULT_LEDGER_FILE, JsonFileStore, LedgerStore, SqliteStore};

/// Default database file for the SQLite backend
pub const DEFAULT_DATABASE_FILE: &str = "expenses.db";

/// Spendbook - Personal Expense Tracker
#[derive(Parser)]
#[command(name = "spendbook")]
#[command(about = "Record expenses and see where the money goes")]
#[command(version)]
pub struct Cli {
    /// Ledger file path (defaults to expenses.json, or expenses.db for sqlite)
    #[arg(short, long, env = "SPENDBOOK_FILE")]
    pub file: Option<String>,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = Backend::Json)]
    pub backend: Backend,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Json,
    Sqlite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export recorded expenses to CSV or JSON
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    /// Path of the ledger for the selected backend.
    pub fn ledger_path(&self) -> &str {
        match (&self.file, self.backend) {
            (Some(path), _) => path.as_str(),
            (None, Backend::Json) => DEFAULT_LEDGER_FILE,
            (None, Backend::Sqlite) => DEFAULT_DATABASE_FILE,
        }
    }

    /// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
    pub fn init_logging(&self) {
        let level = if self.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("spendbook={level}")));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    pub async fn run(self) -> Result<()> {
        let path = self.ledger_path().to_string();
        tracing::debug!(path = %path, backend = ?self.backend, "opening ledger");

        match self.backend {
            Backend::Json => {
                let service = LedgerService::new(JsonFileStore::new(path));
                run_command(&service, self.command).await
            }
            Backend::Sqlite => {
                let store = SqliteStore::open(&path)
                    .await
                    .with_context(|| format!("Failed to open database: {}", path))?;
                run_command(&LedgerService::new(store), self.command).await
            }
        }
    }
}

async fn run_command<S: LedgerStore>(
    service: &LedgerService<S>,
    command: Option<Commands>,
) -> Result<()> {
    match command {
        None => {
            let stdin = io::stdin();
            Session::start(service, stdin.lock(), io::stdout())
                .await?
                .run()
                .await?;
            Ok(())
        }
        Some(Commands::Export { format, output }) => {
            run_export_command(service, format, output.as_deref()).await
        }
    }
}

async fn run_export_command<S: LedgerStore>(
    service: &LedgerService<S>,
    format: ExportFormat,
    output: Option<&str>,
) -> Result<()> {
    let ledger = service.load().await?;
    let exporter = Exporter::new(&ledger);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    let count = match format {
        ExportFormat::Csv => exporter.export_csv(writer)?,
        ExportFormat::Json => exporter.export_json(writer)?,
    };
    eprintln!("Exported {} expenses", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_follow_backend() {
        let cli = Cli::parse_from(["spendbook"]);
        assert_eq!(cli.backend, Backend::Json);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["spendbook", "--backend", "sqlite"]);
        assert_eq!(cli.ledger_path(), DEFAULT_DATABASE_FILE);

        let cli = Cli::parse_from(["spendbook", "-f", "mine.json", "--backend", "sqlite"]);
        assert_eq!(cli.ledger_path(), "mine.json");
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["spendbook", "export", "--format", "json", "-o", "out.json"]);
        match cli.command {
            Some(Commands::Export { format, output }) => {
                assert_eq!(format, ExportFormat::Json);
                assert_eq!(output.as_deref(), Some("out.json"));
            }
            None => panic!("expected export command"),
        }
    }
}
