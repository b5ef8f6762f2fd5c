use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::Ledger;

use super::LedgerStore;

/// Stores the ledger as a pretty-printed JSON array in a single file.
///
/// Saves overwrite the file in place. A crash mid-write can leave it truncated,
/// which the next load reads as an empty ledger.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    async fn load(&self) -> Result<Ledger> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "ledger file not found, starting empty"
                );
                return Ok(Ledger::new());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read ledger file: {}", self.path.display())
                });
            }
        };

        match serde_json::from_slice::<Ledger>(&bytes) {
            Ok(ledger) => {
                tracing::debug!(path = %self.path.display(), count = ledger.len(), "ledger loaded");
                Ok(ledger)
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ledger file is not valid, treating it as empty"
                );
                Ok(Ledger::new())
            }
        }
    }

    async fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create ledger directory: {}", parent.display())
            })?;
        }

        let payload = to_pretty_json(ledger).context("Failed to serialize ledger")?;
        fs::write(&self.path, payload)
            .with_context(|| format!("Failed to write ledger file: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = ledger.len(), "ledger saved");
        Ok(())
    }
}

/// Serialize with 4-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
