use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::modules::accounts::Account;
use crate::modules::users::User;

/// Custom error type for store file operations
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

// Implement conversion from io::Error to StoreError
impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Parse(error)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Parse(e) => write!(f, "Malformed store file: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
        }
    }
}

/// Everything persisted between runs
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BankStore {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
}

impl BankStore {
    /// Sequential numbering; only valid because accounts are never removed
    pub fn next_account_number(&self) -> u32 {
        self.accounts.len() as u32 + 1
    }

    pub fn account_mut(&mut self, account_number: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number == account_number)
    }
}

/// Load the store, or an empty one when the file does not exist yet
pub fn load_bank_store(path: &Path) -> Result<BankStore, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BankStore::default()),
        Err(e) => return Err(StoreError::Io(e)),
    };

    Ok(serde_json::from_str(&data)?)
}

/// Overwrite the store file with the full in-memory state
pub fn save_bank_store(store: &BankStore, path: &Path) -> Result<(), StoreError> {
    // Create the containing directory on first save
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let data = serde_json::to_string_pretty(store)?;
    File::create(path)?.write_all(data.as_bytes())?;
    Ok(())
}
