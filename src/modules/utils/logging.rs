use env_logger::{Builder, WriteStyle};
use log::{error, info, warn, LevelFilter};
use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::Path;

use crate::modules::transactions::{Movement, TransactionError};

/// Initialize the logging system, appending to the given log file
pub fn initialize_logging(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Auto)
        // Console belongs to the menus, so everything goes to the file
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}

/// Keep the first and last two characters of a national id
fn mask_national_id(national_id: &str) -> String {
    let chars: Vec<char> = national_id.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Branch wall clock; env_logger stamps records in UTC
fn local_time() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

// Severity convention: accepted actions are info, refused user actions are
// warn, and error is kept for the store file.

/// Login attempt with the account number exactly as typed
pub fn log_login_attempt(typed_account: &str, accepted: bool) {
    if accepted {
        info!("Login: account={}, local_time={}", typed_account, local_time());
    } else {
        warn!(
            "Login refused: account={:?}, local_time={}",
            typed_account,
            local_time()
        );
    }
}

/// Account lifecycle and credential events (opened, logout, access code reset)
pub fn log_account_event(account_number: u32, event: &str, rejection: Option<&dyn Display>) {
    match rejection {
        None => info!(
            "Account event: account={}, event={}, local_time={}",
            account_number,
            event,
            local_time()
        ),
        Some(reason) => warn!(
            "Account event refused: account={}, event={}, reason=\"{}\", local_time={}",
            account_number,
            event,
            reason,
            local_time()
        ),
    }
}

/// Deposit or withdrawal outcome; amounts stay out of the log
pub fn log_movement(
    account_number: u32,
    movement: Movement,
    rejection: Option<TransactionError>,
) {
    match rejection {
        None => info!(
            "{}: account={}, local_time={}",
            movement.label(),
            account_number,
            local_time()
        ),
        Some(reason) => warn!(
            "{} refused: account={}, reason={:?}, local_time={}",
            movement.label(),
            account_number,
            reason,
            local_time()
        ),
    }
}

/// User registry operations keyed by (masked) national id
pub fn log_registry_event(operation: &str, national_id: &str, rejection: Option<&dyn Display>) {
    match rejection {
        None => info!(
            "Registry: op={}, national_id={}, local_time={}",
            operation,
            mask_national_id(national_id),
            local_time()
        ),
        Some(reason) => warn!(
            "Registry refused: op={}, national_id={}, reason=\"{}\", local_time={}",
            operation,
            mask_national_id(national_id),
            reason,
            local_time()
        ),
    }
}

/// Store file could not be read or written
pub fn log_store_failure(path: &Path, failure: &dyn Display) {
    error!(
        "Store failure: path={}, error=\"{}\", local_time={}",
        path.display(),
        failure,
        local_time()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_national_id_masking() {
        assert_eq!(mask_national_id("12345678900"), "12***00");
        assert_eq!(mask_national_id("42"), "**");
        assert_eq!(mask_national_id("0001"), "****");
        assert_eq!(mask_national_id("çãoçã"), "çã***çã");
        assert_eq!(mask_national_id(""), "");
    }

    #[test]
    fn test_logging_initialization() {
        let log_file = NamedTempFile::new().unwrap();

        // Either we installed the logger or another test already did
        let result = initialize_logging(log_file.path());
        assert!(
            result.is_ok()
                || result
                    .unwrap_err()
                    .to_string()
                    .contains("already initialized")
        );

        // Helpers must be callable with or without an installed logger
        log_login_attempt("not-a-number", false);
        log_account_event(1, "logout", None);
        log_movement(1, Movement::Withdrawal, Some(TransactionError::ExceedsLimit));
        log_registry_event("create_user", "12345678900", Some(&"Name cannot be empty!"));
        log_store_failure(log_file.path(), &"disk full");
    }
}
