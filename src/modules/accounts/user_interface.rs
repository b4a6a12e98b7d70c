// src/modules/accounts/user_interface.rs
use itertools::Itertools;
use std::io::{self, BufRead, Write};

use super::model::Account;
use super::operations::{authenticate, open_account, render_account_summary, reset_access_code};
use crate::modules::storage::BankStore;
use crate::modules::utils::io::Console;
use crate::modules::utils::logging::{log_account_event, log_login_attempt, log_registry_event};

/// Open an account for the user named by the typed national id
pub fn handle_account_opening<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut BankStore,
    branch_code: &str,
) -> io::Result<()> {
    let national_id = console.prompt("Enter the user's national id: ")?;
    let next_number = store.next_account_number();

    match open_account(
        branch_code,
        next_number,
        &national_id,
        &store.users,
        &mut rand::thread_rng(),
    ) {
        Ok(account) => {
            log_registry_event("open_account", &account.owner.national_id, None);
            log_account_event(account.account_number, "opened", None);
            console.say("\n=== Account created successfully! ===")?;
            console.say(format!("Holder: {}", account.owner.name))?;
            console.say(format!("Account number: {}", account.account_number))?;
            console.say(format!("Initial access code: {}", account.access_code))?;
            store.accounts.push(account);
            Ok(())
        }
        Err(e) => {
            log_registry_event("open_account", &national_id, Some(&e));
            console.say(format!("\n@@@ {} @@@", e))
        }
    }
}

/// Ask for credentials; returns the authenticated account number
pub fn handle_login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    accounts: &[Account],
) -> io::Result<Option<u32>> {
    let number = console.prompt("Enter the account number: ")?;
    let code = console.prompt_secret("Enter the 4-digit access code: ")?;

    match authenticate(&number, &code, accounts) {
        Ok(account) => {
            log_login_attempt(&number, true);
            console.say("\nLogin successful!")?;
            Ok(Some(account.account_number))
        }
        Err(e) => {
            log_login_attempt(&number, false);
            console.say(format!("\n@@@ {} @@@", e))?;
            Ok(None)
        }
    }
}

pub fn handle_access_code_reset<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut Account,
) -> io::Result<()> {
    let new_code = console.prompt_secret("Enter the new 4-digit access code: ")?;
    let account_number = account.account_number;

    match reset_access_code(account, &new_code) {
        Ok(()) => {
            log_account_event(account_number, "reset_access_code", None);
            console.say("\nAccess code reset successfully!")
        }
        Err(e) => {
            log_account_event(account_number, "reset_access_code", Some(&e));
            console.say(format!("\n@@@ {} @@@", e))
        }
    }
}

/// Print every account ordered by number
pub fn handle_account_listing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    accounts: &[Account],
) -> io::Result<()> {
    if accounts.is_empty() {
        return console.say("\nNo accounts registered.");
    }

    for account in accounts.iter().sorted_by_key(|a| a.account_number) {
        console.say("=".repeat(100))?;
        console.say(render_account_summary(account))?;
    }
    Ok(())
}
