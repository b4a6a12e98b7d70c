// src/modules/session/user_interface.rs
use log::{info, warn};
use std::io::{self, BufRead, Write};

use super::menu::{render_menu, SessionState, EXIT_OPTION};
use crate::modules::accounts::{
    handle_access_code_reset, handle_account_listing, handle_account_opening, handle_login,
};
use crate::modules::config::BankConfig;
use crate::modules::storage::{save_bank_store, BankStore};
use crate::modules::transactions::{handle_deposit, handle_withdrawal, show_statement};
use crate::modules::users::handle_user_creation;
use crate::modules::utils::io::Console;
use crate::modules::utils::logging::{log_account_event, log_store_failure};

const INVALID_OPTION: &str =
    "Invalid operation, please select the desired operation again.";

/// Outcome of one menu selection
#[derive(Debug, PartialEq, Eq)]
enum Transition {
    Stay,
    Goto(SessionState),
    Exit,
}

/// Drive the menus until the user exits, then persist the store.
///
/// Closed input counts as choosing exit, including in the middle of a prompt.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut BankStore,
    config: &BankConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = SessionState::Unauthenticated;

    loop {
        let transition = match select_and_dispatch(console, store, config, state) {
            Ok(transition) => transition,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("Console input closed, leaving session");
                Transition::Exit
            }
            Err(e) => return Err(e.into()),
        };

        match transition {
            Transition::Stay => {}
            Transition::Goto(next) => state = next,
            Transition::Exit => {
                if let Err(e) = save_bank_store(store, &config.store_path) {
                    log_store_failure(&config.store_path, &e);
                    return Err(e.into());
                }
                info!(
                    "Saved {} users and {} accounts to {}",
                    store.users.len(),
                    store.accounts.len(),
                    config.store_path.display()
                );
                return Ok(());
            }
        }
    }
}

fn select_and_dispatch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut BankStore,
    config: &BankConfig,
    state: SessionState,
) -> io::Result<Transition> {
    let choice = console.prompt(&render_menu(&state))?;

    match state {
        SessionState::Unauthenticated => handle_guest_choice(console, store, config, &choice),
        SessionState::Authenticated(account_number) => {
            handle_account_choice(console, store, config, account_number, &choice)
        }
    }
}

fn handle_guest_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut BankStore,
    config: &BankConfig,
    choice: &str,
) -> io::Result<Transition> {
    match choice {
        "1" => handle_user_creation(console, &mut store.users)?,
        "2" => handle_account_opening(console, store, &config.branch_code)?,
        "3" => {
            if let Some(account_number) = handle_login(console, &store.accounts)? {
                return Ok(Transition::Goto(SessionState::Authenticated(account_number)));
            }
        }
        "4" => handle_account_listing(console, &store.accounts)?,
        EXIT_OPTION => return Ok(Transition::Exit),
        _ => console.say(INVALID_OPTION)?,
    }
    Ok(Transition::Stay)
}

fn handle_account_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut BankStore,
    config: &BankConfig,
    account_number: u32,
    choice: &str,
) -> io::Result<Transition> {
    // Exit and logout do not need the account itself
    match choice {
        EXIT_OPTION => return Ok(Transition::Exit),
        "5" => {
            log_account_event(account_number, "logout", None);
            console.say("\nLogout successful!")?;
            return Ok(Transition::Goto(SessionState::Unauthenticated));
        }
        _ => {}
    }

    let Some(account) = store.account_mut(account_number) else {
        warn!("Logged-in account {} vanished from the store", account_number);
        return Ok(Transition::Goto(SessionState::Unauthenticated));
    };

    match choice {
        "1" => handle_deposit(console, account)?,
        "2" => handle_withdrawal(console, account, &config.withdrawal_limits)?,
        "3" => show_statement(console, account)?,
        "4" => handle_access_code_reset(console, account)?,
        _ => console.say(INVALID_OPTION)?,
    }
    Ok(Transition::Stay)
}
