// src/modules/users/user_interface.rs
use std::io::{self, BufRead, Write};

use super::registry::{create_user, require_field, validate_national_id, UserError};
use super::User;
use crate::modules::utils::io::Console;
use crate::modules::utils::logging::log_registry_event;

/// Interactive registration; bails out at the first invalid answer
pub fn handle_user_creation<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    users: &mut Vec<User>,
) -> io::Result<()> {
    let national_id = console.prompt("Enter the national id (numbers only): ")?;
    if let Err(e) = validate_national_id(&national_id, users) {
        return report_rejection(console, &national_id, e);
    }

    // Ask field by field so the first blank answer ends the flow
    let name = console.prompt("Enter the full name: ")?;
    if let Err(e) = require_field(&name, UserError::EmptyName) {
        return report_rejection(console, &national_id, e);
    }
    let birth_date = console.prompt("Enter the birth date (dd-mm-yyyy): ")?;
    if let Err(e) = require_field(&birth_date, UserError::EmptyBirthDate) {
        return report_rejection(console, &national_id, e);
    }
    let address =
        console.prompt("Enter the address (street, number - district - city/state): ")?;

    match create_user(&national_id, &name, &birth_date, &address, users) {
        Ok(user) => {
            log_registry_event("create_user", &user.national_id, None);
            console.say("=== User created successfully! ===")
        }
        Err(e) => report_rejection(console, &national_id, e),
    }
}

fn report_rejection<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    national_id: &str,
    error: UserError,
) -> io::Result<()> {
    log_registry_event("create_user", national_id, Some(&error));
    console.say(format!("\n@@@ {} @@@", error))
}
