// src/modules/transactions/user_interface.rs
use std::io::{self, BufRead, Write};

use super::operations::{deposit, withdraw, Movement, TransactionError, WithdrawalLimits};
use super::statement::render_statement;
use crate::modules::accounts::Account;
use crate::modules::utils::currency::parse_amount;
use crate::modules::utils::io::Console;
use crate::modules::utils::logging::log_movement;

pub fn handle_deposit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut Account,
) -> io::Result<()> {
    let input = console.prompt("Enter the deposit amount: ")?;
    let result = parse_amount(&input)
        .ok_or(TransactionError::InvalidAmount)
        .and_then(|amount| deposit(account.balance, amount, &account.statement));

    match result {
        Ok((balance, statement)) => {
            account.balance = balance;
            account.statement = statement;
            report(console, account, Movement::Deposit, None)
        }
        Err(e) => report(console, account, Movement::Deposit, Some(e)),
    }
}

pub fn handle_withdrawal<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut Account,
    limits: &WithdrawalLimits,
) -> io::Result<()> {
    let input = console.prompt("Enter the withdrawal amount: ")?;
    let result = parse_amount(&input)
        .ok_or(TransactionError::InvalidAmount)
        .and_then(|amount| {
            withdraw(
                account.balance,
                amount,
                &account.statement,
                account.withdrawal_count,
                limits,
            )
        });

    match result {
        Ok((balance, statement, withdrawal_count)) => {
            account.balance = balance;
            account.statement = statement;
            account.withdrawal_count = withdrawal_count;
            report(console, account, Movement::Withdrawal, None)
        }
        Err(e) => report(console, account, Movement::Withdrawal, Some(e)),
    }
}

pub fn show_statement<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &Account,
) -> io::Result<()> {
    console.say(render_statement(account.balance, &account.statement))
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &Account,
    movement: Movement,
    error: Option<TransactionError>,
) -> io::Result<()> {
    log_movement(account.account_number, movement, error);
    match error {
        None => console.say(format!(
            "\n=== {} completed successfully! ===",
            movement.label()
        )),
        Some(e) => console.say(format!("\n@@@ {} @@@", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::accounts::AccessCode;
    use crate::modules::transactions::Statement;
    use crate::modules::users::User;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn fresh_account() -> Account {
        Account {
            branch_code: "0001".to_string(),
            account_number: 1,
            owner: User {
                name: "Elisa Melo".to_string(),
                birth_date: "12-12-2000".to_string(),
                national_id: "44433322211".to_string(),
                address: "Rua D, 4".to_string(),
            },
            balance: Decimal::from(500),
            statement: Statement::new(),
            withdrawal_count: 0,
            access_code: AccessCode::parse("1234").unwrap(),
        }
    }

    fn run_deposit(script: &str, account: &mut Account) -> String {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        handle_deposit(&mut console, account).unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    fn run_withdrawal(script: &str, account: &mut Account) -> String {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        handle_withdrawal(&mut console, account, &WithdrawalLimits::default()).unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_deposit_flow() {
        let mut account = fresh_account();
        let text = run_deposit("100,25\n", &mut account);

        assert!(text.contains("Deposit completed successfully"));
        assert_eq!(account.balance, Decimal::new(60025, 2));
        assert_eq!(account.statement.lines(), ["Deposit:\tR$ 100,25"]);
    }

    #[test]
    fn test_non_numeric_amount_is_invalid() {
        let mut account = fresh_account();
        let text = run_deposit("lots\n", &mut account);

        assert!(text.contains("amount entered is invalid"));
        assert_eq!(account.balance, Decimal::from(500));
        assert!(account.statement.is_empty());
    }

    #[test]
    fn test_withdrawal_flow_reports_its_own_label() {
        let mut account = fresh_account();
        let text = run_withdrawal("50\n", &mut account);

        assert!(text.contains("=== Withdrawal completed successfully! ==="));
        assert!(!text.contains("Deposit"));
        assert_eq!(account.balance, Decimal::from(450));
        assert_eq!(account.statement.lines(), ["Withdrawal:\tR$ 50,00"]);
    }

    #[test]
    fn test_sub_cent_deposit_is_invalid() {
        let mut account = fresh_account();
        let text = run_deposit("0,001\n", &mut account);

        assert!(text.contains("amount entered is invalid"));
        assert_eq!(account.balance, Decimal::from(500));
        assert!(account.statement.is_empty());
    }

    #[test]
    fn test_fourth_withdrawal_is_refused() {
        let mut account = fresh_account();
        for _ in 0..3 {
            run_withdrawal("10\n", &mut account);
        }
        let text = run_withdrawal("10\n", &mut account);

        assert!(text.contains("Maximum number of withdrawals exceeded"));
        assert_eq!(account.withdrawal_count, 3);
        assert_eq!(account.balance, Decimal::from(470));
        assert_eq!(account.statement.len(), 3);
    }

    #[test]
    fn test_statement_display() {
        let mut account = fresh_account();
        run_deposit("1000\n", &mut account);

        let mut console = Console::new(Cursor::new(String::new()), Vec::new());
        show_statement(&mut console, &account).unwrap();
        let text = String::from_utf8(console.into_writer()).unwrap();

        assert!(text.contains("Deposit:\tR$ 1.000,00"));
        assert!(text.contains("Balance:\tR$ 1.500,00"));
    }
}
