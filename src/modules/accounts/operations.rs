use rand::Rng;
use rust_decimal::Decimal;

use super::model::{AccessCode, Account};
use crate::modules::transactions::Statement;
use crate::modules::users::{find_user, User};
use crate::modules::utils::currency::format_currency;
use crate::STARTING_BALANCE;

/// Errors raised by account opening and authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    UserNotFound(String),
    InvalidCredentials,
    InvalidAccessCode,
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::UserNotFound(national_id) => write!(
                f,
                "User {} not found, account opening aborted!",
                national_id
            ),
            // Same message whichever half of the credentials was wrong
            AccountError::InvalidCredentials => write!(f, "Invalid account number or access code!"),
            AccountError::InvalidAccessCode => write!(
                f,
                "Invalid access code! It must contain exactly 4 numeric digits."
            ),
        }
    }
}

impl std::error::Error for AccountError {}

/// Open an account for an already registered user.
///
/// `next_number` must be unused; the session passes `accounts.len() + 1`,
/// which holds as long as accounts are never removed.
pub fn open_account<R: Rng>(
    branch_code: &str,
    next_number: u32,
    national_id: &str,
    users: &[User],
    rng: &mut R,
) -> Result<Account, AccountError> {
    let national_id = national_id.trim();
    let owner = find_user(national_id, users)
        .ok_or_else(|| AccountError::UserNotFound(national_id.to_string()))?;

    Ok(Account {
        branch_code: branch_code.to_string(),
        account_number: next_number,
        owner: owner.clone(),
        balance: Decimal::from(STARTING_BALANCE),
        statement: Statement::new(),
        withdrawal_count: 0,
        access_code: AccessCode::generate(rng),
    })
}

/// Find the account matching both the typed number and access code
pub fn authenticate<'a>(
    account_number: &str,
    access_code: &str,
    accounts: &'a [Account],
) -> Result<&'a Account, AccountError> {
    accounts
        .iter()
        .find(|account| {
            account.account_number.to_string() == account_number
                && account.access_code.as_str() == access_code
        })
        .ok_or(AccountError::InvalidCredentials)
}

/// Replace the access code in place once the new one validates
pub fn reset_access_code(account: &mut Account, new_code: &str) -> Result<(), AccountError> {
    account.access_code = AccessCode::parse(new_code)?;
    Ok(())
}

/// Block printed for each account in the listing
pub fn render_account_summary(account: &Account) -> String {
    format!(
        "Branch:\t\t{}\nAccount:\t{}\nHolder:\t\t{}\nBalance:\t{}",
        account.branch_code,
        account.account_number,
        account.owner.name,
        format_currency(account.balance)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_users() -> Vec<User> {
        vec![User {
            name: "Carlos Lima".to_string(),
            birth_date: "10-10-1970".to_string(),
            national_id: "55566677788".to_string(),
            address: "Rua B, 20 - Boa Vista - Recife/PE".to_string(),
        }]
    }

    fn open(number: u32, users: &[User]) -> Account {
        let mut rng = StdRng::seed_from_u64(number as u64);
        open_account("0001", number, "55566677788", users, &mut rng).unwrap()
    }

    #[test]
    fn test_open_account_defaults() {
        let users = sample_users();
        let account = open(1, &users);

        assert_eq!(account.branch_code, "0001");
        assert_eq!(account.account_number, 1);
        assert_eq!(account.owner, users[0]);
        assert_eq!(account.balance, Decimal::from(500));
        assert!(account.statement.is_empty());
        assert_eq!(account.withdrawal_count, 0);
        assert_eq!(account.access_code.as_str().len(), 4);
    }

    #[test]
    fn test_open_account_for_unknown_user() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = open_account("0001", 1, "000", &sample_users(), &mut rng);
        assert_eq!(result, Err(AccountError::UserNotFound("000".to_string())));
    }

    #[test]
    fn test_authentication() {
        let users = sample_users();
        let mut first = open(1, &users);
        let mut second = open(2, &users);
        reset_access_code(&mut first, "1111").unwrap();
        reset_access_code(&mut second, "2222").unwrap();
        let accounts = vec![first, second];

        let found = authenticate("2", "2222", &accounts).unwrap();
        assert_eq!(found.account_number, 2);

        // Wrong code and wrong number look the same to the caller
        assert_eq!(
            authenticate("2", "1111", &accounts),
            Err(AccountError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("3", "2222", &accounts),
            Err(AccountError::InvalidCredentials)
        );
    }

    #[test]
    fn test_authentication_compares_number_as_text() {
        let users = sample_users();
        let mut account = open(1, &users);
        reset_access_code(&mut account, "1234").unwrap();
        let accounts = vec![account];

        assert!(authenticate("1", "1234", &accounts).is_ok());
        assert!(authenticate("01", "1234", &accounts).is_err());
    }

    #[test]
    fn test_reset_access_code() {
        let users = sample_users();
        let mut account = open(1, &users);
        let before = account.access_code.clone();

        assert_eq!(
            reset_access_code(&mut account, "12a4"),
            Err(AccountError::InvalidAccessCode)
        );
        assert_eq!(account.access_code, before);

        reset_access_code(&mut account, "0007").unwrap();
        assert_eq!(account.access_code.as_str(), "0007");
    }

    #[test]
    fn test_account_summary() {
        let users = sample_users();
        let summary = render_account_summary(&open(3, &users));
        assert!(summary.contains("0001"));
        assert!(summary.contains("Account:\t3"));
        assert!(summary.contains("Carlos Lima"));
        assert!(summary.contains("R$ 500,00"));
    }
}
