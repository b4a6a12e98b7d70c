use rust_decimal::Decimal;

use super::statement::Statement;
use crate::modules::utils::currency::format_currency;
use crate::{MAX_WITHDRAWALS, WITHDRAWAL_LIMIT};

/// Why a deposit or withdrawal was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionError {
    InvalidAmount,
    InsufficientFunds,
    ExceedsLimit,
    ExceedsWithdrawalCount,
}

impl std::fmt::Display for TransactionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionError::InvalidAmount => {
                write!(f, "Operation failed! The amount entered is invalid.")
            }
            TransactionError::InsufficientFunds => {
                write!(f, "Operation failed! You do not have enough balance.")
            }
            TransactionError::ExceedsLimit => {
                write!(f, "Operation failed! The withdrawal amount exceeds the limit.")
            }
            TransactionError::ExceedsWithdrawalCount => {
                write!(f, "Operation failed! Maximum number of withdrawals exceeded.")
            }
        }
    }
}

impl std::error::Error for TransactionError {}

/// Kind of balance movement recorded on the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Deposit,
    Withdrawal,
}

impl Movement {
    pub fn label(self) -> &'static str {
        match self {
            Movement::Deposit => "Deposit",
            Movement::Withdrawal => "Withdrawal",
        }
    }

    fn statement_line(self, amount: Decimal) -> String {
        format!("{}:\t{}", self.label(), format_currency(amount))
    }
}

/// Caps applied to every withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalLimits {
    pub per_transaction: Decimal,
    pub max_withdrawals: u32, // Lifetime count, never rolled over
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self {
            per_transaction: Decimal::from(WITHDRAWAL_LIMIT),
            max_withdrawals: MAX_WITHDRAWALS,
        }
    }
}

/// Credit `amount`, returning the new balance and statement
pub fn deposit(
    balance: Decimal,
    amount: Decimal,
    statement: &Statement,
) -> Result<(Decimal, Statement), TransactionError> {
    if amount <= Decimal::ZERO {
        return Err(TransactionError::InvalidAmount);
    }
    // A credit the balance cannot hold is refused like any other bad amount
    let credited = balance
        .checked_add(amount)
        .ok_or(TransactionError::InvalidAmount)?;

    Ok((credited, statement.with_line(Movement::Deposit.statement_line(amount))))
}

/// Debit `amount` if every guard passes.
///
/// Guards run in a fixed order and the first one that trips is reported:
/// non-positive amount, insufficient balance, per-transaction cap, then the
/// withdrawal count.
pub fn withdraw(
    balance: Decimal,
    amount: Decimal,
    statement: &Statement,
    withdrawal_count: u32,
    limits: &WithdrawalLimits,
) -> Result<(Decimal, Statement, u32), TransactionError> {
    if amount <= Decimal::ZERO {
        return Err(TransactionError::InvalidAmount);
    }
    if amount > balance {
        return Err(TransactionError::InsufficientFunds);
    }
    if amount > limits.per_transaction {
        return Err(TransactionError::ExceedsLimit);
    }
    if withdrawal_count >= limits.max_withdrawals {
        return Err(TransactionError::ExceedsWithdrawalCount);
    }

    Ok((
        balance - amount,
        statement.with_line(Movement::Withdrawal.statement_line(amount)),
        withdrawal_count + 1,
    ))
}
