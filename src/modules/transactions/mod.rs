pub mod operations;
pub mod statement;
mod user_interface;

pub use operations::{deposit, withdraw, Movement, TransactionError, WithdrawalLimits};
pub use statement::{render_statement, Statement};
pub use user_interface::{handle_deposit, handle_withdrawal, show_statement};
