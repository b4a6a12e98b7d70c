// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{accounts, config, session, storage, transactions, users, utils};

// Re-export commonly used types
pub use modules::accounts::{AccessCode, Account};
pub use modules::config::BankConfig;
pub use modules::storage::BankStore;
pub use modules::transactions::{Statement, WithdrawalLimits};
pub use modules::users::User;

// Constants
pub const BRANCH_CODE: &str = "0001";
pub const STORE_FILE: &str = "data/bank_store.json";
pub const LOG_FILE: &str = "bank.log";
pub const STARTING_BALANCE: i64 = 500;
pub const WITHDRAWAL_LIMIT: i64 = 500;
pub const MAX_WITHDRAWALS: u32 = 3;
