// Declare all modules
pub mod accounts;
pub mod config;
pub mod session;
pub mod storage;
pub mod transactions;
pub mod users;
pub mod utils;

// No re-exports here as they're handled in lib.rs
