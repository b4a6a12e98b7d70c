pub mod store;

pub use store::{load_bank_store, save_bank_store, BankStore, StoreError};
