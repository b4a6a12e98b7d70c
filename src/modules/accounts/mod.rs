pub mod model;
pub mod operations;
mod user_interface;

pub use model::{AccessCode, Account};
pub use operations::{
    authenticate, open_account, render_account_summary, reset_access_code, AccountError,
};
pub use user_interface::{
    handle_access_code_reset, handle_account_listing, handle_account_opening, handle_login,
};
