pub mod currency;
pub mod io;
pub mod logging;

pub use currency::{format_currency, parse_amount};
pub use io::Console;
pub use logging::{
    initialize_logging, log_account_event, log_login_attempt, log_movement, log_registry_event,
    log_store_failure,
};
