use log::info;

use branch_teller::config::BankConfig;
use branch_teller::session::run_session;
use branch_teller::storage::load_bank_store;
use branch_teller::utils::{initialize_logging, log_store_failure, Console};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BankConfig::from_args();
    initialize_logging(&config.log_file)?;

    // A malformed store is fatal; a missing one starts the bank empty
    let mut store = load_bank_store(&config.store_path).map_err(|e| {
        log_store_failure(&config.store_path, &e);
        e
    })?;
    info!(
        "Loaded {} users and {} accounts from {}",
        store.users.len(),
        store.accounts.len(),
        config.store_path.display()
    );

    let mut console = Console::stdio();
    run_session(&mut console, &mut store, &config)?;

    info!("Session finished");
    Ok(())
}
