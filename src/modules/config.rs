use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

use crate::modules::transactions::WithdrawalLimits;
use crate::{BRANCH_CODE, LOG_FILE, STORE_FILE};

/// Runtime settings for one session
#[derive(Debug, Clone, PartialEq)]
pub struct BankConfig {
    pub store_path: PathBuf,
    pub log_file: PathBuf,
    pub branch_code: String,
    pub withdrawal_limits: WithdrawalLimits,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(STORE_FILE),
            log_file: PathBuf::from(LOG_FILE),
            branch_code: BRANCH_CODE.to_string(),
            withdrawal_limits: WithdrawalLimits::default(),
        }
    }
}

/// Command-line definition; every flag is optional
pub fn build_cli() -> Command {
    Command::new("branch-teller")
        .about("Interactive single-branch banking simulator")
        .arg(
            Arg::new("store")
                .long("store")
                .help("Path of the JSON store file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File that receives the application log")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

impl BankConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut config = Self::default();
        if let Some(store) = matches.get_one::<PathBuf>("store") {
            config.store_path = store.clone();
        }
        if let Some(log_file) = matches.get_one::<PathBuf>("log-file") {
            config.log_file = log_file.clone();
        }
        config
    }

    /// Parse the process arguments (exits on `--help` or bad flags)
    pub fn from_args() -> Self {
        Self::from_matches(&build_cli().get_matches())
    }
}
