use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::operations::AccountError;
use crate::modules::transactions::Statement;
use crate::modules::users::User;

/// Four ASCII digits, zero-padded
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct AccessCode(String);

impl AccessCode {
    /// Validate a typed or stored access code
    pub fn parse(code: &str) -> Result<Self, AccountError> {
        if code.len() == 4 && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(code.to_string()))
        } else {
            Err(AccountError::InvalidAccessCode)
        }
    }

    /// Draw a code uniformly from 0000..=9999
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self(format!("{:04}", rng.gen_range(0..=9999u16)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccessCode {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccessCode> for String {
    fn from(code: AccessCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for AccessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bank account with an embedded copy of its holder
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub branch_code: String,
    pub account_number: u32,
    pub owner: User,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    pub statement: Statement,
    pub withdrawal_count: u32,
    pub access_code: AccessCode,
}
