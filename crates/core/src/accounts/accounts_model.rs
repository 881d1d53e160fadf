//! Account domain models.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Kind of bank account. Only [`AccountType::Primary`] takes part in round-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Primary,
    Additional,
    Loan,
    FixedTermDeposit,
    /// Any account type this service does not know about
    #[default]
    #[serde(other)]
    Other,
}

/// A bank account as listed by `GET /accounts`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_uid: String,
    #[serde(default)]
    pub account_type: AccountType,
    pub default_category: String,
    pub currency: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The account a round-up is computed for and paid from.
///
/// Built once from the account list and then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryAccount {
    pub account_uid: String,
    pub category_uid: String,
    pub currency: String,
}

impl From<&Account> for PrimaryAccount {
    fn from(account: &Account) -> Self {
        Self {
            account_uid: account.account_uid.clone(),
            category_uid: account.default_category.clone(),
            currency: account.currency.clone(),
        }
    }
}

/// Selects the first PRIMARY account of the list.
pub fn find_primary_account(accounts: &[Account]) -> Result<PrimaryAccount> {
    accounts
        .iter()
        .find(|a| a.account_type == AccountType::Primary)
        .map(PrimaryAccount::from)
        .ok_or(Error::NoPrimaryAccount)
}
