//! Accounts module - domain models.

mod accounts_model;

pub use accounts_model::{find_primary_account, Account, AccountType, PrimaryAccount};
