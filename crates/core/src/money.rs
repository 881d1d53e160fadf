//! Currency amounts as exchanged with the banking API.

use serde::{Deserialize, Serialize};

/// An amount in minor units (pence, cents) of an ISO currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAndAmount {
    #[serde(default)]
    pub currency: String,
    pub minor_units: i64,
}

impl CurrencyAndAmount {
    pub fn new(currency: impl Into<String>, minor_units: i64) -> Self {
        Self {
            currency: currency.into(),
            minor_units,
        }
    }
}
