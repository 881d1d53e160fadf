//! Core error types for the round-up service.
//!
//! Every step of the round-up workflow reports failures through [`Error`].
//! The HTTP layer maps each variant to exactly one status/body pair, so
//! variants carry whatever that mapping needs (e.g. the upstream body for
//! account failures) rather than a pre-rendered message.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the round-up workflow.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing from the inbound request.
    #[error("{0}")]
    Input(String),

    /// The requested date is not a valid `YYYY-MM-DD` calendar date.
    #[error("Date is not in YYYY-MM-DD")]
    DateFormat(String),

    /// The caller supplied a savings goal uid the account does not own.
    #[error("SavingsGoalUid is invalid.")]
    GoalNotFound(String),

    /// The account list request was rejected upstream (usually a bad token).
    /// The upstream status and JSON body are passed back to the caller as-is.
    #[error("Authorization denied ({status})")]
    Account {
        status: u16,
        body: serde_json::Value,
    },

    /// The account list contains no PRIMARY account.
    #[error("No primary account found.")]
    NoPrimaryAccount,

    /// Any other banking API request returned a non-success status.
    #[error("Banking API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The banking API could not be reached.
    #[error("Banking API request failed: {0}")]
    Transport(String),

    /// The banking API answered with a body we could not decode.
    #[error("Failed to decode banking API response: {0}")]
    Decode(String),
}

impl Error {
    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Create an upstream error from status and message
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}
