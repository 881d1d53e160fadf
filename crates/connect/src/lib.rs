//! Round-up Connect - the banking API client and the round-up workflow.
//!
//! This crate talks to the Starling Bank API on behalf of a user and drives
//! the round-up of their weekly spending into a savings goal.

pub mod banking;
pub mod client;

// Re-export commonly used types
pub use banking::{
    BankingApiClient, RoundUpOrchestrator, RoundUpOutcome, RoundUpRequest, RoundUpStage,
    TransferResult,
};
pub use client::{StarlingApiClient, DEFAULT_STARLING_API_URL};
