//! Round-up core - domain entities and the round-up arithmetic.
//!
//! This crate knows nothing about HTTP. It defines the banking models the
//! round-up workflow passes around, the date window resolution, the round-up
//! calculator and the error type shared by the other crates.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod money;
pub mod round_up;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
