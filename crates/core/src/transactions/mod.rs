//! Transactions module - feed items returned by the banking API.

mod transactions_model;

pub use transactions_model::{FeedItem, TransactionDirection, TransactionStatus};
