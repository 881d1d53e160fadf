//! Transaction feed models.

use serde::{Deserialize, Serialize};

use crate::money::CurrencyAndAmount;

/// Whether money entered or left the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionDirection {
    In,
    Out,
}

/// Lifecycle status of a feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Upcoming,
    Pending,
    Reversed,
    Settled,
    Declined,
    Refunded,
    Retrying,
    AccountCheck,
    #[serde(other)]
    Other,
}

/// A single transaction from the account's category feed.
///
/// Only the fields needed for round-ups are modelled; everything else in the
/// upstream payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(default)]
    pub feed_item_uid: Option<String>,
    pub amount: CurrencyAndAmount,
    pub direction: TransactionDirection,
    pub status: TransactionStatus,
}

impl FeedItem {
    /// Settled money leaving the account. Only these are rounded up.
    pub fn is_settled_outgoing(&self) -> bool {
        self.direction == TransactionDirection::Out && self.status == TransactionStatus::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_item_deserializes_from_api_shape() {
        let json = r#"{
            "feedItemUid": "item-1",
            "categoryUid": "cat-1",
            "amount": { "currency": "GBP", "minorUnits": 1234 },
            "sourceAmount": { "currency": "GBP", "minorUnits": 1234 },
            "direction": "OUT",
            "status": "SETTLED",
            "counterPartyName": "Coffee Shop"
        }"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.feed_item_uid.as_deref(), Some("item-1"));
        assert_eq!(item.amount.minor_units, 1234);
        assert!(item.is_settled_outgoing());
    }

    #[test]
    fn test_unknown_status_is_not_settled() {
        let json = r#"{
            "amount": { "currency": "GBP", "minorUnits": 10 },
            "direction": "OUT",
            "status": "SOME_FUTURE_STATUS"
        }"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, TransactionStatus::Other);
        assert!(!item.is_settled_outgoing());
    }

    #[test]
    fn test_incoming_and_pending_are_not_settled_outgoing() {
        let incoming: FeedItem = serde_json::from_str(
            r#"{"amount":{"minorUnits":10},"direction":"IN","status":"SETTLED"}"#,
        )
        .unwrap();
        let pending: FeedItem = serde_json::from_str(
            r#"{"amount":{"minorUnits":10},"direction":"OUT","status":"PENDING"}"#,
        )
        .unwrap();
        assert!(!incoming.is_settled_outgoing());
        assert!(!pending.is_settled_outgoing());
    }
}
