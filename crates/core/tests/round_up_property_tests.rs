//! Property-based tests for the round-up calculator and date window.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::NaiveDate;
use proptest::prelude::*;
use roundup_core::money::CurrencyAndAmount;
use roundup_core::round_up::{compute_round_up, resolve_window, round_up_amount};
use roundup_core::transactions::{FeedItem, TransactionDirection, TransactionStatus};
use roundup_core::Error;

// =============================================================================
// Generators
// =============================================================================

fn arb_direction() -> impl Strategy<Value = TransactionDirection> {
    prop_oneof![Just(TransactionDirection::In), Just(TransactionDirection::Out)]
}

fn arb_status() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        Just(TransactionStatus::Settled),
        Just(TransactionStatus::Pending),
        Just(TransactionStatus::Declined),
        Just(TransactionStatus::Reversed),
        Just(TransactionStatus::Refunded),
        Just(TransactionStatus::Upcoming),
        Just(TransactionStatus::Other),
    ]
}

fn arb_feed_item() -> impl Strategy<Value = FeedItem> {
    (0i64..10_000_000, arb_direction(), arb_status()).prop_map(|(minor_units, direction, status)| {
        FeedItem {
            feed_item_uid: None,
            amount: CurrencyAndAmount::new("GBP", minor_units),
            direction,
            status,
        }
    })
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Exact multiples of 100 never contribute.
    #[test]
    fn prop_multiples_of_100_contribute_nothing(k in 0i64..1_000_000_000) {
        prop_assert_eq!(round_up_amount(k * 100), 0);
    }

    /// Anything else contributes exactly the distance to the next 100.
    #[test]
    fn prop_contribution_is_distance_to_next_hundred(x in 0i64..i64::MAX) {
        prop_assume!(x % 100 != 0);
        prop_assert_eq!(round_up_amount(x), 100 - (x % 100));
    }

    /// Matches the ceiling-division definition wherever it cannot overflow.
    #[test]
    fn prop_matches_ceiling_division(x in 0i64..1_000_000_000_000) {
        prop_assert_eq!(round_up_amount(x), (x + 99) / 100 * 100 - x);
    }

    /// The total only counts settled outgoing items and is never negative.
    #[test]
    fn prop_total_counts_only_settled_outgoing(items in proptest::collection::vec(arb_feed_item(), 0..50)) {
        let expected: i64 = items
            .iter()
            .filter(|t| t.direction == TransactionDirection::Out && t.status == TransactionStatus::Settled)
            .map(|t| round_up_amount(t.amount.minor_units))
            .sum();
        let total = compute_round_up(&items);
        prop_assert_eq!(total, expected);
        prop_assert!(total >= 0);
        prop_assert!(total <= 99 * items.len() as i64);
    }

    /// Lists without settled outgoing items round up to zero.
    #[test]
    fn prop_no_settled_outgoing_is_zero(items in proptest::collection::vec(arb_feed_item(), 0..50)) {
        let filtered: Vec<FeedItem> = items
            .into_iter()
            .filter(|t| !t.is_settled_outgoing())
            .collect();
        prop_assert_eq!(compute_round_up(&filtered), 0);
    }

    /// Every well-formed date yields a window exactly seven days long.
    #[test]
    fn prop_window_is_seven_days(date in arb_date()) {
        let input = date.format("%Y-%m-%d").to_string();
        let window = resolve_window(&input).unwrap();
        prop_assert_eq!(window.start, date);
        prop_assert_eq!((window.end - window.start).num_days(), 7);
        prop_assert!(window.start_timestamp().ends_with("T00:00:00.000Z"));
        prop_assert!(window.end_timestamp().ends_with("T00:00:00.000Z"));
    }

    /// Inputs that are not three dash-separated numeric segments are rejected.
    #[test]
    fn prop_slash_separated_dates_are_rejected(date in arb_date()) {
        let input = date.format("%Y/%m/%d").to_string();
        let is_date_format_error = matches!(resolve_window(&input), Err(Error::DateFormat(_)));
        prop_assert!(is_date_format_error);
    }
}
