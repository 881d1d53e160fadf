//! Round-up arithmetic. Integer only; amounts are minor units.

use crate::constants::ROUND_UP_UNIT;
use crate::transactions::FeedItem;

/// Amount needed to bring `minor_units` up to the next multiple of 100.
///
/// Same result as `(x + 99) / 100 * 100 - x` for `x >= 0`, without the
/// overflow near `i64::MAX`. Exact multiples and non-positive amounts give 0.
pub fn round_up_amount(minor_units: i64) -> i64 {
    if minor_units <= 0 {
        return 0;
    }
    match minor_units % ROUND_UP_UNIT {
        0 => 0,
        remainder => ROUND_UP_UNIT - remainder,
    }
}

/// Total round-up over the settled outgoing transactions of `transactions`.
pub fn compute_round_up(transactions: &[FeedItem]) -> i64 {
    transactions
        .iter()
        .filter(|t| t.is_settled_outgoing())
        .map(|t| round_up_amount(t.amount.minor_units))
        .sum()
}
