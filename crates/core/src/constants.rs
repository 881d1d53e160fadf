/// Name given to the savings goal created when an account has none.
pub const DEFAULT_SAVINGS_GOAL_NAME: &str = "New Savings Goal";

/// Target of the default savings goal, in minor units.
pub const DEFAULT_SAVINGS_GOAL_TARGET_MINOR_UNITS: i64 = 100_000;

/// Placeholder photo sent with the default savings goal.
pub const DEFAULT_SAVINGS_GOAL_PHOTO: &str = "string";

/// Transactions are rounded up to the next multiple of this many minor units.
pub const ROUND_UP_UNIT: i64 = 100;

/// Length of the round-up window, in days.
pub const ROUND_UP_WINDOW_DAYS: i64 = 7;
