//! Round-up module - the date window a round-up covers and the round-up arithmetic.

mod calculator;
mod date_window;

pub use calculator::{compute_round_up, round_up_amount};
pub use date_window::{resolve_window, DateWindow};
