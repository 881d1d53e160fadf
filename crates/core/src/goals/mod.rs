//! Savings goals module - domain models.

mod goals_model;

pub use goals_model::{find_savings_goal, NewSavingsGoal, SavingsGoal};
