//! Savings goal domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SAVINGS_GOAL_NAME, DEFAULT_SAVINGS_GOAL_PHOTO, DEFAULT_SAVINGS_GOAL_TARGET_MINOR_UNITS,
};
use crate::money::CurrencyAndAmount;
use crate::{Error, Result};

/// A savings goal (space) that round-ups are transferred into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub savings_goal_uid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target: Option<CurrencyAndAmount>,
    #[serde(default)]
    pub total_saved: Option<CurrencyAndAmount>,
    #[serde(default)]
    pub saved_percentage: Option<i64>,
}

/// Request body for creating a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub name: String,
    pub currency: String,
    pub target: CurrencyAndAmount,
    pub base64_encoded_photo: String,
}

impl NewSavingsGoal {
    /// The placeholder goal created for accounts that have no goal yet.
    pub fn default_for_currency(currency: &str) -> Self {
        Self {
            name: DEFAULT_SAVINGS_GOAL_NAME.to_string(),
            currency: currency.to_string(),
            target: CurrencyAndAmount::new(currency, DEFAULT_SAVINGS_GOAL_TARGET_MINOR_UNITS),
            base64_encoded_photo: DEFAULT_SAVINGS_GOAL_PHOTO.to_string(),
        }
    }
}

/// Looks up a caller-supplied goal uid in the account's goal list.
pub fn find_savings_goal<'a>(goals: &'a [SavingsGoal], savings_goal_uid: &str) -> Result<&'a SavingsGoal> {
    goals
        .iter()
        .find(|g| g.savings_goal_uid == savings_goal_uid)
        .ok_or_else(|| Error::GoalNotFound(savings_goal_uid.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(uid: &str) -> SavingsGoal {
        SavingsGoal {
            savings_goal_uid: uid.to_string(),
            name: None,
            target: None,
            total_saved: None,
            saved_percentage: None,
        }
    }

    #[test]
    fn test_default_goal_body() {
        let body = serde_json::to_value(NewSavingsGoal::default_for_currency("GBP")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "New Savings Goal",
                "currency": "GBP",
                "target": { "currency": "GBP", "minorUnits": 100000 },
                "base64EncodedPhoto": "string"
            })
        );
    }

    #[test]
    fn test_find_savings_goal() {
        let goals = vec![goal("a"), goal("b")];
        assert_eq!(find_savings_goal(&goals, "b").unwrap().savings_goal_uid, "b");

        match find_savings_goal(&goals, "missing") {
            Err(Error::GoalNotFound(uid)) => assert_eq!(uid, "missing"),
            other => panic!("expected GoalNotFound, got {:?}", other),
        }
    }
}
