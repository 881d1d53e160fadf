//! Models for the round-up workflow.

use std::fmt;

use roundup_core::{Error, Result};

/// A round-up request, validated once at the HTTP boundary.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundUpRequest {
    pub auth_token: String,
    pub date: String,
    pub savings_goal_uid: Option<String>,
}

impl RoundUpRequest {
    /// Builds a request from the raw inbound values.
    ///
    /// Blank values count as missing. The auth token is checked before the
    /// date, so a request missing both reports the auth token.
    pub fn from_parts(
        auth_token: Option<String>,
        date: Option<String>,
        savings_goal_uid: Option<String>,
    ) -> Result<Self> {
        let auth_token = non_blank(auth_token).ok_or_else(|| Error::input("No auth parameter"))?;
        let date = non_blank(date).ok_or_else(|| Error::input("No date parameter"))?;
        Ok(Self {
            auth_token,
            date,
            savings_goal_uid: non_blank(savings_goal_uid),
        })
    }
}

// Keep the bearer token out of logs.
impl fmt::Debug for RoundUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundUpRequest")
            .field("auth_token", &"<redacted>")
            .field("date", &self.date)
            .field("savings_goal_uid", &self.savings_goal_uid)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Upstream response to an add-money request, passed back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferResult {
    pub status: u16,
    pub body: serde_json::Value,
}

impl TransferResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of a completed round-up workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundUpOutcome {
    /// Round-up amount, in minor units of the account currency
    pub round_up: i64,
    pub savings_goal_uid: String,
    pub transfer: TransferResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_requires_auth_then_date() {
        let err = RoundUpRequest::from_parts(None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "No auth parameter");

        let err = RoundUpRequest::from_parts(Some("token".into()), None, None).unwrap_err();
        assert_eq!(err.to_string(), "No date parameter");

        let err = RoundUpRequest::from_parts(Some("  ".into()), Some("2023-10-20".into()), None)
            .unwrap_err();
        assert_eq!(err.to_string(), "No auth parameter");
    }

    #[test]
    fn test_request_goal_uid_is_optional() {
        let request =
            RoundUpRequest::from_parts(Some("token".into()), Some("2023-10-20".into()), None)
                .unwrap();
        assert_eq!(request.savings_goal_uid, None);

        let request = RoundUpRequest::from_parts(
            Some("token".into()),
            Some("2023-10-20".into()),
            Some("".into()),
        )
        .unwrap();
        assert_eq!(request.savings_goal_uid, None);

        let request = RoundUpRequest::from_parts(
            Some("token".into()),
            Some("2023-10-20".into()),
            Some("goal-1".into()),
        )
        .unwrap();
        assert_eq!(request.savings_goal_uid.as_deref(), Some("goal-1"));
    }

    #[test]
    fn test_request_debug_redacts_token() {
        let request =
            RoundUpRequest::from_parts(Some("secret".into()), Some("2023-10-20".into()), None)
                .unwrap();
        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("2023-10-20"));
    }

    #[test]
    fn test_transfer_result_success() {
        let ok = TransferResult {
            status: 200,
            body: serde_json::json!({"success": true}),
        };
        let rejected = TransferResult {
            status: 400,
            body: serde_json::json!({"success": false}),
        };
        assert!(ok.is_success());
        assert!(!rejected.is_success());
    }
}
