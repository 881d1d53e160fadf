//! Traits defining the contract with the banking API.

use async_trait::async_trait;

use super::models::TransferResult;
use roundup_core::accounts::Account;
use roundup_core::goals::SavingsGoal;
use roundup_core::round_up::DateWindow;
use roundup_core::transactions::FeedItem;
use roundup_core::Result;

/// Trait for the banking API calls a round-up needs.
///
/// Implementations are bound to one bearer token, so every call acts on
/// behalf of the user who made the request. None of these calls retry.
#[async_trait]
pub trait BankingApiClient: Send + Sync {
    /// Fetch the user's accounts.
    ///
    /// A non-success status is reported as `Error::Account` with the upstream
    /// status and body preserved.
    async fn fetch_accounts(&self) -> Result<Vec<Account>>;

    /// Fetch the feed items of one account category within `window`
    async fn fetch_transactions(
        &self,
        account_uid: &str,
        category_uid: &str,
        window: &DateWindow,
    ) -> Result<Vec<FeedItem>>;

    /// Fetch the savings goals of an account
    async fn fetch_savings_goals(&self, account_uid: &str) -> Result<Vec<SavingsGoal>>;

    /// Create the placeholder savings goal. The new goal's uid is not
    /// returned; list the goals again to find it.
    async fn create_default_savings_goal(&self, account_uid: &str, currency: &str) -> Result<()>;

    /// Move `minor_units` into a savings goal.
    ///
    /// Every call uses a new transfer token, so calling this twice moves the
    /// money twice. The upstream response is returned whatever its status.
    async fn transfer_to_savings_goal(
        &self,
        account_uid: &str,
        savings_goal_uid: &str,
        currency: &str,
        minor_units: i64,
    ) -> Result<TransferResult>;
}
