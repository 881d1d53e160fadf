//! Round-up orchestrator.
//!
//! Runs the round-up workflow against a [`BankingApiClient`]:
//! account -> transactions -> round-up -> savings goal -> transfer.
//! Every step needs the previous step's output, so the calls are strictly
//! sequential. The first failure ends the run; nothing done before it is
//! rolled back and nothing is retried.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

use super::models::{RoundUpOutcome, RoundUpRequest};
use super::traits::BankingApiClient;
use roundup_core::accounts::{find_primary_account, PrimaryAccount};
use roundup_core::goals::{find_savings_goal, SavingsGoal};
use roundup_core::round_up::{compute_round_up, resolve_window};
use roundup_core::{Error, Result};

/// Furthest point a round-up run has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundUpStage {
    InputsParsed,
    AccountResolved,
    TransactionsFetched,
    RoundUpComputed,
    GoalResolved,
    Transferred,
}

impl fmt::Display for RoundUpStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundUpStage::InputsParsed => "inputs parsed",
            RoundUpStage::AccountResolved => "account resolved",
            RoundUpStage::TransactionsFetched => "transactions fetched",
            RoundUpStage::RoundUpComputed => "round-up computed",
            RoundUpStage::GoalResolved => "goal resolved",
            RoundUpStage::Transferred => "transferred",
        };
        f.write_str(name)
    }
}

/// Orchestrates a single round-up.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(StarlingApiClient::new(DEFAULT_STARLING_API_URL, &request.auth_token)?);
/// let outcome = RoundUpOrchestrator::new(client).run(&request).await?;
/// ```
pub struct RoundUpOrchestrator {
    client: Arc<dyn BankingApiClient>,
}

impl RoundUpOrchestrator {
    /// Create a new round-up orchestrator.
    pub fn new(client: Arc<dyn BankingApiClient>) -> Self {
        Self { client }
    }

    /// Run the whole workflow for `request`.
    ///
    /// On success the outcome carries the upstream transfer response, which
    /// may itself report a failure (e.g. insufficient funds).
    pub async fn run(&self, request: &RoundUpRequest) -> Result<RoundUpOutcome> {
        info!("[RoundUp] Starting round-up for week of {}", request.date);

        let mut stage = RoundUpStage::InputsParsed;
        let result = self.run_internal(request, &mut stage).await;

        match &result {
            Ok(outcome) if !outcome.transfer.is_success() => warn!(
                "[RoundUp] Transfer of {} minor units to goal {} rejected with status {}",
                outcome.round_up, outcome.savings_goal_uid, outcome.transfer.status
            ),
            Ok(outcome) => info!(
                "[RoundUp] Completed: {} minor units to goal {} (upstream status {})",
                outcome.round_up, outcome.savings_goal_uid, outcome.transfer.status
            ),
            Err(err) => warn!("[RoundUp] Failed after '{}': {}", stage, err),
        }

        result
    }

    async fn run_internal(
        &self,
        request: &RoundUpRequest,
        stage: &mut RoundUpStage,
    ) -> Result<RoundUpOutcome> {
        // Step 1: primary account
        let account = self.resolve_account().await?;
        *stage = RoundUpStage::AccountResolved;

        // Step 2: transactions in the requested window
        let window = resolve_window(&request.date)?;
        let transactions = self
            .client
            .fetch_transactions(&account.account_uid, &account.category_uid, &window)
            .await?;
        *stage = RoundUpStage::TransactionsFetched;

        // Step 3: round-up
        let round_up = compute_round_up(&transactions);
        info!(
            "[RoundUp] Round-up of {} minor units over {} transactions",
            round_up,
            transactions.len()
        );
        *stage = RoundUpStage::RoundUpComputed;

        // Step 4: savings goal
        let savings_goal_uid = self
            .resolve_savings_goal(&account, request.savings_goal_uid.as_deref())
            .await?;
        *stage = RoundUpStage::GoalResolved;

        // Step 5: transfer, zero included
        let transfer = self
            .client
            .transfer_to_savings_goal(
                &account.account_uid,
                &savings_goal_uid,
                &account.currency,
                round_up,
            )
            .await?;
        *stage = RoundUpStage::Transferred;

        Ok(RoundUpOutcome {
            round_up,
            savings_goal_uid,
            transfer,
        })
    }

    async fn resolve_account(&self) -> Result<PrimaryAccount> {
        let accounts = self.client.fetch_accounts().await?;
        let account = find_primary_account(&accounts)?;
        debug!(
            "[RoundUp] Using primary account {} ({})",
            account.account_uid, account.currency
        );
        Ok(account)
    }

    /// Validates the requested goal, or picks the first goal of the account,
    /// creating a default one when the account has none.
    async fn resolve_savings_goal(
        &self,
        account: &PrimaryAccount,
        requested: Option<&str>,
    ) -> Result<String> {
        let goals = self.client.fetch_savings_goals(&account.account_uid).await?;

        if let Some(savings_goal_uid) = requested {
            let goal = find_savings_goal(&goals, savings_goal_uid)?;
            return Ok(goal.savings_goal_uid.clone());
        }

        if let Some(goal) = goals.first() {
            debug!("[RoundUp] Using first savings goal {}", goal.savings_goal_uid);
            return Ok(goal.savings_goal_uid.clone());
        }

        info!("[RoundUp] No savings goal yet, creating the default goal");
        self.client
            .create_default_savings_goal(&account.account_uid, &account.currency)
            .await?;

        // Assumes the new goal is listed first. The API does not promise an order.
        let goals = self.client.fetch_savings_goals(&account.account_uid).await?;
        goals
            .first()
            .map(|goal: &SavingsGoal| goal.savings_goal_uid.clone())
            .ok_or_else(|| Error::upstream(502, "Default savings goal was not listed after creation"))
    }
}
