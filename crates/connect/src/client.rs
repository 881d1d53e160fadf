//! HTTP client for the Starling Bank public API (v2).
//!
//! One client is built per round-up request, bound to the caller's bearer
//! token. The underlying `reqwest::Client` can be shared between requests so
//! connections are pooled.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::banking::{BankingApiClient, TransferResult};
use roundup_core::accounts::Account;
use roundup_core::goals::{NewSavingsGoal, SavingsGoal};
use roundup_core::money::CurrencyAndAmount;
use roundup_core::round_up::DateWindow;
use roundup_core::transactions::FeedItem;
use roundup_core::{Error, Result};

/// Default base URL of the Starling sandbox API.
pub const DEFAULT_STARLING_API_URL: &str = "https://api-sandbox.starlingbank.com/api/v2";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing Starling API responses)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ApiAccountsResponse {
    #[serde(default)]
    accounts: Vec<Account>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiFeedItemsResponse {
    #[serde(default)]
    feed_items: Vec<FeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSavingsGoalsResponse {
    #[serde(default)]
    savings_goal_list: Vec<SavingsGoal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCreateGoalResponse {
    #[serde(default)]
    savings_goal_uid: Option<String>,
}

#[derive(Debug, Serialize)]
struct ApiTopUpRequest {
    amount: CurrencyAndAmount,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

impl ApiErrorResponse {
    fn best_message(self) -> Option<String> {
        self.error_description
            .or(self.message)
            .or_else(|| self.errors.into_iter().find_map(|e| e.message))
            .or(self.error)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Starling API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the Starling API, acting for a single bearer token.
///
/// # Example
///
/// ```ignore
/// let client = StarlingApiClient::new(DEFAULT_STARLING_API_URL, "user-token")?;
/// let accounts = client.fetch_accounts().await?;
/// ```
#[derive(Debug, Clone)]
pub struct StarlingApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl StarlingApiClient {
    /// Create a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not a valid header value or
    /// the HTTP client cannot be initialized.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Transport(format!("Failed to initialize HTTP client: {}", e)))?;
        Self::with_client(client, base_url, access_token)
    }

    /// Create a client on top of an existing (shared) `reqwest::Client`.
    ///
    /// A leading `Bearer ` on the token is accepted and not doubled.
    pub fn with_client(client: reqwest::Client, base_url: &str, access_token: &str) -> Result<Self> {
        let token = access_token.trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::input("Authorization is not a valid bearer token"))?;
        auth_header.set_sensitive(true);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET request, returning the raw status and body.
    async fn get_raw(&self, path: &str) -> Result<(StatusCode, String)> {
        let url = self.url(path);
        debug!("[StarlingApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Transport(format!("GET {} failed: {}", path, e)))?;

        read_body(response).await
    }

    /// Send a JSON PUT request, returning the raw status and body.
    async fn put_raw<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(StatusCode, String)> {
        let url = self.url(path);
        debug!("[StarlingApi] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers())
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("PUT {} failed: {}", path, e)))?;

        read_body(response).await
    }

    /// Make a GET request and parse a successful response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (status, body) = self.get_raw(path).await?;
        parse_success(status, &body)
    }
}

async fn read_body(response: Response) -> Result<(StatusCode, String)> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;
    Ok((status, body))
}

fn upstream_error(status: StatusCode, body: &str) -> Error {
    // Try to parse error response for a better message
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(ApiErrorResponse::best_message)
        .unwrap_or_else(|| body.chars().take(200).collect::<String>());
    Error::upstream(status.as_u16(), message)
}

/// Parse a response body, turning non-success statuses into `Error::Upstream`.
fn parse_success<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if !status.is_success() {
        return Err(upstream_error(status, body));
    }

    serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("{} - {}", e, body.chars().take(200).collect::<String>())))
}

/// Body to pass back to our own caller verbatim: JSON when it parses,
/// otherwise the raw text.
fn passthrough_body(body: String) -> serde_json::Value {
    if body.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

fn transactions_path(account_uid: &str, category_uid: &str, window: &DateWindow) -> String {
    format!(
        "/feed/account/{}/category/{}/transactions-between?minTransactionTimestamp={}&maxTransactionTimestamp={}",
        encode(account_uid),
        encode(category_uid),
        encode(&window.start_timestamp()),
        encode(&window.end_timestamp()),
    )
}

fn savings_goals_path(account_uid: &str) -> String {
    format!("/account/{}/savings-goals", encode(account_uid))
}

fn add_money_path(account_uid: &str, savings_goal_uid: &str, transfer_uid: &Uuid) -> String {
    format!(
        "{}/{}/add-money/{}",
        savings_goals_path(account_uid),
        encode(savings_goal_uid),
        transfer_uid
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// BankingApiClient Trait Implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl BankingApiClient for StarlingApiClient {
    async fn fetch_accounts(&self) -> Result<Vec<Account>> {
        let (status, body) = self.get_raw("/accounts").await?;

        // Usually a rejected token; the caller gets the upstream answer as-is.
        if !status.is_success() {
            info!("[StarlingApi] Account request rejected with {}", status);
            return Err(Error::Account {
                status: status.as_u16(),
                body: passthrough_body(body),
            });
        }

        let response: ApiAccountsResponse = parse_success(status, &body)?;
        info!("[StarlingApi] Fetched {} accounts", response.accounts.len());
        Ok(response.accounts)
    }

    async fn fetch_transactions(
        &self,
        account_uid: &str,
        category_uid: &str,
        window: &DateWindow,
    ) -> Result<Vec<FeedItem>> {
        let response: ApiFeedItemsResponse = self
            .get(&transactions_path(account_uid, category_uid, window))
            .await?;

        info!(
            "[StarlingApi] Fetched {} feed items between {} and {}",
            response.feed_items.len(),
            window.start,
            window.end
        );
        Ok(response.feed_items)
    }

    async fn fetch_savings_goals(&self, account_uid: &str) -> Result<Vec<SavingsGoal>> {
        let response: ApiSavingsGoalsResponse = self.get(&savings_goals_path(account_uid)).await?;

        info!(
            "[StarlingApi] Fetched {} savings goals",
            response.savings_goal_list.len()
        );
        Ok(response.savings_goal_list)
    }

    async fn create_default_savings_goal(&self, account_uid: &str, currency: &str) -> Result<()> {
        let request = NewSavingsGoal::default_for_currency(currency);
        let (status, body) = self
            .put_raw(&savings_goals_path(account_uid), &request)
            .await?;
        if !status.is_success() {
            return Err(upstream_error(status, &body));
        }

        // The uid is only logged; callers list the goals again to find it.
        let created_uid = serde_json::from_str::<ApiCreateGoalResponse>(&body)
            .ok()
            .and_then(|c| c.savings_goal_uid);
        info!(
            "[StarlingApi] Created default savings goal {}",
            created_uid.as_deref().unwrap_or("<unknown>")
        );
        Ok(())
    }

    async fn transfer_to_savings_goal(
        &self,
        account_uid: &str,
        savings_goal_uid: &str,
        currency: &str,
        minor_units: i64,
    ) -> Result<TransferResult> {
        // A fresh token per attempt; reusing one would turn a retry into a no-op.
        let transfer_uid = Uuid::new_v4();
        let request = ApiTopUpRequest {
            amount: CurrencyAndAmount::new(currency, minor_units),
        };
        let (status, body) = self
            .put_raw(
                &add_money_path(account_uid, savings_goal_uid, &transfer_uid),
                &request,
            )
            .await?;

        info!(
            "[StarlingApi] Transfer {} of {} {} answered {}",
            transfer_uid, minor_units, currency, status
        );
        Ok(TransferResult {
            status: status.as_u16(),
            body: passthrough_body(body),
        })
    }
}
