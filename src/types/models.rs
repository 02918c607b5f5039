//! Response models
//!
//! Fields the API may omit or null are `Option` or defaulted. Open-ended
//! objects (`extra`, custom fields) stay as raw JSON, and so does anything
//! a model does not declare (`other`), so re-encoding a model gives back
//! what the API sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderMode {
    Oauth,
    Web,
    Api,
    File,
    /// A mode this client does not know, kept as sent
    #[serde(untagged)]
    Other(String),
}

impl Default for ProviderMode {
    fn default() -> Self {
        ProviderMode::Other(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    Inactive,
    Disabled,
    #[serde(untagged)]
    Other(String),
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Categorization {
    None,
    #[default]
    Personal,
    Business,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub refresh_start_time: u32,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub id: String,
    pub code: String,
    pub name: String,
    pub mode: ProviderMode,
    pub status: Status,
    pub automatic_fetch: bool,
    pub customer_notified_on_sign_in: bool,
    pub interactive: bool,
    pub identification_mode: String,
    pub instruction: Option<String>,
    pub home_url: Option<String>,
    pub login_url: Option<String>,
    pub logo_url: Option<String>,
    pub country_code: String,
    pub refresh_timeout: u32,
    pub holder_info: Vec<String>,
    pub max_consent_days: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
    pub timezone: String,
    pub max_interactive_delay: u32,
    pub optional_interactivity: bool,
    pub regulated: bool,
    pub max_fetch_interval: u32,
    pub supported_fetch_scopes: Vec<String>,
    pub supported_account_extra_fields: Vec<String>,
    pub supported_transaction_extra_fields: Vec<String>,
    pub supported_account_natures: Vec<String>,
    pub supported_account_types: Vec<String>,
    pub identification_codes: Vec<String>,
    pub bic_codes: Vec<String>,
    pub supported_iframe_embedding: bool,
    pub payment_templates: Vec<String>,
    pub supported_payment_fields: Option<Value>,
    pub required_payment_fields: Option<Value>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: String,
    pub identifier: String,
    pub secret: String,
    pub blocked_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovedCustomer {
    pub id: String,
    pub deleted: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockedCustomer {
    pub id: String,
    pub locked: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockedCustomer {
    pub id: String,
    pub unlocked: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A hosted connect page the end user is redirected to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectSession {
    pub expires_at: String,
    pub connect_url: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthProviderSession {
    pub connection_id: String,
    pub connection_secret: Option<String>,
    pub attempt_id: String,
    pub token: String,
    pub expires_at: String,
    pub redirect_url: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthAuthorization {
    pub connection_id: String,
    pub attempt_id: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub interactive_fields_names: Option<Vec<String>>,
    pub interactive_html: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attempt {
    pub id: String,
    pub api_mode: String,
    pub api_version: String,
    pub automatic_fetch: bool,
    pub daily_refresh: bool,
    pub categorization: Categorization,
    pub created_at: String,
    pub updated_at: String,
    pub custom_fields: Value,
    pub device_type: Option<String>,
    pub remote_ip: Option<String>,
    pub exclude_accounts: Vec<String>,
    pub user_present: bool,
    pub customer_last_logged_at: Option<String>,
    pub fail_at: Option<String>,
    pub fail_error_class: Option<String>,
    pub fail_message: Option<String>,
    pub fetch_scopes: Vec<String>,
    pub finished: bool,
    pub finished_recent: bool,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub interactive: bool,
    pub locale: String,
    pub partial: bool,
    pub store_credentials: bool,
    pub success_at: Option<String>,
    pub show_consent_confirmation: bool,
    pub include_natures: Vec<String>,
    pub stages: Vec<Stage>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub id: String,
    pub secret: String,
    pub provider_id: String,
    pub provider_code: String,
    pub provider_name: String,
    pub daily_refresh: bool,
    pub customer_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub last_success_at: Option<String>,
    pub status: Status,
    pub country_code: String,
    pub next_refresh_possible_at: Option<String>,
    pub store_credentials: bool,
    pub last_attempt: Option<Attempt>,
    pub show_consent_confirmation: bool,
    pub last_consent_id: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovedConnection {
    pub id: String,
    pub removed: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consent {
    pub id: String,
    pub connection_id: Option<String>,
    pub customer_id: String,
    pub scopes: Vec<String>,
    pub period_days: Option<u32>,
    pub expires_at: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub collected_by: String,
    pub revoked_at: Option<String>,
    pub revoke_reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub nature: String,
    pub balance: f64,
    pub currency_code: String,
    pub connection_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub extra: Value,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionMode {
    #[default]
    Normal,
    Fee,
    Transfer,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Posted,
    Pending,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: String,
    pub mode: TransactionMode,
    pub status: TransactionStatus,
    pub made_on: String,
    pub amount: f64,
    pub currency_code: String,
    pub description: String,
    pub category: String,
    pub duplicated: bool,
    pub account_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub extra: Value,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicatedTransactions {
    pub duplicated: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnduplicatedTransactions {
    pub unduplicated: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovedTransactions {
    pub cleanup_started: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
