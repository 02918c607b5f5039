//! Request options
//!
//! `None` fields are left out of the request. Identifier fields that an
//! endpoint interpolates into its path are plain (non-`Option`) fields, so a
//! call cannot be built without them.

use serde::Serialize;
use serde_json::Value;

use super::models::{Categorization, ProviderMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentScope {
    AccountDetails,
    HolderInformation,
    TransactionsDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchScope {
    Accounts,
    HolderInfo,
    Transactions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JavascriptCallbackType {
    Iframe,
    ExternalSaltbridge,
    ExternalNotify,
    PostMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialsStrategy {
    Store,
    DoNotStore,
    Ask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Default,
    Dark,
}

/// Which owner a service call is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    CustomerId(String),
    ConnectionId(String),
}

/// Options scoped to either a customer or a connection
#[derive(Debug, Clone, Serialize)]
pub struct OwnerScoped<T> {
    #[serde(flatten)]
    pub owner: Owner,
    #[serde(flatten)]
    pub options: T,
}

impl<T> OwnerScoped<T> {
    pub fn customer(customer_id: &str, options: T) -> Self {
        Self {
            owner: Owner::CustomerId(customer_id.to_string()),
            options,
        }
    }

    pub fn connection(connection_id: &str, options: T) -> Self {
        Self {
            owner: Owner::ConnectionId(connection_id.to_string()),
            options,
        }
    }
}

/// Options for a service call made on behalf of one customer
#[derive(Debug, Clone, Serialize)]
pub struct CustomerScoped<T> {
    pub customer_id: String,
    #[serde(flatten)]
    pub options: T,
}

impl<T> CustomerScoped<T> {
    pub fn new(customer_id: &str, options: T) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            options,
        }
    }
}

/// Options for a call addressed to one connection
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionScoped<T> {
    pub connection_id: String,
    #[serde(flatten)]
    pub options: T,
}

impl<T> ConnectionScoped<T> {
    pub fn new(connection_id: &str, options: T) -> Self {
        Self {
            connection_id: connection_id.to_string(),
            options,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CountryListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderShowOptions {
    pub provider_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
}

impl ProviderShowOptions {
    pub fn new(provider_code: &str) -> Self {
        Self {
            provider_code: provider_code.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ProviderMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_provider_fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_key_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_payments_fields: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerCreateOptions {
    pub identifier: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerIdOptions {
    pub customer_id: String,
}

impl CustomerIdOptions {
    pub fn new(customer_id: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsentParams {
    pub scopes: Vec<ConsentScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_days: Option<u32>,
}

impl ConsentParams {
    pub fn new(scopes: Vec<ConsentScope>) -> Self {
        Self {
            scopes,
            from_date: None,
            to_date: None,
            period_days: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AttemptParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_scopes: Option<Vec<FetchScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_accounts_notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_natures: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_last_logged_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
}

/// Connect page settings shared by create, reconnect and refresh sessions
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_modes: Option<Vec<ProviderMode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorization: Option<Categorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript_callback_type: Option<JavascriptCallbackType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_connection_notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_error_class: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_connect_overview: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectSessionCreateOptions {
    pub consent: ConsentParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_provider_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_consent_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_strategy: Option<CredentialsStrategy>,
    #[serde(flatten)]
    pub settings: SessionSettings,
}

impl ConnectSessionCreateOptions {
    pub fn new(consent: ConsentParams) -> Self {
        Self {
            consent,
            attempt: None,
            allowed_countries: None,
            provider_code: None,
            disable_provider_search: None,
            show_consent_confirmation: None,
            credentials_strategy: None,
            settings: SessionSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectSessionReconnectOptions {
    pub consent: ConsentParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_consent_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_strategy: Option<CredentialsStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_credentials_strategy: Option<String>,
    #[serde(flatten)]
    pub settings: SessionSettings,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectSessionRefreshOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(flatten)]
    pub settings: SessionSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct OAuthProviderCreateOptions {
    pub country_code: String,
    pub provider_code: String,
    pub consent: ConsentParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorization: Option<Categorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OAuthProviderReconnectOptions {
    pub consent: ConsentParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorization: Option<Categorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OAuthAuthorizeOptions {
    /// Query string the provider redirected back with
    pub query_string: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionCreateOptions {
    pub country_code: String,
    pub provider_code: String,
    pub consent: ConsentParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credentials: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorization: Option<Categorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionReconnectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credentials: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent: Option<ConsentParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorization: Option<Categorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_credentials: Option<bool>,
}

/// Answers to an interactive stage of a running attempt
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionInteractiveOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credentials: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionRefreshOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorization: Option<Categorization>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionUpdateOptions {
    /// Only `"inactive"` is accepted by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_credentials: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionIdOptions {
    pub connection_id: String,
}

impl ConnectionIdOptions {
    pub fn new(connection_id: &str) -> Self {
        Self {
            connection_id: connection_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionListOptions {
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsentIdOptions {
    pub consent_id: String,
}

impl ConsentIdOptions {
    pub fn new(consent_id: &str) -> Self {
        Self {
            consent_id: consent_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AttemptIdOptions {
    pub attempt_id: String,
}

impl AttemptIdOptions {
    pub fn new(attempt_id: &str) -> Self {
        Self {
            attempt_id: attempt_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionIdsOptions {
    pub transaction_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionRemoveOptions {
    pub account_id: String,
    pub keep_days: u32,
}
