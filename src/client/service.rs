//! Service client
//!
//! Server-to-server surface: only the application credentials travel as
//! headers, customers and connections are addressed by id.

use reqwest::Method;
use serde_json::{Map, Value};

use super::{Countries, Providers};
use crate::api::error::Result;
use crate::api::http::{decode_data, to_params, RequestSpec, Requester};
use crate::api::pagination::Paginator;
use crate::config::{ClientOptions, Credentials};
use crate::types::*;

/// Client for the service API
#[derive(Debug, Clone)]
pub struct ServiceClient {
    requester: Requester,
}

impl ServiceClient {
    /// Build a client, falling back to the process environment for the
    /// application credentials
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let credentials = Credentials::from_env(options)?;
        Self::with_credentials(credentials, options)
    }

    pub fn with_credentials(credentials: Credentials, options: &ClientOptions) -> Result<Self> {
        let requester = Requester::new(credentials, options.base_url.as_deref())?;
        Ok(Self { requester })
    }

    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    pub fn countries(&self) -> Countries<'_> {
        Countries::new(&self.requester)
    }

    pub fn providers(&self) -> Providers<'_> {
        Providers::new(&self.requester)
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers { requester: &self.requester }
    }

    pub fn connect_sessions(&self) -> ConnectSessions<'_> {
        ConnectSessions { requester: &self.requester }
    }

    pub fn oauth_providers(&self) -> OAuthProviders<'_> {
        OAuthProviders { requester: &self.requester }
    }

    pub fn connections(&self) -> Connections<'_> {
        Connections { requester: &self.requester }
    }

    pub fn consents(&self) -> Consents<'_> {
        Consents { requester: &self.requester }
    }

    pub fn attempts(&self) -> Attempts<'_> {
        Attempts { requester: &self.requester }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { requester: &self.requester }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { requester: &self.requester }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    requester: &'a Requester,
}

impl<'a> Customers<'a> {
    pub async fn create(&self, options: &CustomerCreateOptions) -> Result<Customer> {
        self.requester
            .create("/customers", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn show(&self, options: &CustomerIdOptions) -> Result<Customer> {
        self.requester
            .show("/customers", to_params(options)?, "customer_id")
            .await
    }

    pub fn list(&self, options: Option<&CustomerListOptions>) -> Result<Paginator<'a, Customer>> {
        Ok(self.requester.paginate("/customers", Some(to_params(&options)?)))
    }

    pub async fn remove(&self, options: &CustomerIdOptions) -> Result<RemovedCustomer> {
        self.requester
            .remove("/customers", to_params(options)?, "customer_id")
            .await
    }

    pub async fn lock(&self, options: &CustomerIdOptions) -> Result<LockedCustomer> {
        self.requester
            .action("/customers", to_params(options)?, "lock", "customer_id")
            .await
    }

    pub async fn unlock(&self, options: &CustomerIdOptions) -> Result<UnlockedCustomer> {
        self.requester
            .action("/customers", to_params(options)?, "unlock", "customer_id")
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConnectSessions<'a> {
    requester: &'a Requester,
}

impl<'a> ConnectSessions<'a> {
    pub async fn create(
        &self,
        options: &CustomerScoped<ConnectSessionCreateOptions>,
    ) -> Result<ConnectSession> {
        self.requester
            .create("/connect_sessions/create", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn reconnect(
        &self,
        options: &ConnectionScoped<ConnectSessionReconnectOptions>,
    ) -> Result<ConnectSession> {
        self.requester
            .create("/connect_sessions/reconnect", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn refresh(
        &self,
        options: &ConnectionScoped<ConnectSessionRefreshOptions>,
    ) -> Result<ConnectSession> {
        self.requester
            .create("/connect_sessions/refresh", Some(serde_json::to_value(options)?))
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OAuthProviders<'a> {
    requester: &'a Requester,
}

impl<'a> OAuthProviders<'a> {
    pub async fn create(
        &self,
        options: &CustomerScoped<OAuthProviderCreateOptions>,
    ) -> Result<OAuthProviderSession> {
        self.requester
            .create("/oauth_providers/create", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn reconnect(
        &self,
        options: &ConnectionScoped<OAuthProviderReconnectOptions>,
    ) -> Result<OAuthProviderSession> {
        self.requester
            .create("/oauth_providers/reconnect", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn authorize(
        &self,
        options: &ConnectionScoped<OAuthAuthorizeOptions>,
    ) -> Result<OAuthAuthorization> {
        self.requester
            .put("/oauth_providers/authorize", serde_json::to_value(options)?)
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Connections<'a> {
    requester: &'a Requester,
}

impl<'a> Connections<'a> {
    pub fn list(&self, options: &ConnectionListOptions) -> Result<Paginator<'a, Connection>> {
        Ok(self.requester.paginate("/connections", Some(to_params(options)?)))
    }

    pub async fn show(&self, options: &ConnectionIdOptions) -> Result<Connection> {
        self.requester
            .show("/connections", to_params(options)?, "connection_id")
            .await
    }

    pub async fn create(
        &self,
        options: &CustomerScoped<ConnectionCreateOptions>,
    ) -> Result<Connection> {
        self.requester
            .create("/connections", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn reconnect(
        &self,
        options: &ConnectionScoped<ConnectionReconnectOptions>,
    ) -> Result<Connection> {
        self.requester
            .action("/connections", to_params(options)?, "reconnect", "connection_id")
            .await
    }

    pub async fn interactive(
        &self,
        options: &ConnectionScoped<ConnectionInteractiveOptions>,
    ) -> Result<Connection> {
        self.requester
            .action("/connections", to_params(options)?, "interactive", "connection_id")
            .await
    }

    pub async fn refresh(
        &self,
        options: &ConnectionScoped<ConnectionRefreshOptions>,
    ) -> Result<Connection> {
        self.requester
            .action("/connections", to_params(options)?, "refresh", "connection_id")
            .await
    }

    /// Fields other than `connection_id` are sent as query parameters
    pub async fn update(
        &self,
        options: &ConnectionScoped<ConnectionUpdateOptions>,
    ) -> Result<Connection> {
        self.requester
            .update("/connections", to_params(options)?, "connection_id")
            .await
    }

    pub async fn remove(&self, options: &ConnectionIdOptions) -> Result<RemovedConnection> {
        self.requester
            .remove("/connections", to_params(options)?, "connection_id")
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Consents<'a> {
    requester: &'a Requester,
}

impl<'a> Consents<'a> {
    pub fn list(&self, options: &OwnerScoped<PageOptions>) -> Result<Paginator<'a, Consent>> {
        Ok(self.requester.paginate("/consents", Some(to_params(options)?)))
    }

    pub async fn show(&self, options: &OwnerScoped<ConsentIdOptions>) -> Result<Consent> {
        self.requester
            .show("/consents", to_params(options)?, "consent_id")
            .await
    }

    pub async fn revoke(&self, options: &OwnerScoped<ConsentIdOptions>) -> Result<Consent> {
        self.requester
            .action_query("/consents", to_params(options)?, "revoke", "consent_id")
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Attempts<'a> {
    requester: &'a Requester,
}

impl<'a> Attempts<'a> {
    pub fn list(&self, options: &ConnectionScoped<PageOptions>) -> Result<Paginator<'a, Attempt>> {
        Ok(self.requester.paginate("/attempts", Some(to_params(options)?)))
    }

    pub async fn show(&self, options: &ConnectionScoped<AttemptIdOptions>) -> Result<Attempt> {
        self.requester
            .show("/attempts", to_params(options)?, "attempt_id")
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    requester: &'a Requester,
}

impl<'a> Accounts<'a> {
    pub fn list(&self, options: &OwnerScoped<PageOptions>) -> Result<Paginator<'a, Account>> {
        Ok(self.requester.paginate("/accounts", Some(to_params(options)?)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    requester: &'a Requester,
}

impl<'a> Transactions<'a> {
    pub fn list(
        &self,
        options: &ConnectionScoped<TransactionListOptions>,
    ) -> Result<Paginator<'a, Transaction>> {
        Ok(self.requester.paginate("/transactions", Some(to_params(options)?)))
    }

    pub fn list_duplicates(
        &self,
        options: &ConnectionScoped<TransactionListOptions>,
    ) -> Result<Paginator<'a, Transaction>> {
        Ok(self
            .requester
            .paginate("/transactions/duplicates", Some(to_params(options)?)))
    }

    pub fn pending(
        &self,
        options: &ConnectionScoped<TransactionListOptions>,
    ) -> Result<Paginator<'a, Transaction>> {
        Ok(self
            .requester
            .paginate("/transactions/pending", Some(to_params(options)?)))
    }

    pub async fn duplicate(
        &self,
        options: &CustomerScoped<TransactionIdsOptions>,
    ) -> Result<DuplicatedTransactions> {
        self.requester
            .put("/transactions/duplicate", serde_json::to_value(options)?)
            .await
    }

    pub async fn unduplicate(
        &self,
        options: &CustomerScoped<TransactionIdsOptions>,
    ) -> Result<UnduplicatedTransactions> {
        self.requester
            .put("/transactions/unduplicate", serde_json::to_value(options)?)
            .await
    }

    pub async fn remove(
        &self,
        options: &CustomerScoped<TransactionRemoveOptions>,
    ) -> Result<RemovedTransactions> {
        let mut body = Map::new();
        body.insert("data".to_string(), serde_json::to_value(options)?);
        let response = self
            .requester
            .request(RequestSpec::new(Method::DELETE, "/transactions").with_body(Value::Object(body)))
            .await?;
        decode_data(response)
    }
}
