//! Account-holder ("app") client
//!
//! Calls on behalf of one end user. The customer secret is attached as a
//! header once set; connection-scoped calls also need the connection secret.

use reqwest::Method;
use serde_json::Value;

use super::{Countries, Providers};
use crate::api::error::Result;
use crate::api::http::{decode_data, to_params, RequestSpec, Requester};
use crate::api::pagination::Paginator;
use crate::config::{ClientOptions, Credentials};
use crate::types::*;

/// Client for the account-holder API
#[derive(Debug, Clone)]
pub struct AppClient {
    requester: Requester,
}

impl AppClient {
    /// Build a client, falling back to the process environment for the
    /// application credentials
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let credentials = Credentials::from_env(options)?;
        Self::with_credentials(credentials, options)
    }

    pub fn with_credentials(credentials: Credentials, options: &ClientOptions) -> Result<Self> {
        let mut requester = Requester::new(credentials, options.base_url.as_deref())?;
        requester.set_customer_secret(options.customer_secret.clone());
        requester.set_connection_secret(options.connection_secret.clone());
        Ok(Self { requester })
    }

    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    pub fn customer_secret(&self) -> Option<&str> {
        self.requester.customer_secret()
    }

    pub fn set_customer_secret(&mut self, secret: Option<String>) {
        self.requester.set_customer_secret(secret);
    }

    pub fn connection_secret(&self) -> Option<&str> {
        self.requester.connection_secret()
    }

    pub fn set_connection_secret(&mut self, secret: Option<String>) {
        self.requester.set_connection_secret(secret);
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

/// Check both secrets a connection-scoped call needs
fn assert_connection_scope(requester: &Requester) -> Result<()> {
    requester.assert_customer_secret()?;
    requester.assert_connection_secret()
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
}

#[derive(Debug, Clone, Copy)]
pub struct ConnectSessions<'a> {
    requester: &'a Requester,
}

impl<'a> ConnectSessions<'a> {
    pub async fn create(&self, options: &ConnectSessionCreateOptions) -> Result<ConnectSession> {
        self.requester.assert_customer_secret()?;
        self.requester
            .create("/connect_sessions/create", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn reconnect(&self, options: &ConnectSessionReconnectOptions) -> Result<ConnectSession> {
        assert_connection_scope(self.requester)?;
        self.requester
            .create("/connect_sessions/reconnect", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn refresh(&self, options: &ConnectSessionRefreshOptions) -> Result<ConnectSession> {
        assert_connection_scope(self.requester)?;
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
    pub async fn create(&self, options: &OAuthProviderCreateOptions) -> Result<OAuthProviderSession> {
        self.requester.assert_customer_secret()?;
        self.requester
            .create("/oauth_providers/create", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn reconnect(
        &self,
        options: &OAuthProviderReconnectOptions,
    ) -> Result<OAuthProviderSession> {
        assert_connection_scope(self.requester)?;
        self.requester
            .create("/oauth_providers/reconnect", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn authorize(&self, options: &OAuthAuthorizeOptions) -> Result<OAuthAuthorization> {
        assert_connection_scope(self.requester)?;
        self.requester
            .put("/oauth_providers/authorize", serde_json::to_value(options)?)
            .await
    }
}

/// The connection is identified by the connection secret header
#[derive(Debug, Clone, Copy)]
pub struct Connections<'a> {
    requester: &'a Requester,
}

impl<'a> Connections<'a> {
    pub async fn show(&self) -> Result<Connection> {
        assert_connection_scope(self.requester)?;
        self.requester.get("/connections", None).await
    }

    pub async fn create(&self, options: &ConnectionCreateOptions) -> Result<Connection> {
        self.requester.assert_customer_secret()?;
        self.requester
            .create("/connection", Some(serde_json::to_value(options)?))
            .await
    }

    pub async fn reconnect(&self, options: &ConnectionReconnectOptions) -> Result<Connection> {
        assert_connection_scope(self.requester)?;
        self.requester
            .put("/connection/reconnect", serde_json::to_value(options)?)
            .await
    }

    pub async fn interactive(&self, options: &ConnectionInteractiveOptions) -> Result<Connection> {
        assert_connection_scope(self.requester)?;
        self.requester
            .put("/connection/interactive", serde_json::to_value(options)?)
            .await
    }

    pub async fn refresh(&self, options: &ConnectionRefreshOptions) -> Result<Connection> {
        assert_connection_scope(self.requester)?;
        self.requester
            .put("/connection/refresh", serde_json::to_value(options)?)
            .await
    }

    pub async fn update(&self, options: &ConnectionUpdateOptions) -> Result<Connection> {
        assert_connection_scope(self.requester)?;
        self.requester
            .put("/connection", serde_json::to_value(options)?)
            .await
    }

    pub async fn remove(&self) -> Result<RemovedConnection> {
        assert_connection_scope(self.requester)?;
        let response = self
            .requester
            .request(RequestSpec::new(Method::DELETE, "/connection"))
            .await?;
        decode_data(response)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Consents<'a> {
    requester: &'a Requester,
}

impl<'a> Consents<'a> {
    pub fn list(&self, options: Option<&PageOptions>) -> Result<Paginator<'a, Consent>> {
        assert_connection_scope(self.requester)?;
        Ok(self.requester.paginate("/consents", Some(to_params(&options)?)))
    }

    pub async fn show(&self, options: &ConsentIdOptions) -> Result<Consent> {
        assert_connection_scope(self.requester)?;
        self.requester
            .show("/consents", to_params(options)?, "consent_id")
            .await
    }

    pub async fn revoke(&self, options: &ConsentIdOptions) -> Result<Consent> {
        assert_connection_scope(self.requester)?;
        self.requester
            .action("/consents", to_params(options)?, "revoke", "consent_id")
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Attempts<'a> {
    requester: &'a Requester,
}

impl<'a> Attempts<'a> {
    pub fn list(&self, options: Option<&PageOptions>) -> Result<Paginator<'a, Attempt>> {
        assert_connection_scope(self.requester)?;
        Ok(self.requester.paginate("/attempts", Some(to_params(&options)?)))
    }

    pub async fn show(&self, options: &AttemptIdOptions) -> Result<Attempt> {
        assert_connection_scope(self.requester)?;
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
    pub fn list(&self, options: Option<&PageOptions>) -> Result<Paginator<'a, Account>> {
        assert_connection_scope(self.requester)?;
        Ok(self.requester.paginate("/accounts", Some(to_params(&options)?)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    requester: &'a Requester,
}

impl<'a> Transactions<'a> {
    pub fn list(&self, options: Option<&TransactionListOptions>) -> Result<Paginator<'a, Transaction>> {
        assert_connection_scope(self.requester)?;
        Ok(self.requester.paginate("/transactions", Some(to_params(&options)?)))
    }

    pub fn list_duplicates(
        &self,
        options: Option<&TransactionListOptions>,
    ) -> Result<Paginator<'a, Transaction>> {
        assert_connection_scope(self.requester)?;
        Ok(self
            .requester
            .paginate("/transactions/duplicates", Some(to_params(&options)?)))
    }

    pub fn pending(&self, options: Option<&TransactionListOptions>) -> Result<Paginator<'a, Transaction>> {
        assert_connection_scope(self.requester)?;
        Ok(self
            .requester
            .paginate("/transactions/pending", Some(to_params(&options)?)))
    }

    pub async fn duplicate(&self, options: &TransactionIdsOptions) -> Result<DuplicatedTransactions> {
        assert_connection_scope(self.requester)?;
        self.requester
            .put("/transactions/duplicate", serde_json::to_value(options)?)
            .await
    }

    pub async fn unduplicate(&self, options: &TransactionIdsOptions) -> Result<UnduplicatedTransactions> {
        assert_connection_scope(self.requester)?;
        self.requester
            .put("/transactions/unduplicate", serde_json::to_value(options)?)
            .await
    }

    pub async fn remove(&self, options: &TransactionRemoveOptions) -> Result<RemovedTransactions> {
        assert_connection_scope(self.requester)?;
        let mut body = serde_json::Map::new();
        body.insert("data".to_string(), serde_json::to_value(options)?);
        let response = self
            .requester
            .request(RequestSpec::new(Method::DELETE, "/transactions").with_body(Value::Object(body)))
            .await?;
        decode_data(response)
    }
}
