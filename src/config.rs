//! Client configuration
//!
//! Application credentials come from explicit options first, then from the
//! environment. The environment is reached through an injected lookup so
//! resolution stays testable and free of process-wide state.

use crate::api::error::{Error, Result};

/// Default API endpoint, including the versioned path prefix
pub const DEFAULT_BASE_URL: &str = "https://www.saltedge.com/api/v5";

/// Environment variable holding the application id
pub const APP_ID_ENV: &str = "SALTEDGE_APP_ID";

/// Environment variable holding the application secret
pub const SECRET_ENV: &str = "SALTEDGE_SECRET";

/// Options accepted when constructing a client
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub app_id: Option<String>,
    pub secret: Option<String>,
    /// Only honoured by the account-holder client
    pub customer_secret: Option<String>,
    pub connection_secret: Option<String>,
    /// Override the API endpoint (sandboxes, tests)
    pub base_url: Option<String>,
}

impl ClientOptions {
    pub fn new(app_id: &str, secret: &str) -> Self {
        Self {
            app_id: Some(app_id.to_string()),
            secret: Some(secret.to_string()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn with_customer_secret(mut self, secret: &str) -> Self {
        self.customer_secret = Some(secret.to_string());
        self
    }

    pub fn with_connection_secret(mut self, secret: &str) -> Self {
        self.connection_secret = Some(secret.to_string());
        self
    }
}

/// Resolved application credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Resolve credentials from options, falling back to `lookup` for the
    /// `SALTEDGE_APP_ID` / `SALTEDGE_SECRET` variables. Empty values count as
    /// absent.
    pub fn resolve<F>(options: &ClientOptions, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = pick(options.app_id.as_deref(), APP_ID_ENV, &lookup).ok_or_else(|| {
            Error::Configuration(format!(
                "Please provide the appId or set the environment variable {}.",
                APP_ID_ENV
            ))
        })?;
        let secret = pick(options.secret.as_deref(), SECRET_ENV, &lookup).ok_or_else(|| {
            Error::Configuration(format!(
                "Please provide the secret or set the environment variable {}.",
                SECRET_ENV
            ))
        })?;

        Ok(Self { app_id, secret })
    }

    /// Resolve credentials using the process environment as fallback
    pub fn from_env(options: &ClientOptions) -> Result<Self> {
        Self::resolve(options, |name| std::env::var(name).ok())
    }
}

fn pick<F>(explicit: Option<&str>, env_name: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| lookup(env_name).filter(|v| !v.is_empty()))
}
