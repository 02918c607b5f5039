//! Salt Edge clients
//!
//! Two surfaces over one [`Requester`]:
//!
//! - [`app::AppClient`] - account-holder API; customer-scoped calls need the
//!   customer secret, connection-scoped calls the connection secret
//! - [`service::ServiceClient`] - service API; customers and connections are
//!   addressed by id in the parameters
//!
//! Resource facades (`client.providers()`, ...) borrow the requester and map
//! each method onto one request shape.

pub mod app;
pub mod service;

use crate::api::error::Result;
use crate::api::http::{to_params, Requester};
use crate::api::pagination::Paginator;
use crate::types::{Country, CountryListOptions, Provider, ProviderListOptions, ProviderShowOptions};

/// `/countries`
#[derive(Debug, Clone, Copy)]
pub struct Countries<'a> {
    requester: &'a Requester,
}

impl<'a> Countries<'a> {
    pub(crate) fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    pub async fn list(&self, options: Option<&CountryListOptions>) -> Result<Vec<Country>> {
        self.requester.get("/countries", Some(to_params(&options)?)).await
    }
}

/// `/providers`
#[derive(Debug, Clone, Copy)]
pub struct Providers<'a> {
    requester: &'a Requester,
}

impl<'a> Providers<'a> {
    pub(crate) fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    pub async fn show(&self, options: &ProviderShowOptions) -> Result<Provider> {
        self.requester
            .show("/providers", to_params(options)?, "provider_code")
            .await
    }

    pub fn list(&self, options: Option<&ProviderListOptions>) -> Result<Paginator<'a, Provider>> {
        Ok(self.requester.paginate("/providers", Some(to_params(&options)?)))
    }
}
