//! Typed async client for the Salt Edge Account Information API (v5)
//!
//! # Usage
//!
//! ```no_run
//! use saltedge::{ClientOptions, ServiceClient};
//! use saltedge::types::ProviderListOptions;
//!
//! # async fn run() -> saltedge::Result<()> {
//! let client = ServiceClient::new(&ClientOptions::new("app-id", "secret"))?;
//!
//! let options = ProviderListOptions {
//!     country_code: Some("XF".to_string()),
//!     ..Default::default()
//! };
//! let mut pages = client.providers().list(Some(&options))?;
//! while let Some(page) = pages.next_page().await? {
//!     for provider in page.items {
//!         println!("{} {}", provider.code, provider.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Without explicit credentials, `SALTEDGE_APP_ID` and `SALTEDGE_SECRET`
//! are read from the environment when the client is built.

pub mod api;
pub mod client;
pub mod config;
pub mod types;

pub use api::error::{Error, RemoteApiError, Result, SecretScope};
pub use api::http::{Params, RequestSpec, Requester};
pub use api::pagination::{Cursor, Page, PageMeta, Paginator};
pub use client::app::AppClient;
pub use client::service::ServiceClient;
pub use config::{ClientOptions, Credentials};
