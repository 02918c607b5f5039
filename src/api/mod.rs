//! Salt Edge API interaction module
//!
//! # Module Structure
//!
//! - [`http`] - the [`Requester`](http::Requester): credentials, headers, call shapes
//! - [`pagination`] - cursor pages and the lazy [`Paginator`](pagination::Paginator)
//! - [`query`] - nested query-string encoding
//! - [`error`] - error types
//!
//! # Example
//!
//! ```no_run
//! use saltedge::api::http::Requester;
//! use saltedge::config::{ClientOptions, Credentials};
//! use serde_json::Value;
//!
//! async fn example() -> saltedge::Result<()> {
//!     let credentials = Credentials::from_env(&ClientOptions::default())?;
//!     let requester = Requester::new(credentials, None)?;
//!     let countries: Value = requester.get("/countries", None).await?;
//!     println!("{}", countries);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod pagination;
pub mod query;
