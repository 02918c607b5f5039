//! Typed requests and responses for the Salt Edge API

pub mod models;
pub mod params;

pub use models::*;
pub use params::*;
