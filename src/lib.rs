//! Client for the Web Application Firewall endpoints of the Cloudflare API.
//!
//! [`cloudflare::WafClient`] covers listing, fetching and updating WAF
//! packages, rule groups and rules of a zone. Each call is a single HTTP
//! request whose JSON envelope is unwrapped into typed values.

pub mod cli;
pub mod cloudflare;
pub mod config;
pub mod error;
pub mod utils;

pub use cloudflare::{WafApi, WafClient};
pub use error::{WafError, WafResult};
