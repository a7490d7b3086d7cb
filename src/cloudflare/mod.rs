//! Cloudflare WAF integration.
//! This module provides the typed client for the WAF package, rule group
//! and rule endpoints of a zone.

mod api;
mod client;
mod waf;

pub use api::WafApi;
#[cfg(test)]
pub use api::MockWafApi;
pub use client::{ApiError, ApiMessage, Credentials, Envelope, ResultInfo, WafClient};
pub use waf::{
    ActionMode, DetectionMode, GroupMode, RuleMode, Sensitivity, WafGroup, WafGroupRef,
    WafPackage, WafPackageOptions, WafRule,
};
