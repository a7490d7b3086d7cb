use std::fmt;
use std::time::Duration;

use reqwest::{Client as ReqwestClient, RequestBuilder, StatusCode, Url};
use serde::de::{DeserializeOwned, Error as _, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::cloudflare::waf::{
    GroupMode, ModeUpdate, RuleMode, WafGroup, WafPackage, WafPackageOptions, WafRule,
};
use crate::config::CloudflareConfig;
use crate::error::{WafError, WafResult};
use crate::utils::log_api_event;

/// Represents a Cloudflare API response
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    pub result: Option<T>,
    pub result_info: Option<ResultInfo>,
}

/// Represents a Cloudflare API error
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Informational message attached to a response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Paging details of a list response. Only the first page is ever read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResultInfo {
    pub page: u32,
    pub per_page: u32,
    pub count: u32,
    pub total_count: u32,
}

/// How requests authenticate against the API
#[derive(Clone)]
pub enum Credentials {
    /// Scoped API token, sent as a bearer token
    Token(String),
    /// Global API key together with the account email
    Key { email: String, key: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Token(_) => f.write_str("Credentials::Token(..)"),
            Credentials::Key { email, .. } => {
                f.debug_struct("Credentials::Key").field("email", email).finish_non_exhaustive()
            }
        }
    }
}

impl Credentials {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::Token(token) => request.bearer_auth(token),
            Credentials::Key { email, key } => request
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
        }
    }
}

/// Client for Cloudflare's WAF package, group and rule endpoints
#[derive(Debug, Clone)]
pub struct WafClient {
    client: ReqwestClient,
    credentials: Credentials,
    base_url: String,
}

impl WafClient {
    /// Creates a client from loaded configuration
    pub fn new(config: &CloudflareConfig) -> WafResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self::with_http_client(client, config.credentials()?, &config.base_url))
    }

    /// Creates a client around an existing reqwest client
    pub fn with_http_client(client: ReqwestClient, credentials: Credentials, base_url: &str) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the WAF packages of a zone
    pub async fn list_packages(&self, zone_id: &str) -> WafResult<Vec<WafPackage>> {
        let url = self.url(&packages_path(zone_id)?)?;
        self.call("list_packages", self.client.get(url)).await
    }

    /// Fetches a single WAF package
    pub async fn get_package(&self, zone_id: &str, package_id: &str) -> WafResult<WafPackage> {
        let url = self.url(&package_path(zone_id, package_id)?)?;
        self.call("get_package", self.client.get(url)).await
    }

    /// Changes the sensitivity and/or action mode of an anomaly package
    pub async fn update_package(
        &self,
        zone_id: &str,
        package_id: &str,
        options: &WafPackageOptions,
    ) -> WafResult<WafPackage> {
        if options.has_unknown() {
            return Err(WafError::InvalidArgument(
                "package options contain a value the API does not accept".to_string(),
            ));
        }
        let url = self.url(&package_path(zone_id, package_id)?)?;
        self.call("update_package", self.client.patch(url).json(options)).await
    }

    /// Lists the rule groups of a package
    pub async fn list_groups(&self, zone_id: &str, package_id: &str) -> WafResult<Vec<WafGroup>> {
        let mut path = package_path(zone_id, package_id)?;
        path.push("groups");
        self.call("list_groups", self.client.get(self.url(&path)?)).await
    }

    /// Fetches a single rule group
    pub async fn get_group(
        &self,
        zone_id: &str,
        package_id: &str,
        group_id: &str,
    ) -> WafResult<WafGroup> {
        let url = self.url(&child_path(zone_id, package_id, "groups", group_id)?)?;
        self.call("get_group", self.client.get(url)).await
    }

    /// Turns a rule group on or off
    pub async fn update_group(
        &self,
        zone_id: &str,
        package_id: &str,
        group_id: &str,
        mode: GroupMode,
    ) -> WafResult<WafGroup> {
        if !mode.is_known() {
            return Err(WafError::InvalidArgument(format!("unsupported group mode {:?}", mode)));
        }
        let url = self.url(&child_path(zone_id, package_id, "groups", group_id)?)?;
        let body = ModeUpdate { mode };
        self.call("update_group", self.client.patch(url).json(&body)).await
    }

    /// Lists the rules of a package
    pub async fn list_rules(&self, zone_id: &str, package_id: &str) -> WafResult<Vec<WafRule>> {
        let mut path = package_path(zone_id, package_id)?;
        path.push("rules");
        self.call("list_rules", self.client.get(self.url(&path)?)).await
    }

    /// Fetches a single rule
    pub async fn get_rule(&self, zone_id: &str, package_id: &str, rule_id: &str) -> WafResult<WafRule> {
        let url = self.url(&child_path(zone_id, package_id, "rules", rule_id)?)?;
        self.call("get_rule", self.client.get(url)).await
    }

    /// Sets the mode of a single rule
    pub async fn update_rule(
        &self,
        zone_id: &str,
        package_id: &str,
        rule_id: &str,
        mode: RuleMode,
    ) -> WafResult<WafRule> {
        if !mode.is_known() {
            return Err(WafError::InvalidArgument(format!("unsupported rule mode {:?}", mode)));
        }
        let url = self.url(&child_path(zone_id, package_id, "rules", rule_id)?)?;
        let body = ModeUpdate { mode };
        self.call("update_rule", self.client.patch(url).json(&body)).await
    }

    /// Appends path segments to the base URL, percent-encoding each one
    fn url(&self, segments: &[&str]) -> WafResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| WafError::InvalidArgument(format!("invalid base url {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| WafError::InvalidArgument(format!("invalid base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends an authenticated request and unwraps the envelope
    async fn call<T: DeserializeOwned>(&self, operation: &str, request: RequestBuilder) -> WafResult<T> {
        let request = self.credentials.apply(request).build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending Cloudflare request");

        let outcome: WafResult<T> = async {
            let response = self.client.execute(request).await?;
            let status = response.status();
            let body = response.bytes().await?;
            decode_envelope(status, &body)
        }
        .await;

        match &outcome {
            Ok(_) => log_api_event(operation, true, None),
            Err(err) => log_api_event(operation, false, Some(&err.to_string())),
        }
        outcome
    }
}

/// Turns a raw response into the typed `result`, or the matching error
pub(crate) fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> WafResult<T> {
    if !status.is_success() {
        let errors = serde_json::from_slice::<Envelope<IgnoredAny>>(body)
            .map(|envelope| envelope.errors)
            .unwrap_or_default();
        return Err(WafError::Remote { status: status.as_u16(), errors });
    }

    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    if !envelope.success {
        return Err(WafError::Remote {
            status: status.as_u16(),
            errors: envelope.errors,
        });
    }
    envelope
        .result
        .ok_or_else(|| WafError::Decode(serde_json::Error::missing_field("result")))
}

fn require<'a>(name: &str, value: &'a str) -> WafResult<&'a str> {
    if value.trim().is_empty() {
        return Err(WafError::InvalidArgument(format!("{} must not be empty", name)));
    }
    Ok(value)
}

fn packages_path(zone_id: &str) -> WafResult<Vec<&str>> {
    Ok(vec!["zones", require("zone_id", zone_id)?, "firewall", "waf", "packages"])
}

fn package_path<'a>(zone_id: &'a str, package_id: &'a str) -> WafResult<Vec<&'a str>> {
    let mut path = packages_path(zone_id)?;
    path.push(require("package_id", package_id)?);
    Ok(path)
}

fn child_path<'a>(
    zone_id: &'a str,
    package_id: &'a str,
    kind: &'static str,
    id: &'a str,
) -> WafResult<Vec<&'a str>> {
    let name = if kind == "groups" { "group_id" } else { "rule_id" };
    let mut path = package_path(zone_id, package_id)?;
    path.push(kind);
    path.push(require(name, id)?);
    Ok(path)
}
