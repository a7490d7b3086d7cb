#![allow(dead_code)]

use cloudflare_waf::cloudflare::{Credentials, WafClient};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::matchers::{header, method, path};

pub const ZONE_ID: &str = "abcd123";
pub const PACKAGE_ID: &str = "a25a9a7e9c00afc1fb2e0245519d725b";
pub const GROUP_ID: &str = "de677e5818985db1285d0e80225f06e5";
pub const RULE_ID: &str = "f939de3be84e66e757adcdcb87908023";
pub const TOKEN: &str = "test-token";

pub const PACKAGE_JSON: &str = r#"{
    "id": "a25a9a7e9c00afc1fb2e0245519d725b",
    "name": "WordPress rules",
    "description": "Common WordPress exploit protections",
    "detection_mode": "traditional",
    "zone_id": "023e105f4ecef8ad9ca31a8372d0c353",
    "status": "active"
}"#;

pub const ANOMALY_PACKAGE_JSON: &str = r#"{
    "id": "a25a9a7e9c00afc1fb2e0245519d725b",
    "name": "OWASP ModSecurity Core Rule Set",
    "description": "Covers OWASP Top 10 vulnerabilities, and more.",
    "detection_mode": "anomaly",
    "zone_id": "023e105f4ecef8ad9ca31a8372d0c353",
    "status": "active",
    "sensitivity": "high",
    "action_mode": "challenge"
}"#;

pub const GROUP_JSON: &str = r#"{
    "id": "de677e5818985db1285d0e80225f06e5",
    "name": "Project Honey Pot",
    "description": "Group designed to protect against IP addresses that are a threat and typically used to launch DDoS attacks",
    "rules_count": 10,
    "modified_rules_count": 2,
    "package_id": "a25a9a7e9c00afc1fb2e0245519d725b",
    "mode": "on",
    "allowed_modes": ["on", "off"]
}"#;

pub const RULE_JSON: &str = r#"{
    "id": "f939de3be84e66e757adcdcb87908023",
    "description": "SQL injection prevention for SELECT statements",
    "priority": "5",
    "group": {
        "id": "de677e5818985db1285d0e80225f06e5",
        "name": "Project Honey Pot"
    },
    "package_id": "a25a9a7e9c00afc1fb2e0245519d725b",
    "allowed_modes": ["on", "off"],
    "mode": "on"
}"#;

/// Wraps a result in a successful single-object envelope
pub fn envelope(result: &str) -> String {
    format!(
        r#"{{"success": true, "errors": [], "messages": [], "result": {}}}"#,
        result
    )
}

/// Wraps results in a successful first-page list envelope
pub fn list_envelope(results: &[&str]) -> String {
    format!(
        r#"{{"success": true, "errors": [], "messages": [], "result": [{}],
            "result_info": {{"page": 1, "per_page": 20, "count": {}, "total_count": 2000}}}}"#,
        results.join(","),
        results.len()
    )
}

pub fn json_response(status: u16, body: String) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

/// Starts a mock API and a client authenticated against it
pub async fn setup() -> (MockServer, WafClient) {
    let server = MockServer::start().await;
    let client = WafClient::with_http_client(
        reqwest::Client::new(),
        Credentials::Token(TOKEN.to_string()),
        &server.uri(),
    );
    (server, client)
}

/// Mounts an authenticated GET handler for `route`
pub async fn mount_get(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(json_response(200, body))
        .expect(1)
        .mount(server)
        .await;
}

pub fn packages_route() -> String {
    format!("/zones/{}/firewall/waf/packages", ZONE_ID)
}

pub fn package_route() -> String {
    format!("{}/{}", packages_route(), PACKAGE_ID)
}
