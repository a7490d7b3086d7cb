use async_trait::async_trait;

use crate::cloudflare::client::WafClient;
use crate::cloudflare::waf::{GroupMode, RuleMode, WafGroup, WafPackage, WafPackageOptions, WafRule};
use crate::error::WafResult;

/// The WAF operations, abstracted so callers can swap in a test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WafApi: Send + Sync {
    async fn list_packages(&self, zone_id: &str) -> WafResult<Vec<WafPackage>>;

    async fn get_package(&self, zone_id: &str, package_id: &str) -> WafResult<WafPackage>;

    async fn update_package(
        &self,
        zone_id: &str,
        package_id: &str,
        options: &WafPackageOptions,
    ) -> WafResult<WafPackage>;

    async fn list_groups(&self, zone_id: &str, package_id: &str) -> WafResult<Vec<WafGroup>>;

    async fn get_group(&self, zone_id: &str, package_id: &str, group_id: &str) -> WafResult<WafGroup>;

    async fn update_group(
        &self,
        zone_id: &str,
        package_id: &str,
        group_id: &str,
        mode: GroupMode,
    ) -> WafResult<WafGroup>;

    async fn list_rules(&self, zone_id: &str, package_id: &str) -> WafResult<Vec<WafRule>>;

    async fn get_rule(&self, zone_id: &str, package_id: &str, rule_id: &str) -> WafResult<WafRule>;

    async fn update_rule(
        &self,
        zone_id: &str,
        package_id: &str,
        rule_id: &str,
        mode: RuleMode,
    ) -> WafResult<WafRule>;
}

#[async_trait]
impl WafApi for WafClient {
    async fn list_packages(&self, zone_id: &str) -> WafResult<Vec<WafPackage>> {
        WafClient::list_packages(self, zone_id).await
    }

    async fn get_package(&self, zone_id: &str, package_id: &str) -> WafResult<WafPackage> {
        WafClient::get_package(self, zone_id, package_id).await
    }

    async fn update_package(
        &self,
        zone_id: &str,
        package_id: &str,
        options: &WafPackageOptions,
    ) -> WafResult<WafPackage> {
        WafClient::update_package(self, zone_id, package_id, options).await
    }

    async fn list_groups(&self, zone_id: &str, package_id: &str) -> WafResult<Vec<WafGroup>> {
        WafClient::list_groups(self, zone_id, package_id).await
    }

    async fn get_group(&self, zone_id: &str, package_id: &str, group_id: &str) -> WafResult<WafGroup> {
        WafClient::get_group(self, zone_id, package_id, group_id).await
    }

    async fn update_group(
        &self,
        zone_id: &str,
        package_id: &str,
        group_id: &str,
        mode: GroupMode,
    ) -> WafResult<WafGroup> {
        WafClient::update_group(self, zone_id, package_id, group_id, mode).await
    }

    async fn list_rules(&self, zone_id: &str, package_id: &str) -> WafResult<Vec<WafRule>> {
        WafClient::list_rules(self, zone_id, package_id).await
    }

    async fn get_rule(&self, zone_id: &str, package_id: &str, rule_id: &str) -> WafResult<WafRule> {
        WafClient::get_rule(self, zone_id, package_id, rule_id).await
    }

    async fn update_rule(
        &self,
        zone_id: &str,
        package_id: &str,
        rule_id: &str,
        mode: RuleMode,
    ) -> WafResult<WafRule> {
        WafClient::update_rule(self, zone_id, package_id, rule_id, mode).await
    }
}
