//! Command-line front-end over [`WafApi`].

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::cloudflare::{ActionMode, GroupMode, RuleMode, Sensitivity, WafApi, WafPackageOptions};
use crate::error::{WafError, WafResult};

/// Inspect and tune the Web Application Firewall of a Cloudflare zone
#[derive(Debug, Parser)]
#[command(name = "cloudflare-waf", version, about)]
pub struct Cli {
    /// Zone identifier; defaults to the configured zone
    #[arg(long, global = true)]
    pub zone: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the WAF packages of the zone
    Packages,
    /// Show one package
    Package { package_id: String },
    /// Change an anomaly package's sensitivity and/or action mode
    UpdatePackage {
        package_id: String,
        #[arg(long, value_enum)]
        sensitivity: Option<Sensitivity>,
        #[arg(long, value_enum)]
        action_mode: Option<ActionMode>,
    },
    /// List the rule groups of a package
    Groups { package_id: String },
    /// Show one rule group
    Group { package_id: String, group_id: String },
    /// Turn a rule group on or off
    UpdateGroup {
        package_id: String,
        group_id: String,
        #[arg(value_enum)]
        mode: GroupMode,
    },
    /// List the rules of a package
    Rules { package_id: String },
    /// Show one rule
    Rule { package_id: String, rule_id: String },
    /// Set the mode of a rule
    UpdateRule {
        package_id: String,
        rule_id: String,
        #[arg(value_enum)]
        mode: RuleMode,
    },
}

impl Cli {
    /// Zone from the command line, falling back to the configured one
    pub fn zone_id(&self, configured: Option<&str>) -> WafResult<String> {
        self.zone
            .as_deref()
            .or(configured)
            .filter(|zone| !zone.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                WafError::InvalidArgument(
                    "no zone given: pass --zone or set cloudflare.zone_id".to_string(),
                )
            })
    }
}

/// Runs one command and returns its result as JSON
pub async fn run(api: &dyn WafApi, zone_id: &str, command: Command) -> WafResult<Value> {
    let value = match command {
        Command::Packages => serde_json::to_value(api.list_packages(zone_id).await?)?,
        Command::Package { package_id } => {
            serde_json::to_value(api.get_package(zone_id, &package_id).await?)?
        }
        Command::UpdatePackage { package_id, sensitivity, action_mode } => {
            let options = WafPackageOptions { sensitivity, action_mode };
            if options.is_empty() {
                return Err(WafError::InvalidArgument(
                    "nothing to update: pass --sensitivity and/or --action-mode".to_string(),
                ));
            }
            serde_json::to_value(api.update_package(zone_id, &package_id, &options).await?)?
        }
        Command::Groups { package_id } => {
            serde_json::to_value(api.list_groups(zone_id, &package_id).await?)?
        }
        Command::Group { package_id, group_id } => {
            serde_json::to_value(api.get_group(zone_id, &package_id, &group_id).await?)?
        }
        Command::UpdateGroup { package_id, group_id, mode } => {
            serde_json::to_value(api.update_group(zone_id, &package_id, &group_id, mode).await?)?
        }
        Command::Rules { package_id } => {
            serde_json::to_value(api.list_rules(zone_id, &package_id).await?)?
        }
        Command::Rule { package_id, rule_id } => {
            serde_json::to_value(api.get_rule(zone_id, &package_id, &rule_id).await?)?
        }
        Command::UpdateRule { package_id, rule_id, mode } => {
            serde_json::to_value(api.update_rule(zone_id, &package_id, &rule_id, mode).await?)?
        }
    };
    Ok(value)
}
