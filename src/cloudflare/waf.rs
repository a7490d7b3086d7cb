use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a WAF package decides to act on a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    Traditional,
    Anomaly,
    /// Value this client does not know, kept verbatim
    #[serde(untagged)]
    Unknown(String),
}

/// Sensitivity of an anomaly detection package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    High,
    Medium,
    Low,
    Off,
    #[serde(untagged)]
    #[value(skip)]
    Unknown(String),
}

/// Action taken by an anomaly package when its threshold is exceeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    Simulate,
    Block,
    Challenge,
    #[serde(untagged)]
    #[value(skip)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    On,
    Off,
    #[serde(untagged)]
    #[value(skip)]
    Unknown(String),
}

/// Mode of a single WAF rule
///
/// Anomaly packages use `on`/`off`; traditional packages use the
/// `default`/`disable`/`simulate`/`block`/`challenge` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuleMode {
    On,
    Off,
    Default,
    Disable,
    Simulate,
    Block,
    Challenge,
    #[serde(untagged)]
    #[value(skip)]
    Unknown(String),
}

/// A named bundle of WAF rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub zone_id: String,
    pub detection_mode: DetectionMode,
    /// Only set for anomaly packages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Sensitivity>,
    /// Only set for anomaly packages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_mode: Option<ActionMode>,
}

/// Fields that can be changed on a package. Unset fields are left out of
/// the request body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WafPackageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Sensitivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_mode: Option<ActionMode>,
}

impl WafPackageOptions {
    pub fn is_empty(&self) -> bool {
        self.sensitivity.is_none() && self.action_mode.is_none()
    }

    pub(crate) fn has_unknown(&self) -> bool {
        matches!(self.sensitivity, Some(Sensitivity::Unknown(_)))
            || matches!(self.action_mode, Some(ActionMode::Unknown(_)))
    }
}

/// A subset of a package's rules that is toggled together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules_count: u32,
    #[serde(default)]
    pub modified_rules_count: u32,
    pub package_id: String,
    pub mode: GroupMode,
    #[serde(default)]
    pub allowed_modes: Vec<GroupMode>,
}

impl GroupMode {
    pub fn is_known(&self) -> bool {
        !matches!(self, GroupMode::Unknown(_))
    }
}

impl WafGroup {
    pub fn allows(&self, mode: &GroupMode) -> bool {
        self.allowed_modes.contains(mode)
    }
}

/// Reference from a rule to the group it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WafGroupRef {
    pub id: String,
    pub name: String,
}

/// An individual WAF rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafRule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Integer encoded as a string on the wire
    pub priority: String,
    pub package_id: String,
    pub group: WafGroupRef,
    pub mode: RuleMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<RuleMode>,
    #[serde(default)]
    pub allowed_modes: Vec<RuleMode>,
}

impl RuleMode {
    pub fn is_known(&self) -> bool {
        !matches!(self, RuleMode::Unknown(_))
    }
}

impl WafRule {
    pub fn allows(&self, mode: &RuleMode) -> bool {
        self.allowed_modes.contains(mode)
    }

    /// Numeric priority, if the server sent a parseable one
    pub fn priority_value(&self) -> Option<i64> {
        self.priority.trim().parse().ok()
    }
}

/// PATCH body for group and rule mode changes
#[derive(Debug, Serialize)]
pub(crate) struct ModeUpdate<M> {
    pub mode: M,
}
