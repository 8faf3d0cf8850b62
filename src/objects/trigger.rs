use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::types::{SeverityType, StatusType};
use crate::wire::{NumStr, wire_enum};
use crate::zbx_client::Resource;

use super::common::{HostId, Tag, TriggerId};

wire_enum! {
    /// How the problem is resolved (`recovery_mode`).
    pub enum RecoveryMode {
        Expression = 0,
        RecoveryExpression = 1,
        NoRecovery = 2,
    }
}

wire_enum! {
    /// Which problems an OK event closes (`correlation_mode`).
    pub enum CorrelationMode {
        AllProblems = 0,
        MatchingTag = 1,
    }
}

wire_enum! {
    /// Trigger `value`.
    pub enum TriggerValue {
        Ok = 0,
        Problem = 1,
    }
}

/// Function used in a trigger expression; returned with `selectFunctions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerFunction {
    #[serde(rename = "functionid")]
    pub function_id: String,
    #[serde(rename = "itemid")]
    pub item_id: String,
    pub function: String,
    pub parameter: String,
}

/// Trigger object.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
    #[serde(rename = "triggerid", skip_serializing_if = "String::is_empty")]
    pub trigger_id: String,
    /// Trigger name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expression: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub event_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub opdata: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<SeverityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
    /// `1` to generate a problem event on every failed evaluation.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub trigger_type: Option<u8>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_mode: Option<RecoveryMode>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recovery_expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_mode: Option<CorrelationMode>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub correlation_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub manual_close: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<TriggerId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    // read-only
    #[serde(rename = "templateid", skip_serializing)]
    pub template_id: String,
    #[serde(skip_serializing)]
    pub value: Option<TriggerValue>,
    #[serde(skip_serializing)]
    pub error: String,
    #[serde(skip_serializing)]
    #[serde_as(deserialize_as = "Option<NumStr>")]
    pub lastchange: Option<i64>,
    #[serde(skip_serializing)]
    pub functions: Vec<TriggerFunction>,
    /// Hosts the trigger belongs to; filled with `selectHosts`.
    #[serde(skip_serializing)]
    pub hosts: Vec<HostId>,
}

pub type Triggers = Vec<Trigger>;

impl Trigger {
    #[must_use]
    pub fn as_ref_id(&self) -> TriggerId {
        TriggerId {
            trigger_id: self.trigger_id.clone(),
        }
    }
}

impl Resource for Trigger {
    const OBJECT: &'static str = "trigger";
    const IDS_KEY: &'static str = "triggerids";

    fn id(&self) -> &str {
        &self.trigger_id
    }

    fn set_id(&mut self, id: String) {
        self.trigger_id = id;
    }
}
