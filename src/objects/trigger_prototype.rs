use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::types::{SeverityType, StatusType};
use crate::wire::NumStr;
use crate::zbx_client::Resource;

use super::common::{HostId, Tag, TriggerId};
use super::trigger::{CorrelationMode, RecoveryMode, TriggerFunction};

/// Trigger prototype; its expression references item prototypes.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerPrototype {
    #[serde(rename = "triggerid", skip_serializing_if = "String::is_empty")]
    pub trigger_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expression: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<SeverityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
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
    /// Triggers or trigger prototypes this one depends on.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<TriggerId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    // read-only
    #[serde(rename = "templateid", skip_serializing)]
    pub template_id: String,
    #[serde(skip_serializing)]
    pub functions: Vec<TriggerFunction>,
    #[serde(skip_serializing)]
    pub hosts: Vec<HostId>,
}

pub type TriggerPrototypes = Vec<TriggerPrototype>;

impl Resource for TriggerPrototype {
    const OBJECT: &'static str = "triggerprototype";
    const IDS_KEY: &'static str = "triggerids";

    fn id(&self) -> &str {
        &self.trigger_id
    }

    fn set_id(&mut self, id: String) {
        self.trigger_id = id;
    }
}
