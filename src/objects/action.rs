use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::types::{EvaluationType, StatusType};
use crate::wire::{NumStr, wire_enum};
use crate::zbx_client::{Params, Resource};

use super::event::EventSource;

wire_enum! {
    /// Whether escalation pauses during maintenance (`pause_suppressed`).
    pub enum PauseType {
        DontPause = 0,
        Pause = 1,
    }
}

wire_enum! {
    /// `conditiontype` of filter and operation conditions.
    pub enum ConditionType {
        HostGroup = 0,
        Host = 1,
        Trigger = 2,
        TriggerName = 3,
        TriggerSeverity = 4,
        TimePeriod = 6,
        HostIp = 7,
        DiscoveredServiceType = 8,
        DiscoveredServicePort = 9,
        DiscoveryStatus = 10,
        UptimeOrDowntimeDuration = 11,
        ReceivedValue = 12,
        HostTemplate = 13,
        EventAcknowledged = 14,
        Application = 15,
        ProblemIsSuppressed = 16,
        DiscoveryRule = 18,
        DiscoveryCheck = 19,
        Proxy = 20,
        DiscoveryObject = 21,
        HostName = 22,
        EventType = 23,
        HostMetadata = 24,
        EventTag = 25,
        EventTagValue = 26,
    }
}

wire_enum! {
    /// Condition `operator`.
    pub enum ConditionOperator {
        Equals = 0,
        DoesNotEqual = 1,
        Contains = 2,
        DoesNotContain = 3,
        In = 4,
        GreaterOrEqual = 5,
        LessOrEqual = 6,
        NotIn = 7,
        Matches = 8,
        DoesNotMatch = 9,
        Yes = 10,
        No = 11,
    }
}

wire_enum! {
    /// `operationtype`.
    pub enum OperationType {
        SendMessage = 0,
        RemoteCommand = 1,
        AddHost = 2,
        RemoveHost = 3,
        AddToHostGroup = 4,
        RemoveFromHostGroup = 5,
        LinkToTemplate = 6,
        UnlinkFromTemplate = 7,
        EnableHost = 8,
        DisableHost = 9,
        SetHostInventoryMode = 10,
        NotifyRecoveryAllInvolved = 11,
        NotifyUpdateAllInvolved = 12,
    }
}

wire_enum! {
    /// `type` of a remote command.
    pub enum CommandType {
        CustomScript = 0,
        Ipmi = 1,
        Ssh = 2,
        Telnet = 3,
        GlobalScript = 4,
    }
}

wire_enum! {
    /// SSH command `authtype`.
    pub enum CommandAuthType {
        Password = 0,
        PublicKey = 1,
    }
}

wire_enum! {
    /// Where a custom script runs (`execute_on`).
    pub enum CommandExecutor {
        Agent = 0,
        Server = 1,
        Proxy = 2,
    }
}

/// Action filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionFilter {
    pub conditions: Vec<ActionFilterCondition>,
    #[serde(rename = "evaltype")]
    pub eval_type: EvaluationType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formula: String,
    #[serde(skip_serializing)]
    pub eval_formula: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionFilterCondition {
    #[serde(rename = "conditionid", skip_serializing_if = "String::is_empty")]
    pub condition_id: String,
    #[serde(rename = "conditiontype")]
    pub condition_type: ConditionType,
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value2: String,
    #[serde(rename = "formulaid", skip_serializing_if = "String::is_empty")]
    pub formula_id: String,
    pub operator: ConditionOperator,
}

/// Remote command run by an operation (`opcommand`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationCommand {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "type")]
    pub command_type: CommandType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command: String,
    #[serde(rename = "authtype", skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<CommandAuthType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_on: Option<CommandExecutor>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,
    #[serde(rename = "privatekey", skip_serializing_if = "String::is_empty")]
    pub private_key: String,
    #[serde(rename = "publickey", skip_serializing_if = "String::is_empty")]
    pub public_key: String,
    #[serde(rename = "scriptid", skip_serializing_if = "String::is_empty")]
    pub script_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationCommandHostGroup {
    #[serde(rename = "opcommand_grpid", skip_serializing_if = "String::is_empty")]
    pub command_host_group_id: String,
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "groupid")]
    pub group_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationCommandHost {
    #[serde(rename = "opcommand_hstid", skip_serializing_if = "String::is_empty")]
    pub command_host_id: String,
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    /// `"0"` targets the host that produced the event.
    #[serde(rename = "hostid")]
    pub host_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationCondition {
    #[serde(rename = "opconditionid", skip_serializing_if = "String::is_empty")]
    pub condition_id: String,
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "conditiontype")]
    pub condition_type: ConditionType,
    pub value: String,
    pub operator: ConditionOperator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationHostGroup {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "groupid")]
    pub group_id: String,
}

/// Message sent by an operation (`opmessage`).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationMessage {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    /// `1` to use the message template of the media type.
    #[serde_as(as = "NumStr")]
    pub default_msg: u8,
    /// `"0"` sends through every media type.
    #[serde(rename = "mediatypeid")]
    pub media_type_id: String,
    pub message: String,
    pub subject: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationMessageUserGroup {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "usrgrpid")]
    pub user_group_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationMessageUser {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "userid")]
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationTemplate {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "templateid")]
    pub template_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationInventory {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    pub inventory_mode: String,
}

/// Targets and payload shared by every operation kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationTargets {
    #[serde(rename = "opcommand", skip_serializing_if = "Option::is_none")]
    pub command: Option<OperationCommand>,
    #[serde(rename = "opcommand_grp", skip_serializing_if = "Vec::is_empty")]
    pub command_host_groups: Vec<OperationCommandHostGroup>,
    #[serde(rename = "opcommand_hst", skip_serializing_if = "Vec::is_empty")]
    pub command_hosts: Vec<OperationCommandHost>,
    #[serde(rename = "opmessage", skip_serializing_if = "Option::is_none")]
    pub message: Option<OperationMessage>,
    #[serde(rename = "opmessage_grp", skip_serializing_if = "Vec::is_empty")]
    pub message_user_groups: Vec<OperationMessageUserGroup>,
    #[serde(rename = "opmessage_usr", skip_serializing_if = "Vec::is_empty")]
    pub message_users: Vec<OperationMessageUser>,
}

/// Escalation step run while the problem is open.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionOperation {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "operationtype")]
    pub operation_type: OperationType,
    #[serde(rename = "actionid", skip_serializing_if = "String::is_empty")]
    pub action_id: String,
    #[serde(rename = "esc_period", skip_serializing_if = "String::is_empty")]
    pub period: String,
    #[serde(rename = "esc_step_from", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub step_from: Option<u32>,
    #[serde(rename = "esc_step_to", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub step_to: Option<u32>,
    #[serde(rename = "evaltype", skip_serializing_if = "Option::is_none")]
    pub eval_type: Option<EvaluationType>,
    #[serde(flatten)]
    pub targets: OperationTargets,
    #[serde(rename = "opconditions", skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<OperationCondition>,
    #[serde(rename = "opgroup", skip_serializing_if = "Vec::is_empty")]
    pub host_groups: Vec<OperationHostGroup>,
    #[serde(rename = "optemplate", skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<OperationTemplate>,
    #[serde(rename = "opinventory", skip_serializing_if = "Option::is_none")]
    pub inventory: Option<OperationInventory>,
}

/// Operation run once the problem is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRecoveryOperation {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "operationtype")]
    pub operation_type: OperationType,
    #[serde(rename = "actionid", skip_serializing_if = "String::is_empty")]
    pub action_id: String,
    #[serde(flatten)]
    pub targets: OperationTargets,
}

/// Operation run when the problem is updated or acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionUpdateOperation {
    #[serde(rename = "operationid", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(rename = "operationtype")]
    pub operation_type: OperationType,
    #[serde(flatten)]
    pub targets: OperationTargets,
}

/// Action object.
///
/// The filter and operation lists are only returned when selected, which
/// `get_by_id` does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    #[serde(rename = "actionid", skip_serializing_if = "String::is_empty")]
    pub action_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Required on create; cannot be changed by `update`.
    #[serde(rename = "eventsource", skip_serializing_if = "Option::is_none")]
    pub event_source: Option<EventSource>,
    #[serde(rename = "esc_period", skip_serializing_if = "String::is_empty")]
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_suppressed: Option<PauseType>,

    // message templates, dropped in Zabbix 5.0
    #[serde(rename = "def_shortdata", skip_serializing_if = "String::is_empty")]
    pub default_subject: String,
    #[serde(rename = "def_longdata", skip_serializing_if = "String::is_empty")]
    pub default_message: String,
    #[serde(rename = "r_shortdata", skip_serializing_if = "String::is_empty")]
    pub recovery_subject: String,
    #[serde(rename = "r_longdata", skip_serializing_if = "String::is_empty")]
    pub recovery_message: String,
    #[serde(rename = "ack_shortdata", skip_serializing_if = "String::is_empty")]
    pub ack_subject: String,
    #[serde(rename = "ack_longdata", skip_serializing_if = "String::is_empty")]
    pub ack_message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ActionFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<ActionOperation>,
    #[serde(rename = "recoveryOperations", skip_serializing_if = "Vec::is_empty")]
    pub recovery_operations: Vec<ActionRecoveryOperation>,
    #[serde(
        rename = "acknowledgeOperations",
        alias = "update_operations",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub update_operations: Vec<ActionUpdateOperation>,
}

pub type Actions = Vec<Action>;

impl Resource for Action {
    const OBJECT: &'static str = "action";
    const IDS_KEY: &'static str = "actionids";

    fn id(&self) -> &str {
        &self.action_id
    }

    fn set_id(&mut self, id: String) {
        self.action_id = id;
    }

    /// Also selects the filter and every operation list.
    fn by_id_params(id: &str) -> Params {
        Params::new()
            .with(Self::IDS_KEY, id)
            .with("selectFilter", "extend")
            .with("selectOperations", "extend")
            .with("selectRecoveryOperations", "extend")
            .with("selectAcknowledgeOperations", "extend")
    }
}
