use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::Result;
use crate::types::StatusType;
use crate::wire::{NumStr, wire_enum};
use crate::zbx_client::{Params, Resource, ZbxClient};

use super::common::{HostId, Tag};

wire_enum! {
    /// Item `type`, shared by item prototypes and discovery rules.
    pub enum ItemType {
        ZabbixAgent = 0,
        SnmpV1Agent = 1,
        ZabbixTrapper = 2,
        SimpleCheck = 3,
        SnmpV2Agent = 4,
        ZabbixInternal = 5,
        SnmpV3Agent = 6,
        ZabbixAgentActive = 7,
        ZabbixAggregate = 8,
        WebItem = 9,
        ExternalCheck = 10,
        DatabaseMonitor = 11,
        Ipmi = 12,
        Ssh = 13,
        Telnet = 14,
        Calculated = 15,
        Jmx = 16,
        SnmpTrap = 17,
        Dependent = 18,
        HttpAgent = 19,
        Snmp = 20,
        Script = 21,
    }
}

wire_enum! {
    /// Type of information the item stores.
    pub enum ValueType {
        Float = 0,
        Character = 1,
        Log = 2,
        Unsigned = 3,
        Text = 4,
    }
}

wire_enum! {
    /// Integer representation of unsigned items; removed in Zabbix 3.4.
    pub enum DataType {
        Decimal = 0,
        Octal = 1,
        Hexadecimal = 2,
        Boolean = 3,
    }
}

wire_enum! {
    /// Value stored in the database; replaced by preprocessing in 3.4.
    pub enum DeltaType {
        AsIs = 0,
        SpeedPerSecond = 1,
        SimpleChange = 2,
    }
}

/// Legacy SNMP and agent credentials carried directly on item-like objects.
///
/// Flattened into [`Item`], [`super::ItemPrototype`] and [`super::LldRule`].
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCredentials {
    #[serde(rename = "authtype", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub auth_type: Option<u8>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "publickey", skip_serializing_if = "String::is_empty")]
    pub public_key: String,
    #[serde(rename = "privatekey", skip_serializing_if = "String::is_empty")]
    pub private_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_community: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_oid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_securityname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub snmpv3_securitylevel: Option<u8>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_authpassphrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub snmpv3_authprotocol: Option<u8>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_privpassphrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub snmpv3_privprotocol: Option<u8>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_contextname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ipmi_sensor: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trapper_hosts: String,
}

/// One preprocessing step (Zabbix 3.4+).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preprocessing {
    #[serde(rename = "type")]
    #[serde_as(as = "NumStr")]
    pub step_type: u8,
    pub params: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub error_handler: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_handler_params: Option<String>,
}

/// Item object.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "itemid", skip_serializing_if = "String::is_empty")]
    pub item_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delay: String,
    #[serde(rename = "hostid", skip_serializing_if = "String::is_empty")]
    pub host_id: String,
    #[serde(rename = "interfaceid", skip_serializing_if = "String::is_empty")]
    pub interface_id: String,
    #[serde(rename = "key_", skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<DeltaType>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub history: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trends: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub units: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formula: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub logtimefmt: String,
    #[serde(rename = "valuemapid", skip_serializing_if = "String::is_empty")]
    pub value_map_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
    /// Dependent items only.
    #[serde(rename = "master_itemid", skip_serializing_if = "String::is_empty")]
    pub master_item_id: String,

    // HTTP agent
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_codes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeout: String,

    #[serde(flatten)]
    pub credentials: ItemCredentials,

    /// Application ids; accepted up to Zabbix 5.2.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preprocessing: Vec<Preprocessing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    // read-only
    #[serde(rename = "templateid", skip_serializing)]
    pub template_id: String,
    #[serde(skip_serializing)]
    pub error: String,
    #[serde(skip_serializing)]
    #[serde_as(deserialize_as = "Option<NumStr>")]
    pub lastclock: Option<i64>,
    #[serde(skip_serializing)]
    pub lastvalue: String,
    #[serde(skip_serializing)]
    pub prevvalue: String,
    /// Filled when `selectHosts` is passed.
    #[serde(skip_serializing)]
    pub hosts: Vec<HostId>,
}

pub type Items = Vec<Item>;

impl Resource for Item {
    const OBJECT: &'static str = "item";
    const IDS_KEY: &'static str = "itemids";

    fn id(&self) -> &str {
        &self.item_id
    }

    fn set_id(&mut self, id: String) {
        self.item_id = id;
    }
}

impl ZbxClient {
    /// Items attached to an application (Zabbix before 5.4).
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn items_get_by_application_id(&self, id: &str) -> Result<Items> {
        self.get(Params::new().with("applicationids", id)).await
    }

    /// Items defined on one host or template.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn items_get_by_host_id(&self, id: &str) -> Result<Items> {
        self.get(Params::new().with("hostids", id)).await
    }
}
