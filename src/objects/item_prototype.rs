use serde::{Deserialize, Serialize};

use crate::types::StatusType;
use crate::zbx_client::Resource;

use super::common::{HostId, Tag};
use super::item::{DataType, DeltaType, ItemCredentials, ItemType, Preprocessing, ValueType};
use super::lld_rule::LldRule;

/// Item prototype, instantiated by its discovery rule (`ruleid`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPrototype {
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
    /// Discovery rule the prototype belongs to; required on create.
    #[serde(rename = "ruleid", skip_serializing_if = "String::is_empty")]
    pub rule_id: String,
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
    pub logtimefmt: String,
    #[serde(rename = "valuemapid", skip_serializing_if = "String::is_empty")]
    pub value_map_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
    #[serde(flatten)]
    pub credentials: ItemCredentials,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preprocessing: Vec<Preprocessing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    // read-only
    #[serde(rename = "templateid", skip_serializing)]
    pub template_id: String,
    /// Filled when `selectDiscoveryRule` is passed.
    #[serde(rename = "discoveryRule", skip_serializing)]
    pub discovery_rule: Option<LldRule>,
    #[serde(skip_serializing)]
    pub hosts: Vec<HostId>,
}

pub type ItemPrototypes = Vec<ItemPrototype>;

impl Resource for ItemPrototype {
    const OBJECT: &'static str = "itemprototype";
    const IDS_KEY: &'static str = "itemids";
    const DELETED_IDS_KEY: &'static str = "prototypeids";

    fn id(&self) -> &str {
        &self.item_id
    }

    fn set_id(&mut self, id: String) {
        self.item_id = id;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::ItemPrototype;

    #[test]
    fn rule_id_is_sent_and_discovery_rule_is_not() {
        let prototype: ItemPrototype = serde_json::from_value(json!({
            "itemid": "23800",
            "type": "0",
            "hostid": "10084",
            "ruleid": "23799",
            "name": "Free disk space on {#FSNAME}",
            "key_": "vfs.fs.size[{#FSNAME},free]",
            "delay": "1m",
            "value_type": "3",
            "discoveryRule": {"itemid": "23799", "name": "Mounted filesystem discovery"}
        }))
        .unwrap();
        assert_eq!(
            prototype.discovery_rule.as_ref().map(|rule| rule.item_id.as_str()),
            Some("23799")
        );

        let encoded = serde_json::to_value(&prototype).unwrap();
        assert_eq!(encoded["ruleid"], json!("23799"));
        assert!(encoded.get("discoveryRule").is_none());
    }
}
