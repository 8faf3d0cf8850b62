use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::types::AvailableType;
use crate::wire::{NumStr, object_or_empty_array, wire_enum};
use crate::zbx_client::Resource;

wire_enum! {
    /// Interface `type`.
    pub enum InterfaceType {
        Agent = 1,
        Snmp = 2,
        Ipmi = 3,
        Jmx = 4,
    }
}

/// SNMP settings of an interface (`details`).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDetails {
    #[serde_as(as = "NumStr")]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub bulk: Option<u8>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub community: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub securityname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub securitylevel: Option<u8>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authpassphrase: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub privpassphrase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub authprotocol: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<NumStr>")]
    pub privprotocol: Option<u8>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contextname: String,
}

/// Host interface object.
///
/// `details` comes back as `[]` for non-SNMP interfaces; it decodes to
/// `None` and is left out of requests.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInterface {
    #[serde(rename = "interfaceid", skip_serializing_if = "String::is_empty")]
    pub interface_id: String,
    #[serde(rename = "hostid", skip_serializing_if = "String::is_empty")]
    pub host_id: String,
    pub dns: String,
    pub ip: String,
    #[serde_as(as = "NumStr")]
    pub main: u8,
    pub port: String,
    #[serde(rename = "type")]
    pub interface_type: InterfaceType,
    #[serde(rename = "useip")]
    #[serde_as(as = "NumStr")]
    pub use_ip: u8,
    #[serde(
        deserialize_with = "object_or_empty_array",
        skip_serializing_if = "Option::is_none"
    )]
    pub details: Option<InterfaceDetails>,
    /// Read-only.
    #[serde(skip_serializing)]
    pub available: Option<AvailableType>,
}

pub type HostInterfaces = Vec<HostInterface>;

impl Resource for HostInterface {
    const OBJECT: &'static str = "hostinterface";
    const IDS_KEY: &'static str = "interfaceids";

    fn id(&self) -> &str {
        &self.interface_id
    }

    fn set_id(&mut self, id: String) {
        self.interface_id = id;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::{HostInterface, InterfaceType};

    #[test]
    fn agent_interface_with_empty_details_array() {
        let iface: HostInterface = serde_json::from_value(json!({
            "interfaceid": "1",
            "hostid": "10084",
            "main": "1",
            "type": "1",
            "useip": "1",
            "ip": "127.0.0.1",
            "dns": "",
            "port": "10050",
            "available": "1",
            "details": []
        }))
        .unwrap();
        assert_eq!(iface.interface_type, InterfaceType::Agent);
        assert!(iface.details.is_none());
        assert_eq!(iface.main, 1);

        let encoded = serde_json::to_value(&iface).unwrap();
        assert!(encoded.get("details").is_none());
        assert!(encoded.get("available").is_none());
        assert_eq!(encoded["useip"], json!("1"));
    }

    #[test]
    fn snmp_interface_keeps_details() {
        let iface: HostInterface = serde_json::from_value(json!({
            "interfaceid": "2",
            "main": "1",
            "type": "2",
            "useip": "1",
            "ip": "10.0.0.5",
            "dns": "",
            "port": "161",
            "details": {"version": "2", "bulk": "1", "community": "{$SNMP_COMMUNITY}"}
        }))
        .unwrap();
        let details = iface.details.unwrap();
        assert_eq!(details.version, 2);
        assert_eq!(details.bulk, Some(1));
        assert_eq!(details.community, "{$SNMP_COMMUNITY}");
    }
}
