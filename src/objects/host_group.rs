use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::wire::NumStr;
use crate::zbx_client::Resource;

use super::common::HostGroupId;

/// Host group object.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostGroup {
    #[serde(rename = "groupid", skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Read-only; `1` for groups Zabbix needs internally.
    #[serde(skip_serializing)]
    #[serde_as(deserialize_as = "Option<NumStr>")]
    pub internal: Option<u8>,
    /// Read-only; `4` for groups created by discovery.
    #[serde(skip_serializing)]
    #[serde_as(deserialize_as = "Option<NumStr>")]
    pub flags: Option<u8>,
}

pub type HostGroups = Vec<HostGroup>;

impl HostGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Reference form used in host and template `groups`.
    #[must_use]
    pub fn as_ref_id(&self) -> HostGroupId {
        HostGroupId {
            group_id: self.group_id.clone(),
        }
    }
}

impl Resource for HostGroup {
    const OBJECT: &'static str = "hostgroup";
    const IDS_KEY: &'static str = "groupids";

    fn id(&self) -> &str {
        &self.group_id
    }

    fn set_id(&mut self, id: String) {
        self.group_id = id;
    }
}
