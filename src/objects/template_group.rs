use serde::{Deserialize, Serialize};

use crate::zbx_client::Resource;

use super::common::HostGroupId;

/// Template group object, available from Zabbix 6.2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateGroup {
    #[serde(rename = "groupid", skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing)]
    pub uuid: String,
}

pub type TemplateGroups = Vec<TemplateGroup>;

impl TemplateGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Templates reference their groups with the same `{"groupid"}` shape
    /// as hosts do.
    #[must_use]
    pub fn as_ref_id(&self) -> HostGroupId {
        HostGroupId {
            group_id: self.group_id.clone(),
        }
    }
}

impl Resource for TemplateGroup {
    const OBJECT: &'static str = "templategroup";
    const IDS_KEY: &'static str = "groupids";

    fn id(&self) -> &str {
        &self.group_id
    }

    fn set_id(&mut self, id: String) {
        self.group_id = id;
    }
}
