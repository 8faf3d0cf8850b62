//! Small reference objects the API embeds inside larger ones.

use serde::{Deserialize, Serialize};

/// `{"groupid": "..."}` as used in host and template `groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroupId {
    #[serde(rename = "groupid")]
    pub group_id: String,
}

/// `{"templateid": "..."}` as used in `templates` and `templates_clear`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateId {
    #[serde(rename = "templateid")]
    pub template_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostId {
    #[serde(rename = "hostid")]
    pub host_id: String,
}

/// Trigger dependency reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerId {
    #[serde(rename = "triggerid")]
    pub trigger_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupId {
    #[serde(rename = "usrgrpid")]
    pub user_group_id: String,
}

/// User macro attached to a host or template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    #[serde(
        rename = "hostmacroid",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub macro_id: String,
    #[serde(rename = "macro")]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
    #[serde(default)]
    pub value: String,
}

impl From<&str> for HostGroupId {
    fn from(id: &str) -> Self {
        Self {
            group_id: id.to_string(),
        }
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self {
            template_id: id.to_string(),
        }
    }
}

impl From<&str> for TriggerId {
    fn from(id: &str) -> Self {
        Self {
            trigger_id: id.to_string(),
        }
    }
}
