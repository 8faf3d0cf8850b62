use serde::{Deserialize, Serialize};

use crate::types::StatusType;
use crate::wire::wire_enum;
use crate::zbx_client::Resource;

use super::common::UserGroupId;

wire_enum! {
    pub enum DebugMode {
        Disabled = 0,
        Enabled = 1,
    }
}

wire_enum! {
    /// Frontend authentication method (`gui_access`).
    pub enum GuiAccess {
        SystemDefault = 0,
        Internal = 1,
        Ldap = 2,
        Disabled = 3,
    }
}

/// User group object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    #[serde(rename = "usrgrpid", skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_mode: Option<DebugMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gui_access: Option<GuiAccess>,
    #[serde(rename = "users_status", skip_serializing_if = "Option::is_none")]
    pub user_status: Option<StatusType>,
}

pub type UserGroups = Vec<UserGroup>;

impl UserGroup {
    #[must_use]
    pub fn as_ref_id(&self) -> UserGroupId {
        UserGroupId {
            user_group_id: self.group_id.clone(),
        }
    }
}

impl Resource for UserGroup {
    const OBJECT: &'static str = "usergroup";
    const IDS_KEY: &'static str = "usrgrpids";

    fn id(&self) -> &str {
        &self.group_id
    }

    fn set_id(&mut self, id: String) {
        self.group_id = id;
    }
}
