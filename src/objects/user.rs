use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Result;
use crate::wire::wire_enum;
use crate::zbx_client::{Params, Resource, ZbxClient};

use super::common::UserGroupId;

wire_enum! {
    /// User `type`; replaced by roles in Zabbix 5.2.
    pub enum UserType {
        User = 1,
        Admin = 2,
        SuperAdmin = 3,
    }
}

/// User object.
///
/// The login name is `alias` before Zabbix 5.4 and `username` from 5.4 on;
/// both are carried and whichever is empty is left out of requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "userid", skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alias: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub surname: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(rename = "roleid", skip_serializing_if = "String::is_empty")]
    pub role_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Write-only; required on create.
    #[serde(rename = "passwd", skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "usrgrps", skip_serializing_if = "Vec::is_empty")]
    pub user_groups: Vec<UserGroupId>,
}

pub type Users = Vec<User>;

impl User {
    /// Login name, whichever field the server filled.
    #[must_use]
    pub fn login_name(&self) -> &str {
        if self.username.is_empty() {
            &self.alias
        } else {
            &self.username
        }
    }
}

impl Resource for User {
    const OBJECT: &'static str = "user";
    const IDS_KEY: &'static str = "userids";

    fn id(&self) -> &str {
        &self.user_id
    }

    fn set_id(&mut self, id: String) {
        self.user_id = id;
    }
}

impl ZbxClient {
    /// Users whose login name is `name`, on servers before and after the
    /// `alias` to `username` rename.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn users_get_by_username(&self, name: &str) -> Result<Users> {
        self.get(Params::new().with(
            "filter",
            json!({ "alias": name, "username": name }),
        ))
        .await
    }
}
