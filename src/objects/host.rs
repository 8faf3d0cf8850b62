use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Result;
use crate::types::{AvailableType, InventoryMode, StatusType};
use crate::zbx_client::ops::exactly_one;
use crate::zbx_client::{Params, Resource, ZbxClient};

use super::common::{HostGroupId, Macro, Tag, TemplateId};
use super::host_group::HostGroup;
use super::host_interface::HostInterface;

/// Host object.
///
/// `groups`, `interfaces`, `templates` and `macros` are only returned when
/// the matching `select*` parameter is passed to `get`; they are left out of
/// requests when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    #[serde(rename = "hostid", skip_serializing_if = "String::is_empty")]
    pub host_id: String,
    /// Technical name; required on create.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Visible name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_mode: Option<InventoryMode>,
    #[serde(rename = "proxy_hostid", skip_serializing_if = "String::is_empty")]
    pub proxy_host_id: String,
    /// Read-only, dropped from the host object in 5.0.
    #[serde(skip_serializing)]
    pub available: Option<AvailableType>,
    /// Read-only.
    #[serde(skip_serializing)]
    pub error: String,

    #[serde(rename = "groups", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<HostGroupId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<HostInterface>,
    #[serde(rename = "templates", skip_serializing_if = "Vec::is_empty")]
    pub template_ids: Vec<TemplateId>,
    /// Templates to unlink and clear; update only.
    #[serde(
        rename = "templates_clear",
        skip_deserializing,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub template_ids_clear: Vec<TemplateId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub macros: Vec<Macro>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

pub type Hosts = Vec<Host>;

impl Resource for Host {
    const OBJECT: &'static str = "host";
    const IDS_KEY: &'static str = "hostids";

    fn id(&self) -> &str {
        &self.host_id
    }

    fn set_id(&mut self, id: String) {
        self.host_id = id;
    }
}

impl ZbxClient {
    /// Hosts belonging to any of the given host group ids.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn hosts_get_by_host_group_ids(&self, ids: &[String]) -> Result<Hosts> {
        self.get(Params::new().with("groupids", ids.to_vec())).await
    }

    /// Hosts belonging to any of `groups`.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn hosts_get_by_host_groups(&self, groups: &[HostGroup]) -> Result<Hosts> {
        let ids: Vec<String> = groups.iter().map(|g| g.group_id.clone()).collect();
        self.hosts_get_by_host_group_ids(&ids).await
    }

    /// Look up a host by technical name.
    ///
    /// # Errors
    ///
    /// [`crate::error::ZbxError::ExpectedOneResult`] unless exactly one host
    /// has that name.
    pub async fn host_get_by_host(&self, host: &str) -> Result<Host> {
        let found = self
            .get::<Host>(Params::new().with("filter", json!({ "host": host })))
            .await?;
        exactly_one(found)
    }
}
