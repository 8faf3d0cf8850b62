use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Result;
use crate::zbx_client::ops::exactly_one;
use crate::zbx_client::{Params, Resource, ZbxClient};

/// Application object; removed from the API in Zabbix 5.4 in favour of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    #[serde(rename = "applicationid", skip_serializing_if = "String::is_empty")]
    pub application_id: String,
    #[serde(rename = "hostid", skip_serializing_if = "String::is_empty")]
    pub host_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Read-only; ids of the template applications this one inherits from.
    #[serde(rename = "templateids", skip_serializing)]
    pub template_ids: Vec<String>,
}

pub type Applications = Vec<Application>;

impl Resource for Application {
    const OBJECT: &'static str = "application";
    const IDS_KEY: &'static str = "applicationids";

    fn id(&self) -> &str {
        &self.application_id
    }

    fn set_id(&mut self, id: String) {
        self.application_id = id;
    }
}

impl ZbxClient {
    /// Applications defined on one host or template.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn applications_get_by_host_id(&self, host_id: &str) -> Result<Applications> {
        self.get(Params::new().with("hostids", host_id)).await
    }

    /// The application called `name` on `host_id`.
    ///
    /// # Errors
    ///
    /// [`crate::error::ZbxError::ExpectedOneResult`] unless exactly one
    /// application matches.
    pub async fn application_get_by_host_id_and_name(
        &self,
        host_id: &str,
        name: &str,
    ) -> Result<Application> {
        let found = self
            .get::<Application>(
                Params::new()
                    .with("hostids", host_id)
                    .with("filter", json!({ "name": name })),
            )
            .await?;
        exactly_one(found)
    }
}
