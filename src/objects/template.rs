use serde::{Deserialize, Serialize};

use crate::zbx_client::Resource;

use super::common::{HostGroupId, HostId, Macro, Tag, TemplateId};

/// Template object.
///
/// Zabbix 6.2 and later require `groups` to reference template groups rather
/// than host groups; the wire shape is the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    #[serde(rename = "templateid", skip_serializing_if = "String::is_empty")]
    pub template_id: String,
    /// Technical name; required on create.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "groups", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<HostGroupId>,
    /// Linked parent templates.
    #[serde(rename = "templates", skip_serializing_if = "Vec::is_empty")]
    pub linked_template_ids: Vec<TemplateId>,
    #[serde(
        rename = "templates_clear",
        skip_deserializing,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub template_ids_clear: Vec<TemplateId>,
    /// Hosts the template is linked to.
    #[serde(rename = "hosts", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<HostId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub macros: Vec<Macro>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

pub type Templates = Vec<Template>;

impl Template {
    #[must_use]
    pub fn as_ref_id(&self) -> TemplateId {
        TemplateId {
            template_id: self.template_id.clone(),
        }
    }
}

impl Resource for Template {
    const OBJECT: &'static str = "template";
    const IDS_KEY: &'static str = "templateids";

    fn id(&self) -> &str {
        &self.template_id
    }

    fn set_id(&mut self, id: String) {
        self.template_id = id;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::Template;
    use crate::objects::common::{HostGroupId, TemplateId};

    #[test]
    fn templates_clear_is_write_only() {
        let template = Template {
            template_id: "10001".to_string(),
            host: "Template OS Linux".to_string(),
            template_ids_clear: vec![TemplateId::from("10050")],
            ..Template::default()
        };
        let encoded = serde_json::to_value(&template).unwrap();
        assert_eq!(encoded["templates_clear"], json!([{"templateid": "10050"}]));

        let decoded: Template = serde_json::from_value(json!({
            "templateid": "10001",
            "host": "Template OS Linux",
            "groups": [{"groupid": "1"}],
            "templates_clear": [{"templateid": "10050"}]
        }))
        .unwrap();
        assert!(decoded.template_ids_clear.is_empty());
        assert_eq!(decoded.group_ids, vec![HostGroupId::from("1")]);
    }
}
