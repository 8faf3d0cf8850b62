use serde::{Deserialize, Serialize};

use crate::types::{EvaluationType, StatusType};
use crate::wire::wire_enum;
use crate::zbx_client::{Params, Resource};

use super::item::{ItemCredentials, ItemType};

wire_enum! {
    /// Operator of an LLD filter condition.
    pub enum LldOperator {
        Matches = 8,
        NotMatches = 9,
        Exists = 12,
        NotExists = 13,
    }
}

/// Condition of a discovery rule filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LldFilterCondition {
    #[serde(rename = "macro")]
    pub lld_macro: String,
    pub value: String,
    #[serde(rename = "formulaid", skip_serializing_if = "String::is_empty")]
    pub formula_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<LldOperator>,
}

/// Filter applied to discovered entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LldFilter {
    pub conditions: Vec<LldFilterCondition>,
    #[serde(rename = "evaltype")]
    pub eval_type: EvaluationType,
    /// Read-only; generated from the conditions.
    #[serde(skip_serializing)]
    pub eval_formula: String,
    /// Custom expression, with `evaltype` [`EvaluationType::Custom`].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formula: String,
}

/// Low-level discovery rule (`discoveryrule` object).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LldRule {
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
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// How long lost resources are kept, e.g. `30d`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lifetime: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
    #[serde(flatten)]
    pub credentials: ItemCredentials,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<LldFilter>,

    // read-only
    #[serde(rename = "templateid", skip_serializing)]
    pub template_id: String,
    #[serde(skip_serializing)]
    pub error: String,
    #[serde(skip_serializing)]
    pub state: String,
}

pub type LldRules = Vec<LldRule>;

impl Resource for LldRule {
    const OBJECT: &'static str = "discoveryrule";
    const IDS_KEY: &'static str = "itemids";
    const DELETED_IDS_KEY: &'static str = "ruleids";

    fn id(&self) -> &str {
        &self.item_id
    }

    fn set_id(&mut self, id: String) {
        self.item_id = id;
    }

    /// `filter` is only returned when explicitly selected.
    fn by_id_params(id: &str) -> Params {
        Params::new()
            .with(Self::IDS_KEY, id)
            .with("selectFilter", "extend")
    }
}
