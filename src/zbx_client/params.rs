use serde::Serialize;
use serde_json::{Map, Value};

/// Request parameters for `*.get` style calls.
///
/// A thin wrapper over a JSON object so callers can pass any filter the
/// remote API understands without this crate modelling it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets `key` only when the caller has not already chosen a value.
    pub fn insert_default(&mut self, key: &str, value: impl Into<Value>) {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), value.into());
        }
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(String, Value)> for Params {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl TryFrom<Value> for Params {
    type Error = crate::error::ZbxError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(crate::error::ZbxError::InvalidField {
                field: "params",
                message: format!("expected a JSON object, got {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Params;
    use serde_json::json;

    #[test]
    fn insert_default_keeps_caller_choice() {
        let mut params = Params::new().with("output", json!(["hostid"]));
        params.insert_default("output", "extend");
        assert_eq!(params.get("output"), Some(&json!(["hostid"])));

        let mut bare = Params::new();
        bare.insert_default("output", "extend");
        assert_eq!(bare.get("output"), Some(&json!("extend")));
    }

    #[test]
    fn only_objects_convert() {
        assert!(Params::try_from(json!({"hostids": "1"})).is_ok());
        assert!(Params::try_from(json!(["1"])).is_err());
    }
}
