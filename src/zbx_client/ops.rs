use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::Result;
use crate::error::ZbxError;

use super::ZbxClient;
use super::params::Params;

/// A Zabbix API object with the standard `get/create/update/delete` verbs.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// API object name, the part before the dot in `host.get`.
    const OBJECT: &'static str;
    /// Key used both to filter `get` by id and to return ids from `create`.
    const IDS_KEY: &'static str;
    /// Key holding the ids returned by `delete`.
    const DELETED_IDS_KEY: &'static str = Self::IDS_KEY;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Parameters `get_by_id` sends.
    #[must_use]
    fn by_id_params(id: &str) -> Params {
        Params::new().with(Self::IDS_KEY, id)
    }
}

impl ZbxClient {
    /// Wrapper for `<object>.get`; asks for `output: extend` unless the
    /// caller picked the output fields.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn get<R: Resource>(&self, mut params: Params) -> Result<Vec<R>> {
        params.insert_default("output", "extend");
        self.call(&method::<R>("get"), &params).await
    }

    /// Fetch one object by id, failing unless exactly one matches.
    ///
    /// # Errors
    ///
    /// [`ZbxError::ExpectedOneResult`] when zero or several objects come back.
    pub async fn get_by_id<R: Resource>(&self, id: &str) -> Result<R> {
        let found = self.get::<R>(R::by_id_params(id)).await?;
        exactly_one(found)
    }

    /// Wrapper for `<object>.create`; writes the assigned ids back into
    /// `objects` in order.
    ///
    /// # Errors
    ///
    /// [`ZbxError::ExpectedMore`] when the server returns a different number
    /// of ids than objects were sent; `objects` is left untouched then.
    pub async fn create<R: Resource>(&self, objects: &mut [R]) -> Result<()> {
        let result: Value = self.call(&method::<R>("create"), &*objects).await?;
        let ids = extract_ids(&result, R::IDS_KEY)?;
        if ids.len() != objects.len() {
            return Err(ZbxError::ExpectedMore {
                expected: objects.len(),
                got: ids.len(),
            }
            .into());
        }
        for (object, id) in objects.iter_mut().zip(ids) {
            object.set_id(id);
        }
        debug!(object = R::OBJECT, count = objects.len(), "created");
        Ok(())
    }

    /// Wrapper for `<object>.update`.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn update<R: Resource>(&self, objects: &[R]) -> Result<()> {
        let _: Value = self.call(&method::<R>("update"), objects).await?;
        Ok(())
    }

    /// Delete `objects` and clear their ids once the server confirms.
    ///
    /// # Errors
    ///
    /// See [`ZbxClient::delete_by_ids`]; ids are kept when the call fails.
    pub async fn delete<R: Resource>(&self, objects: &mut [R]) -> Result<()> {
        let ids: Vec<String> = objects.iter().map(|o| o.id().to_string()).collect();
        self.delete_by_ids::<R>(&ids).await?;
        for object in objects.iter_mut() {
            object.set_id(String::new());
        }
        Ok(())
    }

    /// Wrapper for `<object>.delete` that checks every id was deleted.
    ///
    /// # Errors
    ///
    /// [`ZbxError::ExpectedMore`] when fewer ids are confirmed than sent.
    pub async fn delete_by_ids<R: Resource>(&self, ids: &[String]) -> Result<()> {
        let deleted = self.delete_ids::<R>(ids).await?;
        if deleted.len() != ids.len() {
            return Err(ZbxError::ExpectedMore {
                expected: ids.len(),
                got: deleted.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Wrapper for `<object>.delete` returning the ids the server reports.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error, and
    /// [`ZbxError::MissingField`] if the id list is absent from the answer.
    pub async fn delete_ids<R: Resource>(&self, ids: &[String]) -> Result<Vec<String>> {
        let result: Value = self.call(&method::<R>("delete"), ids).await?;
        let deleted = extract_ids(&result, R::DELETED_IDS_KEY)?;
        debug!(object = R::OBJECT, count = deleted.len(), "deleted");
        Ok(deleted)
    }
}

fn method<R: Resource>(verb: &str) -> String {
    format!("{}.{verb}", R::OBJECT)
}

pub(crate) fn exactly_one<R>(mut found: Vec<R>) -> Result<R> {
    if found.len() == 1 {
        if let Some(only) = found.pop() {
            return Ok(only);
        }
    }
    Err(ZbxError::ExpectedOneResult { count: found.len() }.into())
}

/// Reads `{"<key>": [...]}`. Some servers answer with an object keyed by
/// position instead of an array; its values are taken in key order.
pub(crate) fn extract_ids(result: &Value, key: &'static str) -> Result<Vec<String>> {
    let raw = result
        .get(key)
        .ok_or(ZbxError::MissingField { field: key })?;
    let values: Vec<&Value> = match raw {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by_key(|(k, _)| k.parse::<u64>().unwrap_or(u64::MAX));
            entries.into_iter().map(|(_, v)| v).collect()
        }
        other => {
            return Err(ZbxError::InvalidField {
                field: key,
                message: format!("expected an id list, got {other}"),
            }
            .into());
        }
    };

    values
        .into_iter()
        .map(|value| match value {
            Value::String(id) => Ok(id.clone()),
            Value::Number(id) => Ok(id.to_string()),
            other => Err(ZbxError::InvalidField {
                field: key,
                message: format!("unexpected id {other}"),
            }
            .into()),
        })
        .collect()
}
