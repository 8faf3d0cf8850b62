use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use tracing::info;
use zbx_api::config::{Config, Endpoint};
use zbx_api::error::{ConfigError, Error as ZbxApiError, ZbxError};
use zbx_api::objects::{
    Action, Application, Host, HostGroup, HostInterface, Item, ItemPrototype, LldRule, Template,
    TemplateGroup, Trigger, TriggerPrototype, User, UserGroup,
};
use zbx_api::telemetry::init_tracing;
use zbx_api::{Params, Resource, Result, ZbxClient};

use super::cli::{Cli, Command};

const DEFAULT_CONFIG: &str = "zbx-api.toml";

/// Runs `$body` with `$r` bound to the [`Resource`] named `$object`.
macro_rules! with_resource {
    ($object:expr, $r:ident => $body:expr) => {
        match $object {
            "action" => { type $r = Action; $body }
            "application" => { type $r = Application; $body }
            "discoveryrule" => { type $r = LldRule; $body }
            "host" => { type $r = Host; $body }
            "hostgroup" => { type $r = HostGroup; $body }
            "hostinterface" => { type $r = HostInterface; $body }
            "item" => { type $r = Item; $body }
            "itemprototype" => { type $r = ItemPrototype; $body }
            "template" => { type $r = Template; $body }
            "templategroup" => { type $r = TemplateGroup; $body }
            "trigger" => { type $r = Trigger; $body }
            "triggerprototype" => { type $r = TriggerPrototype; $body }
            "user" => { type $r = User; $body }
            "usergroup" => { type $r = UserGroup; $body }
            other => Err(unknown_object(other)),
        }
    };
}

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_filter.as_deref(), cli.json_logs)?;

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let load = |path: &PathBuf| -> Result<Config> {
        let mut config = Config::from_env_and_file(path)?;
        config.insecure_http |= cli.insecure;
        Ok(config)
    };

    match cli.command {
        Command::Version => {
            // apiinfo.version is anonymous, so credentials are not loaded
            let mut endpoint = Endpoint::from_env_and_file(&config_path)?;
            endpoint.insecure_http |= cli.insecure;
            let client = endpoint.client(None)?;
            println!("{}", client.api_version().await?);
        }
        Command::Get { object, params, id } => {
            let client = load(&config_path)?.connect().await?;
            let mut params: Params = params.into_iter().collect();
            if let Some(id) = id.as_deref() {
                params.extend(by_id_params(&object, id)?.into_inner());
            }
            params.insert_default("output", "extend");
            let mut found: Vec<Value> = client.call(&format!("{object}.get"), &params).await?;
            if id.is_some() {
                if found.len() != 1 {
                    return Err(ZbxError::ExpectedOneResult { count: found.len() }.into());
                }
                print_json(&found.remove(0))?;
            } else {
                print_json(&found)?;
            }
        }
        Command::Delete { object, ids } => {
            let client = load(&config_path)?.connect().await?;
            let deleted = delete(&client, &object, &ids).await?;
            info!(object = %object, count = deleted.len(), "objects deleted");
            print_json(&deleted)?;
        }
    }
    Ok(())
}

fn by_id_params(object: &str, id: &str) -> Result<Params> {
    with_resource!(object, R => Ok(R::by_id_params(id)))
}

async fn delete(client: &ZbxClient, object: &str, ids: &[String]) -> Result<Vec<String>> {
    with_resource!(object, R => {
        let deleted = client.delete_ids::<R>(ids).await?;
        if deleted.len() == ids.len() {
            Ok(deleted)
        } else {
            Err(ZbxError::ExpectedMore { expected: ids.len(), got: deleted.len() }.into())
        }
    })
}

fn unknown_object(object: &str) -> ZbxApiError {
    ZbxApiError::from(ConfigError::InvalidField {
        field: "object",
        message: format!("unsupported API object {object:?}"),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|err| ZbxError::Json {
        message: err.to_string(),
    })?;
    println!("{rendered}");
    Ok(())
}
