use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(author, version, about = "Command line access to the Zabbix API", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept plain http:// API URLs.
    #[arg(long, action = ArgAction::SetTrue)]
    pub insecure: bool,

    /// Emit JSON logs (needs `--features json-logs`).
    #[arg(long, action = ArgAction::SetTrue)]
    pub json_logs: bool,

    /// Explicit log filter (e.g. "zbx_api=debug").
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the server API version.
    Version,
    /// Run `<object>.get` and print the result.
    Get {
        /// API object name, e.g. `host` or `discoveryrule`.
        object: String,
        /// Extra parameter; values that parse as JSON are sent as JSON.
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, Value)>,
        /// Fetch exactly one object by id.
        #[arg(long)]
        id: Option<String>,
    },
    /// Delete objects by id.
    Delete {
        object: String,
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    if key.is_empty() {
        return Err("parameter name cannot be empty".to_string());
    }
    let value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_param;

    #[test]
    fn param_values_are_json_when_possible() {
        assert_eq!(
            parse_param("filter={\"host\":\"web-01\"}"),
            Ok(("filter".to_string(), json!({"host": "web-01"})))
        );
        assert_eq!(parse_param("limit=5"), Ok(("limit".to_string(), json!(5))));
        assert_eq!(
            parse_param("search=web"),
            Ok(("search".to_string(), json!("web")))
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }
}
