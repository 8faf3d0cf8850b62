use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde_with::serde_as;
use url::Url;

use crate::Result;
use crate::error::ConfigError;

use super::defaults::{default_connect_timeout, default_request_timeout};
use super::env::{env_bool, env_duration, env_string};
use super::{Auth, Config, Endpoint, HumantimeDuration};

const ENV_PREFIX: &str = "ZBX_API";

pub(super) fn load(path: impl AsRef<Path>) -> std::result::Result<RawConfig, ConfigError> {
    let builder = ::config::Config::builder()
        .add_source(::config::File::from(path.as_ref()).required(false));
    finish(builder)
}

#[cfg(test)]
pub(super) fn load_str(toml: &str) -> std::result::Result<RawConfig, ConfigError> {
    let builder = ::config::Config::builder()
        .add_source(::config::File::from_str(toml, ::config::FileFormat::Toml));
    finish(builder)
}

fn finish(
    builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
) -> std::result::Result<RawConfig, ConfigError> {
    builder
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|err| ConfigError::Other(err.to_string()))?
        .try_deserialize()
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub(super) zabbix: RawZabbix,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawZabbix {
    pub(super) url: Option<String>,
    pub(super) token: Option<String>,
    pub(super) user: Option<String>,
    pub(super) password: Option<String>,
    #[serde(default = "default_request_timeout")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) timeout: Duration,
    #[serde(default = "default_connect_timeout")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) connect_timeout: Duration,
    #[serde(default)]
    pub(super) insecure: bool,
}

impl RawConfig {
    pub(super) fn apply_env_overrides(&mut self) -> std::result::Result<(), ConfigError> {
        if let Some(url) = env_string("ZABBIX_URL")? {
            self.zabbix.url = Some(url);
        }
        if let Some(token) = env_string("ZABBIX_TOKEN")? {
            self.zabbix.token = Some(token);
        }
        if let Some(user) = env_string("ZABBIX_USER")? {
            self.zabbix.user = Some(user);
        }
        if let Some(password) = env_string("ZABBIX_PASSWORD")? {
            self.zabbix.password = Some(password);
        }
        if let Some(timeout) = env_duration("ZABBIX_TIMEOUT")? {
            self.zabbix.timeout = timeout;
        }
        if let Some(timeout) = env_duration("ZABBIX_CONNECT_TIMEOUT")? {
            self.zabbix.connect_timeout = timeout;
        }
        if let Some(insecure) = env_bool("ZABBIX_INSECURE")? {
            self.zabbix.insecure = insecure;
        }
        Ok(())
    }

    /// Validate only what is needed to reach the server.
    pub(super) fn validate_endpoint(&self) -> Result<Endpoint> {
        let zabbix = &self.zabbix;
        let url_str = zabbix.url.as_deref().ok_or(ConfigError::MissingField {
            field: "zabbix.url",
        })?;
        let base_url = Url::parse(url_str).map_err(|err| ConfigError::InvalidField {
            field: "zabbix.url",
            message: err.to_string(),
        })?;

        if zabbix.timeout.is_zero() {
            return Err(ConfigError::InvalidField {
                field: "zabbix.timeout",
                message: "request timeout must be greater than zero".to_string(),
            }
            .into());
        }
        if zabbix.connect_timeout.is_zero() {
            return Err(ConfigError::InvalidField {
                field: "zabbix.connect_timeout",
                message: "connect timeout must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(Endpoint {
            base_url,
            http_request_timeout: zabbix.timeout,
            http_connect_timeout: zabbix.connect_timeout,
            insecure_http: zabbix.insecure,
        })
    }

    pub(super) fn validate_and_build(self) -> Result<Config> {
        let endpoint = self.validate_endpoint()?;
        let zabbix = self.zabbix;

        let auth = match (non_empty(zabbix.token), non_empty(zabbix.user)) {
            (Some(token), _) => Auth::Token(token.into()),
            (None, Some(user)) => {
                let password = zabbix.password.ok_or(ConfigError::MissingField {
                    field: "zabbix.password",
                })?;
                Auth::Credentials {
                    user,
                    password: password.into(),
                }
            }
            (None, None) => {
                return Err(ConfigError::MissingField {
                    field: "zabbix.token",
                }
                .into());
            }
        };

        Ok(Config {
            base_url: endpoint.base_url,
            auth,
            http_request_timeout: endpoint.http_request_timeout,
            http_connect_timeout: endpoint.http_connect_timeout,
            insecure_http: endpoint.insecure_http,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Default for RawZabbix {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            user: None,
            password: None,
            timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            insecure: false,
        }
    }
}
