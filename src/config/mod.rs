use std::fmt;
use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::Result;
use crate::error::Error as ZbxApiError;
use crate::zbx_client::ZbxClient;

mod defaults;
mod env;
mod raw;
mod serde;

pub(crate) use serde::HumantimeDuration;

/// Settings needed to reach and authenticate against one Zabbix server.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub auth: Auth,
    pub http_request_timeout: Duration,
    pub http_connect_timeout: Duration,
    /// Accept plain `http://` URLs.
    pub insecure_http: bool,
}

/// Server address and HTTP settings, without credentials.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub base_url: Url,
    pub http_request_timeout: Duration,
    pub http_connect_timeout: Duration,
    pub insecure_http: bool,
}

impl Endpoint {
    /// Load the server address and timeouts; credentials are not required.
    ///
    /// # Errors
    ///
    /// Returns an error when the sources cannot be read or parsed, or when the
    /// URL or timeouts are invalid.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut raw = raw::load(path).map_err(ZbxApiError::from)?;
        raw.apply_env_overrides().map_err(ZbxApiError::from)?;
        raw.validate_endpoint()
    }

    /// Build a client for this endpoint, optionally carrying a session token.
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built.
    pub fn client(&self, token: Option<SecretString>) -> Result<ZbxClient> {
        ZbxClient::new(
            self.base_url.clone(),
            token,
            self.http_request_timeout,
            self.http_connect_timeout,
            self.insecure_http,
        )
    }
}

#[derive(Clone)]
pub enum Auth {
    /// API token, or a session id obtained elsewhere.
    Token(SecretString),
    /// Logged in with `user.login` when connecting.
    Credentials { user: String, password: SecretString },
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(..)"),
            Self::Credentials { user, .. } => f
                .debug_struct("Credentials")
                .field("user", user)
                .finish_non_exhaustive(),
        }
    }
}

impl Config {
    /// Load configuration from a file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file cannot be read, parsed,
    /// when environment overrides are invalid, or when the resulting values
    /// fail validation.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut raw = raw::load(path).map_err(ZbxApiError::from)?;
        raw.apply_env_overrides().map_err(ZbxApiError::from)?;
        raw.validate_and_build()
    }

    /// Build a client and, for user/password auth, log in.
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built or the login is rejected.
    pub async fn connect(&self) -> Result<ZbxClient> {
        let token = match &self.auth {
            Auth::Token(token) => Some(token.clone()),
            Auth::Credentials { .. } => None,
        };
        let client = ZbxClient::new(
            self.base_url.clone(),
            token,
            self.http_request_timeout,
            self.http_connect_timeout,
            self.insecure_http,
        )?;
        if let Auth::Credentials { user, password } = &self.auth {
            client.login(user, password).await?;
        }
        Ok(client)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::ExposeSecret;

    use super::Auth;
    use super::raw::load_str;
    use crate::error::{ConfigError, Error};

    fn build(toml: &str) -> crate::Result<super::Config> {
        let raw = load_str(toml).map_err(Error::from)?;
        raw.validate_and_build()
    }

    #[test]
    fn token_config_with_defaults() {
        let config = match build(
            r#"
            [zabbix]
            url = "https://zabbix.example.com/api_jsonrpc.php"
            token = "abc123"
            "#,
        ) {
            Ok(config) => config,
            Err(err) => panic!("config should build: {err}"),
        };
        assert_eq!(config.http_request_timeout, Duration::from_secs(10));
        assert_eq!(config.http_connect_timeout, Duration::from_secs(5));
        assert!(!config.insecure_http);
        match config.auth {
            Auth::Token(token) => assert_eq!(token.expose_secret(), "abc123"),
            Auth::Credentials { .. } => panic!("expected token auth"),
        }
    }

    #[test]
    fn credentials_and_humantime_timeouts() {
        let config = match build(
            r#"
            [zabbix]
            url = "http://127.0.0.1:8080/api_jsonrpc.php"
            user = "Admin"
            password = "zabbix"
            timeout = "30s"
            connect_timeout = "750ms"
            insecure = true
            "#,
        ) {
            Ok(config) => config,
            Err(err) => panic!("config should build: {err}"),
        };
        assert_eq!(config.http_request_timeout, Duration::from_secs(30));
        assert_eq!(config.http_connect_timeout, Duration::from_millis(750));
        assert!(config.insecure_http);
        assert!(matches!(config.auth, Auth::Credentials { ref user, .. } if user == "Admin"));
        assert!(!format!("{:?}", config.auth).contains("zabbix"));
    }

    #[test]
    fn missing_url_is_reported() {
        let err = build("[zabbix]\ntoken = \"abc\"\n").err();
        assert!(matches!(
            err,
            Some(Error::Config(ConfigError::MissingField { field: "zabbix.url" }))
        ));
    }

    #[test]
    fn token_or_credentials_required() {
        let err = build(
            r#"
            [zabbix]
            url = "https://zabbix.example.com/api_jsonrpc.php"
            token = "  "
            "#,
        )
        .err();
        assert!(matches!(
            err,
            Some(Error::Config(ConfigError::MissingField { field: "zabbix.token" }))
        ));
    }

    #[test]
    fn user_without_password_is_rejected() {
        let err = build(
            r#"
            [zabbix]
            url = "https://zabbix.example.com/api_jsonrpc.php"
            user = "Admin"
            "#,
        )
        .err();
        assert!(matches!(
            err,
            Some(Error::Config(ConfigError::MissingField { field: "zabbix.password" }))
        ));
    }

    #[test]
    fn endpoint_needs_no_credentials() {
        let raw = load_str(
            r#"
            [zabbix]
            url = "https://zabbix.example.com/api_jsonrpc.php"
            timeout = "3s"
            "#,
        )
        .unwrap();
        let endpoint = raw.validate_endpoint().unwrap();
        assert_eq!(endpoint.base_url.path(), "/api_jsonrpc.php");
        assert_eq!(endpoint.http_request_timeout, Duration::from_secs(3));
        assert_eq!(endpoint.http_connect_timeout, Duration::from_secs(5));

        let err = raw.validate_and_build().err();
        assert!(matches!(
            err,
            Some(Error::Config(ConfigError::MissingField { field: "zabbix.token" }))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = build(
            r#"
            [zabbix]
            url = "https://zabbix.example.com/api_jsonrpc.php"
            token = "abc"
            timeout = "0s"
            "#,
        )
        .err();
        assert!(matches!(
            err,
            Some(Error::Config(ConfigError::InvalidField { field: "zabbix.timeout", .. }))
        ));
    }
}
