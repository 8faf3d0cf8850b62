use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::Result;
use crate::error::{ConfigError, Error, ZbxError};

use super::rpc::{RpcEnvelope, RpcRequest, body_preview, is_anonymous};
use super::version::ApiVersion;

const CORRELATION_HEADER: &str = "x-correlation-id";

/// Handle on one Zabbix API endpoint.
///
/// Cloning is cheap; clones share the HTTP pool and the session token, so a
/// `login` through one clone authenticates all of them.
#[derive(Clone)]
pub struct ZbxClient {
    http: reqwest::Client,
    base: Url,
    auth: Arc<RwLock<Option<SecretString>>>,
    next_id: Arc<AtomicU64>,
}

impl ZbxClient {
    /// Build a `ZbxClient` configured with the supplied parameters.
    ///
    /// `auth` is an API token or a session id from a previous login; pass
    /// `None` and call [`ZbxClient::login`] to authenticate with credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTPS is required but the URL uses HTTP, or if the
    /// underlying HTTP client fails to build.
    pub fn new(
        base: Url,
        auth: Option<SecretString>,
        timeout: Duration,
        connect_timeout: Duration,
        insecure_http: bool,
    ) -> Result<Self> {
        if base.scheme() != "https" && !insecure_http {
            return Err(Error::Config(ConfigError::InvalidField {
                field: "zabbix.url",
                message: "only https URLs are accepted without --insecure".to_string(),
            }));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json-rpc"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(concat!("zbx-api/", env!("CARGO_PKG_VERSION")))
            .pool_idle_timeout(Duration::from_secs(30));

        if !insecure_http {
            builder = builder.https_only(true);
        }

        let http = builder
            .build()
            .map_err(|err| ZbxError::Client { source: err })?;

        Ok(Self {
            http,
            base,
            auth: Arc::new(RwLock::new(auth)),
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    pub async fn is_authenticated(&self) -> bool {
        self.auth.read().await.is_some()
    }

    /// Replace the session token used for subsequent calls.
    pub async fn set_auth(&self, auth: Option<SecretString>) {
        *self.auth.write().await = auth;
    }

    /// Invoke `method` with `params` and decode the `result` member.
    ///
    /// This is the single transport used by every typed wrapper; it is public
    /// so callers can reach API methods this crate does not model.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success HTTP statuses, undecodable bodies and
    /// JSON-RPC error envelopes are all returned as [`ZbxError`] variants. No
    /// call is retried.
    pub async fn call<P, T>(&self, method: &str, params: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let correlation_id = Uuid::now_v7().to_string();
        let started = Instant::now();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let auth_guard = self.auth.read().await;
        let auth = if is_anonymous(method) {
            None
        } else {
            auth_guard.as_ref().map(|secret| secret.expose_secret())
        };
        let payload = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
            auth,
        };
        let request = self
            .http
            .post(self.base.clone())
            .header(CORRELATION_HEADER, &correlation_id)
            .json(&payload);
        drop(auth_guard);

        let response = request.send().await.map_err(ZbxError::from)?;

        let status = response.status();
        if !status.is_success() {
            warn!(method, %correlation_id, status = %status, "zabbix call rejected");
            return Err(ZbxError::HttpStatus { status }.into());
        }

        let body = response.bytes().await.map_err(ZbxError::from)?;

        let envelope: RpcEnvelope<T> =
            serde_json::from_slice(&body).map_err(|err| ZbxError::Json {
                message: format!(
                    "error decoding response body: {err}; body preview: {}",
                    body_preview(&body)
                ),
            })?;

        if let Some(err) = envelope.error {
            let code = err.code;
            let message = err.into_message();
            warn!(method, %correlation_id, code, %message, "zabbix api error");
            return Err(ZbxError::Api { code, message }.into());
        }

        let result = envelope
            .result
            .ok_or(ZbxError::MissingField { field: "result" })?;
        debug!(
            method,
            %correlation_id,
            id,
            latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "zabbix call succeeded"
        );
        Ok(result)
    }

    /// Query `apiinfo.version`. Works without authentication.
    ///
    /// # Errors
    ///
    /// Propagates transport errors and fails with
    /// [`ZbxError::InvalidField`] if the version string cannot be parsed.
    pub async fn api_version(&self) -> Result<ApiVersion> {
        let raw: String = self.call("apiinfo.version", &[] as &[Value]).await?;
        raw.parse::<ApiVersion>().map_err(|message| {
            ZbxError::InvalidField {
                field: "apiinfo.version",
                message,
            }
            .into()
        })
    }

    /// Authenticate with user credentials and keep the session token.
    ///
    /// # Errors
    ///
    /// Fails if the version probe fails or the server rejects the credentials.
    pub async fn login(&self, user: &str, password: &SecretString) -> Result<()> {
        let version = self.api_version().await?;
        let mut params = Map::new();
        params.insert(
            version.login_user_key().to_string(),
            Value::from(user.to_string()),
        );
        params.insert(
            "password".to_string(),
            Value::from(password.expose_secret().to_string()),
        );

        let token: String = self.call("user.login", &params).await?;
        self.set_auth(Some(SecretString::from(token))).await;
        info!(user, %version, "logged in to zabbix");
        Ok(())
    }

    /// End the current session and forget its token.
    ///
    /// # Errors
    ///
    /// Propagates the server's answer to `user.logout`; the local token is
    /// only cleared on success.
    pub async fn logout(&self) -> Result<()> {
        let _: Value = self.call("user.logout", &[] as &[Value]).await?;
        self.set_auth(None).await;
        Ok(())
    }
}
