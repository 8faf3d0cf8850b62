use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Zabbix(#[from] ZbxError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("missing required configuration field: {field}")]
    MissingField { field: &'static str },
    #[error("invalid configuration for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("configuration error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ZbxError {
    #[error("failed to build HTTP client")]
    Client {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: reqwest::StatusCode },
    #[error("invalid JSON payload: {message}")]
    Json { message: String },
    #[error("invalid field {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("Zabbix API error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("missing field in API response: {field}")]
    MissingField { field: &'static str },
    #[error("expected exactly one result, got {count}")]
    ExpectedOneResult { count: usize },
    #[error("expected {expected} results, got {got}")]
    ExpectedMore { expected: usize, got: usize },
}

impl From<reqwest::Error> for ZbxError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_status() {
            if let Some(status) = source.status() {
                return Self::HttpStatus { status };
            }
        }
        Self::Request { source }
    }
}

impl Error {
    /// True for the locally detected result-count mismatches, as opposed to
    /// transport or remote API failures.
    #[must_use]
    pub const fn is_cardinality(&self) -> bool {
        matches!(
            self,
            Self::Zabbix(ZbxError::ExpectedOneResult { .. } | ZbxError::ExpectedMore { .. })
        )
    }

    /// Remote error code when the server answered with a JSON-RPC error.
    #[must_use]
    pub const fn api_code(&self) -> Option<i64> {
        match self {
            Self::Zabbix(ZbxError::Api { code, .. }) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ZbxError};

    #[test]
    fn cardinality_errors_are_flagged() {
        let one = Error::from(ZbxError::ExpectedOneResult { count: 0 });
        let more = Error::from(ZbxError::ExpectedMore {
            expected: 2,
            got: 1,
        });
        let api = Error::from(ZbxError::Api {
            code: -32602,
            message: "Invalid params.".to_string(),
        });
        assert!(one.is_cardinality());
        assert!(more.is_cardinality());
        assert!(!api.is_cardinality());
        assert_eq!(api.api_code(), Some(-32602));
    }

    #[test]
    fn cardinality_messages_name_both_counts() {
        let err = ZbxError::ExpectedMore {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "expected 3 results, got 2");
        assert_eq!(
            ZbxError::ExpectedOneResult { count: 4 }.to_string(),
            "expected exactly one result, got 4"
        );
    }
}
