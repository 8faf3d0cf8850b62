use serde::{Deserialize, Serialize};
use serde_json::Value;

const BODY_PREVIEW_LIMIT: usize = 256;

#[derive(Debug, Deserialize)]
pub(super) struct RpcEnvelope<T> {
    #[allow(dead_code)]
    pub(crate) jsonrpc: String,
    pub(crate) result: Option<T>,
    pub(crate) error: Option<RpcError>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) id: Value,
}

#[derive(Debug, Deserialize)]
pub(super) struct RpcError {
    pub(crate) code: i64,
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) data: Option<String>,
}

impl RpcError {
    pub(super) fn into_message(self) -> String {
        match self.data {
            Some(data) if !data.is_empty() => format!("{} {data}", self.message),
            _ => self.message,
        }
    }
}

#[derive(Serialize)]
pub(super) struct RpcRequest<'a, P: Serialize + ?Sized> {
    pub(crate) jsonrpc: &'static str,
    pub(crate) method: &'a str,
    pub(crate) params: &'a P,
    pub(crate) id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) auth: Option<&'a str>,
}

/// Methods the server rejects when an `auth` member is present.
pub(super) fn is_anonymous(method: &str) -> bool {
    matches!(method, "apiinfo.version" | "user.login")
}

pub(super) fn body_preview(body: &[u8]) -> String {
    if body.is_empty() {
        return "<empty>".to_string();
    }
    let end = body.len().min(BODY_PREVIEW_LIMIT);
    let mut preview = String::from_utf8_lossy(&body[..end]).to_string();
    if body.len() > BODY_PREVIEW_LIMIT {
        preview.push_str("...");
    }
    preview.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::{RpcError, RpcRequest, body_preview, is_anonymous};
    use serde_json::json;

    #[test]
    fn request_omits_missing_auth() {
        let params = json!({});
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "apiinfo.version",
            params: &params,
            id: 1,
            auth: None,
        };
        let encoded = match serde_json::to_value(&request) {
            Ok(value) => value,
            Err(err) => panic!("request should encode: {err}"),
        };
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "method": "apiinfo.version", "params": {}, "id": 1})
        );
    }

    #[test]
    fn error_message_appends_data() {
        let err = RpcError {
            code: -32602,
            message: "Invalid params.".to_string(),
            data: Some("No permissions to referred object.".to_string()),
        };
        assert_eq!(
            err.into_message(),
            "Invalid params. No permissions to referred object."
        );
    }

    #[test]
    fn preview_is_bounded_and_single_line() {
        let body = "x\n".repeat(300);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(!preview.contains('\n'));
        assert_eq!(body_preview(b""), "<empty>");
    }

    #[test]
    fn login_and_version_are_anonymous() {
        assert!(is_anonymous("user.login"));
        assert!(is_anonymous("apiinfo.version"));
        assert!(!is_anonymous("host.get"));
    }
}
