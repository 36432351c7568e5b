//! HTTP client for the ship-note generation endpoint.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ShipNoteError;
use crate::log_debug;
use crate::request::GenerateRequest;
use crate::response::ReleaseNoteResponse;

/// Error envelope the service attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Client for `POST /api/generate`.
///
/// Holds a connection-pooling [`reqwest::Client`] with the timeout baked in,
/// so one instance can serve many calls. Each call is a single awaited
/// request with no retries; every failure surfaces to the caller as a
/// [`ShipNoteError`].
pub struct ReleaseNoteClient {
    http: Client,
    endpoint: Url,
    timeout_seconds: u64,
}

impl ReleaseNoteClient {
    /// Build a client from configuration. Fails with
    /// [`ShipNoteError::Config`] when the endpoint is not a valid URL.
    pub fn new(config: &ClientConfig) -> Result<Self, ShipNoteError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ShipNoteError::Config(format!("invalid endpoint URL: {e}")))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ShipNoteError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint,
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Generate a release-notes draft for the range described by `request`.
    ///
    /// Serializes the payload as JSON, posts it, and decodes the body. The
    /// call blocks (asynchronously) until the service answers or the
    /// configured timeout expires.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<ReleaseNoteResponse, ShipNoteError> {
        log_debug!(
            "POST {} repo={} range={}..{} preset={} destination={}",
            self.endpoint,
            request.repo,
            request.base_ref,
            request.target_ref,
            request.preset,
            request.destination
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ShipNoteError::from_transport(e, self.timeout_seconds))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShipNoteError::from_transport(e, self.timeout_seconds))?;

        if !status.is_success() {
            return Err(http_error(status.as_u16(), &body));
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        log_debug!("response decoded, {} bytes", body.len());
        Ok(ReleaseNoteResponse::from_value(value))
    }
}

/// Turn a non-2xx response into [`ShipNoteError::Http`], pulling the
/// service's error envelope out of the body when it is present.
fn http_error(status: u16, body: &str) -> ShipNoteError {
    let envelope: Option<ApiErrorEnvelope> = serde_json::from_str(body).ok();
    match envelope {
        Some(envelope) => {
            let code = envelope.code.unwrap_or_else(|| "UNKNOWN".to_string());
            let mut message = envelope
                .error
                .unwrap_or_else(|| format!("HTTP {status}"));
            if let Some(hint) = envelope.hint {
                message.push_str(" (");
                message.push_str(&hint);
                message.push(')');
            }
            ShipNoteError::Http {
                status,
                code,
                message,
            }
        }
        None => ShipNoteError::Http {
            status,
            code: "UNKNOWN".to_string(),
            message: format!("HTTP {status}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_decodes_service_envelope() {
        let err = http_error(
            429,
            r#"{"ok":false,"code":"LOCAL_RATE_LIMIT","error":"Too many requests for this endpoint.","hint":"Try again in ~12s."}"#,
        );
        match err {
            ShipNoteError::Http {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 429);
                assert_eq!(code, "LOCAL_RATE_LIMIT");
                assert!(message.contains("Too many requests"));
                assert!(message.contains("Try again in ~12s."));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn http_error_falls_back_on_non_json_body() {
        let err = http_error(502, "<html>Bad Gateway</html>");
        match err {
            ShipNoteError::Http { status, code, .. } => {
                assert_eq!(status, 502);
                assert_eq!(code, "UNKNOWN");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = ClientConfig {
            endpoint: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            ReleaseNoteClient::new(&config),
            Err(ShipNoteError::Config(_))
        ));
    }
}
