//! Generic HTTP request handling
//!
//! Every endpoint goes through the same flow: send, log, read the body, map
//! the status. Endpoint methods build their own `RequestBuilder` and decide how
//! to decode the body.
//!
//! # Design principles
//! - **One shot** - no retries and no backoff; the transport's own defaults apply
//! - **Status first** - non-2xx becomes [`BackendError::Rejected`] carrying the
//!   backend's reason, before any decoding is attempted
//! - **Bodies are truncated in logs** - query payloads are large

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{BackendError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and returns the status code and body text.
    ///
    /// Only transport failures are errors here; status mapping is left to
    /// [`Self::ensure_success`].
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - HTTP verb, for logging
    /// * `endpoint` - endpoint path, for logging and error context
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        endpoint: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                BackendError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{endpoint} Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| BackendError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "{endpoint} Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Maps a non-2xx status to [`BackendError::Rejected`], passing the body
    /// through otherwise.
    pub fn ensure_success(status_code: u16, response_text: String, endpoint: &str) -> Result<String> {
        if (200..300).contains(&status_code) {
            return Ok(response_text);
        }
        let message = Self::rejection_message(&response_text);
        log::warn!("{endpoint} rejected (HTTP {status_code}): {message}");
        Err(BackendError::Rejected {
            endpoint: endpoint.to_string(),
            status: status_code,
            message,
        })
    }

    /// Extracts the human-readable reason from a rejection body.
    ///
    /// JSON bodies carry it in `message`; plain-text bodies are the reason
    /// themselves.
    pub fn rejection_message(response_text: &str) -> String {
        #[derive(Deserialize)]
        struct MessageBody {
            message: Option<String>,
        }

        if let Ok(MessageBody {
            message: Some(message),
        }) = serde_json::from_str::<MessageBody>(response_text)
        {
            return message.trim().to_string();
        }
        response_text.trim().to_string()
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(BackendError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("{endpoint} JSON parse failed: {e}");
            log::error!("{endpoint} Raw response: {}", truncate_for_log(response_text));
            BackendError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ensure_success ----

    #[test]
    fn success_range_passes_body_through() {
        for status in [200, 201, 204, 299] {
            let body = HttpUtils::ensure_success(status, "ok".to_string(), "/x");
            assert_eq!(body.as_deref(), Ok("ok"), "status {status}");
        }
    }

    #[test]
    fn client_error_is_rejected_with_json_message() {
        let result = HttpUtils::ensure_success(
            400,
            r#"{"message":"credenciales inválidas"}"#.to_string(),
            "/testjira",
        );
        assert_eq!(
            result,
            Err(BackendError::Rejected {
                endpoint: "/testjira".into(),
                status: 400,
                message: "credenciales inválidas".into(),
            })
        );
    }

    #[test]
    fn server_error_is_rejected_with_text_body() {
        let result = HttpUtils::ensure_success(
            500,
            "Índice fuera de rango\n".to_string(),
            "/setcurrent",
        );
        assert!(
            matches!(&result, Err(BackendError::Rejected { status: 500, message, .. }) if message == "Índice fuera de rango"),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn redirect_status_is_rejected() {
        let result = HttpUtils::ensure_success(303, String::new(), "/");
        assert!(matches!(result, Err(BackendError::Rejected { status: 303, .. })));
    }

    // ---- rejection_message ----

    #[test]
    fn rejection_message_without_message_field_uses_raw_text() {
        assert_eq!(HttpUtils::rejection_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }

    #[test]
    fn rejection_message_empty_body() {
        assert_eq!(HttpUtils::rejection_message("  "), "");
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json(r#"{"x":42}"#, "/x");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json("not json", "/x");
        assert!(
            matches!(&result, Err(BackendError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
