//! Status and transport error classification shared by the clients.

use fanout_application::CompletionError;
use fanout_domain::util::truncate_str;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;
use tracing::debug;

/// Longest error body kept in a [`CompletionError`]
const MAX_ERROR_BODY: usize = 300;

/// Map a non-success status to a completion error.
pub(crate) fn classify_status(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: &str,
) -> CompletionError {
    let body = truncate_str(body.trim(), MAX_ERROR_BODY).to_string();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CompletionError::Auth(format!("{}: {}", status, body))
        }
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited { retry_after },
        _ => CompletionError::Http {
            status: status.as_u16(),
            body,
        },
    }
}

pub(crate) fn classify_transport(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        CompletionError::Timeout
    } else {
        // reqwest errors carry the URL but never headers
        CompletionError::Network(err.to_string())
    }
}

/// Parse a `Retry-After` header given in whole seconds.
pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Send a prepared request and return the JSON body of a successful response.
pub(crate) async fn send_json(
    request: reqwest::RequestBuilder,
) -> Result<serde_json::Value, CompletionError> {
    let response = request.send().await.map_err(classify_transport)?;
    let status = response.status();

    if !status.is_success() {
        let retry_after = retry_after(response.headers());
        let body = response.text().await.unwrap_or_default();
        debug!("Provider returned {}", status);
        return Err(classify_status(status, retry_after, &body));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| CompletionError::InvalidResponse(format!("response body is not JSON: {}", e)))
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, None, "bad key"),
            CompletionError::Auth(msg) if msg.contains("bad key")
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, None, ""),
            CompletionError::Auth(_)
        ));
        assert_eq!(
            classify_status(
                StatusCode::TOO_MANY_REQUESTS,
                Some(Duration::from_secs(3)),
                ""
            ),
            CompletionError::RateLimited {
                retry_after: Some(Duration::from_secs(3))
            }
        );
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY, None, " upstream down "),
            CompletionError::Http {
                status: 502,
                body: "upstream down".to_string()
            }
        );
    }

    #[test]
    fn test_error_body_is_truncated() {
        let long = "x".repeat(2000);
        match classify_status(StatusCode::INTERNAL_SERVER_ERROR, None, &long) {
            CompletionError::Http { body, .. } => assert!(body.len() <= MAX_ERROR_BODY),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(7)));

        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(retry_after(&headers), None);
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            endpoint("https://api.openai.com/", "/v1/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            endpoint("http://localhost:8080", "v1/messages"),
            "http://localhost:8080/v1/messages"
        );
    }
}
