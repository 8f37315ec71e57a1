//! Authenticated Drive API client.

use crate::auth::AccessToken;
use crate::config::ConnectorConfig;
use crate::errors::{DriveError, DriveResult};
use crate::transport::{ByteStream, HttpRequest, HttpResponse, HttpTransport, RequestBody};
use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub mod factory;

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a value used as a single path segment.
pub(crate) fn encode_path(segment: &str) -> Cow<'_, str> {
    utf8_percent_encode(segment, PATH_SEGMENT).into()
}

/// A client bound to one access token and one endpoint pair.
///
/// The connector replaces the whole client on re-authorization; the client
/// itself never refreshes or mutates its token.
pub struct DriveClient {
    access_token: AccessToken,
    application_name: String,
    base_url: Url,
    upload_url: Url,
    timeout: Duration,
    transport: Arc<dyn HttpTransport>,
}

impl DriveClient {
    /// Creates a client over the given transport, bound to `access_token`
    /// and the endpoints configured on `config`.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        access_token: AccessToken,
        config: &ConnectorConfig,
    ) -> Self {
        Self {
            access_token,
            application_name: config.application_name.clone(),
            base_url: config.base_url.clone(),
            upload_url: config.upload_url.clone(),
            timeout: config.timeout,
            transport,
        }
    }

    /// GET a resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> DriveResult<T> {
        let url = self.api_url(path, Option::<&()>::None)?;
        self.execute_json(Method::GET, url, None).await
    }

    /// GET a resource with query parameters.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize>(
        &self,
        path: &str,
        params: &P,
    ) -> DriveResult<T> {
        let url = self.api_url(path, Some(params))?;
        self.execute_json(Method::GET, url, None).await
    }

    /// POST a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> DriveResult<T> {
        let url = self.api_url(path, Option::<&()>::None)?;
        self.execute_json(Method::POST, url, Some(to_json_body(body)?))
            .await
    }

    /// POST a JSON body with query parameters.
    pub async fn post_with_params<T: DeserializeOwned, B: Serialize, P: Serialize>(
        &self,
        path: &str,
        params: &P,
        body: &B,
    ) -> DriveResult<T> {
        let url = self.api_url(path, Some(params))?;
        self.execute_json(Method::POST, url, Some(to_json_body(body)?))
            .await
    }

    /// POST with no body (touch/trash/untrash style endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> DriveResult<T> {
        let url = self.api_url(path, Option::<&()>::None)?;
        self.execute_json(Method::POST, url, None).await
    }

    /// PUT a JSON body (full update).
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> DriveResult<T> {
        let url = self.api_url(path, Option::<&()>::None)?;
        self.execute_json(Method::PUT, url, Some(to_json_body(body)?))
            .await
    }

    /// PUT a JSON body with query parameters.
    pub async fn put_with_params<T: DeserializeOwned, B: Serialize, P: Serialize>(
        &self,
        path: &str,
        params: &P,
        body: &B,
    ) -> DriveResult<T> {
        let url = self.api_url(path, Some(params))?;
        self.execute_json(Method::PUT, url, Some(to_json_body(body)?))
            .await
    }

    /// PATCH a JSON body with query parameters (partial update).
    pub async fn patch_with_params<T: DeserializeOwned, B: Serialize, P: Serialize>(
        &self,
        path: &str,
        params: &P,
        body: &B,
    ) -> DriveResult<T> {
        let url = self.api_url(path, Some(params))?;
        self.execute_json(Method::PATCH, url, Some(to_json_body(body)?))
            .await
    }

    /// DELETE a resource. Drive delete endpoints return an empty body.
    pub async fn delete(&self, path: &str) -> DriveResult<()> {
        let url = self.api_url(path, Option::<&()>::None)?;
        self.execute(Method::DELETE, url, None).await?;
        Ok(())
    }

    /// Streams the content behind an absolute download URL.
    ///
    /// The URL comes from a `downloadUrl` field of a previously fetched
    /// resource; the request carries the same bearer authorization as API
    /// calls and the body is handed back unmodified.
    pub async fn download(&self, download_url: &str) -> DriveResult<ByteStream> {
        let url = Url::parse(download_url)
            .map_err(|e| DriveError::invalid_argument(format!("Invalid download URL: {}", e)))?;

        debug!(url = %url, "streaming download");

        let request = HttpRequest {
            method: Method::GET,
            url,
            headers: self.headers(false)?,
            body: None,
            timeout: Some(self.timeout),
        };

        self.transport
            .send_streaming(request)
            .await
            .map_err(DriveError::from)
    }

    /// POSTs a multipart/related body (JSON metadata plus content) to the
    /// upload endpoint and decodes the JSON response.
    pub async fn upload_multipart<T: DeserializeOwned, P: Serialize>(
        &self,
        path: &str,
        params: &P,
        body: RequestBody,
    ) -> DriveResult<T> {
        let query = to_query(params)?;
        let mut url = join_url(&self.upload_url, path)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        // The transport sets the multipart content type from the boundary.
        let response = self.execute(Method::POST, url, Some(body)).await?;
        decode_json(&response.body)
    }

    fn api_url<P: Serialize>(&self, path: &str, params: Option<&P>) -> DriveResult<Url> {
        let mut url = join_url(&self.base_url, path)?;
        if let Some(params) = params {
            let query = to_query(params)?;
            if !query.is_empty() {
                url.set_query(Some(&query));
            }
        }
        Ok(url)
    }

    fn headers(&self, json_body: bool) -> DriveResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.access_token.authorization_header())
                .map_err(|e| DriveError::invalid_argument(format!("Invalid auth header: {}", e)))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.application_name).map_err(|e| {
                DriveError::configuration(format!("Invalid application name: {}", e))
            })?,
        );
        if json_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Ok(headers)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<RequestBody>,
    ) -> DriveResult<T> {
        let response = self.execute(method, url, body).await?;
        decode_json(&response.body)
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<RequestBody>,
    ) -> DriveResult<HttpResponse> {
        debug!(%method, url = %url, "executing Drive request");

        let json_body = matches!(&body, Some(RequestBody::Bytes(_)));
        let request = HttpRequest {
            method,
            url,
            headers: self.headers(json_body)?,
            body,
            timeout: Some(self.timeout),
        };

        let response = self.transport.send(request).await?;

        if !response.status.is_success() {
            return Err(error_from_response(&response));
        }

        Ok(response)
    }
}

fn join_url(base: &Url, path: &str) -> DriveResult<Url> {
    // Url::join treats the last segment of a base without a trailing slash
    // as a file, so splice the paths by hand.
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| DriveError::invalid_argument(format!("Invalid URL: {}", e)))
}

fn to_query<P: Serialize>(params: &P) -> DriveResult<String> {
    serde_urlencoded::to_string(params)
        .map_err(|e| DriveError::invalid_argument(format!("Failed to encode parameters: {}", e)))
}

fn to_json_body<B: Serialize>(body: &B) -> DriveResult<RequestBody> {
    let bytes = serde_json::to_vec(body)
        .map_err(|e| DriveError::response(format!("Failed to serialize request body: {}", e)))?;
    Ok(RequestBody::Bytes(Bytes::from(bytes)))
}

fn decode_json<T: DeserializeOwned>(body: &Bytes) -> DriveResult<T> {
    // Delete-style endpoints answer with an empty body; let unit-like
    // targets decode from an empty object.
    let slice: &[u8] = if body.is_empty() { b"{}" } else { body.as_ref() };
    serde_json::from_slice(slice)
        .map_err(|e| DriveError::response(format!("Failed to deserialize response: {}", e)))
}

fn error_from_response(response: &HttpResponse) -> DriveError {
    #[derive(serde::Deserialize)]
    struct ErrorEnvelope {
        error: ErrorDetail,
    }

    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        message: Option<String>,
        errors: Option<Vec<ErrorItem>>,
    }

    #[derive(serde::Deserialize)]
    struct ErrorItem {
        reason: Option<String>,
    }

    let status = response.status;
    let envelope: Option<ErrorEnvelope> = serde_json::from_slice(&response.body).ok();

    let (message, reason) = match envelope {
        Some(e) => {
            let reason = e
                .error
                .errors
                .as_ref()
                .and_then(|errs| errs.first())
                .and_then(|err| err.reason.clone());
            let message = e
                .error
                .message
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            (message, reason)
        }
        None => (
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                String::from_utf8_lossy(&response.body)
            ),
            None,
        ),
    };

    if status == reqwest::StatusCode::UNAUTHORIZED {
        // The signal the external OAuth layer uses to drop the stored token.
        return DriveError::TokenExpired(message);
    }

    DriveError::Api {
        status: status.as_u16(),
        reason,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(encode_path("abc-123_x.y~z"), "abc-123_x.y~z");
        assert_eq!(encode_path("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn join_url_keeps_version_segment() {
        let base = Url::parse("https://www.googleapis.com/drive/v2").unwrap();
        let url = join_url(&base, "/files/abc").unwrap();
        assert_eq!(url.as_str(), "https://www.googleapis.com/drive/v2/files/abc");
    }

    #[test]
    fn unauthorized_maps_to_token_expired() {
        let body = Bytes::from(
            r#"{"error":{"errors":[{"reason":"authError"}],"code":401,"message":"Invalid Credentials"}}"#,
        );
        let response = HttpResponse::new(StatusCode::UNAUTHORIZED, HeaderMap::new(), body);
        let err = error_from_response(&response);
        assert!(err.is_token_expired());
    }

    #[test]
    fn api_error_carries_reason_from_envelope() {
        let body = Bytes::from(
            r#"{"error":{"errors":[{"reason":"notFound"}],"code":404,"message":"File not found: xyz"}}"#,
        );
        let response = HttpResponse::new(StatusCode::NOT_FOUND, HeaderMap::new(), body);
        match error_from_response(&response) {
            DriveError::Api {
                status,
                reason,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(reason.as_deref(), Some("notFound"));
                assert_eq!(message, "File not found: xyz");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_still_reports_status() {
        let response = HttpResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderMap::new(),
            Bytes::from_static(b"<html>backend error</html>"),
        );
        match error_from_response(&response) {
            DriveError::Api { status, message, .. } => {
                assert_eq!(status, 500);
                assert!(message.contains("backend error"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_body_decodes_into_unit_like_value() {
        let value: serde_json::Value = decode_json(&Bytes::new()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
