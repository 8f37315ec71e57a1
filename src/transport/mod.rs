//! HTTP transport layer.

use crate::errors::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use pin_project::pin_project;
use reqwest::{header::HeaderMap, Client, Method, StatusCode};
use std::pin::Pin;
use std::task::{Context, Poll};
use url::Url;

/// HTTP transport abstraction for testability.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends an HTTP request and buffers the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Sends an HTTP request and returns the response body as a stream.
    ///
    /// A non-success status is reported as an error carrying the buffered
    /// error body, since there is no partial stream to hand back.
    async fn send_streaming(&self, request: HttpRequest) -> Result<ByteStream, TransportError>;
}

/// HTTP request representation.
#[derive(Debug)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Option<RequestBody>,
    /// Request timeout.
    pub timeout: Option<std::time::Duration>,
}

/// Request body variants.
pub enum RequestBody {
    /// Fixed-size bytes.
    Bytes(Bytes),
    /// Multipart/related body (metadata + content).
    Multipart(MultipartBody),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            RequestBody::Multipart(_) => write!(f, "Multipart"),
        }
    }
}

/// Multipart/related body for uploads carrying JSON metadata plus content.
pub struct MultipartBody {
    /// Metadata part (JSON).
    pub metadata: Bytes,
    /// Content part.
    pub content: Bytes,
    /// Content type of the content part.
    pub content_type: String,
    /// Boundary string.
    pub boundary: String,
}

impl MultipartBody {
    /// Creates a new multipart body.
    pub fn new(metadata: Bytes, content: Bytes, content_type: impl Into<String>) -> Self {
        Self {
            metadata,
            content,
            content_type: content_type.into(),
            boundary: Self::generate_boundary(),
        }
    }

    fn generate_boundary() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        format!("==============={}", timestamp)
    }

    /// Assembles the full multipart/related payload.
    pub fn to_bytes(&self) -> Bytes {
        let mut result = Vec::with_capacity(self.metadata.len() + self.content.len() + 256);

        result.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        result.extend_from_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
        result.extend_from_slice(&self.metadata);
        result.extend_from_slice(b"\r\n");

        result.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        result.extend_from_slice(format!("Content-Type: {}\r\n\r\n", self.content_type).as_bytes());
        result.extend_from_slice(&self.content);
        result.extend_from_slice(format!("\r\n--{}--", self.boundary).as_bytes());

        Bytes::from(result)
    }

    /// Gets the content type header value for the whole body.
    pub fn content_type_header(&self) -> String {
        format!("multipart/related; boundary={}", self.boundary)
    }
}

/// HTTP response representation.
pub struct HttpResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }
}

/// Byte stream handed to callers of download operations.
///
/// The caller owns the stream and is responsible for consuming it to
/// completion; dropping it aborts the underlying connection.
#[pin_project]
pub struct ByteStream {
    #[pin]
    inner: Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>,
}

impl ByteStream {
    /// Creates a new byte stream.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, TransportError>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }

    /// Buffers the whole stream into memory.
    pub async fn collect(mut self) -> Result<Bytes, TransportError> {
        let mut out = Vec::new();
        while let Some(chunk) = self.inner.next().await {
            out.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(out))
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream").finish_non_exhaustive()
    }
}

impl Stream for ByteStream {
    type Item = Result<Bytes, TransportError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        this.inner.poll_next(cx)
    }
}

/// Reqwest-based HTTP transport implementation.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new transport over an existing reqwest client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new transport with a default client.
    pub fn with_defaults() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Http(format!("Failed to create client: {}", e)))?;
        Ok(Self { client })
    }

    fn build_request(&self, request: HttpRequest) -> reqwest::RequestBuilder {
        let mut req = self.client.request(request.method, request.url);

        for (key, value) in request.headers.iter() {
            req = req.header(key, value);
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        match request.body {
            Some(RequestBody::Bytes(bytes)) => req.body(bytes),
            Some(RequestBody::Multipart(multipart)) => req
                .header("Content-Type", multipart.content_type_header())
                .body(multipart.to_bytes()),
            None => req,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.build_request(request).send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, headers, body))
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<ByteStream, TransportError> {
        let response = self.build_request(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(TransportError::Http(format!(
                "HTTP {} error: {}",
                status,
                String::from_utf8_lossy(&body)
            )));
        }

        let stream = response
            .bytes_stream()
            .map(|result| result.map_err(|e| TransportError::Network(format!("Stream error: {}", e))));

        Ok(ByteStream::new(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_body_layout() {
        let metadata = Bytes::from(r#"{"title":"test.txt"}"#);
        let content = Bytes::from("Hello, World!");
        let multipart = MultipartBody::new(metadata, content, "text/plain");

        let content_type = multipart.content_type_header();
        assert!(content_type.starts_with("multipart/related; boundary="));

        let bytes = multipart.to_bytes();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains(r#"{"title":"test.txt"}"#));
        assert!(text.contains("Content-Type: text/plain"));
        assert!(text.ends_with(&format!("--{}--", multipart.boundary)));
    }

    #[tokio::test]
    async fn byte_stream_collects_chunks_in_order() {
        let chunks = vec![
            Ok(Bytes::from_static(b"abc")),
            Ok(Bytes::from_static(b"def")),
        ];
        let stream = ByteStream::new(futures::stream::iter(chunks));
        let collected = stream.collect().await.unwrap();
        assert_eq!(&collected[..], b"abcdef");
    }
}
