//! Upload-body adapter.

use crate::errors::{DriveError, DriveResult};
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use mime::Mime;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Adapts an arbitrary byte source into the shape the upload path expects:
/// a MIME type plus the content bytes for the multipart body.
pub struct StreamContent {
    mime_type: Mime,
    stream: BoxStream<'static, std::io::Result<Bytes>>,
}

impl StreamContent {
    /// Wraps an existing chunk stream.
    pub fn new<S>(mime_type: Mime, stream: S) -> Self
    where
        S: futures::Stream<Item = std::io::Result<Bytes>> + Send + 'static,
    {
        Self {
            mime_type,
            stream: stream.boxed(),
        }
    }

    /// Wraps an async reader (file handle, socket, ...).
    pub fn from_reader<R>(mime_type: Mime, reader: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        Self::new(mime_type, ReaderStream::new(Box::pin(reader)))
    }

    /// Wraps an in-memory buffer.
    pub fn from_bytes(mime_type: Mime, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self::new(
            mime_type,
            futures::stream::once(async move { Ok::<Bytes, std::io::Error>(bytes) }),
        )
    }

    /// The MIME type of the content.
    pub fn mime_type(&self) -> &Mime {
        &self.mime_type
    }

    /// Drains the source into a single buffer for the multipart content part.
    pub async fn collect(mut self) -> DriveResult<Bytes> {
        let mut out = Vec::new();
        while let Some(chunk) = self.stream.next().await {
            let chunk = chunk
                .map_err(|e| DriveError::Network(format!("Failed to read upload content: {}", e)))?;
            out.extend_from_slice(&chunk);
        }
        Ok(Bytes::from(out))
    }
}

impl std::fmt::Debug for StreamContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamContent")
            .field("mime_type", &self.mime_type.as_ref())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collects_bytes_source() {
        let content = StreamContent::from_bytes(mime::TEXT_PLAIN, "hello world");
        assert_eq!(content.mime_type(), &mime::TEXT_PLAIN);
        let bytes = content.collect().await.unwrap();
        assert_eq!(&bytes[..], b"hello world");
    }

    #[tokio::test]
    async fn collects_reader_source() {
        let reader = std::io::Cursor::new(b"streamed content".to_vec());
        let content = StreamContent::from_reader(mime::APPLICATION_OCTET_STREAM, reader);
        let bytes = content.collect().await.unwrap();
        assert_eq!(&bytes[..], b"streamed content");
    }

    #[tokio::test]
    async fn read_failure_surfaces_as_network_error() {
        let failing = futures::stream::once(async {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        });
        let content = StreamContent::new(mime::APPLICATION_OCTET_STREAM, failing);
        let err = content.collect().await.unwrap_err();
        assert!(matches!(err, DriveError::Network(_)));
    }
}
