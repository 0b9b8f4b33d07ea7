//! Rendered HTTP response value

use bytes::Bytes;

/// A complete HTTP/1.1 response, ready for the transport layer.
///
/// Holds the response text and its UTF-8 encoding side by side; the two are
/// always consistent (`bytes == UTF8(text)`), which is what lets the socket
/// writer take `bytes` without re-encoding. Produced once per render call
/// and discarded after the write; nothing here persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    text: String,
    bytes: Bytes,
}

impl RenderedResponse {
    /// Wraps the finished response text, capturing its UTF-8 encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwire_http::RenderedResponse;
    ///
    /// let response = RenderedResponse::new("HTTP/1.1 204 No Content\r\n\r\n".to_string());
    /// assert_eq!(response.bytes().as_ref(), response.text().as_bytes());
    /// ```
    pub fn new(text: String) -> Self {
        let bytes = Bytes::copy_from_slice(text.as_bytes());
        Self { text, bytes }
    }

    /// The response as text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The response as bytes, exactly as written to the socket.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}
