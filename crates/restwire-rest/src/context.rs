//! Per-request rendering context

use restwire_http::MediaType;

/// Read-only view of the negotiated exchange, passed to each render call.
///
/// Owned by the request-handling layer above this crate; the renderer only
/// reads it, for exactly as long as one call lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// Media type negotiated for the response body.
    pub response_content_type: MediaType,
}

impl RequestContext {
    /// Creates a context for an exchange negotiated to `response_content_type`.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwire_http::MediaType;
    /// use restwire_rest::RequestContext;
    ///
    /// let ctx = RequestContext::new(MediaType::Xml);
    /// assert_eq!(ctx.response_content_type, MediaType::Xml);
    /// ```
    pub fn new(response_content_type: MediaType) -> Self {
        Self {
            response_content_type,
        }
    }
}

impl Default for RequestContext {
    /// JSON is the fallback when negotiation yields nothing.
    fn default() -> Self {
        Self::new(MediaType::Json)
    }
}
