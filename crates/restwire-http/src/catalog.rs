//! Status code and media type lookup

use http::StatusCode;

use crate::media_type::MediaType;

/// Read-only lookup for status reason phrases and `Content-Type` strings.
///
/// The renderer holds one of these behind an `Arc`, injected at
/// construction. Implementations must be immutable after initialization;
/// concurrent renders read it without coordination.
pub trait HttpCatalog: Send + Sync {
    /// Reason phrase written on the status line for `status`.
    fn reason_phrase(&self, status: StatusCode) -> &'static str;

    /// `Content-Type` header value for `media`.
    fn media_type(&self, media: MediaType) -> &'static str;
}

/// Catalog backed by the standard status code registry.
///
/// Unregistered codes get the reason phrase `"Unknown"` rather than an
/// empty status line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCatalog;

impl StandardCatalog {
    /// Creates the standard catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::StatusCode;
    /// use restwire_http::{HttpCatalog, MediaType, StandardCatalog};
    ///
    /// let catalog = StandardCatalog::new();
    /// assert_eq!(catalog.reason_phrase(StatusCode::OK), "OK");
    /// assert_eq!(catalog.media_type(MediaType::Json), "application/json");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl HttpCatalog for StandardCatalog {
    fn reason_phrase(&self, status: StatusCode) -> &'static str {
        status.canonical_reason().unwrap_or("Unknown")
    }

    fn media_type(&self, media: MediaType) -> &'static str {
        match media {
            MediaType::Json => "application/json",
            MediaType::Xml => "application/xml",
        }
    }
}
