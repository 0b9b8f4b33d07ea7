//! Media types for request and response bodies

use std::fmt;

/// Negotiated encoding of a request or response body.
///
/// Restwire speaks exactly two body formats. The negotiation layer resolves
/// an incoming `Accept`/`Content-Type` header to one of these before a
/// render call ever happens, so the codec and renderer never see an
/// unsupported format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Json,
    Xml,
}

impl MediaType {
    /// Resolves a MIME string to a supported media type.
    ///
    /// Matching is case-insensitive and ignores parameters after `;`.
    /// Returns `None` for anything that is not a JSON or XML MIME type;
    /// the caller decides whether that is a 406 or a fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwire_http::MediaType;
    ///
    /// assert_eq!(MediaType::from_mime("application/json"), Some(MediaType::Json));
    /// assert_eq!(MediaType::from_mime("text/xml; charset=utf-8"), Some(MediaType::Xml));
    /// assert_eq!(MediaType::from_mime("Application/XML"), Some(MediaType::Xml));
    /// assert_eq!(MediaType::from_mime("text/html"), None);
    /// ```
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/json" | "text/json" => Some(Self::Json),
            "application/xml" | "text/xml" => Some(Self::Xml),
            _ => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Xml => f.write_str("XML"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_known_types() {
        assert_eq!(MediaType::from_mime("application/json"), Some(MediaType::Json));
        assert_eq!(MediaType::from_mime("text/json"), Some(MediaType::Json));
        assert_eq!(MediaType::from_mime("application/xml"), Some(MediaType::Xml));
        assert_eq!(MediaType::from_mime("text/xml"), Some(MediaType::Xml));
    }

    #[test]
    fn test_from_mime_ignores_parameters_and_case() {
        assert_eq!(
            MediaType::from_mime("APPLICATION/JSON; charset=utf-8"),
            Some(MediaType::Json)
        );
        assert_eq!(MediaType::from_mime("  text/xml ; q=0.9"), Some(MediaType::Xml));
    }

    #[test]
    fn test_from_mime_rejects_others() {
        assert_eq!(MediaType::from_mime("text/html"), None);
        assert_eq!(MediaType::from_mime("application/octet-stream"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MediaType::Json.to_string(), "JSON");
        assert_eq!(MediaType::Xml.to_string(), "XML");
    }
}
