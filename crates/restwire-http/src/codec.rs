//! Body serialization for JSON and XML payloads

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::BodyError;
use crate::media_type::MediaType;

/// Converts typed body values to wire text and back.
///
/// JSON uses the standard serde encoding. XML documents carry a root
/// element named after the value's type, with fields as child elements
/// (the conventional reflective mapping). Both directions round-trip for
/// any value the format can represent.
///
/// The codec is stateless; one instance can serve any number of concurrent
/// calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyCodec;

impl BodyCodec {
    /// Creates a body codec.
    pub fn new() -> Self {
        Self
    }

    /// Serializes `body` to text in the given media type.
    ///
    /// An absent body yields `Ok(None)`; callers must render that as "no
    /// body", never as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwire_http::{BodyCodec, MediaType};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Note {
    ///     text: String,
    /// }
    ///
    /// let codec = BodyCodec::new();
    /// let note = Note { text: "hi".into() };
    ///
    /// let json = codec.serialize(Some(&note), MediaType::Json).unwrap();
    /// assert_eq!(json.as_deref(), Some(r#"{"text":"hi"}"#));
    ///
    /// let xml = codec.serialize(Some(&note), MediaType::Xml).unwrap();
    /// assert_eq!(xml.as_deref(), Some("<Note><text>hi</text></Note>"));
    ///
    /// assert!(codec.serialize::<Note>(None, MediaType::Json).unwrap().is_none());
    /// ```
    pub fn serialize<T: Serialize>(
        &self,
        body: Option<&T>,
        media: MediaType,
    ) -> Result<Option<String>, BodyError> {
        let Some(value) = body else {
            return Ok(None);
        };

        let text = match media {
            MediaType::Json => serde_json::to_string(value).map_err(|e| BodyError::Serialize {
                media,
                message: e.to_string(),
            })?,
            MediaType::Xml => quick_xml::se::to_string(value).map_err(|e| BodyError::Serialize {
                media,
                message: e.to_string(),
            })?,
        };

        Ok(Some(text))
    }

    /// Deserializes `body` into `T` under the same mapping convention.
    ///
    /// Malformed input or a payload/type mismatch fails with an error
    /// naming the expected type.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwire_http::{BodyCodec, MediaType};
    /// use serde::Deserialize;
    ///
    /// #[derive(Debug, PartialEq, Deserialize)]
    /// struct Note {
    ///     text: String,
    /// }
    ///
    /// let codec = BodyCodec::new();
    /// let note: Note = codec.deserialize(r#"{"text":"hi"}"#, MediaType::Json).unwrap();
    /// assert_eq!(note, Note { text: "hi".into() });
    /// ```
    pub fn deserialize<T: DeserializeOwned>(
        &self,
        body: &str,
        media: MediaType,
    ) -> Result<T, BodyError> {
        let expected = std::any::type_name::<T>();

        match media {
            MediaType::Json => serde_json::from_str(body).map_err(|e| BodyError::Deserialize {
                media,
                expected,
                message: e.to_string(),
            }),
            MediaType::Xml => quick_xml::de::from_str(body).map_err(|e| BodyError::Deserialize {
                media,
                expected,
                message: e.to_string(),
            }),
        }
    }
}
