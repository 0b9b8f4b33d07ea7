//! Codec error types

use thiserror::Error;

use crate::media_type::MediaType;

/// Failure while converting a body to or from its wire text.
///
/// Deserialization failures identify the expected type so the caller can
/// turn them into a useful client-facing 4xx; nothing in this crate retries
/// or recovers on its own.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body value could not be serialized to the requested format.
    #[error("failed to serialize body as {media}: {message}")]
    Serialize { media: MediaType, message: String },

    /// The body text could not be deserialized into the expected type.
    #[error("failed to deserialize {expected} from {media}: {message}")]
    Deserialize {
        media: MediaType,
        expected: &'static str,
        message: String,
    },
}
