//! HTTP response primitives: media types, catalog, body codec, rendered response.

pub use restwire_http::*;
