//! HTTP response primitives for restwire.
//!
//! This crate holds everything the REST rendering layer needs on the HTTP
//! side of the boundary: the negotiated [`MediaType`], the injected
//! status/media lookup ([`HttpCatalog`] and its standard implementation),
//! the JSON/XML [`BodyCodec`], RFC 1123 date formatting for the `Date`
//! header, and the final [`RenderedResponse`] value handed to the
//! transport.
//!
//! Nothing here performs I/O; every operation is synchronous in-memory
//! work, safe to run from any number of threads at once.

pub mod catalog;
pub mod codec;
pub mod date;
pub mod error;
pub mod media_type;
pub mod response;

pub use catalog::{HttpCatalog, StandardCatalog};
pub use codec::BodyCodec;
pub use error::BodyError;
pub use media_type::MediaType;
pub use response::RenderedResponse;
