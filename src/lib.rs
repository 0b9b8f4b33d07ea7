//! # Restwire
//!
//! REST-to-wire response rendering for HTTP/1.1 services.
//!
//! Restwire turns the typed outcome of a REST operation (created, updated,
//! deleted, fetched, rejected) into a literal HTTP/1.1 response: status
//! line, headers, blank-line separator, and an optionally serialized body.
//! Body payloads are encoded to JSON or XML based on the media type
//! negotiated for the exchange, and decoded back into typed values on the
//! way in.
//!
//! The transport listener, request parsing, and routing live above this
//! crate; restwire begins where a handler has produced an outcome and ends
//! with the bytes a socket writer sends.
//!
//! ## Crates
//!
//! - [`http`] holds the response primitives: media types, the status/media
//!   catalog, the JSON/XML body codec, and the rendered response value.
//! - [`rest`] holds the REST layer: outcome variants, per-request context,
//!   and the response renderer.
//!
//! ## Quick Example
//!
//! ```
//! use restwire::{RequestContext, ResponseRenderer, RestResponse};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Item {
//!     name: String,
//! }
//!
//! let renderer = ResponseRenderer::default();
//! let response = RestResponse::created("/items/42", Item { name: "socket wrench".into() });
//! let rendered = renderer.render(&response, &RequestContext::default()).unwrap();
//!
//! assert!(rendered.text().starts_with("HTTP/1.1 201 Created\r\n"));
//! assert!(rendered.text().contains("Location: /items/42\r\n"));
//! assert_eq!(rendered.bytes().as_ref(), rendered.text().as_bytes());
//! ```

// Module re-exports following the workspace structure
pub mod http;
pub mod rest;

// Re-export codec and catalog types
pub use restwire_http::{BodyCodec, BodyError, HttpCatalog, MediaType, RenderedResponse, StandardCatalog};

// Re-export the REST rendering types
pub use restwire_rest::{RequestContext, ResponseRenderer, RestResponse};

// Re-export status and method types used when constructing responses
pub use ::http::{Method, StatusCode};
