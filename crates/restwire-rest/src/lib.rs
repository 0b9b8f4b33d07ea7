//! REST response rendering for restwire.
//!
//! A handler produces a [`RestResponse`], one variant per REST outcome,
//! and the [`ResponseRenderer`] turns it into the literal HTTP/1.1 text and
//! bytes the transport writes back, serializing the body (if any) in the
//! media type carried by the [`RequestContext`].
//!
//! Rendering is synchronous and allocation-only; a single renderer serves
//! concurrent calls without coordination.

pub mod context;
pub mod renderer;
pub mod response;

pub use context::RequestContext;
pub use renderer::ResponseRenderer;
pub use response::RestResponse;

// Re-export the codec error surfaced by `ResponseRenderer::render`
pub use restwire_http::BodyError;
