//! REST outcome to HTTP/1.1 response rendering

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::Serialize;

use restwire_http::date::httpdate;
use restwire_http::{BodyCodec, BodyError, HttpCatalog, RenderedResponse, StandardCatalog};

use crate::context::RequestContext;
use crate::response::RestResponse;

/// Renders REST outcomes into complete HTTP/1.1 responses.
///
/// Holds the injected status/media catalog and the body codec; nothing is
/// mutated per call, so a single renderer serves concurrent renders.
///
/// Every response shares the same preamble (status line, `Date`,
/// `Connection: close`); body-bearing outcomes add `Content-Length`
/// (UTF-8 bytes, not characters), `Content-Type`, and any per-kind extra
/// headers before the blank line.
#[derive(Clone)]
pub struct ResponseRenderer {
    catalog: Arc<dyn HttpCatalog>,
    codec: BodyCodec,
}

impl ResponseRenderer {
    /// Creates a renderer over the given catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use restwire_http::StandardCatalog;
    /// use restwire_rest::{RequestContext, ResponseRenderer, RestResponse};
    ///
    /// let renderer = ResponseRenderer::new(Arc::new(StandardCatalog::new()));
    /// let response: RestResponse = RestResponse::deleted();
    /// let rendered = renderer.render(&response, &RequestContext::default()).unwrap();
    ///
    /// assert!(rendered.text().starts_with("HTTP/1.1 200 OK\r\n"));
    /// ```
    pub fn new(catalog: Arc<dyn HttpCatalog>) -> Self {
        Self {
            catalog,
            codec: BodyCodec::new(),
        }
    }

    /// Renders `response` into its wire form, stamping the current time.
    ///
    /// The only failure mode is a body that the negotiated format cannot
    /// serialize; bodyless variants never fail.
    pub fn render<T: Serialize>(
        &self,
        response: &RestResponse<T>,
        ctx: &RequestContext,
    ) -> Result<RenderedResponse, BodyError> {
        self.render_at(response, ctx, Utc::now())
    }

    pub(crate) fn render_at<T: Serialize>(
        &self,
        response: &RestResponse<T>,
        ctx: &RequestContext,
        now: DateTime<Utc>,
    ) -> Result<RenderedResponse, BodyError> {
        tracing::debug!(
            status = response.status().as_u16(),
            media = %ctx.response_content_type,
            "rendering response"
        );

        let rendered = match response {
            RestResponse::Deleted { status } | RestResponse::StatusOnly { status } => {
                let mut out = self.preamble(*status, now);
                out.push_str("\r\n");
                RenderedResponse::new(out)
            }
            RestResponse::MethodNotAllowed { status, allow } => {
                let mut out = self.preamble(*status, now);
                let methods: Vec<&str> = allow.iter().map(|m| m.as_str()).collect();
                out.push_str(&format!("Allow: {}\r\n", methods.join(",")));
                out.push_str("\r\n");
                RenderedResponse::new(out)
            }
            RestResponse::Fetched { status, body } | RestResponse::Updated { status, body } => {
                self.render_with_body(*status, body.as_ref(), &[], ctx, now)?
            }
            RestResponse::Created {
                status,
                body,
                location,
            } => {
                let mut extra_headers = Vec::new();
                if *status == StatusCode::CREATED {
                    if let Some(uri) = location {
                        extra_headers.push(("Location", uri.clone()));
                    }
                }
                self.render_with_body(*status, body.as_ref(), &extra_headers, ctx, now)?
            }
        };

        Ok(rendered)
    }

    /// Status line, `Date`, and `Connection`, identical for every variant.
    fn preamble(&self, status: StatusCode, now: DateTime<Utc>) -> String {
        let mut out = String::with_capacity(128);
        out.push_str(&format!(
            "HTTP/1.1 {} {}\r\n",
            status.as_u16(),
            self.catalog.reason_phrase(status)
        ));
        out.push_str(&format!("Date: {}\r\n", httpdate(now)));
        out.push_str("Connection: close\r\n");
        out
    }

    /// Shared by every body-bearing variant. `Content-Length` counts UTF-8
    /// bytes; an absent body still gets `Content-Length: 0` and a
    /// `Content-Type`. Extra headers keep the caller's order.
    fn render_with_body<T: Serialize>(
        &self,
        status: StatusCode,
        body: Option<&T>,
        extra_headers: &[(&str, String)],
        ctx: &RequestContext,
        now: DateTime<Utc>,
    ) -> Result<RenderedResponse, BodyError> {
        let media = ctx.response_content_type;
        let body_text = self.codec.serialize(body, media)?;
        let body_len = body_text.as_deref().map_or(0, str::len);

        let mut out = self.preamble(status, now);
        out.push_str(&format!("Content-Length: {body_len}\r\n"));
        out.push_str(&format!("Content-Type: {}\r\n", self.catalog.media_type(media)));
        for (name, value) in extra_headers {
            out.push_str(&format!("{name}: {value}\r\n"));
        }
        out.push_str("\r\n");
        if let Some(text) = &body_text {
            out.push_str(text);
        }

        Ok(RenderedResponse::new(out))
    }
}

impl Default for ResponseRenderer {
    fn default() -> Self {
        Self::new(Arc::new(StandardCatalog::new()))
    }
}

impl fmt::Debug for ResponseRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseRenderer").finish_non_exhaustive()
    }
}
