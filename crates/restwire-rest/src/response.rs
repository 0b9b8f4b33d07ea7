//! REST outcome variants

use http::{Method, StatusCode};

/// Outcome of a REST operation, one variant per response shape.
///
/// `T` is the body payload type for the body-bearing variants. Bodyless
/// constructors leave `T` free; pin it with a type annotation (or the unit
/// default) when nothing downstream does.
///
/// Every variant carries its status code, so a handler can override the
/// conventional default with [`RestResponse::with_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestResponse<T = ()> {
    /// Resource removed; no body.
    Deleted { status: StatusCode },
    /// Bare status; no body.
    StatusOnly { status: StatusCode },
    /// Request used a method the resource does not support; lists the ones
    /// it does. Never empty.
    MethodNotAllowed {
        status: StatusCode,
        allow: Vec<Method>,
    },
    /// Resource representation returned from a read.
    Fetched {
        status: StatusCode,
        body: Option<T>,
    },
    /// Resource state after an update.
    Updated {
        status: StatusCode,
        body: Option<T>,
    },
    /// Outcome of a create attempt. The `Location` header is written only
    /// when the status really is `201 Created`.
    Created {
        status: StatusCode,
        body: Option<T>,
        location: Option<String>,
    },
}

impl<T> RestResponse<T> {
    /// Successful delete, `200 OK`.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::StatusCode;
    /// use restwire_rest::RestResponse;
    ///
    /// let response: RestResponse = RestResponse::deleted();
    /// assert_eq!(response.status(), StatusCode::OK);
    /// ```
    pub fn deleted() -> Self {
        Self::Deleted {
            status: StatusCode::OK,
        }
    }

    /// Successful delete with nothing to say, `204 No Content`.
    pub fn deleted_no_content() -> Self {
        Self::Deleted {
            status: StatusCode::NO_CONTENT,
        }
    }

    /// Bare status response.
    pub fn status_only(status: StatusCode) -> Self {
        Self::StatusOnly { status }
    }

    /// `404 Not Found`, no body.
    pub fn not_found() -> Self {
        Self::status_only(StatusCode::NOT_FOUND)
    }

    /// `409 Conflict`, no body; e.g. a create attempt on an existing key.
    pub fn conflict() -> Self {
        Self::status_only(StatusCode::CONFLICT)
    }

    /// `405 Method Not Allowed` listing the methods the resource supports.
    ///
    /// # Panics
    ///
    /// Panics if `allow` is empty; an empty `Allow` header is a contract
    /// violation on the caller's side.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::{Method, StatusCode};
    /// use restwire_rest::RestResponse;
    ///
    /// let response: RestResponse = RestResponse::method_not_allowed([Method::GET, Method::PUT]);
    /// assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    /// ```
    pub fn method_not_allowed<I>(allow: I) -> Self
    where
        I: IntoIterator<Item = Method>,
    {
        let allow: Vec<Method> = allow.into_iter().collect();
        assert!(
            !allow.is_empty(),
            "a method-not-allowed response requires at least one allowed method"
        );
        Self::MethodNotAllowed {
            status: StatusCode::METHOD_NOT_ALLOWED,
            allow,
        }
    }

    /// Read result with a body, `200 OK`.
    pub fn fetched(body: T) -> Self {
        Self::Fetched {
            status: StatusCode::OK,
            body: Some(body),
        }
    }

    /// Update result with the new representation, `200 OK`.
    pub fn updated(body: T) -> Self {
        Self::Updated {
            status: StatusCode::OK,
            body: Some(body),
        }
    }

    /// Successful create, `201 Created`, pointing at the new resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::StatusCode;
    /// use restwire_rest::RestResponse;
    ///
    /// let response = RestResponse::created("/items/42", "new item");
    /// assert_eq!(response.status(), StatusCode::CREATED);
    /// ```
    pub fn created(location: impl Into<String>, body: T) -> Self {
        Self::Created {
            status: StatusCode::CREATED,
            body: Some(body),
            location: Some(location.into()),
        }
    }

    /// The status code this outcome renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Deleted { status }
            | Self::StatusOnly { status }
            | Self::MethodNotAllowed { status, .. }
            | Self::Fetched { status, .. }
            | Self::Updated { status, .. }
            | Self::Created { status, .. } => *status,
        }
    }

    /// Overrides the status code, keeping everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::StatusCode;
    /// use restwire_rest::RestResponse;
    ///
    /// let response: RestResponse = RestResponse::deleted().with_status(StatusCode::ACCEPTED);
    /// assert_eq!(response.status(), StatusCode::ACCEPTED);
    /// ```
    pub fn with_status(mut self, new_status: StatusCode) -> Self {
        match &mut self {
            Self::Deleted { status }
            | Self::StatusOnly { status }
            | Self::MethodNotAllowed { status, .. }
            | Self::Fetched { status, .. }
            | Self::Updated { status, .. }
            | Self::Created { status, .. } => *status = new_status,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_defaults() {
        assert_eq!(RestResponse::<()>::deleted().status(), StatusCode::OK);
        assert_eq!(
            RestResponse::<()>::deleted_no_content().status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(RestResponse::<()>::not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(RestResponse::<()>::conflict().status(), StatusCode::CONFLICT);
        assert_eq!(RestResponse::fetched("x").status(), StatusCode::OK);
        assert_eq!(RestResponse::updated("x").status(), StatusCode::OK);
        assert_eq!(
            RestResponse::created("/items/1", "x").status(),
            StatusCode::CREATED
        );
    }

    #[test]
    #[should_panic(expected = "at least one allowed method")]
    fn test_method_not_allowed_rejects_empty_list() {
        let _: RestResponse = RestResponse::method_not_allowed([]);
    }

    #[test]
    fn test_with_status_keeps_variant_payload() {
        let response = RestResponse::created("/items/1", "x").with_status(StatusCode::CONFLICT);
        match response {
            RestResponse::Created { status, location, .. } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(location.as_deref(), Some("/items/1"));
            }
            other => panic!("variant changed: {other:?}"),
        }
    }
}
