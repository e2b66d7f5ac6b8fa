//! HTTP request representation.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidRequestError;

/// HTTP methods supported by the Zoop API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        };
        write!(f, "{s}")
    }
}

/// An HTTP request to be executed by [`HttpClient`](super::HttpClient).
///
/// The path is relative to the configured endpoint and carries any query
/// string inline. Bodies are always JSON.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new request builder for the given method and path.
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            method,
            path: path.into(),
            body: None,
            extra_headers: None,
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the request path, relative to the endpoint.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns the extra headers, if any.
    #[must_use]
    pub const fn extra_headers(&self) -> Option<&HashMap<String, String>> {
        self.extra_headers.as_ref()
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds an extra header to the request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyPath`] if the path is empty.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidRequestError::EmptyPath);
        }

        Ok(HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            extra_headers: self.extra_headers,
        })
    }
}
