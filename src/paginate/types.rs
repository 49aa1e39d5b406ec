//! Request and response types for the pagination entry point

use crate::range::ResolvedWindow;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

/// The parts of an inbound request pagination looks at
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    /// Request headers; `Range-Unit` and `Range` are read
    pub headers: &'a HeaderMap,
    /// Request URI; path and query are reused for navigation links
    pub uri: &'a Uri,
}

impl<'a> PageRequest<'a> {
    /// Wrap request headers and URI
    pub fn new(headers: &'a HeaderMap, uri: &'a Uri) -> Self {
        Self { headers, uri }
    }

    /// Path plus query string, exactly as requested
    pub fn target(&self) -> &'a str {
        self.uri
            .path_and_query()
            .map_or_else(|| self.uri.path(), |pq| pq.as_str())
    }
}

/// What the data callback hands back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served<B> {
    /// Response body for the served window
    pub body: B,
    /// Status chosen by the caller; anything other than 200 is kept as is
    pub status: Option<StatusCode>,
}

impl<B> Served<B> {
    /// Serve a body with the status pagination picks
    pub fn new(body: B) -> Self {
        Self { body, status: None }
    }

    /// Serve a body with an explicit status (redirects, errors, ...)
    pub fn with_status(body: B, status: StatusCode) -> Self {
        Self {
            body,
            status: Some(status),
        }
    }
}

/// Body of a paginated response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody<B> {
    /// Produced by the data callback
    Served(B),
    /// Nothing to send
    Empty,
    /// Short message explaining an unsatisfiable range
    Message(String),
}

impl<B> PageBody<B> {
    /// The served body, if the callback ran
    pub fn served(&self) -> Option<&B> {
        match self {
            Self::Served(body) => Some(body),
            _ => None,
        }
    }

    /// Take the served body, if the callback ran
    pub fn into_served(self) -> Option<B> {
        match self {
            Self::Served(body) => Some(body),
            _ => None,
        }
    }
}

/// A finished paginated response: status, headers and body
#[derive(Debug, Clone)]
pub struct Paginated<B> {
    /// Final status code
    pub status: StatusCode,
    /// `Accept-Ranges`, `Range-Unit`, `Content-Range` and `Link`
    pub headers: HeaderMap,
    /// Response body
    pub body: PageBody<B>,
    /// How the request was resolved
    pub window: ResolvedWindow,
}

impl<B> Paginated<B> {
    /// Header value as a string, if present and printable
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<B: IntoResponse> IntoResponse for Paginated<B> {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            PageBody::Served(body) => body.into_response(),
            PageBody::Empty => ().into_response(),
            PageBody::Message(message) => message.into_response(),
        };
        *response.status_mut() = self.status;
        response.headers_mut().extend(self.headers);
        response
    }
}
