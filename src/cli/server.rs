//! HTTP server exposing a paginated demo collection

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::headers::{ACCEPT_RANGES, CONTENT_RANGE, RANGE_UNIT};
use crate::paginate::{paginate, PageRequest, Paginated, Served};
use crate::range::{CollectionContext, ITEMS_UNIT};
use crate::types::Quantity;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Size of the demo collection
    pub total_items: Quantity,
    /// Largest page served
    pub max_page_size: u64,
    /// Invalid range handling
    pub pagination: PaginationConfig,
}

impl ServerConfig {
    /// Serve `total_items` items with the config's page size
    pub fn new(total_items: impl Into<Quantity>, pagination: PaginationConfig) -> Self {
        Self {
            total_items: total_items.into(),
            max_page_size: pagination.max_page_size,
            pagination,
        }
    }

    /// Override the page size
    #[must_use]
    pub fn with_max_page_size(mut self, max_page_size: u64) -> Self {
        self.max_page_size = max_page_size;
        self
    }
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Error body
#[derive(Debug, Serialize)]
struct ApiError {
    success: bool,
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (
            status,
            Json(ApiError {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response();

        if let Some(content_range) = self.content_range() {
            let headers = response.headers_mut();
            headers.insert(ACCEPT_RANGES, HeaderValue::from_static(ITEMS_UNIT));
            if let Ok(value) = HeaderValue::try_from(content_range) {
                headers.insert(CONTENT_RANGE, value);
            }
        }
        response
    }
}

/// Build the application router
pub fn router(config: ServerConfig) -> Router {
    let state = AppState { config };

    // Browsers only see the pagination headers when they are exposed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([
            header::CONTENT_RANGE,
            header::ACCEPT_RANGES,
            header::LINK,
            HeaderName::from_static(RANGE_UNIT),
        ]);

    Router::new()
        .route("/health", get(health))
        .route("/items", get(list_items))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// The demo collection: item `i` is the integer `i`
async fn list_items(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> std::result::Result<Paginated<Json<Vec<u64>>>, Error> {
    let ctx = CollectionContext::new(state.config.total_items, state.config.max_page_size);
    let request = PageRequest::new(&headers, &uri);

    paginate(&request, &ctx, &state.config.pagination, |limit, offset| {
        let items: Vec<u64> = (offset..offset.saturating_add(limit)).collect();
        Served::new(Json(items))
    })
}
