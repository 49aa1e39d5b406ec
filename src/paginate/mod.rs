//! Pagination entry point
//!
//! [`paginate`] runs the whole per-request pipeline: parse the range headers,
//! resolve the window, call the data callback (only when there is something to
//! serve), and finalize status plus `Accept-Ranges`, `Range-Unit`,
//! `Content-Range` and `Link`.
//!
//! ```rust,ignore
//! use items_range::paginate::{paginate, PageRequest, Served};
//! use items_range::{CollectionContext, PaginationConfig};
//!
//! async fn list(headers: HeaderMap, uri: Uri) -> Response {
//!     let ctx = CollectionContext::new(store.count(), 100);
//!     paginate(&PageRequest::new(&headers, &uri), &ctx, &PaginationConfig::default(),
//!         |limit, offset| Served::new(Json(store.fetch(limit, offset))))
//!         .into_response()
//! }
//! ```

mod types;

pub use types::{PageBody, PageRequest, Paginated, Served};

use crate::config::{self, InvalidRangePolicy, PaginationConfig};
use crate::error::{Error, Result};
use crate::headers::{
    ContentRange, NavigationLinks, ACCEPT_RANGES, CONTENT_RANGE, LINK, RANGE_UNIT,
};
use crate::range::{resolve, CollectionContext, Outcome, RangeRequest, ITEMS_UNIT};
use crate::types::Quantity;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use tracing::debug;

/// Paginate one request.
///
/// `on_serve(limit, offset)` is called at most once, and never for an
/// unsatisfiable range or an empty collection. A status returned by the
/// callback is kept unless it is 200, in which case 206 replaces it for
/// partial windows.
///
/// Unsatisfiable ranges answer 416 with `Content-Range: */<total>`; with
/// [`InvalidRangePolicy::Raise`] they are returned as [`Error::InvalidRange`]
/// instead.
pub fn paginate<B, F>(
    request: &PageRequest<'_>,
    ctx: &CollectionContext,
    config: &PaginationConfig,
    on_serve: F,
) -> Result<Paginated<B>>
where
    F: FnOnce(u64, u64) -> Served<B>,
{
    let range = RangeRequest::from_headers(request.headers);
    let window = resolve(range, ctx);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_RANGES, HeaderValue::from_static(ITEMS_UNIT));
    headers.insert(
        CONTENT_RANGE,
        header_value(CONTENT_RANGE, ContentRange::for_window(&window, ctx).to_string())?,
    );

    match window.outcome {
        Outcome::InvalidRange => {
            debug!(range = %range, "Skipping data callback for unsatisfiable range");
            let body = match config.invalid_range {
                InvalidRangePolicy::Raise => {
                    return Err(Error::invalid_range(range.from, range.to, ctx.total_items));
                }
                InvalidRangePolicy::Render => PageBody::Message(format!(
                    "Requested range {range} is not satisfiable for {} items",
                    ctx.total_items.display_or("unbounded")
                )),
                InvalidRangePolicy::Silent => PageBody::Empty,
            };
            return Ok(Paginated {
                status: StatusCode::RANGE_NOT_SATISFIABLE,
                headers,
                body,
                window,
            });
        }
        Outcome::NoContentEmpty => {
            debug!("Skipping data callback for empty collection");
            headers.insert(RANGE_UNIT, HeaderValue::from_static(ITEMS_UNIT));
            return Ok(Paginated {
                status: StatusCode::OK,
                headers,
                body: PageBody::Empty,
                window,
            });
        }
        Outcome::Success | Outcome::PartialContent => {}
    }

    headers.insert(RANGE_UNIT, HeaderValue::from_static(ITEMS_UNIT));
    let links = NavigationLinks::build(&window, ctx, request.target());
    if let Some(link) = links.header_value() {
        headers.insert(LINK, header_value(LINK, link)?);
    }

    let served = on_serve(window.limit, window.offset);
    let status = match served.status {
        Some(status) if status != StatusCode::OK => status,
        _ => window.outcome.status(),
    };

    Ok(Paginated {
        status,
        headers,
        body: PageBody::Served(served.body),
        window,
    })
}

/// [`paginate`] with the process-wide config and its `max_page_size`
pub fn paginate_with_defaults<B, F>(
    request: &PageRequest<'_>,
    total_items: impl Into<Quantity>,
    on_serve: F,
) -> Result<Paginated<B>>
where
    F: FnOnce(u64, u64) -> Served<B>,
{
    let config = config::current();
    let ctx = CollectionContext::new(total_items, config.max_page_size);
    paginate(request, &ctx, config, on_serve)
}

fn header_value(name: &str, value: String) -> Result<HeaderValue> {
    HeaderValue::try_from(value).map_err(|e| Error::invalid_header(name, e.to_string()))
}
