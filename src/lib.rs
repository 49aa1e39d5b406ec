// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # items-range
//!
//! Item-range pagination for HTTP collection endpoints.
//!
//! Clients ask for a slice of a collection with `Range-Unit: items` and
//! `Range: 20-29` (or an open `Range: 50-`). The server answers with the window
//! it actually served, a `Content-Range` describing it, and `Link` headers to
//! the first, last, next and previous pages.
//!
//! ## Features
//!
//! - **Range Parsing**: Lenient `items` range parsing, malformed headers mean "no range"
//! - **Window Resolution**: Clamps to the collection and to a server page size
//! - **Unbounded Collections**: Infinite collections and open-ended ranges
//! - **Navigation Links**: `first`, `last`, `next`, `prev` with stable step sizes
//! - **axum Integration**: `Paginated<B>` is an `IntoResponse`
//! - **Client**: Walk a paginated endpoint by following `next` links
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use items_range::paginate::{paginate, PageRequest, Served};
//! use items_range::{CollectionContext, PaginationConfig};
//!
//! let ctx = CollectionContext::new(101u64, 100);
//! let page = paginate(&PageRequest::new(&headers, &uri), &ctx, &PaginationConfig::default(),
//!     |limit, offset| Served::new(fetch(limit, offset)))?;
//! assert_eq!(page.header("content-range"), Some("0-99/101"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────┐   ┌──────────────┐
//! │ RangeRequest │──►│   resolve    │──►│ ContentRange  │──►│  paginate    │
//! │ Range header │   │ window+status│   │ NavigationLinks│  │ on_serve(l,o)│
//! └──────────────┘   └──────────────┘   └───────────────┘   └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Range request parsing and window resolution
pub mod range;

/// Content-Range and Link header formatting
pub mod headers;

/// Pagination entry point
pub mod paginate;

/// Pagination configuration
pub mod config;

/// Client for paginated endpoints
pub mod client;

/// Command-line interface and demo server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{InvalidRangePolicy, PaginationConfig};
pub use error::{Error, Result};
pub use headers::{ContentRange, LinkRelation, NavigationLinks};
pub use paginate::{paginate, PageBody, PageRequest, Paginated, Served};
pub use range::{resolve, CollectionContext, Outcome, RangeRequest, ResolvedWindow};
pub use types::Quantity;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
