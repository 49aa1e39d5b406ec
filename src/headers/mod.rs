//! Response header formatting
//!
//! Pure formatters for the headers an items-range response carries:
//!
//! - `Accept-Ranges: items` and `Range-Unit: items`
//! - `Content-Range: 0-99/101`, `*/101`, `*/0`, `50-149/*`
//! - `Link: <url>; rel="first"; items="0-9", ...`
//!
//! Both formatters also parse their own output, which is what the client
//! helper uses to walk a paginated collection.

mod content_range;
mod links;

pub use content_range::ContentRange;
pub use links::{
    find_link, parse_link_header, LinkRelation, NavigationLink, NavigationLinks, ParsedLink,
};

/// `Accept-Ranges` header name
pub const ACCEPT_RANGES: &str = "accept-ranges";

/// `Range-Unit` header name
pub const RANGE_UNIT: &str = "range-unit";

/// `Content-Range` header name
pub const CONTENT_RANGE: &str = "content-range";

/// `Link` header name
pub const LINK: &str = "link";
