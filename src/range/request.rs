//! Range request parsing
//!
//! The `Range` value for the items unit is `<from>-<to>` with `<to>` optional.
//! A missing, foreign-unit or malformed header is never an error: the request
//! falls back to "everything", `0-`.

use crate::error::{Error, Result};
use crate::types::Quantity;
use axum::http::HeaderMap;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// Range unit this crate paginates in
pub const ITEMS_UNIT: &str = "items";

static ITEM_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)-(\d*)\s*$").unwrap());

/// A requested range of item indexes, both ends inclusive.
///
/// `from` is always concrete; `to` is `Unbounded` for an open range (`50-`).
/// The same shape describes the `items="a-b"` parameter of navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeRequest {
    /// First requested index
    pub from: u64,
    /// Last requested index, inclusive
    pub to: Quantity,
}

impl Default for RangeRequest {
    fn default() -> Self {
        Self::everything()
    }
}

impl RangeRequest {
    /// A closed range `from-to`
    pub fn new(from: u64, to: u64) -> Self {
        Self {
            from,
            to: Quantity::Finite(to),
        }
    }

    /// An open range `from-`
    pub fn open(from: u64) -> Self {
        Self {
            from,
            to: Quantity::Unbounded,
        }
    }

    /// The default request, `0-`
    pub fn everything() -> Self {
        Self::open(0)
    }

    /// A range of `len` items starting at `from`; unbounded length gives an open range.
    ///
    /// `len` must be at least one when finite.
    pub fn starting_at(from: u64, len: Quantity) -> Self {
        Self {
            from,
            to: len.saturating_add(from).saturating_sub(1),
        }
    }

    /// Number of items the client asked for: `to - from + 1`.
    ///
    /// Only meaningful when `from <= to`.
    pub fn len(&self) -> Quantity {
        self.to.saturating_sub(self.from).saturating_add(1)
    }

    /// True when the range names no index at all (`from > to`)
    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }

    /// Interpret a `Range-Unit` / `Range` header pair.
    ///
    /// Only the `items` unit activates parsing; anything that does not look like
    /// `<digits>-<digits>?` is treated as if no range was sent.
    pub fn from_header_values(unit: Option<&str>, range: Option<&str>) -> Self {
        let Some(range) = range else {
            return Self::default();
        };
        if unit.map(str::trim) != Some(ITEMS_UNIT) {
            return Self::default();
        }

        match range.parse::<Self>() {
            Ok(request) => request,
            Err(e) => {
                debug!(range, error = %e, "Ignoring malformed items range");
                Self::default()
            }
        }
    }

    /// Read the `Range-Unit` and `Range` headers of a request
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let unit = headers.get("range-unit").and_then(|v| v.to_str().ok());
        let range = headers.get("range").and_then(|v| v.to_str().ok());
        Self::from_header_values(unit, range)
    }
}

impl FromStr for RangeRequest {
    type Err = Error;

    /// Strict parse of `from-to` / `from-`
    fn from_str(s: &str) -> Result<Self> {
        let caps = ITEM_RANGE
            .captures(s)
            .ok_or_else(|| Error::invalid_header("Range", format!("expected <from>-<to>, got '{s}'")))?;

        let from = caps[1]
            .parse::<u64>()
            .map_err(|e| Error::invalid_header("Range", format!("from: {e}")))?;
        let to = match &caps[2] {
            "" => Quantity::Unbounded,
            digits => Quantity::Finite(
                digits
                    .parse::<u64>()
                    .map_err(|e| Error::invalid_header("Range", format!("to: {e}")))?,
            ),
        };

        Ok(Self { from, to })
    }
}

impl fmt::Display for RangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to.display_or(""))
    }
}
