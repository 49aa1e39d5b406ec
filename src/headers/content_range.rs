//! `Content-Range` for the items unit
//!
//! Rendered as `<first>-<last>/<total>` for a served window and `*/<total>`
//! when nothing was served. An unbounded total is written `*`.

use crate::error::{Error, Result};
use crate::range::{CollectionContext, Outcome, ResolvedWindow};
use crate::types::Quantity;
use std::fmt;
use std::str::FromStr;

/// A parsed or about-to-be-rendered `Content-Range` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRange {
    /// Items `first..=last` out of `total`
    Satisfied {
        first: u64,
        last: u64,
        total: Quantity,
    },
    /// No items served; only the collection size is reported
    Unsatisfied { total: Quantity },
}

impl ContentRange {
    /// Describe a resolved window
    pub fn for_window(window: &ResolvedWindow, ctx: &CollectionContext) -> Self {
        match (window.outcome, window.last_served()) {
            (Outcome::NoContentEmpty, _) => Self::Unsatisfied {
                total: Quantity::ZERO,
            },
            (Outcome::Success | Outcome::PartialContent, Some(last)) => Self::Satisfied {
                first: window.offset,
                last,
                total: ctx.total_items,
            },
            _ => Self::Unsatisfied {
                total: ctx.total_items,
            },
        }
    }

    /// Total reported by this value
    pub fn total(&self) -> Quantity {
        match self {
            Self::Satisfied { total, .. } | Self::Unsatisfied { total } => *total,
        }
    }

    /// Number of items covered, zero when unsatisfied
    pub fn len(&self) -> u64 {
        match self {
            Self::Satisfied { first, last, .. } => last.saturating_sub(*first) + 1,
            Self::Unsatisfied { .. } => 0,
        }
    }

    /// True when no items are covered
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Unsatisfied { .. })
    }
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Satisfied { first, last, total } => {
                write!(f, "{first}-{last}/{}", total.display_or("*"))
            }
            Self::Unsatisfied { total } => write!(f, "*/{}", total.display_or("*")),
        }
    }
}

impl FromStr for ContentRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_header("Content-Range", format!("cannot parse '{s}'"));
        let number = |part: &str| part.trim().parse::<u64>().map_err(|_| invalid());

        // Tolerate a leading unit, as in `items 0-9/100`
        let value = s.trim();
        let value = value
            .strip_prefix(crate::range::ITEMS_UNIT)
            .map_or(value, str::trim_start);

        let (range, total) = value.split_once('/').ok_or_else(invalid)?;
        let total = match total.trim() {
            "*" => Quantity::Unbounded,
            n => Quantity::Finite(number(n)?),
        };

        if range.trim() == "*" {
            return Ok(Self::Unsatisfied { total });
        }

        let (first, last) = range.split_once('-').ok_or_else(invalid)?;
        let (first, last) = (number(first)?, number(last)?);
        if last < first {
            return Err(invalid());
        }
        Ok(Self::Satisfied { first, last, total })
    }
}
