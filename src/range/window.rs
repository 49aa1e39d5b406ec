//! Window resolution
//!
//! Reconciles a [`RangeRequest`] with the collection size and the server's
//! maximum page size, producing the window actually served.

use super::request::RangeRequest;
use crate::types::Quantity;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the caller knows about the collection for this request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionContext {
    /// Total number of items, or unbounded for an infinite collection
    pub total_items: Quantity,
    /// Largest page the server will serve; always positive
    pub max_page_size: u64,
}

impl CollectionContext {
    /// Create a context; a zero `max_page_size` is raised to one
    pub fn new(total_items: impl Into<Quantity>, max_page_size: u64) -> Self {
        Self {
            total_items: total_items.into(),
            max_page_size: max_page_size.max(1),
        }
    }

    /// Context for a collection with no end
    pub fn unbounded(max_page_size: u64) -> Self {
        Self::new(Quantity::Unbounded, max_page_size)
    }

    /// Index of the last item; `None` for empty or unbounded collections
    pub fn last_index(&self) -> Option<u64> {
        self.total_items.finite().and_then(|n| n.checked_sub(1))
    }
}

/// How a request was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The whole collection fit in the served window
    Success,
    /// Only part of the collection was served
    PartialContent,
    /// Empty collection requested from index zero
    NoContentEmpty,
    /// `from > to`, or `from` past the end of a nonempty collection
    InvalidRange,
}

impl Outcome {
    /// Default status code for this outcome
    pub fn status(self) -> StatusCode {
        match self {
            Self::Success | Self::NoContentEmpty => StatusCode::OK,
            Self::PartialContent => StatusCode::PARTIAL_CONTENT,
            Self::InvalidRange => StatusCode::RANGE_NOT_SATISFIABLE,
        }
    }

    /// Whether the data callback should run
    pub fn serves_items(self) -> bool {
        matches!(self, Self::Success | Self::PartialContent)
    }
}

/// The window served for one request.
///
/// `offset`/`limit` are what the data callback receives. `requested_limit` is
/// the page length the client asked for and is what navigation links step by,
/// even when this page was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedWindow {
    /// First served index
    pub offset: u64,
    /// Number of served items
    pub limit: u64,
    /// Page length the client asked for
    pub requested_limit: Quantity,
    /// Resolution result
    pub outcome: Outcome,
}

impl ResolvedWindow {
    fn empty(request: &RangeRequest, outcome: Outcome) -> Self {
        Self {
            offset: request.from,
            limit: 0,
            requested_limit: if request.is_empty() {
                Quantity::ZERO
            } else {
                request.len()
            },
            outcome,
        }
    }

    /// Index of the last served item; `None` when nothing is served
    pub fn last_served(&self) -> Option<u64> {
        if self.limit == 0 {
            None
        } else {
            Some(self.offset.saturating_add(self.limit - 1))
        }
    }

    /// Whether the served window stops before the end of the collection
    pub fn has_more(&self, ctx: &CollectionContext) -> bool {
        if !self.outcome.serves_items() {
            return false;
        }
        match ctx.total_items {
            Quantity::Unbounded => true,
            Quantity::Finite(total) => self.offset.saturating_add(self.limit) < total,
        }
    }
}

/// Resolve a requested range against the collection.
///
/// Pure function of its inputs:
/// - `from > to`, or a nonzero `from` at or past the end of a finite
///   collection, is `InvalidRange`;
/// - the served window is `from ..= min(to, last index, from + max_page_size - 1)`;
/// - an empty collection requested from zero is `NoContentEmpty`;
/// - otherwise `Success` when the whole collection fit, `PartialContent` if not.
pub fn resolve(request: RangeRequest, ctx: &CollectionContext) -> ResolvedWindow {
    let past_end = request.from > 0 && ctx.total_items <= request.from;
    if request.is_empty() || past_end {
        debug!(
            from = request.from,
            to = %request.to.display_or("*"),
            total = %ctx.total_items.display_or("*"),
            "Unsatisfiable items range"
        );
        return ResolvedWindow::empty(&request, Outcome::InvalidRange);
    }

    let requested_limit = request.len();
    let remaining = ctx.total_items.saturating_sub(request.from);
    let limit = requested_limit.min(remaining).clamp_to(ctx.max_page_size);

    if limit == 0 {
        debug!("Empty collection, nothing to serve");
        return ResolvedWindow::empty(&request, Outcome::NoContentEmpty);
    }

    let outcome = if ctx.total_items == limit {
        Outcome::Success
    } else {
        Outcome::PartialContent
    };

    debug!(
        offset = request.from,
        limit,
        requested_limit = %requested_limit.display_or("*"),
        ?outcome,
        "Resolved items window"
    );

    ResolvedWindow {
        offset: request.from,
        limit,
        requested_limit,
        outcome,
    }
}
