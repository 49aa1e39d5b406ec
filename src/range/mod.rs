//! Range module
//!
//! Turns an inbound `Range-Unit: items` / `Range: from-to` pair into a
//! [`RangeRequest`] and reconciles it against the collection with [`resolve`].
//!
//! # Overview
//!
//! ```text
//! Range header ──► RangeRequest ──► resolve(ctx) ──► ResolvedWindow
//!                  {from, to}                         {offset, limit,
//!                                                      requested_limit, outcome}
//! ```
//!
//! Both steps are pure; nothing here is kept between requests.

mod request;
mod window;

pub use request::{RangeRequest, ITEMS_UNIT};
pub use window::{resolve, CollectionContext, Outcome, ResolvedWindow};

#[cfg(test)]
mod tests;
