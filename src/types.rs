//! Common types used throughout items-range
//!
//! [`Quantity`] is the one number type the pagination arithmetic works in: a
//! non-negative count that may also be unbounded (an infinite collection, or an
//! open-ended `from-` range).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Quantity
// ============================================================================

/// A non-negative integer or the distinguished unbounded value.
///
/// `Unbounded` compares greater than every finite value, absorbs additions and
/// subtractions, and is never rendered as a number. Callers choose how it looks
/// at the formatting boundary via [`Quantity::display_or`].
///
/// Serialized as a JSON number, or `null` for `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum Quantity {
    /// A concrete count or index
    Finite(u64),
    /// Larger than any finite value
    Unbounded,
}

impl Quantity {
    /// Zero items
    pub const ZERO: Self = Self::Finite(0);

    /// Is this a concrete value?
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Is this the unbounded marker?
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The finite value, if any
    pub fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(n) => Some(n),
            Self::Unbounded => None,
        }
    }

    /// `self + rhs`, saturating at `u64::MAX` for finite values
    #[must_use]
    pub fn saturating_add(self, rhs: u64) -> Self {
        match self {
            Self::Finite(n) => Self::Finite(n.saturating_add(rhs)),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// `self - rhs`, floored at zero for finite values
    #[must_use]
    pub fn saturating_sub(self, rhs: u64) -> Self {
        match self {
            Self::Finite(n) => Self::Finite(n.saturating_sub(rhs)),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// Cap this quantity at a finite bound; the result is always finite
    pub fn clamp_to(self, bound: u64) -> u64 {
        match self {
            Self::Finite(n) => n.min(bound),
            Self::Unbounded => bound,
        }
    }

    /// Render the finite value, or `unbounded` in its place
    pub fn display_or(&self, unbounded: &str) -> String {
        match self {
            Self::Finite(n) => n.to_string(),
            Self::Unbounded => unbounded.to_string(),
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.cmp(b),
            (Self::Finite(_), Self::Unbounded) => Ordering::Less,
            (Self::Unbounded, Self::Finite(_)) => Ordering::Greater,
            (Self::Unbounded, Self::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialEq<u64> for Quantity {
    fn eq(&self, other: &u64) -> bool {
        *self == Self::Finite(*other)
    }
}

impl PartialOrd<u64> for Quantity {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(self.cmp(&Self::Finite(*other)))
    }
}

impl From<u64> for Quantity {
    fn from(n: u64) -> Self {
        Self::Finite(n)
    }
}

impl From<Option<u64>> for Quantity {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unbounded, Self::Finite)
    }
}

impl From<Quantity> for Option<u64> {
    fn from(q: Quantity) -> Self {
        q.finite()
    }
}
