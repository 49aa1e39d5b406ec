//! Tests for range module

use super::*;
use crate::types::Quantity;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use proptest::prelude::*;
use test_case::test_case;

fn items_headers(range: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("range-unit", HeaderValue::from_static("items"));
    headers.insert("range", HeaderValue::from_str(range).unwrap());
    headers
}

// ============================================================================
// RangeRequest Parsing Tests
// ============================================================================

#[test]
fn test_default_request_is_everything() {
    let request = RangeRequest::default();
    assert_eq!(request.from, 0);
    assert_eq!(request.to, Quantity::Unbounded);
    assert_eq!(request.to_string(), "0-");
}

#[test_case("0-99", 0, Quantity::Finite(99) ; "closed range")]
#[test_case("20-29", 20, Quantity::Finite(29) ; "middle page")]
#[test_case("50-", 50, Quantity::Unbounded ; "open range")]
#[test_case(" 3-3 ", 3, Quantity::Finite(3) ; "surrounding whitespace")]
#[test_case("1-0", 1, Quantity::Finite(0) ; "reversed range still parses")]
fn test_parse_items_range(value: &str, from: u64, to: Quantity) {
    let request = RangeRequest::from_headers(&items_headers(value));
    assert_eq!(request, RangeRequest { from, to });
}

#[test_case("abc" ; "not a range")]
#[test_case("-5" ; "suffix range")]
#[test_case("5" ; "missing dash")]
#[test_case("1-2-3" ; "too many parts")]
#[test_case("0x1-5" ; "hex digits")]
#[test_case("" ; "empty value")]
#[test_case("99999999999999999999999-1" ; "from overflows")]
fn test_malformed_range_falls_back_to_default(value: &str) {
    let request = RangeRequest::from_headers(&items_headers(value));
    assert_eq!(request, RangeRequest::everything());
}

#[test]
fn test_range_without_items_unit_is_ignored() {
    let mut headers = HeaderMap::new();
    headers.insert("range", HeaderValue::from_static("0-9"));
    assert_eq!(RangeRequest::from_headers(&headers), RangeRequest::everything());

    headers.insert("range-unit", HeaderValue::from_static("bytes"));
    assert_eq!(RangeRequest::from_headers(&headers), RangeRequest::everything());
}

#[test]
fn test_unit_without_range_is_ignored() {
    assert_eq!(
        RangeRequest::from_header_values(Some("items"), None),
        RangeRequest::everything()
    );
}

#[test]
fn test_strict_parse_reports_errors() {
    assert!("nope".parse::<RangeRequest>().is_err());
    assert_eq!("4-".parse::<RangeRequest>().unwrap(), RangeRequest::open(4));
    assert_eq!("4-8".parse::<RangeRequest>().unwrap(), RangeRequest::new(4, 8));
}

#[test]
fn test_request_length() {
    assert_eq!(RangeRequest::new(20, 29).len(), Quantity::Finite(10));
    assert_eq!(RangeRequest::new(7, 7).len(), Quantity::Finite(1));
    assert_eq!(RangeRequest::open(7).len(), Quantity::Unbounded);
    assert!(RangeRequest::new(1, 0).is_empty());
    assert!(!RangeRequest::new(0, 0).is_empty());
}

#[test]
fn test_starting_at() {
    assert_eq!(
        RangeRequest::starting_at(30, Quantity::Finite(10)),
        RangeRequest::new(30, 39)
    );
    assert_eq!(
        RangeRequest::starting_at(30, Quantity::Unbounded),
        RangeRequest::open(30)
    );
}

// ============================================================================
// Resolver Tests
// ============================================================================

#[test]
fn test_no_range_header_is_clamped_to_max_page_size() {
    let ctx = CollectionContext::new(101, 100);
    let window = resolve(RangeRequest::default(), &ctx);

    assert_eq!(window.offset, 0);
    assert_eq!(window.limit, 100);
    assert_eq!(window.requested_limit, Quantity::Unbounded);
    assert_eq!(window.outcome, Outcome::PartialContent);
    assert_eq!(window.outcome.status(), StatusCode::PARTIAL_CONTENT);
}

#[test]
fn test_whole_collection_fits() {
    let ctx = CollectionContext::new(100, 100);
    let window = resolve(RangeRequest::default(), &ctx);

    assert_eq!(window.limit, 100);
    assert_eq!(window.outcome, Outcome::Success);
    assert_eq!(window.outcome.status(), StatusCode::OK);
}

#[test]
fn test_oversized_range_is_truncated_not_rejected() {
    let ctx = CollectionContext::new(101, 100);
    let window = resolve(RangeRequest::new(0, 100), &ctx);

    assert_eq!(window.limit, 100);
    assert_eq!(window.last_served(), Some(99));
    assert_eq!(window.requested_limit, Quantity::Finite(101));
    assert_eq!(window.outcome, Outcome::PartialContent);
}

#[test]
fn test_range_past_last_index_is_truncated_to_collection() {
    let ctx = CollectionContext::new(25, 100);
    let window = resolve(RangeRequest::new(20, 29), &ctx);

    assert_eq!(window.offset, 20);
    assert_eq!(window.limit, 5);
    assert_eq!(window.requested_limit, Quantity::Finite(10));
    assert_eq!(window.outcome, Outcome::PartialContent);
}

#[test]
fn test_reversed_range_is_invalid() {
    let ctx = CollectionContext::new(101, 100);
    let window = resolve(RangeRequest::new(1, 0), &ctx);

    assert_eq!(window.outcome, Outcome::InvalidRange);
    assert_eq!(window.limit, 0);
    assert_eq!(window.outcome.status(), StatusCode::RANGE_NOT_SATISFIABLE);
}

#[test]
fn test_single_item_request_is_valid() {
    let ctx = CollectionContext::new(101, 100);
    let window = resolve(RangeRequest::new(5, 5), &ctx);

    assert_eq!(window.outcome, Outcome::PartialContent);
    assert_eq!(window.offset, 5);
    assert_eq!(window.limit, 1);
}

#[test_case(101, 101 ; "from equals total")]
#[test_case(101, 500 ; "from beyond total")]
#[test_case(0, 1 ; "nonzero from on empty collection")]
fn test_from_past_end_is_invalid(total: u64, from: u64) {
    let ctx = CollectionContext::new(total, 100);
    let window = resolve(RangeRequest::new(from, from + 10), &ctx);
    assert_eq!(window.outcome, Outcome::InvalidRange);
    assert!(!window.outcome.serves_items());
}

#[test]
fn test_empty_collection_from_zero_is_not_an_error() {
    let ctx = CollectionContext::new(0, 100);

    let window = resolve(RangeRequest::new(0, 9), &ctx);
    assert_eq!(window.outcome, Outcome::NoContentEmpty);
    assert_eq!(window.limit, 0);
    assert_eq!(window.outcome.status(), StatusCode::OK);

    let window = resolve(RangeRequest::default(), &ctx);
    assert_eq!(window.outcome, Outcome::NoContentEmpty);
}

#[test]
fn test_open_range_on_unbounded_collection() {
    let ctx = CollectionContext::unbounded(1_000_000);
    let window = resolve(RangeRequest::open(50), &ctx);

    assert_eq!(window.offset, 50);
    assert_eq!(window.limit, 1_000_000);
    assert_eq!(window.requested_limit, Quantity::Unbounded);
    assert_eq!(window.outcome, Outcome::PartialContent);
    assert!(window.has_more(&ctx));
}

#[test]
fn test_far_offset_on_unbounded_collection_is_valid() {
    let ctx = CollectionContext::unbounded(10);
    let window = resolve(RangeRequest::new(u64::MAX - 3, u64::MAX), &ctx);

    assert_eq!(window.outcome, Outcome::PartialContent);
    assert_eq!(window.limit, 4);
    assert_eq!(window.last_served(), Some(u64::MAX));
}

#[test]
fn test_zero_max_page_size_is_raised_to_one() {
    let ctx = CollectionContext::new(10, 0);
    assert_eq!(ctx.max_page_size, 1);
    assert_eq!(resolve(RangeRequest::default(), &ctx).limit, 1);
}

#[test]
fn test_last_index() {
    assert_eq!(CollectionContext::new(10, 5).last_index(), Some(9));
    assert_eq!(CollectionContext::new(0, 5).last_index(), None);
    assert_eq!(CollectionContext::unbounded(5).last_index(), None);
}

// ============================================================================
// Resolver Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_limit_never_exceeds_bounds(
        total in 0u64..5_000,
        max in 1u64..500,
        from in 0u64..5_000,
        len in 1u64..2_000,
    ) {
        let ctx = CollectionContext::new(total, max);
        let window = resolve(RangeRequest::new(from, from + len - 1), &ctx);

        prop_assert!(window.limit <= max);
        if window.outcome.serves_items() {
            prop_assert!(window.limit <= total - from);
            prop_assert!(window.limit >= 1);
        }
    }

    #[test]
    fn prop_reversed_ranges_are_always_invalid(
        total in 0u64..5_000,
        to in 0u64..5_000,
        gap in 1u64..100,
    ) {
        let ctx = CollectionContext::new(total, 100);
        let window = resolve(RangeRequest::new(to + gap, to), &ctx);
        prop_assert_eq!(window.outcome, Outcome::InvalidRange);
    }

    #[test]
    fn prop_single_item_inside_collection_succeeds(total in 1u64..5_000, pick in 0u64..5_000) {
        let from = pick % total;
        let ctx = CollectionContext::new(total, 100);
        let window = resolve(RangeRequest::new(from, from), &ctx);
        prop_assert!(window.outcome.serves_items());
        prop_assert_eq!(window.limit, 1);
    }

    #[test]
    fn prop_from_past_end_is_invalid(total in 0u64..5_000, extra in 0u64..100) {
        let from = total + extra;
        prop_assume!(from > 0);
        let ctx = CollectionContext::new(total, 100);
        let window = resolve(RangeRequest::open(from), &ctx);
        prop_assert_eq!(window.outcome, Outcome::InvalidRange);
    }
}
