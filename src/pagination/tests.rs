//! Tests for pagination module

use super::*;
use test_case::test_case;

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_predicates() {
    let next = NextPage::Continue { page: 2 };
    assert!(next.is_continue());
    assert!(!next.is_done());

    let next = NextPage::Done(StopReason::ShortPage);
    assert!(next.is_done());
    assert!(!next.is_continue());
}

#[test]
fn test_stop_reason_display() {
    assert_eq!(StopReason::EmptyPage.to_string(), "empty page");
    assert_eq!(StopReason::ShortPage.to_string(), "short page");
    assert_eq!(StopReason::MissingData.to_string(), "missing data");
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::default();
    assert_eq!(state.page, 0);
    assert_eq!(state.pages_fetched, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::with_page(1);
    state.add_fetched(20);
    state.next_page();
    state.add_fetched(0);

    assert_eq!(state.page, 2);
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.total_fetched, 20);

    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// PageNumberPaginator Tests
// ============================================================================

#[test]
fn test_page_number_defaults() {
    let paginator = PageNumberPaginator::new(20);
    assert_eq!(paginator.page_param, "page");
    assert_eq!(paginator.page_size_param, "per_page");
    assert_eq!(paginator.start_page, 1);
    assert_eq!(paginator.page_size, 20);
}

#[test]
fn test_page_number_request_params() {
    let paginator = PageNumberPaginator::new(100);
    let state = paginator.initial_state();

    let params = paginator.request_params(&state);
    assert_eq!(params.get("page"), Some(&"1".to_string()));
    assert_eq!(params.get("per_page"), Some(&"100".to_string()));
    assert_eq!(params.len(), 2);
}

#[test]
fn test_page_number_custom_params() {
    let paginator = PageNumberPaginator::new(10)
        .with_params("p", "size")
        .with_start_page(0);
    let state = paginator.initial_state();

    let params = paginator.request_params(&state);
    assert_eq!(params.get("p"), Some(&"0".to_string()));
    assert_eq!(params.get("size"), Some(&"10".to_string()));
}

#[test]
fn test_page_number_full_page_continues() {
    let paginator = PageNumberPaginator::new(20);
    let mut state = paginator.initial_state();

    let next = paginator.process_response(20, &mut state);
    assert_eq!(next, NextPage::Continue { page: 2 });
    assert_eq!(state.page, 2);
    assert!(!state.done);

    let params = paginator.request_params(&state);
    assert_eq!(params.get("page"), Some(&"2".to_string()));
}

#[test]
fn test_page_number_short_page_stops() {
    let paginator = PageNumberPaginator::new(20);
    let mut state = paginator.initial_state();

    let next = paginator.process_response(5, &mut state);
    assert_eq!(next, NextPage::Done(StopReason::ShortPage));
    assert!(state.done);
    assert_eq!(state.total_fetched, 5);
    assert_eq!(state.page, 1);
}

#[test]
fn test_page_number_empty_page_stops() {
    let paginator = PageNumberPaginator::new(20);
    let mut state = paginator.initial_state();

    let next = paginator.process_response(0, &mut state);
    assert_eq!(next, NextPage::Done(StopReason::EmptyPage));
    assert!(state.done);
    assert_eq!(state.pages_fetched, 0);
}

/// Drive the paginator over `total` records served `page_size` at a time and
/// return (requests made, records seen).
fn simulate(page_size: u32, total: u64) -> (u32, u64) {
    let paginator = PageNumberPaginator::new(page_size);
    let mut state = paginator.initial_state();
    let mut requests = 0;
    let mut seen = 0;

    loop {
        requests += 1;
        let offset = u64::from(state.page - 1) * u64::from(page_size);
        let on_page = total.saturating_sub(offset).min(u64::from(page_size));
        seen += on_page;

        if paginator
            .process_response(on_page as usize, &mut state)
            .is_done()
        {
            break;
        }
    }

    assert_eq!(state.total_fetched, seen);
    (requests, seen)
}

#[test_case(20, 45, 3 ; "two full pages then a short page")]
#[test_case(20, 40, 3 ; "exact multiple needs a trailing empty request")]
#[test_case(20, 0, 1 ; "no records")]
#[test_case(100, 7, 1 ; "single short page")]
#[test_case(1, 3, 4 ; "page size one")]
fn test_page_number_request_count(page_size: u32, total: u64, expected_requests: u32) {
    let (requests, seen) = simulate(page_size, total);
    assert_eq!(seen, total);
    assert_eq!(requests, expected_requests);
}
