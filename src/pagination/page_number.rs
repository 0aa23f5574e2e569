//! Page number pagination
//!
//! Common patterns:
//! - `?page=2`
//! - `?page=2&per_page=50`

use super::types::{NextPage, PaginationState, StopReason};
use std::collections::HashMap;

/// Page number pagination with a fixed page size
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// Query parameter name for page number
    pub page_param: String,
    /// Query parameter name for page size
    pub page_size_param: String,
    /// First page number
    pub start_page: u32,
    /// Records requested per page
    pub page_size: u32,
}

impl PageNumberPaginator {
    /// Create a paginator using `page` / `per_page`, starting at page 1
    pub fn new(page_size: u32) -> Self {
        Self {
            page_param: "page".to_string(),
            page_size_param: "per_page".to_string(),
            start_page: 1,
            page_size,
        }
    }

    /// Override the query parameter names
    #[must_use]
    pub fn with_params(
        mut self,
        page_param: impl Into<String>,
        page_size_param: impl Into<String>,
    ) -> Self {
        self.page_param = page_param.into();
        self.page_size_param = page_size_param.into();
        self
    }

    /// Override the first page number
    #[must_use]
    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    /// Fresh state positioned at the first page
    pub fn initial_state(&self) -> PaginationState {
        PaginationState::with_page(self.start_page)
    }

    /// Query parameters for the request described by `state`
    pub fn request_params(&self, state: &PaginationState) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert(self.page_param.clone(), state.page.to_string());
        params.insert(self.page_size_param.clone(), self.page_size.to_string());
        params
    }

    /// Account for a page of `records_count` records and decide what comes next
    pub fn process_response(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_fetched(records_count as u64);

        if records_count == 0 {
            state.mark_done();
            return NextPage::Done(StopReason::EmptyPage);
        }

        if records_count < self.page_size as usize {
            state.mark_done();
            return NextPage::Done(StopReason::ShortPage);
        }

        state.next_page();
        NextPage::Continue { page: state.page }
    }
}
