//! Pagination module
//!
//! Page-number pagination: `?page=<n>&per_page=<size>`, starting at page 1.
//!
//! # Overview
//!
//! The paginator tracks a monotonically advancing page cursor and decides,
//! from the number of records on each page, whether another request is
//! needed. A page with fewer records than the page size is the last page;
//! an empty page ends pagination without yielding anything.

mod page_number;
mod types;

pub use page_number::PageNumberPaginator;
pub use types::{NextPage, PaginationState, StopReason};

#[cfg(test)]
mod tests;
