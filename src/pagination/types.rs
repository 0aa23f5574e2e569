//! Pagination types

/// Result of processing one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Another request is needed for this page number
    Continue {
        /// Next page number
        page: u32,
    },
    /// No more pages
    Done(StopReason),
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Why pagination stopped without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The API returned no records
    EmptyPage,
    /// The API returned fewer records than requested
    ShortPage,
    /// The response lacked a record collection and was treated as the end
    MissingData,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::EmptyPage => write!(f, "empty page"),
            StopReason::ShortPage => write!(f, "short page"),
            StopReason::MissingData => write!(f, "missing data"),
        }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Page number of the next request
    pub page: u32,
    /// Pages that returned records
    pub pages_fetched: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Record a page of `count` records
    pub fn add_fetched(&mut self, count: u64) {
        if count > 0 {
            self.pages_fetched += 1;
        }
        self.total_fetched += count;
    }
}
