//! Lazy page sequence over a list endpoint

use super::types::Page;
use crate::decode::JsonDecoder;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{NextPage, PageNumberPaginator, PaginationState, StopReason};
use futures::stream::{self, LocalBoxStream, StreamExt};
use tracing::{debug, warn};

/// Sequential pages from one endpoint
///
/// Each call to `next_page` issues at most one request. After the last
/// page, an empty page or an error, the sequence is finished and no
/// further requests are made.
pub struct Pages<'a> {
    client: &'a HttpClient,
    path: String,
    paginator: PageNumberPaginator,
    decoder: JsonDecoder,
    strict: bool,
    state: PaginationState,
    requests: u32,
    stop_reason: Option<StopReason>,
}

impl<'a> Pages<'a> {
    /// Create a page sequence starting at the paginator's first page
    pub fn new(
        client: &'a HttpClient,
        path: impl Into<String>,
        paginator: PageNumberPaginator,
        decoder: JsonDecoder,
    ) -> Self {
        let state = paginator.initial_state();
        Self {
            client,
            path: path.into(),
            paginator,
            decoder,
            strict: true,
            state,
            requests: 0,
            stop_reason: None,
        }
    }

    /// Set strict response handling
    ///
    /// When disabled, a response without a record collection ends the
    /// sequence quietly instead of yielding `Error::MalformedResponse`.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Requests issued so far
    pub fn requests_made(&self) -> u32 {
        self.requests
    }

    /// Why the sequence ended, when it ended without an error
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Fetch the next page
    ///
    /// Returns `None` once the sequence is finished. An error is yielded
    /// once, after which the sequence is finished.
    pub async fn next_page(&mut self) -> Option<Result<Page>> {
        if self.state.done {
            return None;
        }

        let number = self.state.page;
        let req = self
            .paginator
            .request_params(&self.state)
            .into_iter()
            .fold(RequestConfig::new(), |req, (k, v)| req.query(k, v));

        self.requests += 1;
        debug!("Fetching {} page {}", self.path, number);

        let body = match self.client.get_text_with_config(&self.path, req).await {
            Ok(body) => body,
            Err(e) => {
                self.state.mark_done();
                return Some(Err(e));
            }
        };

        let records = match self.decoder.decode(&body) {
            Ok(records) => records,
            Err(Error::MalformedResponse { message }) if !self.strict => {
                warn!("No more data or unexpected response format: {message}");
                self.state.mark_done();
                self.stop_reason = Some(StopReason::MissingData);
                return None;
            }
            Err(e) => {
                self.state.mark_done();
                return Some(Err(e));
            }
        };

        match self.paginator.process_response(records.len(), &mut self.state) {
            NextPage::Done(StopReason::EmptyPage) => {
                self.stop_reason = Some(StopReason::EmptyPage);
                return None;
            }
            NextPage::Done(reason) => self.stop_reason = Some(reason),
            NextPage::Continue { .. } => {}
        }

        Some(Ok(Page { number, records }))
    }

    /// View the sequence as a `Stream`
    ///
    /// The stream borrows the sequence, so counters and the stop reason
    /// remain readable once it is dropped.
    pub fn stream(&mut self) -> LocalBoxStream<'_, Result<Page>> {
        stream::unfold(self, |pages| async move {
            let item = pages.next_page().await?;
            Some((item, pages))
        })
        .boxed_local()
    }
}
