//! Paginated, filterable list of operadoras.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::operadora::Operadora;
use crate::dto::api::ListQuery;
use crate::pagination::{page_links, total_pages};
use crate::repository::OperadoraReader;
use crate::store::{LOAD_ERROR_MESSAGE, RequestToken, StoreCell};

/// Everything the list view renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub items: Vec<Operadora>,
    pub total: usize,
    /// Page last requested. Navigation only ever targets `1..=total_pages()`,
    /// but a refetch whose `total` shrank can leave it past the new last page
    /// until the user navigates; `page_links` clamps it for display.
    pub page: usize,
    pub limit: usize,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl ListState {
    /// Empty first page with the given page size (at least 1).
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            limit: limit.max(1),
            search: String::new(),
            loading: false,
            error: None,
        }
    }

    /// `ceil(total / limit)`; zero until a fetch reports matches.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.limit)
    }

    /// Parameters for fetching the current page.
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.page, self.limit, self.search.clone())
    }

    pub fn page_links(&self) -> Vec<Option<usize>> {
        page_links(self.total_pages(), self.page)
    }

    fn start_request(&mut self) -> ListQuery {
        self.loading = true;
        self.error = None;
        self.query()
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Shared list state plus the actions that keep it in sync with the backend.
pub struct ListStore<R: ?Sized> {
    repo: Arc<R>,
    cell: StoreCell<ListState>,
}

impl<R> ListStore<R>
where
    R: OperadoraReader + ?Sized,
{
    pub fn new(repo: Arc<R>, limit: usize) -> Self {
        Self {
            repo,
            cell: StoreCell::new(ListState::new(limit)),
        }
    }

    pub async fn snapshot(&self) -> ListState {
        self.cell.snapshot().await
    }

    pub async fn total_pages(&self) -> usize {
        self.cell.read(ListState::total_pages).await
    }

    pub async fn page_links(&self) -> Vec<Option<usize>> {
        self.cell.read(ListState::page_links).await
    }

    /// Reloads the current page with the current filter.
    pub async fn fetch_list(&self) {
        let (token, query) = self.cell.begin(ListState::start_request).await;
        self.dispatch(token, query).await;
    }

    /// Moves to `target` and fetches it.
    ///
    /// Ignored when `target` falls outside `1..=total_pages()` as known before
    /// the call, which disables navigation until a fetch reports a total.
    /// Returns whether a fetch was dispatched.
    pub async fn go_to_page(&self, target: usize) -> bool {
        let started = self
            .cell
            .try_begin(|state| {
                if target < 1 || target > state.total_pages() {
                    return None;
                }
                state.page = target;
                Some(state.start_request())
            })
            .await;

        match started {
            Some((token, query)) => {
                self.dispatch(token, query).await;
                true
            }
            None => {
                debug!("Ignoring navigation to out-of-range page {target}");
                false
            }
        }
    }

    /// Replaces the search term, returns to the first page and fetches.
    pub async fn set_filter(&self, term: impl Into<String>) {
        let term = term.into();
        let (token, query) = self
            .cell
            .begin(|state| {
                state.search = term;
                state.page = 1;
                state.start_request()
            })
            .await;
        self.dispatch(token, query).await;
    }

    async fn dispatch(&self, token: RequestToken, query: ListQuery) {
        debug!(
            "Fetching operadoras page={} limit={} search={:?} (request {})",
            query.page,
            query.limit,
            query.search,
            token.get()
        );

        match self.repo.list_operadoras(query).await {
            Ok(response) => {
                let page = response.into_data();
                let (count, total) = (page.data.len(), page.total);
                let committed = self
                    .cell
                    .commit(token, |state| {
                        state.items = page.data;
                        state.total = page.total;
                        state.loading = false;
                    })
                    .await;
                if committed {
                    info!("Loaded {count} of {total} operadoras");
                } else {
                    warn!("Discarding stale operadoras response (request {})", token.get());
                }
            }
            Err(err) => {
                let committed = self
                    .cell
                    .commit(token, |state| {
                        state.error = Some(LOAD_ERROR_MESSAGE.to_string());
                        state.loading = false;
                    })
                    .await;
                if committed {
                    error!("Failed to load operadoras: {err}");
                } else {
                    warn!(
                        "Ignoring failure of stale operadoras request {}: {err}",
                        token.get()
                    );
                }
            }
        }
    }
}
