//! Application session: the single owner of every store.
//!
//! Views receive the session (or one of its stores) by reference instead of
//! reaching for a global. All state lives exactly as long as the session.

use std::sync::Arc;

use log::info;

use crate::client::ApiClient;
use crate::models::config::ClientConfig;
use crate::repository::errors::ApiResult;
use crate::repository::{HttpRepository, OperadoraReader};
use crate::store::{DetailStore, ListStore, StatisticsStore};

pub struct Session<R: ?Sized = HttpRepository> {
    pub operadoras: ListStore<R>,
    pub detail: DetailStore<R>,
    pub statistics: StatisticsStore<R>,
}

impl Session<HttpRepository> {
    /// Builds the HTTP client from `config` and wires every store to it.
    pub fn start(config: &ClientConfig) -> ApiResult<Self> {
        let client = ApiClient::new(config)?;
        info!(
            "Starting session against {} (timeout {:?})",
            client.base_url(),
            config.request_timeout()
        );
        let repo = Arc::new(HttpRepository::new(client));
        Ok(Self::with_repository(repo, config.page_size))
    }
}

impl<R> Session<R>
where
    R: OperadoraReader + ?Sized,
{
    /// Wires every store to a shared repository.
    pub fn with_repository(repo: Arc<R>, page_size: usize) -> Self {
        Self {
            operadoras: ListStore::new(repo.clone(), page_size),
            detail: DetailStore::new(repo.clone()),
            statistics: StatisticsStore::new(repo),
        }
    }
}
